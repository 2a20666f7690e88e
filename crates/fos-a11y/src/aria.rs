//! ARIA Support
//!
//! ARIA roles and the states a screen reader announces.

use crate::messages::Msg;

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    // Landmark roles
    Banner,
    Complementary,
    ContentInfo,
    Form,
    Main,
    Navigation,
    Region,
    Search,

    // Widget roles
    Alert,
    AlertDialog,
    Button,
    Checkbox,
    ComboBox,
    Dialog,
    Grid,
    GridCell,
    Link,
    ListBox,
    Log,
    Marquee,
    Menu,
    MenuBar,
    MenuItem,
    MenuItemCheckbox,
    MenuItemRadio,
    Option,
    ProgressBar,
    Radio,
    RadioGroup,
    ScrollBar,
    SearchBox,
    Slider,
    SpinButton,
    Status,
    Switch,
    Tab,
    TabList,
    TabPanel,
    TextBox,
    Timer,
    ToolTip,
    Tree,
    TreeGrid,
    TreeItem,

    // Document structure
    Article,
    Cell,
    ColumnHeader,
    Definition,
    Directory,
    Document,
    Feed,
    Figure,
    Group,
    Heading,
    Img,
    List,
    ListItem,
    Math,
    None,
    Note,
    Presentation,
    Row,
    RowGroup,
    RowHeader,
    Separator,
    Table,
    Term,
    Toolbar,

    Application,
}

impl AriaRole {
    /// Parse a single role token
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "banner" => Self::Banner,
            "complementary" => Self::Complementary,
            "contentinfo" => Self::ContentInfo,
            "form" => Self::Form,
            "main" => Self::Main,
            "navigation" => Self::Navigation,
            "region" => Self::Region,
            "search" => Self::Search,
            "alert" => Self::Alert,
            "alertdialog" => Self::AlertDialog,
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "combobox" => Self::ComboBox,
            "dialog" => Self::Dialog,
            "grid" => Self::Grid,
            "gridcell" => Self::GridCell,
            "link" => Self::Link,
            "listbox" => Self::ListBox,
            "log" => Self::Log,
            "marquee" => Self::Marquee,
            "menu" => Self::Menu,
            "menubar" => Self::MenuBar,
            "menuitem" => Self::MenuItem,
            "menuitemcheckbox" => Self::MenuItemCheckbox,
            "menuitemradio" => Self::MenuItemRadio,
            "option" => Self::Option,
            "progressbar" => Self::ProgressBar,
            "radio" => Self::Radio,
            "radiogroup" => Self::RadioGroup,
            "scrollbar" => Self::ScrollBar,
            "searchbox" => Self::SearchBox,
            "slider" => Self::Slider,
            "spinbutton" => Self::SpinButton,
            "status" => Self::Status,
            "switch" => Self::Switch,
            "tab" => Self::Tab,
            "tablist" => Self::TabList,
            "tabpanel" => Self::TabPanel,
            "textbox" => Self::TextBox,
            "timer" => Self::Timer,
            "tooltip" => Self::ToolTip,
            "tree" => Self::Tree,
            "treegrid" => Self::TreeGrid,
            "treeitem" => Self::TreeItem,
            "article" => Self::Article,
            "cell" => Self::Cell,
            "columnheader" => Self::ColumnHeader,
            "definition" => Self::Definition,
            "directory" => Self::Directory,
            "document" => Self::Document,
            "feed" => Self::Feed,
            "figure" => Self::Figure,
            "group" => Self::Group,
            "heading" => Self::Heading,
            "img" => Self::Img,
            "list" => Self::List,
            "listitem" => Self::ListItem,
            "math" => Self::Math,
            "none" => Self::None,
            "note" => Self::Note,
            "presentation" => Self::Presentation,
            "row" => Self::Row,
            "rowgroup" => Self::RowGroup,
            "rowheader" => Self::RowHeader,
            "separator" => Self::Separator,
            "table" => Self::Table,
            "term" => Self::Term,
            "toolbar" => Self::Toolbar,
            "application" => Self::Application,
            _ => return None,
        })
    }

    /// Role of a `role` attribute value: the first token that names a role
    pub fn from_attribute(value: &str) -> Option<Self> {
        value.split_whitespace().find_map(Self::parse)
    }

    /// Check if role is landmark
    pub fn is_landmark(&self) -> bool {
        matches!(self,
            Self::Banner | Self::Complementary | Self::ContentInfo |
            Self::Form | Self::Main | Self::Navigation | Self::Region | Self::Search
        )
    }

    /// Widget a user operates directly
    pub fn is_control_widget(&self) -> bool {
        matches!(self,
            Self::Button | Self::Checkbox | Self::ComboBox | Self::Link |
            Self::ListBox | Self::Menu | Self::MenuBar | Self::MenuItem |
            Self::MenuItemCheckbox | Self::MenuItemRadio | Self::Radio |
            Self::Slider | Self::ScrollBar | Self::SpinButton | Self::Switch |
            Self::Tab | Self::TabList | Self::TextBox | Self::SearchBox |
            Self::ProgressBar
        )
    }

    /// Widget that manages focusable children
    pub fn is_composite(&self) -> bool {
        matches!(self,
            Self::ComboBox | Self::Grid | Self::ListBox | Self::Menu |
            Self::MenuBar | Self::RadioGroup | Self::TabList | Self::Tree |
            Self::TreeGrid
        )
    }

    /// Children are presentational
    pub fn is_leaf(&self) -> bool {
        matches!(self,
            Self::Img | Self::ProgressBar | Self::Presentation | Self::None |
            Self::Slider | Self::ScrollBar | Self::Separator
        )
    }

    /// Announced with its position in the set
    pub fn has_position(&self) -> bool {
        matches!(self,
            Self::Option | Self::TreeItem | Self::Tab |
            Self::MenuItem | Self::MenuItemCheckbox | Self::MenuItemRadio
        )
    }

    /// Spoken role name
    pub fn message(&self) -> Option<Msg> {
        Some(match self {
            Self::Button => Msg::RoleButton,
            Self::Checkbox => Msg::RoleCheckbox,
            Self::ComboBox => Msg::RoleComboBox,
            Self::Grid => Msg::RoleGrid,
            Self::Heading => Msg::RoleHeading,
            Self::Img => Msg::RoleImage,
            Self::Link => Msg::RoleLink,
            Self::ListBox => Msg::RoleListBox,
            Self::Menu => Msg::RoleMenu,
            Self::MenuBar => Msg::RoleMenuBar,
            Self::MenuItem | Self::MenuItemCheckbox | Self::MenuItemRadio => Msg::RoleMenuItem,
            Self::Option => Msg::RoleOption,
            Self::ProgressBar => Msg::RoleProgressBar,
            Self::Radio => Msg::RoleRadio,
            Self::RadioGroup => Msg::RoleRadioGroup,
            Self::ScrollBar => Msg::RoleScrollBar,
            Self::SearchBox => Msg::RoleSearchBox,
            Self::Slider => Msg::RoleSlider,
            Self::SpinButton => Msg::RoleSpinButton,
            Self::Switch => Msg::RoleSwitch,
            Self::Tab => Msg::RoleTab,
            Self::TabList => Msg::RoleTabList,
            Self::TextBox => Msg::RoleEditText,
            Self::Tree => Msg::RoleTree,
            Self::TreeGrid => Msg::RoleTreeGrid,
            Self::TreeItem => Msg::RoleTreeItem,
            _ => return Option::None,
        })
    }
}

/// Tri-state value of `aria-checked` and `aria-pressed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tristate {
    True,
    False,
    Mixed,
}

/// `aria-autocomplete` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Autocomplete {
    Inline,
    List,
    Both,
}

/// `aria-invalid` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalid {
    True,
    Grammar,
    Spelling,
}

/// ARIA state that produces a spoken phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaState {
    Autocomplete(Autocomplete),
    Checked(Tristate),
    Disabled,
    Expanded(bool),
    Invalid(Invalid),
    Multiline,
    Multiselectable,
    Pressed(Tristate),
    Readonly,
    Required,
    Selected(bool),
}

/// State attributes in the order their phrases are spoken
pub const STATE_ATTRIBUTES: &[&str] = &[
    "aria-autocomplete",
    "aria-checked",
    "aria-disabled",
    "aria-expanded",
    "aria-invalid",
    "aria-multiline",
    "aria-multiselectable",
    "aria-pressed",
    "aria-readonly",
    "aria-required",
    "aria-selected",
];

impl AriaState {
    /// Parse an `aria-*` attribute, `None` when the value says nothing
    pub fn parse(name: &str, value: &str) -> Option<Self> {
        let name = name.strip_prefix("aria-").unwrap_or(name);
        let value = value.trim().to_ascii_lowercase();
        let value = value.as_str();
        Some(match name {
            "autocomplete" => Self::Autocomplete(match value {
                "inline" => Autocomplete::Inline,
                "list" => Autocomplete::List,
                "both" => Autocomplete::Both,
                _ => return Option::None,
            }),
            "checked" => Self::Checked(parse_tristate(value)?),
            "disabled" if value == "true" => Self::Disabled,
            "expanded" => Self::Expanded(parse_bool(value)?),
            "invalid" => Self::Invalid(match value {
                "true" => Invalid::True,
                "grammar" => Invalid::Grammar,
                "spelling" => Invalid::Spelling,
                _ => return Option::None,
            }),
            "multiline" if value == "true" => Self::Multiline,
            "multiselectable" if value == "true" => Self::Multiselectable,
            "pressed" => Self::Pressed(parse_tristate(value)?),
            "readonly" if value == "true" => Self::Readonly,
            "required" if value == "true" => Self::Required,
            "selected" => Self::Selected(parse_bool(value)?),
            _ => return Option::None,
        })
    }

    pub fn message(&self) -> Msg {
        match self {
            Self::Autocomplete(Autocomplete::Inline) => Msg::AriaAutocompleteInline,
            Self::Autocomplete(Autocomplete::List) => Msg::AriaAutocompleteList,
            Self::Autocomplete(Autocomplete::Both) => Msg::AriaAutocompleteBoth,
            Self::Checked(Tristate::True) => Msg::AriaCheckedTrue,
            Self::Checked(Tristate::False) => Msg::AriaCheckedFalse,
            Self::Checked(Tristate::Mixed) => Msg::AriaCheckedMixed,
            Self::Disabled => Msg::AriaDisabled,
            Self::Expanded(true) => Msg::AriaExpanded,
            Self::Expanded(false) => Msg::AriaCollapsed,
            Self::Invalid(Invalid::True) => Msg::AriaInvalid,
            Self::Invalid(Invalid::Grammar) => Msg::AriaInvalidGrammar,
            Self::Invalid(Invalid::Spelling) => Msg::AriaInvalidSpelling,
            Self::Multiline => Msg::AriaMultiline,
            Self::Multiselectable => Msg::AriaMultiselectable,
            Self::Pressed(Tristate::True) => Msg::AriaPressedTrue,
            Self::Pressed(Tristate::False) => Msg::AriaPressedFalse,
            Self::Pressed(Tristate::Mixed) => Msg::AriaPressedMixed,
            Self::Readonly => Msg::AriaReadonly,
            Self::Required => Msg::AriaRequired,
            Self::Selected(true) => Msg::AriaSelectedTrue,
            Self::Selected(false) => Msg::AriaSelectedFalse,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => Option::None,
    }
}

fn parse_tristate(value: &str) -> Option<Tristate> {
    match value {
        "true" => Some(Tristate::True),
        "false" => Some(Tristate::False),
        "mixed" => Some(Tristate::Mixed),
        _ => Option::None,
    }
}
