//! Spoken Messages
//!
//! Every fixed English phrase the resolver produces is looked up here so
//! a host can install its own [`MessageTable`]. Templates use `$1`, `$2`
//! placeholders.

/// Message identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    // Names
    Image,
    NamedImage,
    Submit,
    Reset,
    WithHint,
    PasswordDot,
    SelectRange,

    // Links
    InternalLink,
    UnknownLink,

    // Native states
    Checked,
    NotChecked,
    RadioSelected,
    RadioNotSelected,
    Disabled,
    PositionInSet,
    SelectedItems,
    ListWithItems,
    ListWithOneItem,
    AccessKey,

    // ARIA states
    AriaAutocompleteInline,
    AriaAutocompleteList,
    AriaAutocompleteBoth,
    AriaCheckedTrue,
    AriaCheckedFalse,
    AriaCheckedMixed,
    AriaDisabled,
    AriaExpanded,
    AriaCollapsed,
    AriaInvalid,
    AriaInvalidGrammar,
    AriaInvalidSpelling,
    AriaMultiline,
    AriaMultiselectable,
    AriaPressedTrue,
    AriaPressedFalse,
    AriaPressedMixed,
    AriaReadonly,
    AriaRequired,
    AriaSelectedTrue,
    AriaSelectedFalse,

    // Roles
    RoleButton,
    RoleCheckbox,
    RoleComboBox,
    RoleEditText,
    RoleGrid,
    RoleHeading,
    RoleImage,
    RoleLink,
    RoleListBox,
    RoleMenu,
    RoleMenuBar,
    RoleMenuItem,
    RoleOption,
    RolePasswordEditText,
    RoleProgressBar,
    RoleRadio,
    RoleRadioGroup,
    RoleScrollBar,
    RoleSearchBox,
    RoleSlider,
    RoleSpinButton,
    RoleSwitch,
    RoleTab,
    RoleTabList,
    RoleTextArea,
    RoleTree,
    RoleTreeGrid,
    RoleTreeItem,
}

/// Source of message templates
pub trait MessageTable {
    /// Template for a message, with `$n` placeholders
    fn template(&self, msg: Msg) -> &str;
}

/// Built-in English messages
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishMessages;

impl MessageTable for EnglishMessages {
    fn template(&self, msg: Msg) -> &str {
        match msg {
            Msg::Image => "Image",
            Msg::NamedImage => "$1 Image",
            Msg::Submit => "Submit",
            Msg::Reset => "Reset",
            Msg::WithHint => "$1 with hint $2",
            Msg::PasswordDot => "dot ",
            Msg::SelectRange => "$1 to $2",

            Msg::InternalLink => "Internal link",
            Msg::UnknownLink => "Unknown link",

            Msg::Checked => "checked",
            Msg::NotChecked => "not checked",
            Msg::RadioSelected => "selected",
            Msg::RadioNotSelected => "not selected",
            Msg::Disabled => "Disabled",
            Msg::PositionInSet => "$1 of $2",
            Msg::SelectedItems => "selected $1 items",
            Msg::ListWithItems => "with $1 items",
            Msg::ListWithOneItem => "with 1 item",
            Msg::AccessKey => "has access key, $1",

            Msg::AriaAutocompleteInline => "Autocompletion inline",
            Msg::AriaAutocompleteList => "Autocompletion list",
            Msg::AriaAutocompleteBoth => "Autocompletion inline and list",
            Msg::AriaCheckedTrue => "Checked",
            Msg::AriaCheckedFalse => "Not checked",
            Msg::AriaCheckedMixed => "Partially checked",
            Msg::AriaDisabled => "Disabled",
            Msg::AriaExpanded => "Expanded",
            Msg::AriaCollapsed => "Collapsed",
            Msg::AriaInvalid => "Invalid input",
            Msg::AriaInvalidGrammar => "Grammatical mistake detected",
            Msg::AriaInvalidSpelling => "Spelling mistake detected",
            Msg::AriaMultiline => "Multi line",
            Msg::AriaMultiselectable => "Multi select",
            Msg::AriaPressedTrue => "Pressed",
            Msg::AriaPressedFalse => "Not pressed",
            Msg::AriaPressedMixed => "Mixed",
            Msg::AriaReadonly => "Read only",
            Msg::AriaRequired => "Required",
            Msg::AriaSelectedTrue => "Selected",
            Msg::AriaSelectedFalse => "Not selected",

            Msg::RoleButton => "Button",
            Msg::RoleCheckbox => "Check box",
            Msg::RoleComboBox => "Combo box",
            Msg::RoleEditText => "Edit text",
            Msg::RoleGrid => "Grid",
            Msg::RoleHeading => "Heading",
            Msg::RoleImage => "Image",
            Msg::RoleLink => "Link",
            Msg::RoleListBox => "List box",
            Msg::RoleMenu => "Menu",
            Msg::RoleMenuBar => "Menu bar",
            Msg::RoleMenuItem => "Menu item",
            Msg::RoleOption => "Option",
            Msg::RolePasswordEditText => "Password edit text",
            Msg::RoleProgressBar => "Progress bar",
            Msg::RoleRadio => "Radio button",
            Msg::RoleRadioGroup => "Radio group",
            Msg::RoleScrollBar => "Scroll bar",
            Msg::RoleSearchBox => "Search box",
            Msg::RoleSlider => "Slider",
            Msg::RoleSpinButton => "Spin button",
            Msg::RoleSwitch => "Switch",
            Msg::RoleTab => "Tab",
            Msg::RoleTabList => "Tab list",
            Msg::RoleTextArea => "Text area",
            Msg::RoleTree => "Tree",
            Msg::RoleTreeGrid => "Tree grid",
            Msg::RoleTreeItem => "Tree item",
        }
    }
}

/// Substitute `$1`..`$9` in a template
///
/// Placeholders without a matching argument are left as written.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(index) = chars.peek().and_then(|d| d.to_digit(10)) {
                if let Some(arg) = (index as usize).checked_sub(1).and_then(|i| args.get(i)) {
                    chars.next();
                    out.push_str(arg);
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}
