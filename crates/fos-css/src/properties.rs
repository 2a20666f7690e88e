//! CSS Property Definitions
//!
//! The properties the accessibility layer reads, and their keyword values.
//! Uses enums for fixed values to save memory vs strings.

/// Property identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum PropertyId {
    Display,
    Visibility,
    Opacity,
    ListStyleType,
    Border,
    BorderWidth,
    BorderStyle,
    BorderColor,
    /// Any property the resolver does not interpret
    Other,
}

impl PropertyId {
    /// Parse a property name into a PropertyId
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "display" => Self::Display,
            "visibility" => Self::Visibility,
            "opacity" => Self::Opacity,
            "list-style-type" => Self::ListStyleType,
            "border" => Self::Border,
            "border-width" => Self::BorderWidth,
            "border-style" => Self::BorderStyle,
            "border-color" => Self::BorderColor,
            _ => Self::Other,
        }
    }
}

/// CSS-wide keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WideKeyword {
    Inherit,
    Initial,
    Unset,
}

impl WideKeyword {
    pub fn from_str(s: &str) -> Option<Self> {
        Some(match s {
            "inherit" => Self::Inherit,
            "initial" => Self::Initial,
            "unset" => Self::Unset,
            _ => return None,
        })
    }
}

/// `display` values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    #[default]
    Inline,
    InlineBlock,
    ListItem,
    Table,
    Flex,
    Grid,
    Contents,
    /// Any other outer/inner display combination
    Other,
}

impl Display {
    pub fn from_str(s: &str) -> Self {
        match s {
            "none" => Self::None,
            "block" => Self::Block,
            "inline" => Self::Inline,
            "inline-block" => Self::InlineBlock,
            "list-item" => Self::ListItem,
            "table" => Self::Table,
            "flex" => Self::Flex,
            "grid" => Self::Grid,
            "contents" => Self::Contents,
            _ => Self::Other,
        }
    }
}

/// `visibility` values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

impl Visibility {
    pub fn from_str(s: &str) -> Option<Self> {
        Some(match s {
            "visible" => Self::Visible,
            "hidden" => Self::Hidden,
            "collapse" => Self::Collapse,
            _ => return None,
        })
    }
}

/// `list-style-type` values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListStyleType {
    #[default]
    Disc,
    Circle,
    Square,
    Decimal,
    LowerRoman,
    UpperRoman,
    LowerAlpha,
    UpperAlpha,
    None,
    /// Counter styles without a dedicated variant (e.g. `lower-greek`)
    Other,
}

impl ListStyleType {
    pub fn from_str(s: &str) -> Self {
        match s {
            "disc" => Self::Disc,
            "circle" => Self::Circle,
            "square" => Self::Square,
            "decimal" => Self::Decimal,
            "lower-roman" => Self::LowerRoman,
            "upper-roman" => Self::UpperRoman,
            "lower-alpha" | "lower-latin" => Self::LowerAlpha,
            "upper-alpha" | "upper-latin" => Self::UpperAlpha,
            "none" => Self::None,
            _ => Self::Other,
        }
    }

    /// Renders ordinals as letters
    pub fn is_alphabetic(self) -> bool {
        matches!(self, Self::LowerAlpha | Self::UpperAlpha)
    }

    /// Renders ordinals as Roman numerals
    pub fn is_roman(self) -> bool {
        matches!(self, Self::LowerRoman | Self::UpperRoman)
    }
}

/// `border-style` keywords
pub const BORDER_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double",
    "groove", "ridge", "inset", "outset",
];

/// `border-width` keywords
pub const BORDER_WIDTHS: &[&str] = &["thin", "medium", "thick"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_names() {
        assert_eq!(PropertyId::from_name("display"), PropertyId::Display);
        assert_eq!(PropertyId::from_name("Border-Width"), PropertyId::BorderWidth);
        assert_eq!(PropertyId::from_name("margin"), PropertyId::Other);
    }

    #[test]
    fn test_list_style_aliases() {
        assert_eq!(ListStyleType::from_str("lower-latin"), ListStyleType::LowerAlpha);
        assert!(ListStyleType::from_str("upper-alpha").is_alphabetic());
        assert!(ListStyleType::from_str("lower-roman").is_roman());
        assert_eq!(ListStyleType::from_str("lower-greek"), ListStyleType::Other);
    }
}
