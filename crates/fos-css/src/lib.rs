//! fOS CSS Style System
//!
//! Inline `style` attribute parsing and the small computed style the
//! accessibility layer needs (display, visibility, opacity, list style).

mod cascade;
mod computed;
mod parser;
pub mod properties;

pub use cascade::StyleResolver;
pub use computed::ComputedStyle;
pub use parser::CssParser;
pub use properties::PropertyId;

/// Parse the contents of a `style` attribute
pub fn parse_inline_style(css: &str) -> Result<InlineStyle, CssError> {
    CssParser::new().parse_inline(css)
}

/// Declarations of one `style` attribute, in source order
#[derive(Debug, Clone, Default)]
pub struct InlineStyle {
    pub declarations: Vec<Declaration>,
}

impl InlineStyle {
    /// Winning value of a property: the last `!important` one, else the last one
    pub fn get(&self, property: PropertyId) -> Option<&str> {
        let mut normal = None;
        let mut important = None;
        for decl in self.declarations.iter().filter(|d| d.property == property) {
            if decl.important {
                important = Some(decl.value.as_str());
            } else {
                normal = Some(decl.value.as_str());
            }
        }
        important.or(normal)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// CSS declaration (property: value)
#[derive(Debug, Clone)]
pub struct Declaration {
    pub property: PropertyId,
    pub value: String,
    pub important: bool,
}

/// CSS parsing error
#[derive(Debug, thiserror::Error)]
pub enum CssError {
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: u32, message: String },
}
