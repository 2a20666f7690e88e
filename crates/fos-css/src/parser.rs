//! CSS Parser using lightningcss
//!
//! Parses `style` attributes into [`InlineStyle`] declarations.

use lightningcss::printer::PrinterOptions;
use lightningcss::properties::Property;
use lightningcss::stylesheet::{ParserOptions, StyleAttribute};
use tracing::trace;

use crate::properties::{PropertyId, BORDER_STYLES, BORDER_WIDTHS};
use crate::{CssError, Declaration, InlineStyle};

/// CSS Parser
pub struct CssParser;

impl CssParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse the contents of a `style` attribute
    ///
    /// Invalid declarations are skipped rather than failing the whole block.
    pub fn parse_inline(&self, css: &str) -> Result<InlineStyle, CssError> {
        let options = ParserOptions {
            error_recovery: true,
            ..ParserOptions::default()
        };

        let attribute = StyleAttribute::parse(css, options).map_err(|e| CssError::ParseError {
            line: e.loc.as_ref().map(|l| l.line).unwrap_or(0),
            message: e.kind.to_string(),
        })?;

        let mut style = InlineStyle::default();
        for decl in attribute.declarations.declarations.iter() {
            self.convert_declaration(decl, false, &mut style);
        }
        for decl in attribute.declarations.important_declarations.iter() {
            self.convert_declaration(decl, true, &mut style);
        }
        Ok(style)
    }

    fn convert_declaration(&self, decl: &Property, important: bool, style: &mut InlineStyle) {
        let name = decl.property_id().name().to_ascii_lowercase();
        let value = match decl.value_to_css_string(PrinterOptions::default()) {
            Ok(value) => value,
            Err(e) => {
                trace!(property = %name, error = %e, "skipping unprintable declaration");
                return;
            }
        };

        let property = PropertyId::from_name(&name);
        if property == PropertyId::Border {
            for (longhand, part) in expand_border(&value) {
                style.declarations.push(Declaration {
                    property: longhand,
                    value: part,
                    important,
                });
            }
        }
        style.declarations.push(Declaration {
            property,
            value,
            important,
        });
    }
}

impl Default for CssParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a `border` shorthand into width/style/color longhands
///
/// Components the shorthand omits are left out rather than reset.
fn expand_border(value: &str) -> Vec<(PropertyId, String)> {
    let mut widths = Vec::new();
    let mut styles = Vec::new();
    let mut colors = Vec::new();

    for token in split_components(value) {
        let lower = token.to_ascii_lowercase();
        if BORDER_STYLES.contains(&lower.as_str()) {
            styles.push(lower);
        } else if BORDER_WIDTHS.contains(&lower.as_str())
            || lower.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        {
            widths.push(lower);
        } else {
            colors.push(token);
        }
    }

    let mut out = Vec::new();
    if !widths.is_empty() {
        out.push((PropertyId::BorderWidth, widths.join(" ")));
    }
    if !styles.is_empty() {
        out.push((PropertyId::BorderStyle, styles.join(" ")));
    }
    if !colors.is_empty() {
        out.push((PropertyId::BorderColor, colors.join(" ")));
    }
    out
}

/// Split on top-level whitespace, keeping functions like `rgb(0, 0, 0)` whole
fn split_components(value: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in value.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            c if c.is_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inline_simple() {
        let style = CssParser::new().parse_inline("display: none; visibility: hidden").unwrap();
        assert_eq!(style.get(PropertyId::Display), Some("none"));
        assert_eq!(style.get(PropertyId::Visibility), Some("hidden"));
        assert_eq!(style.get(PropertyId::Opacity), None);
    }

    #[test]
    fn test_important_wins() {
        let style = CssParser::new()
            .parse_inline("display: none !important; display: block")
            .unwrap();
        assert_eq!(style.get(PropertyId::Display), Some("none"));
    }

    #[test]
    fn test_border_shorthand_expands() {
        let style = CssParser::new().parse_inline("border: 1px solid red").unwrap();
        assert!(style.get(PropertyId::BorderWidth).is_some_and(|w| w.starts_with('1')));
        assert_eq!(style.get(PropertyId::BorderStyle), Some("solid"));
        assert!(style.get(PropertyId::BorderColor).is_some());
    }

    #[test]
    fn test_split_components_keeps_functions() {
        assert_eq!(
            split_components("1px solid rgb(0, 0, 0)"),
            vec!["1px", "solid", "rgb(0, 0, 0)"]
        );
    }

    #[test]
    fn test_invalid_declarations_skipped() {
        let style = CssParser::new().parse_inline("display: ; opacity: 0").unwrap();
        assert_eq!(style.get(PropertyId::Opacity), Some("0"));
    }
}
