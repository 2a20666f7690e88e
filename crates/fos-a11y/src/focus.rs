//! Focus
//!
//! Whether keyboard focus can land on an element.

use crate::dom_util::DomUtil;
use crate::host::HostTree;

/// Elements that take part in sequential navigation by default
const DEFAULT_FOCUSABLE: &[&str] = &["button", "input", "select", "textarea", "iframe"];

/// Parsed `tabindex` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// `tabindex="-1"`: focusable from script only
    Programmatic,
    /// Zero or positive
    Sequential(i32),
    /// Any other negative value
    NotFocusable,
}

impl TabIndex {
    /// `None` when the value is not an integer
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Some(match trimmed.parse::<i32>().ok()? {
            -1 if trimmed == "-1" => Self::Programmatic,
            n if n < 0 => Self::NotFocusable,
            n => Self::Sequential(n),
        })
    }

    pub fn is_focusable(&self) -> bool {
        matches!(self, Self::Programmatic | Self::Sequential(_))
    }
}

impl<H: HostTree> DomUtil<'_, H> {
    /// Whether an element can receive focus
    pub fn is_focusable(&self, node: Option<H::Node>) -> bool {
        let host = self.host;
        let Some(node) = node.filter(|&n| host.is_element(n)) else {
            return false;
        };
        let has_href = host.has_attribute(node, "href");
        if host.is_tag(node, &["a"]) && !has_href && !host.has_attribute(node, "tabindex") {
            return false;
        }
        if let Some(index) = host.attribute(node, "tabindex").and_then(TabIndex::parse) {
            return index.is_focusable();
        }
        host.is_tag(node, DEFAULT_FOCUSABLE) || (has_href && host.is_tag(node, &["a", "area"]))
    }
}
