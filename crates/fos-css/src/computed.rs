//! Computed Style
//!
//! Resolved values of the properties the accessibility layer reads.

use crate::properties::{Display, ListStyleType, Visibility};

/// Computed values for one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedStyle {
    pub display: Display,
    /// Inherited
    pub visibility: Visibility,
    /// Clamped to `0.0..=1.0`, not inherited
    pub opacity: f32,
    /// Inherited
    pub list_style_type: ListStyleType,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: Display::Inline,
            visibility: Visibility::Visible,
            opacity: 1.0,
            list_style_type: ListStyleType::Disc,
        }
    }
}

impl ComputedStyle {
    /// Generates no box and cannot be made visible by descendants
    pub fn is_strictly_invisible(&self) -> bool {
        self.display == Display::None || self.opacity == 0.0
    }

    /// Not rendered, although descendants may override `visibility`
    pub fn is_invisible(&self) -> bool {
        self.is_strictly_invisible()
            || matches!(self.visibility, Visibility::Hidden | Visibility::Collapse)
    }
}
