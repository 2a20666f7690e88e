//! fOS Accessibility
//!
//! Screen reader queries over a document tree for the fOS browser engine.
//!
//! Features:
//! - Visibility as a screen reader sees it
//! - Leaf classification and leaf-by-leaf traversal
//! - Accessible names, values and states
//! - Control descriptions and label heuristics
//! - Scoped memoization of the expensive predicates

pub mod aria;
pub mod config;
pub mod focus;
pub mod host;
pub mod messages;
pub mod text;

mod content;
mod controls;
mod description;
mod dom_util;
mod leaf;
mod memoize;
mod name;
mod state;
mod value;
mod visibility;

pub use aria::{AriaRole, AriaState};
pub use config::{A11yConfig, VisibilityOptions};
pub use description::ControlDescription;
pub use dom_util::DomUtil;
pub use focus::TabIndex;
pub use host::{DocumentHost, HostTree, NodeKind};
pub use memoize::{MemoKey, MemoStats};
pub use messages::{EnglishMessages, MessageTable, Msg};
pub use text::collapse_whitespace;

/// Accessibility error
#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    #[error("Memoization scope already active")]
    NestedScope,

    #[error("No element with id {0:?}")]
    UnknownId(String),
}

impl<H: HostTree> DomUtil<'_, H> {
    /// Element with the given id, as an error when there is none
    pub fn try_element_by_id(&self, id: &str) -> Result<H::Node, A11yError> {
        self.host
            .element_by_id(id)
            .ok_or_else(|| A11yError::UnknownId(id.to_string()))
    }
}
