//! fOS DOM - Document Object Model
//!
//! Memory-efficient arena DOM tree. Nodes are addressed by [`NodeId`]
//! and linked through parent/child/sibling ids instead of pointers.

mod node;
mod tree;
mod document;
mod forms;
mod operations;
mod serialize;

pub use node::{Node, NodeData, ElementData, TextData, Attribute};
pub use tree::{DomTree, Children, Descendants};
pub use document::Document;
pub use forms::FormState;
pub use operations::{DomError, DomResult};
pub use serialize::{inner_html, outer_html};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Null node
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this id is not the null node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Convert to `Option`, mapping `NONE` to `None`
    #[inline]
    pub fn to_option(self) -> Option<NodeId> {
        self.is_valid().then_some(self)
    }

    /// Raw arena index
    pub fn index(self) -> u32 {
        self.0
    }
}
