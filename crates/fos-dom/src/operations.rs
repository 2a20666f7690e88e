//! DOM Node Operations
//!
//! Errors for tree manipulation, detached copies and searches.

use thiserror::Error;

use crate::{DomTree, Node, NodeId};

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// Node not found
    #[error("node not found")]
    NotFound,
    /// Hierarchy error (e.g., inserting an ancestor)
    #[error("hierarchy request error")]
    HierarchyRequest,
    /// Child already has a parent
    #[error("node is already attached")]
    AlreadyAttached,
    /// Operation not valid for this node type
    #[error("invalid node type")]
    InvalidNodeType,
    /// Option index past the end
    #[error("index {0} is out of range")]
    IndexOutOfRange(usize),
}

impl DomTree {
    /// Detached copy of `node` and its direct children
    ///
    /// Attributes and text are copied; the children are copied without
    /// any of their own descendants.
    pub fn shallow_childless_clone(&mut self, node: NodeId) -> DomResult<NodeId> {
        let copy = self.copy_node(node)?;
        let children: Vec<NodeId> = self.children(node).map(|(id, _)| id).collect();
        for child in children {
            let child_copy = self.copy_node(child)?;
            self.link_child(copy, child_copy);
        }
        Ok(copy)
    }

    /// Detached copy of the whole subtree rooted at `node`
    pub fn deep_clone(&mut self, node: NodeId) -> DomResult<NodeId> {
        let copy = self.copy_node(node)?;
        let children: Vec<NodeId> = self.children(node).map(|(id, _)| id).collect();
        for child in children {
            let child_copy = self.deep_clone(child)?;
            self.link_child(copy, child_copy);
        }
        Ok(copy)
    }

    fn copy_node(&mut self, node: NodeId) -> DomResult<NodeId> {
        let copy: Node = self.get(node).ok_or(DomError::NotFound)?.unlinked_copy();
        Ok(self.push_node(copy))
    }

    /// First node in pre-order from `root` (inclusive) matching `pred`
    pub fn find_node<F>(&self, root: NodeId, mut pred: F) -> Option<NodeId>
    where
        F: FnMut(NodeId, &Node) -> bool,
    {
        let root_node = self.get(root)?;
        if pred(root, root_node) {
            return Some(root);
        }
        self.descendants(root)
            .find(|(id, node)| pred(*id, node))
            .map(|(id, _)| id)
    }
}
