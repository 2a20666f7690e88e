//! Leaf Classifier
//!
//! A leaf is a node a screen reader announces as one unit instead of
//! descending into. Leaf traversal walks the tree in document order
//! visiting only leaves.

use crate::aria::AriaRole;
use crate::config::VisibilityOptions;
use crate::dom_util::DomUtil;
use crate::host::{HostTree, NodeKind};
use crate::memoize::MemoKey;

/// Embedded content is always announced as a whole
const EMBEDDED_ELEMENTS: &[&str] = &["object", "embed", "video", "audio", "iframe", "frame"];

pub(crate) const HEADING_ELEMENTS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

impl<H: HostTree> DomUtil<'_, H> {
    pub fn is_leaf_node(&self, node: H::Node) -> bool {
        match self.host.kind(node) {
            None => false,
            Some(NodeKind::Element) => {
                self.memoize(node, MemoKey::Leaf, || self.is_leaf_element(node))
            }
            Some(_) => self.host.first_child(node).is_none(),
        }
    }

    fn is_leaf_element(&self, node: H::Node) -> bool {
        let host = self.host;
        if !self.is_visible_with(node, VisibilityOptions::skip_ancestors()) {
            return true;
        }
        if self.is_aria_hidden(node) {
            return true;
        }
        if self.role(node).is_some_and(|r| r.is_leaf()) {
            return true;
        }
        if host.is_tag(node, EMBEDDED_ELEMENTS) {
            return true;
        }
        if self.is_link(node) {
            return !host.descendants(node).any(|d| self.is_heading(d));
        }
        if self.is_leaf_level_control(node) {
            return true;
        }
        if host.first_child(node).is_none() {
            return true;
        }
        if host.is_tag(node, &["math"]) || self.has_role(node, AriaRole::Math) {
            return true;
        }
        if self.is_heading(node) {
            return !host.descendants(node).any(|d| self.is_control(d));
        }
        false
    }

    /// A control that is announced as a whole; composite widgets with
    /// focusable children are descended into
    fn is_leaf_level_control(&self, node: H::Node) -> bool {
        if !self.is_control(node) {
            return false;
        }
        let composite = self.role(node).is_some_and(|r| r.is_composite());
        !(composite && self.host.descendants(node).any(|d| self.is_focusable(Some(d))))
    }

    fn is_link(&self, node: H::Node) -> bool {
        (self.host.is_tag(node, &["a"]) && self.host.has_attribute(node, "href"))
            || self.has_role(node, AriaRole::Link)
    }

    fn is_heading(&self, node: H::Node) -> bool {
        self.host.is_tag(node, HEADING_ELEMENTS) || self.has_role(node, AriaRole::Heading)
    }

    /// Next leaf after `node` in document order, or before it when `reverse`
    ///
    /// Walks the whole document, or only the body when
    /// `traverse_from_body` is on and there is one.
    pub fn directed_next_leaf_node(&self, node: H::Node, reverse: bool) -> Option<H::Node> {
        let host = self.host;
        if !host.contains(node) {
            return None;
        }
        let boundary = self.traversal_boundary();
        let mut current = node;
        let mut step = node != boundary;

        loop {
            if step {
                loop {
                    if current == boundary {
                        return None;
                    }
                    let sibling = if reverse {
                        host.previous_sibling(current)
                    } else {
                        host.next_sibling(current)
                    };
                    if let Some(sibling) = sibling {
                        current = sibling;
                        break;
                    }
                    current = host.parent(current)?;
                }
            }
            step = true;

            while !self.is_leaf_node(current) {
                let child = if reverse {
                    host.last_child(current)
                } else {
                    host.first_child(current)
                };
                match child {
                    Some(child) => current = child,
                    None => break,
                }
            }
            if self.is_leaf_node(current) {
                return Some(current);
            }
        }
    }

    pub fn next_leaf_node(&self, node: H::Node) -> Option<H::Node> {
        self.directed_next_leaf_node(node, false)
    }

    pub fn previous_leaf_node(&self, node: H::Node) -> Option<H::Node> {
        self.directed_next_leaf_node(node, true)
    }

    fn traversal_boundary(&self) -> H::Node {
        let body = if self.config.traverse_from_body {
            self.host.body()
        } else {
            None
        };
        body.unwrap_or_else(|| self.host.root())
    }
}
