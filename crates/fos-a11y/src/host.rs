//! Host Tree Capabilities
//!
//! The resolver never touches a concrete DOM. Everything it reads goes
//! through [`HostTree`], which a document implementation provides.

use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

use fos_css::{ComputedStyle, InlineStyle, StyleResolver};
use fos_dom::{Document, NodeData, NodeId};

/// Kind of a host node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Doctype,
    Element,
    Text,
    Comment,
}

/// Read-only view of a document tree
///
/// Every method must tolerate handles that do not name a node of the
/// tree and answer `None` / `false` / empty for them.
pub trait HostTree {
    /// Opaque node handle
    type Node: Copy + Eq + Hash + Debug;

    /// Kind of a node, `None` for stale or foreign handles
    fn kind(&self, node: Self::Node) -> Option<NodeKind>;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;
    fn first_child(&self, node: Self::Node) -> Option<Self::Node>;
    fn last_child(&self, node: Self::Node) -> Option<Self::Node>;
    fn next_sibling(&self, node: Self::Node) -> Option<Self::Node>;
    fn previous_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    /// Lowercase tag name of an element
    fn tag_name(&self, node: Self::Node) -> Option<&str>;

    /// Attribute value of an element (names are case-insensitive)
    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;

    /// Character data of a text or comment node
    fn text(&self, node: Self::Node) -> Option<&str>;

    /// Computed style of an element
    fn computed_style(&self, node: Self::Node) -> Option<ComputedStyle>;

    /// Declared inline style of an element
    fn inline_style(&self, node: Self::Node) -> Option<Rc<InlineStyle>>;

    /// First element in tree order with the given id
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// The document node
    fn root(&self) -> Self::Node;

    /// The body element, if any
    fn body(&self) -> Option<Self::Node>;

    /// URL of the document
    fn url(&self) -> &str;

    /// Current value of an input or textarea
    fn control_value(&self, node: Self::Node) -> Option<String>;

    /// Checkedness of a checkbox or radio input
    fn is_checked(&self, node: Self::Node) -> bool;

    /// Options of a select element in tree order
    fn options(&self, select: Self::Node) -> Vec<Self::Node>;

    /// Selected options of a select element in tree order
    fn selected_options(&self, select: Self::Node) -> Vec<Self::Node>;

    fn contains(&self, node: Self::Node) -> bool {
        self.kind(node).is_some()
    }

    fn is_element(&self, node: Self::Node) -> bool {
        self.kind(node) == Some(NodeKind::Element)
    }

    fn has_attribute(&self, node: Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Whether `node` is an element with one of the given tag names
    fn is_tag(&self, node: Self::Node, tags: &[&str]) -> bool {
        self.tag_name(node).is_some_and(|t| tags.contains(&t))
    }

    /// Parent, when it is an element
    fn parent_element(&self, node: Self::Node) -> Option<Self::Node> {
        self.parent(node).filter(|&p| self.is_element(p))
    }

    fn children(&self, node: Self::Node) -> Children<'_, Self> {
        Children {
            host: self,
            next: self.first_child(node),
        }
    }

    /// Ancestors from the parent up to the root
    fn ancestors(&self, node: Self::Node) -> Ancestors<'_, Self> {
        Ancestors {
            host: self,
            next: self.parent(node),
        }
    }

    /// Descendants in tree order, excluding `node`
    fn descendants(&self, node: Self::Node) -> Descendants<'_, Self> {
        Descendants {
            host: self,
            root: node,
            next: self.first_child(node),
        }
    }

    /// Concatenated data of all descendant text nodes
    fn text_content(&self, node: Self::Node) -> String {
        match self.kind(node) {
            Some(NodeKind::Text) => self.text(node).unwrap_or_default().to_string(),
            Some(_) => self
                .descendants(node)
                .filter(|&n| self.kind(n) == Some(NodeKind::Text))
                .filter_map(|n| self.text(n))
                .collect(),
            None => String::new(),
        }
    }
}

/// Child iterator
pub struct Children<'a, H: HostTree + ?Sized> {
    host: &'a H,
    next: Option<H::Node>,
}

impl<H: HostTree + ?Sized> Iterator for Children<'_, H> {
    type Item = H::Node;

    fn next(&mut self) -> Option<H::Node> {
        let current = self.next?;
        self.next = self.host.next_sibling(current);
        Some(current)
    }
}

/// Ancestor iterator
pub struct Ancestors<'a, H: HostTree + ?Sized> {
    host: &'a H,
    next: Option<H::Node>,
}

impl<H: HostTree + ?Sized> Iterator for Ancestors<'_, H> {
    type Item = H::Node;

    fn next(&mut self) -> Option<H::Node> {
        let current = self.next?;
        self.next = self.host.parent(current);
        Some(current)
    }
}

/// Pre-order descendant iterator
pub struct Descendants<'a, H: HostTree + ?Sized> {
    host: &'a H,
    root: H::Node,
    next: Option<H::Node>,
}

impl<H: HostTree + ?Sized> Iterator for Descendants<'_, H> {
    type Item = H::Node;

    fn next(&mut self) -> Option<H::Node> {
        let current = self.next?;
        self.next = self.host.first_child(current).or_else(|| {
            let mut node = current;
            loop {
                if node == self.root {
                    return None;
                }
                if let Some(sibling) = self.host.next_sibling(node) {
                    return Some(sibling);
                }
                node = self.host.parent(node)?;
            }
        });
        Some(current)
    }
}

/// [`HostTree`] over an fOS [`Document`]
///
/// Borrows the document for its lifetime, so styles computed through it
/// are cached until the host is dropped.
pub struct DocumentHost<'a> {
    doc: &'a Document,
    styles: StyleResolver<'a>,
}

impl<'a> DocumentHost<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self {
            doc,
            styles: StyleResolver::new(doc.tree()),
        }
    }

    pub fn document(&self) -> &'a Document {
        self.doc
    }
}

impl HostTree for DocumentHost<'_> {
    type Node = NodeId;

    fn kind(&self, node: NodeId) -> Option<NodeKind> {
        Some(match self.doc.tree().get(node)?.data {
            NodeData::Document => NodeKind::Document,
            NodeData::Doctype { .. } => NodeKind::Doctype,
            NodeData::Element(_) => NodeKind::Element,
            NodeData::Text(_) => NodeKind::Text,
            NodeData::Comment(_) => NodeKind::Comment,
        })
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.doc.tree().parent(node)
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.doc.tree().get(node)?.first_child.to_option()
    }

    fn last_child(&self, node: NodeId) -> Option<NodeId> {
        self.doc.tree().get(node)?.last_child.to_option()
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.doc.tree().get(node)?.next_sibling.to_option()
    }

    fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.doc.tree().get(node)?.prev_sibling.to_option()
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.doc.tree().tag_name(node)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.doc.tree().attribute(node, name)
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        match &self.doc.tree().get(node)?.data {
            NodeData::Text(text) => Some(&text.content),
            NodeData::Comment(text) => Some(text),
            _ => None,
        }
    }

    fn computed_style(&self, node: NodeId) -> Option<ComputedStyle> {
        self.styles.compute_style(node)
    }

    fn inline_style(&self, node: NodeId) -> Option<Rc<InlineStyle>> {
        self.styles.inline_style(node)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.doc.get_element_by_id(id)
    }

    fn root(&self) -> NodeId {
        self.doc.tree().root()
    }

    fn body(&self) -> Option<NodeId> {
        self.doc.body()
    }

    fn url(&self) -> &str {
        self.doc.url()
    }

    fn control_value(&self, node: NodeId) -> Option<String> {
        self.doc.control_value(node)
    }

    fn is_checked(&self, node: NodeId) -> bool {
        self.doc.is_checked(node)
    }

    fn options(&self, select: NodeId) -> Vec<NodeId> {
        self.doc.options(select)
    }

    fn selected_options(&self, select: NodeId) -> Vec<NodeId> {
        self.doc.selected_options(select)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut doc = Document::new("https://example.com/");
        let body = doc.body().unwrap();
        let div = doc.tree.create_element("div");
        doc.tree.set_attribute(div, "id", "d").unwrap();
        let a = doc.tree.create_text("a");
        let span = doc.tree.create_element("span");
        let b = doc.tree.create_text("b");
        doc.tree.append_child(body, div).unwrap();
        doc.tree.append_child(div, a).unwrap();
        doc.tree.append_child(div, span).unwrap();
        doc.tree.append_child(span, b).unwrap();
        doc
    }

    #[test]
    fn test_traversal_helpers() {
        let doc = sample();
        let host = DocumentHost::new(&doc);
        let div = host.element_by_id("d").unwrap();

        assert_eq!(host.children(div).count(), 2);
        assert_eq!(host.descendants(div).count(), 3);
        assert_eq!(host.text_content(div), "ab");
        assert_eq!(host.ancestors(div).last(), Some(host.root()));
        assert_eq!(host.kind(div), Some(NodeKind::Element));
    }

    #[test]
    fn test_foreign_handles() {
        let doc = sample();
        let host = DocumentHost::new(&doc);
        assert!(!host.contains(NodeId::NONE));
        assert_eq!(host.tag_name(NodeId::NONE), None);
        assert_eq!(host.text_content(NodeId::NONE), "");
        assert_eq!(host.children(NodeId::NONE).count(), 0);
    }
}
