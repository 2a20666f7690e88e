//! Document - High-level document API

use tracing::debug;

use crate::{DomResult, DomTree, FormState, NodeId};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Live form control state
    pub forms: FormState,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with an empty html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.link_child(tree.root(), html);
        tree.link_child(html, head);
        tree.link_child(html, body);

        Self {
            tree,
            forms: FormState::default(),
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self::from_tree(DomTree::new(), url)
    }

    /// Wrap an already built tree, locating html/head/body
    pub fn from_tree(tree: DomTree, url: &str) -> Self {
        let mut doc = Self {
            tree,
            forms: FormState::default(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        };
        doc.finalize();
        doc
    }

    /// Re-resolve the cached html/head/body references
    pub fn finalize(&mut self) {
        let root = self.tree.root();
        self.html_element = self.find_child_element(root, "html").unwrap_or(NodeId::NONE);
        self.head_element = self.find_child_element(self.html_element, "head").unwrap_or(NodeId::NONE);
        self.body_element = self.find_child_element(self.html_element, "body").unwrap_or(NodeId::NONE);
        debug!(
            nodes = self.tree.len(),
            has_body = self.body_element.is_valid(),
            "document finalized"
        );
    }

    fn find_child_element(&self, parent: NodeId, tag: &str) -> Option<NodeId> {
        self.tree
            .children(parent)
            .find(|(_, node)| node.as_element().is_some_and(|e| e.name == tag))
            .map(|(id, _)| id)
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get document title
    pub fn title(&self) -> String {
        if !self.head_element.is_valid() {
            return String::new();
        }
        self.find_child_element(self.head_element, "title")
            .map(|id| self.tree.text_content(id))
            .unwrap_or_default()
    }

    /// Get <html> element
    pub fn document_element(&self) -> Option<NodeId> {
        self.html_element.to_option()
    }

    /// Get <head> element
    pub fn head(&self) -> Option<NodeId> {
        self.head_element.to_option()
    }

    /// Get <body> element
    pub fn body(&self) -> Option<NodeId> {
        self.body_element.to_option()
    }

    /// Get the first element in tree order with the given id
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.tree
            .descendants(self.tree.root())
            .find(|(_, node)| node.as_element().and_then(|e| e.id()) == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Current value of an input or textarea
    pub fn control_value(&self, node: NodeId) -> Option<String> {
        self.forms.value(&self.tree, node)
    }

    /// Whether a checkbox or radio is checked
    pub fn is_checked(&self, node: NodeId) -> bool {
        self.forms.checked(&self.tree, node)
    }

    /// Options of a select, in tree order
    pub fn options(&self, select: NodeId) -> Vec<NodeId> {
        self.forms.options(&self.tree, select)
    }

    /// Selected options of a select, in tree order
    pub fn selected_options(&self, select: NodeId) -> Vec<NodeId> {
        self.forms.selected_options(&self.tree, select)
    }

    /// Set the user-entered value of an input or textarea
    pub fn set_control_value(&mut self, node: NodeId, value: &str) -> DomResult<()> {
        self.forms.set_value(&self.tree, node, value)
    }

    /// Set the checkedness of a checkbox or radio
    pub fn set_checked(&mut self, node: NodeId, checked: bool) -> DomResult<()> {
        self.forms.set_checked(&self.tree, node, checked)
    }

    /// Select a single option by index, or clear the selection with `None`
    pub fn set_selected_index(&mut self, select: NodeId, index: Option<usize>) -> DomResult<()> {
        self.forms.set_selected_index(&self.tree, select, index)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton() {
        let doc = Document::new("https://example.com/");
        assert!(doc.document_element().is_some());
        assert!(doc.head().is_some());
        assert!(doc.body().is_some());
        assert_eq!(doc.url(), "https://example.com/");
    }

    #[test]
    fn test_get_element_by_id_first_match() {
        let mut doc = Document::new("about:blank");
        let body = doc.body().unwrap();
        let a = doc.tree.create_element("div");
        let b = doc.tree.create_element("div");
        doc.tree.set_attribute(a, "id", "x").unwrap();
        doc.tree.set_attribute(b, "id", "x").unwrap();
        doc.tree.append_child(body, a).unwrap();
        doc.tree.append_child(body, b).unwrap();
        assert_eq!(doc.get_element_by_id("x"), Some(a));
        assert_eq!(doc.get_element_by_id(""), None);
    }

    #[test]
    fn test_title() {
        let mut doc = Document::new("about:blank");
        let head = doc.head().unwrap();
        let title = doc.tree.create_element("title");
        let text = doc.tree.create_text("Hello");
        doc.tree.append_child(head, title).unwrap();
        doc.tree.append_child(title, text).unwrap();
        assert_eq!(doc.title(), "Hello");
    }
}
