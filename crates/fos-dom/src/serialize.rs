//! HTML Serialization (innerHTML/outerHTML)
//!
//! Used to compare detached copies against their sources.

use crate::{DomTree, NodeData, NodeId};

/// Void elements (no end tag)
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Raw text elements (no escaping for content)
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Serialize the children of a node
pub fn inner_html(tree: &DomTree, node: NodeId) -> String {
    let mut output = String::new();
    serialize_children(tree, node, &mut output);
    output
}

/// Serialize a node including itself
pub fn outer_html(tree: &DomTree, node: NodeId) -> String {
    let mut output = String::new();
    serialize_node(tree, node, &mut output);
    output
}

fn serialize_node(tree: &DomTree, node_id: NodeId, output: &mut String) {
    let Some(node) = tree.get(node_id) else {
        return;
    };

    match &node.data {
        NodeData::Document => serialize_children(tree, node_id, output),
        NodeData::Element(elem) => {
            let tag = elem.name.as_str();
            output.push('<');
            output.push_str(tag);
            for attr in &elem.attrs {
                output.push(' ');
                output.push_str(&attr.name);
                if !attr.value.is_empty() {
                    output.push_str("=\"");
                    escape_attribute(&attr.value, output);
                    output.push('"');
                }
            }
            output.push('>');

            if VOID_ELEMENTS.contains(&tag) {
                return;
            }
            if RAW_TEXT_ELEMENTS.contains(&tag) {
                for (_, child) in tree.children(node_id) {
                    if let Some(text) = child.as_text() {
                        output.push_str(text);
                    }
                }
            } else {
                serialize_children(tree, node_id, output);
            }
            output.push_str("</");
            output.push_str(tag);
            output.push('>');
        }
        NodeData::Text(text) => escape_text(&text.content, output),
        NodeData::Comment(text) => {
            output.push_str("<!--");
            output.push_str(text);
            output.push_str("-->");
        }
        NodeData::Doctype { name } => {
            output.push_str("<!DOCTYPE ");
            output.push_str(name);
            output.push('>');
        }
    }
}

fn serialize_children(tree: &DomTree, parent: NodeId, output: &mut String) {
    for (child, _) in tree.children(parent) {
        serialize_node(tree, child, output);
    }
}

fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            _ => output.push(c),
        }
    }
}

fn escape_attribute(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            _ => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_escapes() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p");
        tree.set_attribute(p, "title", "a \"b\"").unwrap();
        tree.set_attribute(p, "hidden", "").unwrap();
        let text = tree.create_text("1 < 2 & 3");
        let br = tree.create_element("br");
        tree.append_child(tree.root(), p).unwrap();
        tree.append_child(p, text).unwrap();
        tree.append_child(p, br).unwrap();

        assert_eq!(
            outer_html(&tree, p),
            "<p title=\"a &quot;b&quot;\" hidden>1 &lt; 2 &amp; 3<br></p>"
        );
        assert_eq!(inner_html(&tree, p), "1 &lt; 2 &amp; 3<br>");
    }
}
