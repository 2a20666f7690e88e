//! Content Predicate

use crate::dom_util::DomUtil;
use crate::host::{HostTree, NodeKind};
use crate::memoize::MemoKey;
use crate::text::is_blank;

/// Subtrees that never produce spoken content
const NON_CONTENT_ELEMENTS: &[&str] = &["head", "script", "noscript", "noembed", "style"];

/// Controls whose presence makes their container silent on its own
const FORM_CONTROLS: &[&str] = &["button", "input", "select", "textarea"];

impl<H: HostTree> DomUtil<'_, H> {
    /// Whether a node would produce something worth announcing
    pub fn has_content(&self, node: H::Node) -> bool {
        match self.host.kind(node) {
            None | Some(NodeKind::Comment) | Some(NodeKind::Doctype) => false,
            Some(_) => self.memoize(node, MemoKey::Content, || self.compute_has_content(node)),
        }
    }

    fn compute_has_content(&self, node: H::Node) -> bool {
        let host = self.host;
        let inclusive = || std::iter::once(node).chain(host.ancestors(node));

        if inclusive().any(|n| host.is_tag(n, NON_CONTENT_ELEMENTS)) {
            return false;
        }
        if !self.is_visible(node) {
            return false;
        }
        if inclusive().any(|n| self.is_aria_hidden(n)) {
            return false;
        }
        if self.is_control(node) {
            return true;
        }
        if inclusive().any(|n| host.is_tag(n, &["video", "audio"])) {
            return true;
        }
        if host.is_tag(node, &["iframe"]) {
            let src = host.attribute(node, "src").unwrap_or_default();
            if !src.trim_start().to_ascii_lowercase().starts_with("javascript:") {
                return true;
            }
        }
        if !self.is_leaf_node(node)
            && host.descendants(node).any(|d| host.is_tag(d, FORM_CONTROLS))
        {
            return false;
        }

        let spoken = format!("{} {}", self.get_value(node), self.get_name(node));
        !is_blank(&spoken) || !self.get_state(node, true).is_empty()
    }
}
