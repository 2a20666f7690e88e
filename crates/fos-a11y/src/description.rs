//! Control Descriptions
//!
//! Assembles what a screen reader says when focus lands on a control:
//! nearby context for unlabelled controls, the name, the current value
//! and an annotation made of role and state.

use crate::dom_util::DomUtil;
use crate::host::HostTree;
use crate::text::{collapse_whitespace, is_blank};

/// Spoken parts of a control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlDescription {
    /// Nearby text used when the control has no name of its own
    pub context: String,
    pub text: String,
    pub user_value: String,
    /// Role followed by state
    pub annotation: String,
}

impl ControlDescription {
    /// The four parts as one utterance
    pub fn to_spoken(&self) -> String {
        collapse_whitespace(&format!(
            "{} {} {} {}",
            self.context, self.text, self.user_value, self.annotation
        ))
    }
}

impl<H: HostTree> DomUtil<'_, H> {
    pub fn get_control_description(&self, node: H::Node) -> ControlDescription {
        let text = self.get_name(node);
        let context = if is_blank(&text) {
            self.get_control_label_heuristics(node)
        } else {
            String::new()
        };
        let annotation = collapse_whitespace(&format!(
            "{} {}",
            self.get_role(node),
            self.get_state(node, true)
        ));
        ControlDescription {
            context,
            text,
            user_value: self.get_value(node),
            annotation,
        }
    }

    /// Best guess at the visible label of an unlabelled control
    ///
    /// Picks the nearest leaf with content before or after the control,
    /// preferring whichever shares the closer ancestor (the earlier one on
    /// a tie). Text inside a `label` bound to another control is skipped.
    pub fn get_control_label_heuristics(&self, node: H::Node) -> String {
        let host = self.host;
        let emptied = |name: &str| host.attribute(node, name).is_some_and(str::is_empty);
        if emptied("aria-label") || emptied("aria-title") {
            return String::new();
        }

        let previous = self.label_candidate(node, true);
        let next = self.label_candidate(node, false);
        let chosen = match (previous, next) {
            (Some(p), Some(n)) => {
                if self.climb_distance(node, n) < self.climb_distance(node, p) {
                    n
                } else {
                    p
                }
            }
            (Some(p), None) => p,
            (None, Some(n)) => n,
            (None, None) => return String::new(),
        };
        collapse_whitespace(&format!("{} {}", self.get_value(chosen), self.get_name(chosen)))
    }

    fn label_candidate(&self, node: H::Node, reverse: bool) -> Option<H::Node> {
        let own_id = self.host.attribute(node, "id").unwrap_or_default();
        let mut current = node;
        while let Some(leaf) = self.directed_next_leaf_node(current, reverse) {
            if self.has_content(leaf) && !self.is_control(leaf) && !self.in_foreign_label(leaf, own_id) {
                return Some(leaf);
            }
            current = leaf;
        }
        None
    }

    /// Inside a `label` whose `for` names some other element
    fn in_foreign_label(&self, node: H::Node, own_id: &str) -> bool {
        let host = self.host;
        std::iter::once(node).chain(host.ancestors(node)).any(|n| {
            host.is_tag(n, &["label"])
                && host
                    .attribute(n, "for")
                    .is_some_and(|target| !target.is_empty() && target != own_id)
        })
    }

    /// Steps up from `node` until an ancestor contains `other`
    fn climb_distance(&self, node: H::Node, other: H::Node) -> usize {
        std::iter::once(node)
            .chain(self.host.ancestors(node))
            .position(|a| self.is_descendant_of_node(other, a))
            .unwrap_or(usize::MAX)
    }

    /// Composite widget around a non-control with an ARIA role
    pub fn get_surrounding_control(&self, node: H::Node) -> Option<H::Node> {
        let host = self.host;
        if self.is_control(node) || !host.has_attribute(node, "role") {
            return None;
        }
        host.ancestors(node)
            .find(|&a| self.role(a).is_some_and(|r| r.is_composite()))
    }

    /// Value and verbose state, plus the name when inside a composite widget
    pub fn get_control_value_and_state_string(&self, node: H::Node) -> String {
        let value = self.get_value(node);
        let state = self.get_state(node, true);
        let spoken = if self.get_surrounding_control(node).is_some() {
            format!("{value} {} {state}", self.get_name(node))
        } else {
            format!("{value} {state}")
        };
        collapse_whitespace(&spoken)
    }
}
