//! Spoken States
//!
//! States are short phrases announced after the name and value: ARIA
//! states, position in a set, native checkedness, selection and list
//! sizes, disabledness and access keys.

use crate::aria::{AriaRole, AriaState, STATE_ATTRIBUTES};
use crate::dom_util::DomUtil;
use crate::host::HostTree;
use crate::messages::Msg;
use crate::text::parse_leading_int;

impl<H: HostTree> DomUtil<'_, H> {
    /// State phrases of a node joined by spaces
    ///
    /// `verbose` adds the position of ARIA options, tree items, tabs and
    /// menu items within their set.
    pub fn get_state(&self, node: H::Node, verbose: bool) -> String {
        let node = self.get_active_descendant(node).unwrap_or(node);
        let host = self.host;
        if !host.is_element(node) {
            return String::new();
        }

        let mut parts: Vec<String> = STATE_ATTRIBUTES
            .iter()
            .filter_map(|&name| AriaState::parse(name, host.attribute(node, name)?))
            .map(|state| self.msg(state.message()))
            .collect();

        if verbose {
            parts.extend(self.position_in_set(node));
        }
        parts.extend(self.native_state(node));
        if self.is_disabled(node) {
            parts.push(self.msg(Msg::Disabled));
        }
        if let Some(key) = host.attribute(node, "accesskey").filter(|k| !k.is_empty()) {
            parts.push(self.msg_with(Msg::AccessKey, &[key]));
        }
        parts.join(" ")
    }

    /// `"2 of 5"` for an ARIA item in a set
    fn position_in_set(&self, node: H::Node) -> Option<String> {
        let host = self.host;
        let role = self.role(node).filter(|r| r.has_position())?;
        let attr_number = |name: &str| {
            host.attribute(node, name)
                .and_then(parse_leading_int)
                .filter(|&n| n > 0)
        };

        let (index, size) = match (attr_number("aria-posinset"), attr_number("aria-setsize")) {
            (Some(index), Some(size)) => (index, size),
            (index, size) => {
                let parent = host.parent(node)?;
                let set: Vec<H::Node> = host
                    .children(parent)
                    .filter(|&c| host.is_element(c) && self.role(c) == Some(role))
                    .collect();
                let position = set.iter().position(|&c| c == node)? as i64 + 1;
                (index.unwrap_or(position), size.unwrap_or(set.len() as i64))
            }
        };
        Some(self.msg_with(Msg::PositionInSet, &[&index.to_string(), &size.to_string()]))
    }

    fn native_state(&self, node: H::Node) -> Option<String> {
        let host = self.host;

        if host.is_tag(node, &["input"]) && !host.has_attribute(node, "aria-checked") {
            let checked = host.is_checked(node);
            match self.input_type(node).as_str() {
                "checkbox" => {
                    return Some(self.msg(if checked { Msg::Checked } else { Msg::NotChecked }));
                }
                "radio" => {
                    return Some(self.msg(if checked {
                        Msg::RadioSelected
                    } else {
                        Msg::RadioNotSelected
                    }));
                }
                _ => {}
            }
        }

        if host.is_tag(node, &["select"]) {
            let options = host.options(node);
            let selected = host.selected_options(node);
            if selected.len() <= 1 {
                let index = selected
                    .first()
                    .and_then(|s| options.iter().position(|o| o == s))
                    .map_or(0, |i| i + 1);
                return Some(self.msg_with(
                    Msg::PositionInSet,
                    &[&index.to_string(), &options.len().to_string()],
                ));
            }
            return Some(self.msg_with(Msg::SelectedItems, &[&selected.len().to_string()]));
        }

        if host.is_tag(node, &["ul", "ol"]) || self.has_role(node, AriaRole::List) {
            let items: Vec<H::Node> = host.children(node).filter(|&c| host.is_element(c)).collect();
            let count = items
                .first()
                .and_then(|&first| host.attribute(first, "aria-setsize"))
                .and_then(parse_leading_int)
                .unwrap_or(items.len() as i64);
            return Some(if count == 1 {
                self.msg(Msg::ListWithOneItem)
            } else {
                self.msg_with(Msg::ListWithItems, &[&count.to_string()])
            });
        }
        None
    }
}
