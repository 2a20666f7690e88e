//! Control Values

use crate::dom_util::DomUtil;
use crate::host::HostTree;
use crate::messages::Msg;
use crate::text::collapse_whitespace;

/// Inputs whose value is never spoken as user data
const VALUELESS_INPUT_TYPES: &[&str] =
    &["hidden", "image", "submit", "reset", "button", "checkbox", "radio"];

impl<H: HostTree> DomUtil<'_, H> {
    /// Current value a user has entered or selected
    ///
    /// A widget with an active descendant answers for that descendant.
    pub fn get_value(&self, node: H::Node) -> String {
        if let Some(active) = self.get_active_descendant(node) {
            let spoken = format!("{} {}", self.own_value(active), self.get_name(active));
            return collapse_whitespace(&spoken);
        }
        self.own_value(node)
    }

    fn own_value(&self, node: H::Node) -> String {
        let host = self.host;
        if host.is_tag(node, &["select"]) {
            let selected = host.selected_options(node);
            let text = |option: H::Node| collapse_whitespace(&host.text_content(option));
            return match selected.as_slice() {
                [] => String::new(),
                [only] => text(*only),
                [first, .., last] => {
                    self.msg_with(Msg::SelectRange, &[&text(*first), &text(*last)])
                }
            };
        }
        if host.is_tag(node, &["textarea"]) {
            return host.control_value(node).unwrap_or_default();
        }
        if host.is_tag(node, &["input"]) {
            let input_type = self.input_type(node);
            if VALUELESS_INPUT_TYPES.contains(&input_type.as_str()) {
                return String::new();
            }
            let value = host.control_value(node).unwrap_or_default();
            if input_type == "password" {
                return self.msg(Msg::PasswordDot).repeat(value.chars().count());
            }
            return value;
        }
        if self.is_content_editable(node) {
            return self.children_name(node, true, false);
        }
        String::new()
    }

    /// `contenteditable` present and not `"false"`
    pub(crate) fn is_content_editable(&self, node: H::Node) -> bool {
        self.host
            .attribute(node, "contenteditable")
            .is_some_and(|v| !v.trim().eq_ignore_ascii_case("false"))
    }
}
