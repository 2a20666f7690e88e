//! Controls, Links and Tables
//!
//! Predicates about interactive elements plus the smaller lookups the
//! description layer relies on.

use fos_css::PropertyId;
use tracing::trace;
use url::Url;

use crate::aria::AriaRole;
use crate::dom_util::DomUtil;
use crate::host::HostTree;
use crate::leaf::HEADING_ELEMENTS;
use crate::messages::Msg;
use crate::text::parse_leading_number;

/// Elements the `disabled` attribute applies to
const FORM_ASSOCIATED: &[&str] = &[
    "button", "input", "select", "textarea", "option", "optgroup", "fieldset",
];

impl<H: HostTree> DomUtil<'_, H> {
    /// Whether a user can operate the element directly
    pub fn is_control(&self, node: H::Node) -> bool {
        let host = self.host;
        if !host.is_element(node) {
            return false;
        }
        if self.role(node).is_some_and(|r| r.is_control_widget()) && self.is_focusable(Some(node)) {
            return true;
        }
        if host.is_tag(node, &["button", "textarea", "select"]) {
            return true;
        }
        if host.is_tag(node, &["input"]) {
            return self.input_type(node) != "hidden";
        }
        self.is_content_editable(node)
    }

    /// `disabled` on a form element or on a fieldset or optgroup around it
    ///
    /// ARIA widgets carrying a `disabled` attribute are not disabled.
    pub fn is_disabled(&self, node: H::Node) -> bool {
        let host = self.host;
        if !host.is_tag(node, FORM_ASSOCIATED) {
            return false;
        }
        host.has_attribute(node, "disabled")
            || host
                .ancestors(node)
                .any(|a| host.is_tag(a, &["fieldset", "optgroup"]) && host.has_attribute(a, "disabled"))
    }

    /// Spoken link target
    pub fn get_link_url(&self, node: H::Node) -> String {
        let host = self.host;
        if host.is_tag(node, &["a"]) {
            return match host.attribute(node, "href").filter(|h| !h.is_empty()) {
                Some(_) if self.is_internal_link(node) => self.msg(Msg::InternalLink),
                Some(href) => href.to_string(),
                None => String::new(),
            };
        }
        if self.has_role(node, AriaRole::Link) {
            return self.msg(Msg::UnknownLink);
        }
        String::new()
    }

    /// An `href` pointing into the current document
    pub fn is_internal_link(&self, node: H::Node) -> bool {
        let Some((target, _fragment)) = self
            .host
            .attribute(node, "href")
            .and_then(|href| href.split_once('#'))
        else {
            return false;
        };
        if target.is_empty() {
            return true;
        }
        match Url::parse(self.host.url()) {
            Ok(url) => target == url.path(),
            Err(e) => {
                trace!(error = %e, "document url does not parse");
                false
            }
        }
    }

    /// Whether a table draws a border
    ///
    /// A zero width given by the `border` attribute or by inline CSS wins
    /// over every other hint.
    pub fn has_border(&self, node: H::Node) -> bool {
        let host = self.host;
        if !host.is_tag(node, &["table"]) {
            return false;
        }
        let style = host.inline_style(node);
        let css = |property| style.as_deref().and_then(|s| s.get(property));
        let css_width = css(PropertyId::BorderWidth).and_then(|w| w.split_whitespace().next());
        let border = host.attribute(node, "border").filter(|b| !b.is_empty());

        if border.is_some_and(is_zero_width) || css_width.is_some_and(is_zero_width) {
            return false;
        }
        if let Some(frame) = host.attribute(node, "frame").filter(|f| !f.is_empty()) {
            return !frame.to_ascii_lowercase().contains("void");
        }
        if border.is_some() {
            return true;
        }

        if let Some(styles) = css(PropertyId::BorderStyle) {
            if styles.split_whitespace().all(|s| s.eq_ignore_ascii_case("none")) {
                return false;
            }
        }
        if let Some(width) = css_width {
            return parse_leading_number(width).is_some()
                || width.starts_with(|c: char| c.is_ascii_alphabetic());
        }
        css(PropertyId::BorderColor).is_some()
    }

    /// Whether the element points at a long description
    pub fn has_long_desc(&self, node: H::Node) -> bool {
        self.host
            .attribute(node, "longdesc")
            .is_some_and(|d| !d.is_empty())
    }

    /// First node under `root` (inclusive) in document order that matches
    pub fn find_node(
        &self,
        root: H::Node,
        mut predicate: impl FnMut(H::Node) -> bool,
    ) -> Option<H::Node> {
        if !self.host.contains(root) {
            return None;
        }
        std::iter::once(root)
            .chain(self.host.descendants(root))
            .find(|&n| predicate(n))
    }

    /// Element named by `aria-activedescendant`, never the node itself
    pub fn get_active_descendant(&self, node: H::Node) -> Option<H::Node> {
        let id = self.host.attribute(node, "aria-activedescendant")?.trim();
        if id.is_empty() {
            return None;
        }
        self.host.element_by_id(id).filter(|&target| target != node)
    }

    /// `node` is `ancestor` or inside it
    pub fn is_descendant_of_node(&self, node: H::Node, ancestor: H::Node) -> bool {
        self.host.contains(node)
            && std::iter::once(node)
                .chain(self.host.ancestors(node))
                .any(|n| n == ancestor)
    }

    /// Spoken role of a node, `""` when it has none worth announcing
    pub fn get_role(&self, node: H::Node) -> String {
        let host = self.host;
        if let Some(msg) = self.role(node).and_then(|r| r.message()) {
            return self.msg(msg);
        }

        let msg = match host.tag_name(node) {
            Some("input") => match self.input_type(node).as_str() {
                "password" => Some(Msg::RolePasswordEditText),
                "checkbox" => Some(Msg::RoleCheckbox),
                "radio" => Some(Msg::RoleRadio),
                "submit" | "reset" | "button" | "image" => Some(Msg::RoleButton),
                "range" => Some(Msg::RoleSlider),
                _ if self.is_input_type_text(node) => Some(Msg::RoleEditText),
                _ => None,
            },
            Some("button") => Some(Msg::RoleButton),
            Some("textarea") => Some(Msg::RoleTextArea),
            Some("select") if host.has_attribute(node, "multiple") => Some(Msg::RoleListBox),
            Some("select") => Some(Msg::RoleComboBox),
            Some("a") if host.has_attribute(node, "href") => Some(Msg::RoleLink),
            Some("img") => Some(Msg::RoleImage),
            Some(tag) if HEADING_ELEMENTS.contains(&tag) => Some(Msg::RoleHeading),
            _ => None,
        };
        msg.map(|m| self.msg(m)).unwrap_or_default()
    }
}

fn is_zero_width(value: &str) -> bool {
    parse_leading_number(value) == Some(0.0)
}
