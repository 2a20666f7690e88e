//! Accessible Names
//!
//! The name of a node is the first of: explicit ARIA labelling, image
//! text, fieldset legends, an associated `label`, input specific text,
//! `title` and finally the names of its children.

use std::collections::HashSet;

use fos_css::properties::ListStyleType;
use tracing::trace;

use crate::config::VisibilityOptions;
use crate::dom_util::DomUtil;
use crate::host::{HostTree, NodeKind};
use crate::messages::Msg;
use crate::text::{alphabetic_ordinal, collapse_whitespace, parse_leading_int, roman_ordinal};

/// Input types that take free text
pub(crate) const TEXT_INPUT_TYPES: &[&str] =
    &["text", "password", "search", "email", "number", "tel", "url"];

/// Controls whose children are their value, never their name
const VALUE_CONTROLS: &[&str] = &["select", "textarea"];

/// Nodes whose names are being computed, guarding against label cycles,
/// and how many label indirections led here
struct NameContext<N> {
    visiting: HashSet<N>,
    depth: usize,
}

impl<N> Default for NameContext<N> {
    fn default() -> Self {
        Self {
            visiting: HashSet::new(),
            depth: 0,
        }
    }
}

impl<H: HostTree> DomUtil<'_, H> {
    /// Name of a node, descending into children and including controls
    pub fn get_name(&self, node: H::Node) -> String {
        self.get_name_with(node, true, true)
    }

    /// Name of a node
    ///
    /// With `recursive` off only the node's own labelling is used. With
    /// `include_controls` off, controls among the children are skipped.
    pub fn get_name_with(&self, node: H::Node, recursive: bool, include_controls: bool) -> String {
        self.name_impl(node, recursive, include_controls, false, &mut NameContext::default())
    }

    fn name_impl(
        &self,
        node: H::Node,
        recursive: bool,
        include_controls: bool,
        allow_hidden: bool,
        ctx: &mut NameContext<H::Node>,
    ) -> String {
        match self.host.kind(node) {
            Some(NodeKind::Text) => return self.host.text(node).unwrap_or_default().to_string(),
            Some(NodeKind::Element) => {}
            _ => return String::new(),
        }
        if !ctx.visiting.insert(node) {
            trace!(?node, "name cycle cut short");
            return String::new();
        }
        let name = self.element_name(node, recursive, include_controls, allow_hidden, ctx);
        ctx.visiting.remove(&node);
        name
    }

    /// Name of an element that labels another one
    fn label_name(
        &self,
        label: H::Node,
        include_controls: bool,
        allow_hidden: bool,
        ctx: &mut NameContext<H::Node>,
    ) -> String {
        if ctx.depth >= self.config.max_name_depth {
            trace!(?label, depth = ctx.depth, "label chain cut short");
            return String::new();
        }
        ctx.depth += 1;
        let name = self.name_impl(label, true, include_controls, allow_hidden, ctx);
        ctx.depth -= 1;
        name
    }

    fn element_name(
        &self,
        node: H::Node,
        recursive: bool,
        include_controls: bool,
        allow_hidden: bool,
        ctx: &mut NameContext<H::Node>,
    ) -> String {
        let host = self.host;
        let prefix = self.list_item_prefix(node);

        let mut label = self.base_label(node, include_controls, ctx);
        if label.is_empty() && self.is_control(node) {
            let enclosing = host
                .ancestors(node)
                .find(|&a| host.is_tag(a, &["label"]) && !host.has_attribute(a, "for"));
            if let Some(enclosing) = enclosing {
                label = collapse_whitespace(&self.label_name(enclosing, false, false, ctx));
            }
        }
        if host.is_tag(node, &["input"]) {
            label = self.input_label(node, label);
        }
        if !label.is_empty() {
            return prefix + &label;
        }

        if collapse_whitespace(&host.text_content(node)).is_empty() {
            if let Some(title) = host.attribute(node, "title").filter(|t| !t.is_empty()) {
                return prefix + title;
            }
        }

        if !recursive
            || self.role(node).is_some_and(|r| r.is_composite())
            || host.is_tag(node, VALUE_CONTROLS)
        {
            return String::new();
        }
        prefix + &self.children_name_in(node, include_controls, allow_hidden, ctx)
    }

    /// Labelling that does not depend on the node's own text
    fn base_label(
        &self,
        node: H::Node,
        include_controls: bool,
        ctx: &mut NameContext<H::Node>,
    ) -> String {
        let host = self.host;
        let mut label = String::new();

        if let Some(ids) = host.attribute(node, "aria-labelledby") {
            let names: Vec<String> = ids
                .split_whitespace()
                .filter_map(|id| host.element_by_id(id))
                .map(|target| self.label_name(target, include_controls, true, ctx))
                .collect();
            label = names.join(" ");
        }
        if label.is_empty() {
            if let Some(aria_label) = host.attribute(node, "aria-label") {
                label = aria_label.to_string();
            }
        }
        if label.is_empty() && host.is_tag(node, &["img"]) {
            label = self.image_title(node);
        }
        if label.is_empty() && host.is_tag(node, &["fieldset"]) {
            let legends: Vec<H::Node> = host
                .descendants(node)
                .filter(|&d| host.is_tag(d, &["legend"]))
                .collect();
            let names: Vec<String> = legends
                .into_iter()
                .map(|legend| self.label_name(legend, include_controls, false, ctx))
                .collect();
            label = names.join(" ");
        }
        if label.is_empty() {
            if let Some(id) = host.attribute(node, "id").filter(|id| !id.is_empty()) {
                let explicit = host
                    .descendants(host.root())
                    .find(|&l| host.is_tag(l, &["label"]) && host.attribute(l, "for") == Some(id));
                if let Some(explicit) = explicit {
                    label = self.label_name(explicit, include_controls, false, ctx);
                }
            }
        }
        collapse_whitespace(&label)
    }

    /// Name rules specific to `input` elements
    fn input_label(&self, node: H::Node, label: String) -> String {
        let host = self.host;
        let value_attr = host.attribute(node, "value").filter(|v| !v.is_empty());
        match self.input_type(node).as_str() {
            _ if !label.is_empty() && !self.is_input_type_text(node) => label,
            "image" => self.image_title(node),
            "submit" => value_attr.map_or_else(|| self.msg(Msg::Submit), str::to_string),
            "reset" => value_attr.map_or_else(|| self.msg(Msg::Reset), str::to_string),
            "button" => value_attr.unwrap_or_default().to_string(),
            _ if self.is_input_type_text(node) => {
                let Some(placeholder) = host.attribute(node, "placeholder").filter(|p| !p.is_empty())
                else {
                    return label;
                };
                if label.is_empty() {
                    placeholder.to_string()
                } else if !host.control_value(node).unwrap_or_default().is_empty() {
                    label
                } else {
                    self.msg_with(Msg::WithHint, &[&label, placeholder])
                }
            }
            _ => label,
        }
    }

    /// Concatenated names of the children that would be read
    pub(crate) fn children_name(
        &self,
        node: H::Node,
        include_controls: bool,
        allow_hidden: bool,
    ) -> String {
        self.children_name_in(node, include_controls, allow_hidden, &mut NameContext::default())
    }

    fn children_name_in(
        &self,
        node: H::Node,
        include_controls: bool,
        allow_hidden: bool,
        ctx: &mut NameContext<H::Node>,
    ) -> String {
        let host = self.host;
        let parent_is_span = host.is_tag(node, &["span"]);
        let mut name = String::new();

        let children: Vec<H::Node> = host.children(node).collect();
        for child in children {
            if !include_controls && self.is_control(child) {
                continue;
            }
            let readable = allow_hidden
                || (self.is_visible_with(child, VisibilityOptions::skip_ancestors())
                    && !self.is_aria_hidden(child));
            if !readable {
                continue;
            }
            let previous = host.previous_sibling(child).unwrap_or(child);
            let inline = parent_is_span
                || host.is_tag(child, &["span"])
                || host.is_tag(previous, &["span"]);
            if !inline {
                name.push(' ');
            }
            name.push_str(&self.name_impl(child, true, include_controls, false, ctx));
        }
        name
    }

    /// Text an image is announced with
    ///
    /// `alt`, then `title`, then a short filename from `src`, then a
    /// generic word.
    pub fn image_title(&self, node: H::Node) -> String {
        let host = self.host;
        if let Some(text) = host.attribute(node, "alt").or_else(|| host.attribute(node, "title")) {
            return text.to_string();
        }
        let src = host.attribute(node, "src").unwrap_or_default();
        if !src.is_empty() && !src.starts_with("data:") {
            let filename = src.rsplit('/').next().unwrap_or(src);
            let stem = filename.rsplit_once('.').map_or(filename, |(stem, _)| stem);
            let len = stem.chars().count();
            if len >= 1 && len < self.config.image_filename_max_len {
                return self.msg_with(Msg::NamedImage, &[stem]);
            }
        }
        self.msg(Msg::Image)
    }

    /// `"3. "` for the third item of an ordered list
    fn list_item_prefix(&self, node: H::Node) -> String {
        let host = self.host;
        if !host.is_tag(node, &["li"]) {
            return String::new();
        }
        let Some(list) = host.parent(node).filter(|&p| host.is_tag(p, &["ol"])) else {
            return String::new();
        };

        let start = host
            .attribute(list, "start")
            .and_then(parse_leading_int)
            .unwrap_or(1);
        let mut preceding = 0;
        let mut sibling = host.previous_sibling(node);
        while let Some(s) = sibling {
            if host.is_tag(s, &["li"]) {
                preceding += 1;
            }
            sibling = host.previous_sibling(s);
        }
        let ordinal = start + preceding;

        let style = host
            .computed_style(node)
            .map(|s| s.list_style_type)
            .unwrap_or(ListStyleType::Decimal);
        let marker = match u32::try_from(ordinal) {
            _ if style == ListStyleType::None => return String::new(),
            Ok(n) if n > 0 && style.is_alphabetic() => alphabetic_ordinal(n),
            Ok(n) if n > 0 && style.is_roman() => roman_ordinal(n),
            _ => ordinal.to_string(),
        };
        format!("{marker}. ")
    }

    /// Lowercase `type` of an input, `"text"` when missing
    pub(crate) fn input_type(&self, node: H::Node) -> String {
        self.host
            .attribute(node, "type")
            .map(|t| t.trim().to_ascii_lowercase())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "text".to_string())
    }

    /// An `input` that takes free text
    pub fn is_input_type_text(&self, node: H::Node) -> bool {
        self.host.is_tag(node, &["input"])
            && TEXT_INPUT_TYPES.contains(&self.input_type(node).as_str())
    }
}
