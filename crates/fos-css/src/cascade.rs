//! Style Resolver
//!
//! Computes styles for DOM elements from user agent defaults, the
//! `hidden` attribute and the inline `style` attribute, inheriting
//! `visibility` and `list-style-type` from the parent element.
//! Stylesheet selector matching is not performed.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use fos_dom::{DomTree, NodeId};
use tracing::{trace, warn};

use crate::computed::ComputedStyle;
use crate::properties::{Display, ListStyleType, PropertyId, Visibility, WideKeyword};
use crate::{CssParser, InlineStyle};

/// Elements that generate no box by default
const DISPLAY_NONE_ELEMENTS: &[&str] = &[
    "head", "script", "style", "title", "meta", "link", "template",
    "noscript", "base", "datalist", "param",
];

/// Elements that are blocks by default
const BLOCK_ELEMENTS: &[&str] = &[
    "html", "body", "div", "p", "ul", "ol", "dl", "dd", "dt", "form",
    "fieldset", "legend", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "footer", "section", "article", "nav", "aside", "main", "address",
    "blockquote", "figure", "figcaption", "hr", "pre", "details", "summary",
];

/// Style resolver for one tree
///
/// Parsed inline styles and computed styles are cached for the lifetime
/// of the resolver, which borrows the tree immutably.
pub struct StyleResolver<'a> {
    tree: &'a DomTree,
    parser: CssParser,
    inline: RefCell<HashMap<NodeId, Option<Rc<InlineStyle>>>>,
    computed: RefCell<HashMap<NodeId, ComputedStyle>>,
}

impl<'a> StyleResolver<'a> {
    pub fn new(tree: &'a DomTree) -> Self {
        Self {
            tree,
            parser: CssParser::new(),
            inline: RefCell::new(HashMap::new()),
            computed: RefCell::new(HashMap::new()),
        }
    }

    /// Parsed `style` attribute of an element
    pub fn inline_style(&self, node: NodeId) -> Option<Rc<InlineStyle>> {
        if let Some(cached) = self.inline.borrow().get(&node) {
            return cached.clone();
        }

        let parsed = self.tree.attribute(node, "style").and_then(|css| {
            match self.parser.parse_inline(css) {
                Ok(style) => Some(Rc::new(style)),
                Err(e) => {
                    warn!(node = node.index(), error = %e, "ignoring unparsable style attribute");
                    None
                }
            }
        });
        self.inline.borrow_mut().insert(node, parsed.clone());
        parsed
    }

    /// Computed style of an element, `None` for other nodes
    pub fn compute_style(&self, node: NodeId) -> Option<ComputedStyle> {
        let tag = self.tree.tag_name(node)?;
        if let Some(style) = self.computed.borrow().get(&node) {
            return Some(*style);
        }

        let parent = self
            .tree
            .parent(node)
            .and_then(|p| self.compute_style(p))
            .unwrap_or_default();

        let mut style = ComputedStyle {
            display: default_display(tag),
            visibility: parent.visibility,
            opacity: 1.0,
            list_style_type: match tag {
                "ol" => ListStyleType::Decimal,
                "ul" => ListStyleType::Disc,
                _ => parent.list_style_type,
            },
        };
        if self.tree.attribute(node, "hidden").is_some() {
            style.display = Display::None;
        }
        if let Some(inline) = self.inline_style(node) {
            apply_inline(&mut style, &parent, &inline);
        }

        trace!(node = node.index(), tag, ?style, "computed style");
        self.computed.borrow_mut().insert(node, style);
        Some(style)
    }
}

fn default_display(tag: &str) -> Display {
    if DISPLAY_NONE_ELEMENTS.contains(&tag) {
        Display::None
    } else if BLOCK_ELEMENTS.contains(&tag) {
        Display::Block
    } else {
        match tag {
            "li" => Display::ListItem,
            "table" => Display::Table,
            _ => Display::Inline,
        }
    }
}

fn apply_inline(style: &mut ComputedStyle, parent: &ComputedStyle, inline: &InlineStyle) {
    let initial = ComputedStyle::default();

    if let Some(value) = inline.get(PropertyId::Display) {
        style.display = match WideKeyword::from_str(value) {
            Some(WideKeyword::Inherit) => parent.display,
            Some(_) => initial.display,
            None => Display::from_str(value),
        };
    }
    if let Some(value) = inline.get(PropertyId::Visibility) {
        match WideKeyword::from_str(value) {
            Some(WideKeyword::Initial) => style.visibility = initial.visibility,
            Some(_) => style.visibility = parent.visibility,
            None => {
                if let Some(v) = Visibility::from_str(value) {
                    style.visibility = v;
                }
            }
        }
    }
    if let Some(value) = inline.get(PropertyId::Opacity) {
        style.opacity = match WideKeyword::from_str(value) {
            Some(WideKeyword::Inherit) => parent.opacity,
            Some(_) => initial.opacity,
            None => parse_opacity(value).unwrap_or(style.opacity),
        };
    }
    if let Some(value) = inline.get(PropertyId::ListStyleType) {
        match WideKeyword::from_str(value) {
            Some(WideKeyword::Initial) => style.list_style_type = initial.list_style_type,
            Some(_) => style.list_style_type = parent.list_style_type,
            None => style.list_style_type = ListStyleType::from_str(value),
        }
    }
}

fn parse_opacity(value: &str) -> Option<f32> {
    let value = value.trim();
    let parsed = match value.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f32>().ok()? / 100.0,
        None => value.parse::<f32>().ok()?,
    };
    Some(parsed.clamp(0.0, 1.0))
}
