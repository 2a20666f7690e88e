//! Visibility Resolver

use tracing::trace;

use crate::config::VisibilityOptions;
use crate::dom_util::DomUtil;
use crate::host::HostTree;
use crate::memoize::MemoKey;

impl<H: HostTree> DomUtil<'_, H> {
    /// Whether a node would be rendered, checking ancestors and descendants
    pub fn is_visible(&self, node: H::Node) -> bool {
        self.is_visible_with(node, VisibilityOptions::default())
    }

    /// Whether a node would be rendered
    ///
    /// `display: none` and `opacity: 0` hide a whole subtree. A hidden
    /// `visibility` hides the element itself but a descendant may set it
    /// back to `visible`, which makes the element count as visible too.
    /// `aria-hidden="false"` on the node or an ancestor overrides a hidden
    /// `visibility` but never `display: none` or `opacity: 0`.
    pub fn is_visible_with(&self, node: H::Node, options: VisibilityOptions) -> bool {
        if !self.host.contains(node) {
            return false;
        }
        self.memoize(node, MemoKey::Visible(options), || {
            self.compute_visible(node, options)
        })
    }

    fn compute_visible(&self, node: H::Node, options: VisibilityOptions) -> bool {
        if options.check_ancestors && self.host.ancestors(node).any(|a| self.is_strictly_invisible(a)) {
            return false;
        }
        let styled = if self.host.is_element(node) {
            Some(node)
        } else {
            self.host.parent_element(node)
        };
        if styled.is_some_and(|n| self.is_strictly_invisible(n)) {
            return false;
        }

        if self.is_forced_visible(node) {
            trace!(?node, "forced visible by aria-hidden=false");
            return true;
        }

        if !self.host.is_element(node) {
            return self
                .host
                .parent_element(node)
                .is_some_and(|p| !self.style_is_invisible(p));
        }

        let Some(style) = self.host.computed_style(node) else {
            return false;
        };
        if !style.is_invisible() {
            return true;
        }
        if style.is_strictly_invisible() || !options.check_descendants {
            return false;
        }
        self.has_visible_descendant(node)
    }

    /// An element descendant whose `visibility` puts it back on screen
    fn has_visible_descendant(&self, node: H::Node) -> bool {
        self.host
            .children(node)
            .filter(|&c| self.host.is_element(c))
            .any(|child| match self.host.computed_style(child) {
                Some(style) if !style.is_invisible() => true,
                Some(style) if style.is_strictly_invisible() => false,
                Some(_) => self.has_visible_descendant(child),
                None => false,
            })
    }

    fn is_forced_visible(&self, node: H::Node) -> bool {
        std::iter::once(node)
            .chain(self.host.ancestors(node))
            .any(|n| self.attribute_is(n, "aria-hidden", "false"))
    }

    fn is_strictly_invisible(&self, node: H::Node) -> bool {
        self.host
            .computed_style(node)
            .is_some_and(|s| s.is_strictly_invisible())
    }

    fn style_is_invisible(&self, node: H::Node) -> bool {
        self.host.computed_style(node).is_none_or(|s| s.is_invisible())
    }
}
