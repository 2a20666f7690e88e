//! Resolver Configuration

/// Configuration for [`DomUtil`](crate::DomUtil)
#[derive(Debug, Clone)]
pub struct A11yConfig {
    /// Maximum chain of label indirections (`aria-labelledby`, `label`,
    /// `legend`) followed before giving up with `""`
    pub max_name_depth: usize,
    /// Image filenames at least this long are not spoken
    pub image_filename_max_len: usize,
    /// Stop leaf traversal at the body element instead of the document root
    pub traverse_from_body: bool,
}

impl Default for A11yConfig {
    fn default() -> Self {
        Self {
            max_name_depth: 64,
            image_filename_max_len: 16,
            traverse_from_body: false,
        }
    }
}

/// Which parts of the tree [`DomUtil::is_visible`](crate::DomUtil::is_visible) inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibilityOptions {
    /// Let a `display: none` / `opacity: 0` ancestor hide the node
    pub check_ancestors: bool,
    /// Let a visible descendant reveal a `visibility: hidden` element
    pub check_descendants: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            check_ancestors: true,
            check_descendants: true,
        }
    }
}

impl VisibilityOptions {
    /// Only the node and its descendants
    pub fn skip_ancestors() -> Self {
        Self {
            check_ancestors: false,
            ..Self::default()
        }
    }

    /// Only the node and its ancestors
    pub fn skip_descendants() -> Self {
        Self {
            check_descendants: false,
            ..Self::default()
        }
    }
}
