//! Resolver Context
//!
//! [`DomUtil`] borrows a host tree and answers every query against it.
//! The query methods live in the sibling modules, one `impl` block each.

use std::fmt;

use crate::aria::AriaRole;
use crate::config::A11yConfig;
use crate::host::HostTree;
use crate::memoize::{Memo, MemoKey, MemoStats};
use crate::messages::{format_message, EnglishMessages, MessageTable, Msg};
use crate::A11yError;

/// Screen reader queries over one host tree
pub struct DomUtil<'a, H: HostTree> {
    pub(crate) host: &'a H,
    pub(crate) config: A11yConfig,
    messages: Box<dyn MessageTable + 'a>,
    memo: Memo<H::Node>,
}

impl<'a, H: HostTree> DomUtil<'a, H> {
    pub fn new(host: &'a H) -> Self {
        Self::with_config(host, A11yConfig::default())
    }

    pub fn with_config(host: &'a H, config: A11yConfig) -> Self {
        Self {
            host,
            config,
            messages: Box::new(EnglishMessages),
            memo: Memo::new(),
        }
    }

    /// Replace the spoken message table
    pub fn with_messages(mut self, messages: impl MessageTable + 'a) -> Self {
        self.messages = Box::new(messages);
        self
    }

    pub fn host(&self) -> &'a H {
        self.host
    }

    pub fn config(&self) -> &A11yConfig {
        &self.config
    }

    /// Run `f` with memoization enabled
    ///
    /// Fails with [`A11yError::NestedScope`] without running `f` when a
    /// scope is already open. The cache is dropped when `f` returns or
    /// panics.
    pub fn scope<R>(&self, f: impl FnOnce(&Self) -> R) -> Result<R, A11yError> {
        let _guard = self.memo.open()?;
        Ok(f(self))
    }

    /// Whether a memoization scope is open
    pub fn in_scope(&self) -> bool {
        self.memo.is_active()
    }

    /// Cache counters of the open scope, or of the last one closed
    pub fn memo_stats(&self) -> MemoStats {
        self.memo.stats()
    }

    /// Cached answer for `(node, key)`, computing it on a miss
    pub(crate) fn memoize(&self, node: H::Node, key: MemoKey, compute: impl FnOnce() -> bool) -> bool {
        if let Some(value) = self.memo.lookup(node, key) {
            return value;
        }
        let value = compute();
        self.memo.store(node, key, value);
        value
    }

    /// ARIA role named by the `role` attribute
    pub(crate) fn role(&self, node: H::Node) -> Option<AriaRole> {
        self.host.attribute(node, "role").and_then(AriaRole::from_attribute)
    }

    pub(crate) fn has_role(&self, node: H::Node, role: AriaRole) -> bool {
        self.role(node) == Some(role)
    }

    /// Attribute equals `value`, ignoring ASCII case and surrounding space
    pub(crate) fn attribute_is(&self, node: H::Node, name: &str, value: &str) -> bool {
        self.host
            .attribute(node, name)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case(value))
    }

    /// Own `aria-hidden="true"`
    pub(crate) fn is_aria_hidden(&self, node: H::Node) -> bool {
        self.attribute_is(node, "aria-hidden", "true")
    }

    pub(crate) fn msg(&self, msg: Msg) -> String {
        self.messages.template(msg).to_string()
    }

    pub(crate) fn msg_with(&self, msg: Msg, args: &[&str]) -> String {
        format_message(self.messages.template(msg), args)
    }
}

impl<H: HostTree> fmt::Debug for DomUtil<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomUtil")
            .field("config", &self.config)
            .field("in_scope", &self.in_scope())
            .finish()
    }
}
