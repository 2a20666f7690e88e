//! Memoization Scope
//!
//! Results of the expensive predicates are cached while a scope opened by
//! [`DomUtil::scope`](crate::DomUtil::scope) is active and discarded when
//! it closes.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::config::VisibilityOptions;
use crate::A11yError;

/// Which predicate a cached answer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoKey {
    Visible(VisibilityOptions),
    Leaf,
    Content,
}

/// Cache counters of one scope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug)]
struct MemoCache<N> {
    entries: HashMap<(N, MemoKey), bool>,
    stats: MemoStats,
}

/// Scope-bound cache owned by a resolver
#[derive(Debug)]
pub(crate) struct Memo<N> {
    cache: RefCell<Option<MemoCache<N>>>,
    last: Cell<MemoStats>,
}

impl<N: Copy + Eq + Hash + std::fmt::Debug> Memo<N> {
    pub(crate) fn new() -> Self {
        Self {
            cache: RefCell::new(None),
            last: Cell::new(MemoStats::default()),
        }
    }

    /// Start a scope; the cache lives until the guard drops
    pub(crate) fn open(&self) -> Result<ScopeGuard<'_, N>, A11yError> {
        let mut cache = self.cache.try_borrow_mut().map_err(|_| A11yError::NestedScope)?;
        if cache.is_some() {
            return Err(A11yError::NestedScope);
        }
        *cache = Some(MemoCache {
            entries: HashMap::new(),
            stats: MemoStats::default(),
        });
        debug!("memoization scope opened");
        Ok(ScopeGuard { memo: self })
    }

    pub(crate) fn is_active(&self) -> bool {
        self.cache.borrow().is_some()
    }

    pub(crate) fn lookup(&self, node: N, key: MemoKey) -> Option<bool> {
        let mut cache = self.cache.borrow_mut();
        let cache = cache.as_mut()?;
        match cache.entries.get(&(node, key)) {
            Some(&value) => {
                cache.stats.hits += 1;
                trace!(?node, ?key, value, "memo hit");
                Some(value)
            }
            None => {
                cache.stats.misses += 1;
                None
            }
        }
    }

    pub(crate) fn store(&self, node: N, key: MemoKey, value: bool) {
        if let Some(cache) = self.cache.borrow_mut().as_mut() {
            cache.entries.insert((node, key), value);
        }
    }

    /// Counters of the active scope, or of the last closed one
    pub(crate) fn stats(&self) -> MemoStats {
        match self.cache.borrow().as_ref() {
            Some(cache) => cache.stats,
            None => self.last.get(),
        }
    }
}

/// Clears the cache on drop, including during unwinding
pub(crate) struct ScopeGuard<'a, N> {
    memo: &'a Memo<N>,
}

impl<N> Drop for ScopeGuard<'_, N> {
    fn drop(&mut self) {
        if let Ok(mut cache) = self.memo.cache.try_borrow_mut() {
            if let Some(closed) = cache.take() {
                debug!(
                    entries = closed.entries.len(),
                    hits = closed.stats.hits,
                    misses = closed.stats.misses,
                    "memoization scope closed"
                );
                self.memo.last.set(closed.stats);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_outside_scope() {
        let memo = Memo::<u32>::new();
        memo.store(1, MemoKey::Content, true);
        assert_eq!(memo.lookup(1, MemoKey::Content), None);
        assert_eq!(memo.stats(), MemoStats::default());
    }

    #[test]
    fn test_scope_caches_and_clears() {
        let memo = Memo::<u32>::new();
        {
            let _guard = memo.open().unwrap();
            assert_eq!(memo.lookup(1, MemoKey::Content), None);
            memo.store(1, MemoKey::Content, true);
            assert_eq!(memo.lookup(1, MemoKey::Content), Some(true));
            assert_eq!(memo.lookup(1, MemoKey::Leaf), None);
            assert!(memo.is_active());
        }
        assert!(!memo.is_active());
        assert_eq!(memo.stats(), MemoStats { hits: 1, misses: 2 });

        let _guard = memo.open().unwrap();
        assert_eq!(memo.lookup(1, MemoKey::Content), None);
    }

    #[test]
    fn test_nested_open_rejected() {
        let memo = Memo::<u32>::new();
        let _guard = memo.open().unwrap();
        assert!(matches!(memo.open(), Err(A11yError::NestedScope)));
        assert!(memo.is_active());
    }
}
