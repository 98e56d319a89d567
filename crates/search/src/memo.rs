//! Caller-side memoization of grouped views.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use teek_catalog::CatalogStore;

use crate::pipeline::search;
use crate::state::SearchState;
use crate::view::GroupedView;

/// Remembers the view for the most recent search state.
///
/// A lookup with a state equal to the cached one returns the cached view;
/// any other state recomputes through [`search`] and replaces the entry.
/// Skipping the cache never changes results, only the work done.
#[derive(Debug)]
pub struct MemoizedSearch {
    catalog: Arc<CatalogStore>,
    last: RwLock<Option<(SearchState, Arc<GroupedView>)>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoizedSearch {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self {
            catalog,
            last: RwLock::new(None),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn view(&self, state: &SearchState) -> Arc<GroupedView> {
        if let Some(view) = self.cached(state) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(search_text = %state.search_text, "search cache hit");
            return view;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let view = Arc::new(search(self.catalog.all(), state));
        if let Ok(mut last) = self.last.write() {
            *last = Some((state.clone(), Arc::clone(&view)));
        }
        view
    }

    /// Drop the cached view; the next lookup recomputes.
    pub fn invalidate(&self) {
        if let Ok(mut last) = self.last.write() {
            *last = None;
        }
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    fn cached(&self, state: &SearchState) -> Option<Arc<GroupedView>> {
        let last = self.last.read().ok()?;
        match last.as_ref() {
            Some((cached_state, view)) if cached_state == state => Some(Arc::clone(view)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memo() -> MemoizedSearch {
        MemoizedSearch::new(Arc::new(CatalogStore::seeded().unwrap()))
    }

    #[test]
    fn equal_state_reuses_cached_view() {
        let memo = memo();
        let first = memo.view(&SearchState::new("a", true));
        let second = memo.view(&SearchState::new("a", true));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(memo.hits(), 1);
        assert_eq!(memo.misses(), 1);
    }

    #[test]
    fn changed_state_recomputes() {
        let memo = memo();
        let all = memo.view(&SearchState::default());
        let in_stock = memo.view(&SearchState::default().with_only_show_in_stock(true));
        assert!(!Arc::ptr_eq(&all, &in_stock));
        assert_eq!(all.product_count(), 12);
        assert_eq!(in_stock.product_count(), 11);
        assert_eq!(memo.misses(), 2);
        assert_eq!(memo.hits(), 0);
    }

    #[test]
    fn cached_view_matches_uncached_pipeline() {
        let memo = memo();
        for state in [
            SearchState::new("", false),
            SearchState::new("RI", false),
            SearchState::new("RI", false),
            SearchState::new("o", true),
        ] {
            let expected = search(memo.catalog().all(), &state);
            assert_eq!(*memo.view(&state), expected);
        }
        assert_eq!(memo.hits(), 1);
    }

    #[test]
    fn invalidate_forces_recompute() {
        let memo = memo();
        let state = SearchState::new("milk", false);
        let first = memo.view(&state);
        memo.invalidate();
        let second = memo.view(&state);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
        assert_eq!(memo.misses(), 2);
    }
}
