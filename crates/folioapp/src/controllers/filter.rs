//! Filter state and the derived project view.
//!
//! The controller never owns records: it keeps a handle on the
//! [`ContentStore`] and the indexes of the records that currently match.
//! Every mutation replaces that index list (last write wins) and then hands
//! `(&FilterState, &[&ContentRecord])` to each subscriber.

use crate::content::ContentStore;
use crate::model::{ContentRecord, FilterState, QueryMode, ALL};
use crate::query::{chip_matches, search_matches};
use crate::subscription::{SubscriptionId, Subscribers};

type FilterCallback = dyn FnMut(&FilterState, &[&ContentRecord]);

pub struct FilterStateController {
    store: ContentStore,
    state: FilterState,
    mode: QueryMode,
    matched: Vec<usize>,
    subscribers: Subscribers<FilterCallback>,
}

impl FilterStateController {
    /// Starts in search mode with every axis unconstrained.
    pub fn new(store: ContentStore) -> Self {
        let matched = (0..store.len()).collect();
        Self {
            store,
            state: FilterState::default(),
            mode: QueryMode::Search,
            matched,
            subscribers: Subscribers::new(),
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// The records matching the current state, in store order.
    pub fn view(&self) -> Vec<&ContentRecord> {
        let records = self.store.records();
        self.matched.iter().filter_map(|&i| records.get(i)).collect()
    }

    pub fn update_search_term(&mut self, term: impl Into<String>) {
        self.enter_search_mode();
        self.state.search_term = term.into();
        self.recompute();
    }

    pub fn update_category(&mut self, category: impl Into<String>) {
        self.enter_search_mode();
        self.state.category = category.into();
        self.recompute();
    }

    pub fn update_technology(&mut self, technology: impl Into<String>) {
        self.enter_search_mode();
        self.state.technology = technology.into();
        self.recompute();
    }

    /// Applies a chip click. The chip value is stored as the category and
    /// matched with the single-axis OR rules of [`crate::query::chip_filter`].
    /// The next search-panel update clears it back to [`ALL`].
    pub fn set_chip_filter(&mut self, value: impl Into<String>) {
        self.state.category = value.into();
        self.mode = QueryMode::Chip;
        self.recompute();
    }

    /// Back to the unconstrained search state.
    pub fn reset(&mut self) {
        self.state = FilterState::default();
        self.mode = QueryMode::Search;
        self.recompute();
    }

    /// A chip value is not a category, so it must not leak into search mode.
    fn enter_search_mode(&mut self) {
        if self.mode == QueryMode::Chip {
            self.state.category = ALL.to_string();
            self.mode = QueryMode::Search;
        }
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&FilterState, &[&ContentRecord]) + 'static,
    {
        self.subscribers.add(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    fn recompute(&mut self) {
        let records = self.store.records();
        let state = &self.state;

        self.matched = match self.mode {
            QueryMode::Search => matching_indexes(records, |r| search_matches(r, state)),
            QueryMode::Chip => matching_indexes(records, |r| chip_matches(r, &state.category)),
        };

        log::debug!(
            "event=filter_recompute module=filter mode={:?} term_len={} category={} technology={} matched={}",
            self.mode,
            state.search_term.len(),
            state.category,
            state.technology,
            self.matched.len()
        );

        let view: Vec<&ContentRecord> =
            self.matched.iter().filter_map(|&i| records.get(i)).collect();
        for callback in self.subscribers.iter_mut() {
            callback(state, view.as_slice());
        }
    }
}

fn matching_indexes<P>(records: &[ContentRecord], predicate: P) -> Vec<usize>
where
    P: Fn(&ContentRecord) -> bool,
{
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| predicate(*record))
        .map(|(idx, _)| idx)
        .collect()
}
