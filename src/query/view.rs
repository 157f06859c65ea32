//! Filtered, sorted projections of a record collection.
//!
//! A [`FilteredView`] holds a predicate and an optional comparator and
//! publishes `stable_sort(filter(list, predicate), comparator)` as an
//! immutable `Arc<[T]>`. Readers keep whatever sequence they fetched; a new
//! sequence is only published when the view is recomputed.

use std::fmt;
use std::sync::Arc;

use crate::models::Record;
use crate::store::RecordList;

use super::predicate::{Matcher, Predicate};
use super::sort::{Comparator, SortKey};

/// Callback invoked with the newly published sequence.
pub type Listener<T> = Box<dyn Fn(&[T]) + Send + Sync>;

/// A live read-only projection of a [`RecordList`].
pub struct FilteredView<T, M, K> {
    predicate: Predicate<M>,
    comparator: Option<Comparator<K>>,
    items: Arc<[T]>,
    source_version: u64,
    listeners: Vec<Listener<T>>,
}

impl<T, M, K> FilteredView<T, M, K>
where
    T: Record,
    M: Matcher<T>,
    K: SortKey<T>,
{
    /// Creates a show-all view over `list`.
    pub fn new(list: &RecordList<T>, comparator: Option<Comparator<K>>) -> Self {
        let mut view = Self {
            predicate: Predicate::all(),
            comparator,
            items: Arc::from(Vec::new()),
            source_version: list.version(),
            listeners: Vec::new(),
        };
        view.recompute(list);
        view
    }

    /// Replaces the predicate and recomputes.
    pub fn set_filter(&mut self, predicate: Predicate<M>, list: &RecordList<T>) {
        self.predicate = predicate;
        self.recompute(list);
    }

    /// Replaces the comparator and recomputes. `None` keeps insertion order.
    pub fn set_comparator(&mut self, comparator: Option<Comparator<K>>, list: &RecordList<T>) {
        self.comparator = comparator;
        self.recompute(list);
    }

    /// Replaces predicate and comparator together with a single recompute.
    pub fn configure(
        &mut self,
        predicate: Predicate<M>,
        comparator: Option<Comparator<K>>,
        list: &RecordList<T>,
    ) {
        self.predicate = predicate;
        self.comparator = comparator;
        self.recompute(list);
    }

    /// Recomputes if `list` changed since the last computation.
    pub fn refresh(&mut self, list: &RecordList<T>) {
        if list.version() != self.source_version {
            self.recompute(list);
        }
    }

    /// Returns the published sequence.
    pub fn get(&self) -> Arc<[T]> {
        Arc::clone(&self.items)
    }

    /// Returns the record at a zero-based position in the published sequence.
    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Number of records currently visible.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no record is visible.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The active predicate.
    pub fn predicate(&self) -> &Predicate<M> {
        &self.predicate
    }

    /// The active comparator.
    pub fn comparator(&self) -> Option<&Comparator<K>> {
        self.comparator.as_ref()
    }

    /// Registers a listener notified whenever the published sequence changes.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn recompute(&mut self, list: &RecordList<T>) {
        let mut items: Vec<T> = list
            .iter()
            .filter(|record| self.predicate.test(*record))
            .cloned()
            .collect();
        if let Some(comparator) = &self.comparator {
            comparator.sort(&mut items);
        }
        self.source_version = list.version();

        if items.as_slice() == &*self.items {
            return;
        }
        self.items = Arc::from(items);
        for listener in &self.listeners {
            listener(&self.items);
        }
    }
}

impl<T, M: fmt::Debug, K: fmt::Debug> fmt::Debug for FilteredView<T, M, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredView")
            .field("predicate", &self.predicate)
            .field("comparator", &self.comparator)
            .field("visible", &self.items.len())
            .field("source_version", &self.source_version)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
