//! Keeps the add-row marker pinned last.
//!
//! [`EntryOrdering`] is the comparator: the marker ranks after every real
//! item, and real items either compare equal (insertion order, preserved by
//! the stable sort) or follow locale collation. [`OrderingManager`] watches a
//! [`StringListModel`] and re-sorts it after every external mutation, using a
//! [`SortGuard`] to ignore the notification its own sort produces.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering};
use std::sync::{Arc, Weak};

use picklist_core::logging::{span_names, targets};
use picklist_core::{ConnectionId, PerfSpan};

use super::entry::ListEntry;
use super::list_model::StringListModel;
use super::signals::ListChange;
use super::sort_guard::SortGuard;
use crate::platform::Collation;

/// Comparator that ranks the marker last.
#[derive(Debug)]
pub struct EntryOrdering {
    sort_alphabetically: AtomicBool,
    collation: Collation,
}

impl EntryOrdering {
    /// Ordering that keeps insertion order for real items.
    pub fn unsorted() -> Self {
        Self::new(false, Collation::new())
    }

    /// Ordering that collates real items for the given locale.
    pub fn alphabetical(locale: &str) -> Self {
        Self::new(true, Collation::with_locale(locale))
    }

    /// Create an ordering.
    pub fn new(sort_alphabetically: bool, collation: Collation) -> Self {
        Self {
            sort_alphabetically: AtomicBool::new(sort_alphabetically),
            collation,
        }
    }

    /// Whether real items are collated.
    pub fn sort_alphabetically(&self) -> bool {
        self.sort_alphabetically.load(AtomicOrdering::SeqCst)
    }

    /// Toggle collation of real items. Returns `true` if the setting changed.
    pub fn set_sort_alphabetically(&self, sort: bool) -> bool {
        self.sort_alphabetically.swap(sort, AtomicOrdering::SeqCst) != sort
    }

    /// The collation used in alphabetical mode.
    pub fn collation(&self) -> &Collation {
        &self.collation
    }

    /// Compare two entries.
    pub fn compare(&self, a: &ListEntry, b: &ListEntry) -> Ordering {
        match (a, b) {
            (ListEntry::AddMarker, ListEntry::AddMarker) => Ordering::Equal,
            (ListEntry::AddMarker, ListEntry::Item(_)) => Ordering::Greater,
            (ListEntry::Item(_), ListEntry::AddMarker) => Ordering::Less,
            (ListEntry::Item(a), ListEntry::Item(b)) => {
                if self.sort_alphabetically() {
                    self.collation.compare(a, b)
                } else {
                    Ordering::Equal
                }
            }
        }
    }

    /// Returns `true` if `entries` already satisfy this ordering.
    pub fn is_settled(&self, entries: &[ListEntry]) -> bool {
        entries
            .windows(2)
            .all(|pair| self.compare(&pair[0], &pair[1]) != Ordering::Greater)
    }
}

impl Default for EntryOrdering {
    fn default() -> Self {
        Self::unsorted()
    }
}

/// State shared between the manager and its model slot.
struct Settler {
    model: Weak<StringListModel>,
    ordering: EntryOrdering,
    guard: SortGuard,
    sorts: AtomicUsize,
}

impl Settler {
    fn on_changed(&self, change: &ListChange) {
        if self.guard.consume_notification() {
            tracing::trace!(target: targets::ORDERING, ?change, "ignoring notification from own sort");
            return;
        }
        self.settle();
    }

    fn settle(&self) {
        let Some(model) = self.model.upgrade() else {
            return;
        };
        let _span = PerfSpan::new(span_names::SETTLE);
        // Armed before sorting: the sort notifies synchronously.
        self.guard.begin_sort();
        let count = self.sorts.fetch_add(1, AtomicOrdering::SeqCst) + 1;
        tracing::debug!(target: targets::ORDERING, sorts = count, len = model.len(), "re-sorting list");
        model.sort_by(|a, b| self.ordering.compare(a, b));
    }
}

/// Re-sorts a list model after every external mutation.
///
/// The manager holds the model weakly; dropping the manager disconnects it.
pub struct OrderingManager {
    settler: Arc<Settler>,
    model: Arc<StringListModel>,
    connection: ConnectionId,
}

impl OrderingManager {
    /// Attach to `model` and settle it once.
    pub fn attach(model: &Arc<StringListModel>, ordering: EntryOrdering) -> Self {
        let settler = Arc::new(Settler {
            model: Arc::downgrade(model),
            ordering,
            guard: SortGuard::new(),
            sorts: AtomicUsize::new(0),
        });

        let slot = Arc::downgrade(&settler);
        let connection = model.signals().invalidated.connect(move |change| {
            if let Some(settler) = slot.upgrade() {
                settler.on_changed(change);
            }
        });

        let manager = Self {
            settler,
            model: model.clone(),
            connection,
        };
        manager.settle();
        manager
    }

    /// Sort the model now, as if an external mutation had happened.
    pub fn settle(&self) {
        self.settler.settle();
    }

    /// The comparator in use.
    pub fn ordering(&self) -> &EntryOrdering {
        &self.settler.ordering
    }

    /// Toggle alphabetical sorting, settling the list if the setting changed.
    pub fn set_sort_alphabetically(&self, sort: bool) {
        if self.settler.ordering.set_sort_alphabetically(sort) {
            self.settle();
        }
    }

    /// Number of sorts performed since attaching (including the initial one).
    pub fn sort_count(&self) -> usize {
        self.settler.sorts.load(AtomicOrdering::SeqCst)
    }

    /// Returns `true` if the model currently satisfies the ordering.
    pub fn is_settled(&self) -> bool {
        self.settler.ordering.is_settled(&self.model.snapshot())
    }
}

impl Drop for OrderingManager {
    fn drop(&mut self) {
        self.model.signals().invalidated.disconnect(self.connection);
    }
}

impl std::fmt::Debug for OrderingManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderingManager")
            .field("ordering", &self.settler.ordering)
            .field("sorts", &self.sort_count())
            .finish()
    }
}
