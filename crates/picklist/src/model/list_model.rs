//! Observable list of text items with an optional add-row marker.

use parking_lot::RwLock;

use super::entry::{ListEntry, Marker};
use super::signals::ModelSignals;

/// The ordered, mutable sequence backing an add/remove list control.
///
/// Entries are stored tagged ([`ListEntry`]); the flat string API classifies
/// text against the model's [`Marker`] on the way in and renders the marker
/// back to its sentinel text on the way out.
///
/// Every mutation emits its specific signal followed by
/// [`ModelSignals::invalidated`]. No lock is held while signals are emitted,
/// so slots may read or mutate the model.
///
/// # Example
///
/// ```
/// use picklist::model::{ListEntry, Marker, StringListModel};
///
/// let model = StringListModel::with_marker(["Dummy", "List", "+"], Marker::new("+"));
/// assert_eq!(model.len(), 3);
/// assert_eq!(model.entry(2), Some(ListEntry::AddMarker));
/// assert_eq!(model.texts(), vec!["Dummy", "List", "+"]);
/// ```
pub struct StringListModel {
    items: RwLock<Vec<ListEntry>>,
    marker: Marker,
    signals: ModelSignals,
}

impl StringListModel {
    /// Creates a model from flat text using the default marker.
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_marker(texts, Marker::default())
    }

    /// Creates a model from flat text using a custom marker.
    pub fn with_marker<I, S>(texts: I, marker: Marker) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = marker.classify_all(texts);
        Self::from_entries(entries, marker)
    }

    /// Creates a model from already tagged entries.
    ///
    /// Items whose text is the marker's sentinel become the add row.
    pub fn from_entries(entries: Vec<ListEntry>, marker: Marker) -> Self {
        let entries = entries.into_iter().map(|e| marker.normalize(e)).collect();
        Self {
            items: RwLock::new(entries),
            marker,
            signals: ModelSignals::new(),
        }
    }

    /// Creates an empty model.
    pub fn empty() -> Self {
        Self::from_entries(Vec::new(), Marker::default())
    }

    /// The marker this model classifies text against.
    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// The model's change signals.
    pub fn signals(&self) -> &ModelSignals {
        &self.signals
    }

    /// Returns the number of entries, marker included.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the model is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// The entry at `index`.
    pub fn entry(&self, index: usize) -> Option<ListEntry> {
        self.items.read().get(index).cloned()
    }

    /// A copy of all entries in order.
    pub fn snapshot(&self) -> Vec<ListEntry> {
        self.items.read().clone()
    }

    /// All entries in the host's flat text form.
    pub fn texts(&self) -> Vec<String> {
        self.items
            .read()
            .iter()
            .map(|e| self.marker.flatten(e))
            .collect()
    }

    /// Only the real items, in order.
    pub fn item_texts(&self) -> Vec<String> {
        self.items
            .read()
            .iter()
            .filter_map(|e| e.as_item().map(str::to_owned))
            .collect()
    }

    /// Index of the first entry equal to `entry`.
    pub fn position(&self, entry: &ListEntry) -> Option<usize> {
        self.items.read().iter().position(|e| e == entry)
    }

    /// Index of the first entry whose flat text is `text`.
    pub fn find_text(&self, text: &str) -> Option<usize> {
        self.position(&self.marker.classify(text))
    }

    /// Returns `true` if the marker occurs anywhere in the model.
    pub fn contains_marker(&self) -> bool {
        self.items.read().iter().any(ListEntry::is_marker)
    }

    /// Appends flat text (classified against the marker).
    pub fn push(&self, text: impl Into<String>) {
        let entry = self.marker.classify(text);
        self.push_entry(entry);
    }

    /// Appends a tagged entry. An item carrying the sentinel text is stored
    /// as the add row.
    pub fn push_entry(&self, entry: ListEntry) {
        let entry = self.marker.normalize(entry);
        let row = self.items.read().len();
        self.signals.emit_rows_inserted(row, row, || {
            self.items.write().push(entry);
        });
    }

    /// Appends the add-row marker.
    pub fn push_marker(&self) {
        self.push_entry(ListEntry::AddMarker);
    }

    /// Inserts flat text at `index`.
    ///
    /// Returns `false` without changing anything if `index > len()`.
    pub fn insert(&self, index: usize, text: impl Into<String>) -> bool {
        if index > self.len() {
            return false;
        }
        let entry = self.marker.classify(text);
        self.signals.emit_rows_inserted(index, index, || {
            self.items.write().insert(index, entry);
        });
        true
    }

    /// Removes and returns the entry at `index`.
    pub fn remove(&self, index: usize) -> Option<ListEntry> {
        if index >= self.len() {
            return None;
        }
        let mut removed = None;
        self.signals.emit_rows_removed(index, index, || {
            removed = Some(self.items.write().remove(index));
        });
        removed
    }

    /// Removes the first entry whose flat text is `text`.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove_item(&self, text: &str) -> bool {
        match self.find_text(text) {
            Some(index) => self.remove(index).is_some(),
            None => false,
        }
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.signals.emit_reset(|| {
            self.items.write().clear();
        });
    }

    /// Replaces all entries with flat text.
    pub fn set_items<I, S>(&self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = self.marker.classify_all(texts);
        self.signals.emit_reset(|| {
            *self.items.write() = entries;
        });
    }

    /// Sorts the entries with a stable sort.
    ///
    /// Emits layout change signals, even when the order does not change.
    pub fn sort_by<F>(&self, compare: F)
    where
        F: FnMut(&ListEntry, &ListEntry) -> std::cmp::Ordering,
    {
        self.signals.emit_layout_changed(|| {
            self.items.write().sort_by(compare);
        });
    }
}

impl Default for StringListModel {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for StringListModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringListModel")
            .field("items", &*self.items.read())
            .field("marker", &self.marker)
            .finish()
    }
}
