//! Single-selection state for list controls.

use parking_lot::RwLock;
use picklist_core::Signal;

use super::entry::ListEntry;

/// The selected row and its entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selected {
    /// Row of the selected entry.
    pub index: usize,
    /// The selected entry.
    pub entry: ListEntry,
}

/// Payload of [`SelectionModel::selection_changed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    /// Selection before the change.
    pub previous: Option<Selected>,
    /// Selection after the change.
    pub current: Option<Selected>,
}

/// Tracks at most one selected entry.
///
/// Selecting an entry that is already selected at the same row is a no-op
/// and emits nothing, so a slot may re-apply the current selection from
/// within its own notification without looping.
pub struct SelectionModel {
    selected: RwLock<Option<Selected>>,
    /// Emitted whenever the selected entry or row changes.
    pub selection_changed: Signal<SelectionChange>,
}

impl SelectionModel {
    /// Create a model with nothing selected.
    pub fn new() -> Self {
        Self {
            selected: RwLock::new(None),
            selection_changed: Signal::new(),
        }
    }

    /// The current selection.
    pub fn selected(&self) -> Option<Selected> {
        self.selected.read().clone()
    }

    /// Row of the current selection.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.read().as_ref().map(|s| s.index)
    }

    /// Entry of the current selection.
    pub fn selected_entry(&self) -> Option<ListEntry> {
        self.selected.read().as_ref().map(|s| s.entry.clone())
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.read().is_none()
    }

    /// Select `entry` at `index`. Returns `true` if the selection changed.
    pub fn select(&self, index: usize, entry: ListEntry) -> bool {
        self.replace(Some(Selected { index, entry }))
    }

    /// Clear the selection. Returns `true` if something was selected.
    pub fn clear(&self) -> bool {
        self.replace(None)
    }

    /// Move the current selection to another row without notifying.
    ///
    /// Used when the same entry changes position because the list was
    /// reordered; observers only care about the entry.
    pub fn relocate(&self, index: usize) {
        if let Some(selected) = self.selected.write().as_mut() {
            selected.index = index;
        }
    }

    fn replace(&self, current: Option<Selected>) -> bool {
        let previous = {
            let mut selected = self.selected.write();
            if *selected == current {
                return false;
            }
            std::mem::replace(&mut *selected, current.clone())
        };
        self.selection_changed
            .emit(SelectionChange { previous, current });
        true
    }
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SelectionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionModel")
            .field("selected", &self.selected())
            .finish()
    }
}
