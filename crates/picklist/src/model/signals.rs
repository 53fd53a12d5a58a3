//! Change notifications emitted by list models.

use picklist_core::Signal;

/// What changed in a list model.
///
/// Every mutation ends with exactly one `invalidated` emission carrying one
/// of these, after the specific signal for that mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    /// Rows `first..=last` were inserted.
    Inserted { first: usize, last: usize },
    /// Rows `first..=last` were removed.
    Removed { first: usize, last: usize },
    /// Rows were reordered in place (sorting).
    Reordered,
    /// The whole content was replaced.
    Reset,
}

/// Signals emitted by a list model.
pub struct ModelSignals {
    /// Emitted after rows have been inserted.
    /// Args: (first row, last row)
    pub rows_inserted: Signal<(usize, usize)>,

    /// Emitted after rows have been removed.
    /// Args: (first row, last row)
    pub rows_removed: Signal<(usize, usize)>,

    /// Emitted before a layout change (sorting).
    pub layout_about_to_change: Signal<()>,

    /// Emitted after a layout change.
    pub layout_changed: Signal<()>,

    /// Emitted after the model has been reset.
    pub model_reset: Signal<()>,

    /// Emitted after every mutation, including sorts.
    pub invalidated: Signal<ListChange>,
}

impl Default for ModelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelSignals {
    /// Creates a new set of model signals.
    pub fn new() -> Self {
        Self {
            rows_inserted: Signal::new(),
            rows_removed: Signal::new(),
            layout_about_to_change: Signal::new(),
            layout_changed: Signal::new(),
            model_reset: Signal::new(),
            invalidated: Signal::new(),
        }
    }

    /// Runs `insert_fn`, then emits the row insertion signals.
    pub fn emit_rows_inserted<F>(&self, first: usize, last: usize, insert_fn: F)
    where
        F: FnOnce(),
    {
        insert_fn();
        self.rows_inserted.emit((first, last));
        self.invalidated.emit(ListChange::Inserted { first, last });
    }

    /// Runs `remove_fn`, then emits the row removal signals.
    pub fn emit_rows_removed<F>(&self, first: usize, last: usize, remove_fn: F)
    where
        F: FnOnce(),
    {
        remove_fn();
        self.rows_removed.emit((first, last));
        self.invalidated.emit(ListChange::Removed { first, last });
    }

    /// Emits signals around a layout change.
    ///
    /// Calls the provided function between the about_to_change and changed signals.
    pub fn emit_layout_changed<F>(&self, change_fn: F)
    where
        F: FnOnce(),
    {
        self.layout_about_to_change.emit(());
        change_fn();
        self.layout_changed.emit(());
        self.invalidated.emit(ListChange::Reordered);
    }

    /// Runs `reset_fn`, then emits the reset signals.
    pub fn emit_reset<F>(&self, reset_fn: F)
    where
        F: FnOnce(),
    {
        reset_fn();
        self.model_reset.emit(());
        self.invalidated.emit(ListChange::Reset);
    }
}
