//! Per-row state handed to the rendering layer.

use crate::model::ListEntry;

/// What a row's command button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// The add row: run the add action.
    Add,
    /// A real item: run the remove action for this text.
    Remove(String),
}

/// Everything a renderer needs to draw one row of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowState {
    /// Row index in the list.
    pub index: usize,
    /// Label text; empty for the add row.
    pub display_text: String,
    /// Command bound to the row's button.
    pub action: RowAction,
    /// Whether this row holds the current selection.
    pub selected: bool,
}

impl RowState {
    /// Build the row for `entry` at `index`.
    pub fn from_entry(index: usize, entry: &ListEntry, selected: bool) -> Self {
        match entry {
            ListEntry::Item(text) => Self {
                index,
                display_text: text.clone(),
                action: RowAction::Remove(text.clone()),
                selected,
            },
            ListEntry::AddMarker => Self {
                index,
                display_text: String::new(),
                action: RowAction::Add,
                selected,
            },
        }
    }

    /// Returns `true` for the add row.
    pub fn is_add_row(&self) -> bool {
        matches!(self.action, RowAction::Add)
    }
}
