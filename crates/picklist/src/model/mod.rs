//! Model layer for add/remove list controls.
//!
//! - `ListEntry` / `Marker`: tagged entries and the add-row sentinel
//! - `StringListModel`: the observable ordered sequence
//! - `ModelSignals` / `ListChange`: change notifications
//! - `EntryOrdering` / `OrderingManager`: keeps the marker pinned last
//! - `SortGuard`: ignores the notification caused by our own sort
//! - `SelectionModel`: single selection with change notification
//!
//! # Architecture Overview
//!
//! ```text
//! mutation ──> StringListModel ──invalidated──> OrderingManager ──sort_by──┐
//!                    ^                                                     │
//!                    └─────────────── (echo ignored by SortGuard) <────────┘
//! ```

mod entry;
mod list_model;
mod ordering;
pub mod selection;
mod signals;
mod sort_guard;

pub use entry::{ADD_MARKER_PLACEHOLDER, ListEntry, Marker};
pub use list_model::StringListModel;
pub use ordering::{EntryOrdering, OrderingManager};
pub use selection::{Selected, SelectionChange, SelectionModel};
pub use signals::{ListChange, ModelSignals};
pub use sort_guard::{GuardState, SortGuard};
