//! The add/remove list control and its rendering contract.
//!
//! - [`AddRemoveComboBox`]: the control, built with [`AddRemoveComboBoxBuilder`]
//! - [`AddAction`] / [`RemoveAction`]: what each row's button does
//! - [`RowState`] / [`RowAction`]: per-row state for the rendering layer
//! - [`TextPrompt`] / [`PromptRequest`]: the text prompt used by the built-in
//!   add flow

mod add_remove_combo_box;
mod prompt;
mod row;
mod selection_filter;

pub use add_remove_combo_box::{
    AddAction, AddCallback, AddRemoveComboBox, AddRemoveComboBoxBuilder, RemoveAction,
    RemoveCallback,
};
pub use prompt::{PromptRequest, TextPrompt};
pub use row::{RowAction, RowState};
