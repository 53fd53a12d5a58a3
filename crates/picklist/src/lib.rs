//! Picklist: a dropdown list control with inline remove buttons and an
//! "add" row.
//!
//! The add row is a synthetic entry that behaves as a command. The control
//! guarantees that:
//!
//! - after every change to the list, the add row is last and real items are
//!   in insertion order (or collation order when sorting is enabled);
//! - the add row is never reported as the control's value;
//! - activating a row's button runs the configured add or remove action, and
//!   fails with an error when none is configured.
//!
//! # Example
//!
//! ```
//! use picklist::widget::{AddAction, AddRemoveComboBox, PromptRequest, RemoveAction};
//!
//! let combo = AddRemoveComboBox::builder()
//!     .with_items(["Dummy", "List"])
//!     .with_marker("Add")
//!     .with_add_action(AddAction::prompt(|_: &PromptRequest| Some("Apple".to_string())))
//!     .with_remove_action(RemoveAction::RemoveFromList)
//!     .build()
//!     .unwrap();
//!
//! combo.model().push_marker();
//! assert_eq!(combo.texts(), vec!["Dummy", "List", "Add"]);
//!
//! // The add row's button prompts for text, appends it and selects it.
//! combo.activate_row(2).unwrap();
//! assert_eq!(combo.texts(), vec!["Dummy", "List", "Apple", "Add"]);
//! assert_eq!(combo.current_value().as_deref(), Some("Apple"));
//! ```
//!
//! # Modules
//!
//! - [`model`]: the list model, ordering and selection
//! - [`widget`]: the control and its rendering contract
//! - [`platform`]: locale-aware collation
//! - [`config`]: TOML configuration
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod model;
pub mod platform;
pub mod widget;

pub use config::ComboConfig;
pub use error::{Error, Result};
pub use model::{ADD_MARKER_PLACEHOLDER, ListEntry, Marker, StringListModel};
pub use widget::{AddAction, AddRemoveComboBox, RemoveAction};

pub use picklist_core::{Dispatcher, Property, ReadOnlyProperty, Signal};
