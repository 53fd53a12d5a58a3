//! Core systems for Picklist.
//!
//! This crate provides the runtime pieces the list controls are built on:
//!
//! - **Signal/Slot System**: Synchronous, re-entrancy-safe notifications
//! - **Property System**: Values with change detection
//! - **Dispatcher**: Deferred "next turn" task processing
//! - **Logging**: Tracing targets and span helpers
//!
//! # Example
//!
//! ```
//! use picklist_core::{Dispatcher, Property, Signal};
//! use std::sync::Arc;
//!
//! let value = Arc::new(Property::new(0));
//! let changed = Signal::<i32>::new();
//! let dispatcher = Dispatcher::new();
//!
//! // Writing back from inside the notification is deferred to the next turn.
//! let target = value.clone();
//! let queue = dispatcher.clone();
//! changed.connect(move |&n| {
//!     let target = target.clone();
//!     queue.post(move || {
//!         target.set(n * 2);
//!     });
//! });
//!
//! if value.set(5) {
//!     changed.emit(5);
//! }
//! assert_eq!(value.get(), 5);
//! assert_eq!(dispatcher.process_pending(), 1);
//! assert_eq!(value.get(), 10);
//! ```

mod dispatch;
mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use dispatch::{Dispatcher, TaskId};
pub use error::CoreError;
pub use logging::PerfSpan;
pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionId, Signal};
