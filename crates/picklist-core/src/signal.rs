//! Signal/slot system for Picklist.
//!
//! A [`Signal<Args>`] notifies every connected slot synchronously, on the
//! emitting thread, in connection order. Models emit signals when their
//! contents change and controls connect slots to keep derived state in sync.
//!
//! # Re-entrant emission
//!
//! Slots are snapshotted before any of them runs, and no lock is held while a
//! slot executes. A slot may therefore mutate the object that owns the signal,
//! which in turn emits the same signal again: the nested emission is delivered
//! in full before the outer one resumes. Code that reacts to its own changes
//! must guard against the resulting feedback loop itself.
//!
//! # Example
//!
//! ```
//! use picklist_core::Signal;
//!
//! let rows_inserted = Signal::<(usize, usize)>::new();
//!
//! let id = rows_inserted.connect(|&(first, last)| {
//!     println!("rows {first}..={last} inserted");
//! });
//!
//! rows_inserted.emit((3, 3));
//! assert!(rows_inserted.disconnect(id));
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// Handle returned by [`Signal::connect`], used to disconnect the slot.
    pub struct ConnectionId;
}

/// Shared slot function.
type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// Notification with any number of slots, each called with `&Args`.
///
/// `Args` is `()` for plain notifications and a tuple or struct when a
/// notification carries several values.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a signal with no slots.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect `slot`. It runs on every later emission until disconnected.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect one slot. Returns `false` if `id` was not connected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Emit the signal, invoking all connected slots in connection order.
    ///
    /// Slots connected or disconnected by another slot during this emission
    /// take effect from the next emission on.
    #[tracing::instrument(skip_all, target = "picklist_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_reaches_every_slot() {
        let rows_removed = Signal::<(usize, usize)>::new();
        let ranges = Arc::new(Mutex::new(Vec::new()));

        let log = ranges.clone();
        rows_removed.connect(move |&range| log.lock().push(range));

        rows_removed.emit((0, 0));
        rows_removed.emit((2, 4));

        assert_eq!(*ranges.lock(), vec![(0, 0), (2, 4)]);
    }

    #[test]
    fn test_disconnected_slot_stops_receiving() {
        let value_changed = Signal::<Option<String>>::new();
        let values = Arc::new(Mutex::new(Vec::new()));

        let log = values.clone();
        let id = value_changed.connect(move |value| log.lock().push(value.clone()));

        value_changed.emit(Some("Dummy".into()));
        assert!(value_changed.disconnect(id));
        value_changed.emit(None);

        assert_eq!(*values.lock(), vec![Some("Dummy".to_string())]);
        assert!(!value_changed.disconnect(id));
        assert_eq!(value_changed.connection_count(), 0);
    }

    #[test]
    fn test_slots_run_in_connection_order() {
        let signal = Signal::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for n in 0..4 {
            let order = order.clone();
            signal.connect(move |_| order.lock().push(n));
        }

        signal.emit(());
        assert_eq!(*order.lock(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_reentrant_emit_does_not_deadlock() {
        let signal = Arc::new(Signal::<u32>::new());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let weak = Arc::downgrade(&signal);
        let log = seen.clone();
        signal.connect(move |&depth| {
            log.lock().push(depth);
            if depth < 3 {
                if let Some(signal) = weak.upgrade() {
                    signal.emit(depth + 1);
                }
            }
        });

        signal.emit(0);
        assert_eq!(*seen.lock(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_connect_during_emit_applies_next_time() {
        let signal = Arc::new(Signal::<()>::new());
        let late_calls = Arc::new(Mutex::new(0));

        let weak = Arc::downgrade(&signal);
        let late = late_calls.clone();
        signal.connect(move |_| {
            if let Some(signal) = weak.upgrade() {
                let late = late.clone();
                signal.connect(move |_| *late.lock() += 1);
            }
        });

        signal.emit(());
        assert_eq!(*late_calls.lock(), 0);
        signal.emit(());
        assert_eq!(*late_calls.lock(), 1);
    }
}
