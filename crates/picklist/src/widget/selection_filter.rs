//! Keeps the add row from ever becoming the control's value.
//!
//! The filter watches the raw [`SelectionModel`]. Selecting a real item
//! publishes its text as the control's value. Selecting the add row publishes
//! "no value" at once and clears the raw selection on the next dispatcher
//! turn, since a selection must not be changed from inside its own change
//! notification.

use std::sync::Weak;

use picklist_core::logging::targets;
use picklist_core::{Dispatcher, Property, Signal};

use crate::model::{ListEntry, Marker, SelectionChange, SelectionModel};

pub(crate) struct SelectionFilter {
    selection: Weak<SelectionModel>,
    dispatcher: Dispatcher,
    marker: Marker,
    value: Property<Option<String>>,
    value_changed: Signal<Option<String>>,
}

impl SelectionFilter {
    pub(crate) fn new(selection: Weak<SelectionModel>, dispatcher: Dispatcher, marker: Marker) -> Self {
        Self {
            selection,
            dispatcher,
            marker,
            value: Property::new(None),
            value_changed: Signal::new(),
        }
    }

    pub(crate) fn value(&self) -> &Property<Option<String>> {
        &self.value
    }

    pub(crate) fn value_changed(&self) -> &Signal<Option<String>> {
        &self.value_changed
    }

    pub(crate) fn on_selection_changed(&self, change: &SelectionChange) {
        let current = change.current.as_ref().map(|s| self.marker.normalize(s.entry.clone()));
        match current {
            Some(ListEntry::AddMarker) => {
                tracing::debug!(target: targets::SELECTION, "add row selected, clearing on next turn");
                self.publish(None);
                let selection = self.selection.clone();
                let marker = self.marker.clone();
                self.dispatcher.post(move || {
                    let Some(selection) = selection.upgrade() else {
                        return;
                    };
                    // A real item chosen in the meantime wins.
                    if selection
                        .selected_entry()
                        .is_some_and(|e| marker.normalize(e).is_marker())
                    {
                        selection.clear();
                    }
                });
            }
            Some(ListEntry::Item(text)) => self.publish(Some(text)),
            None => self.publish(None),
        }
    }

    fn publish(&self, value: Option<String>) {
        let value = match value {
            Some(text) if self.marker.matches(&text) => {
                tracing::error!(target: targets::SELECTION, "marker text reached the value property");
                debug_assert!(false, "marker text reached the value property");
                None
            }
            other => other,
        };

        if self.value.set(value.clone()) {
            tracing::debug!(target: targets::SELECTION, ?value, "value changed");
            self.value_changed.emit(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn wire() -> (Arc<SelectionModel>, Arc<SelectionFilter>, Dispatcher) {
        let selection = Arc::new(SelectionModel::new());
        let dispatcher = Dispatcher::new();
        let filter = Arc::new(SelectionFilter::new(
            Arc::downgrade(&selection),
            dispatcher.clone(),
            Marker::default(),
        ));
        let slot = Arc::downgrade(&filter);
        selection.selection_changed.connect(move |change| {
            if let Some(filter) = slot.upgrade() {
                filter.on_selection_changed(change);
            }
        });
        (selection, filter, dispatcher)
    }

    #[test]
    fn test_item_selection_is_published() {
        let (selection, filter, dispatcher) = wire();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recv = seen.clone();
        filter.value_changed().connect(move |v| recv.lock().push(v.clone()));

        selection.select(0, ListEntry::item("a"));
        assert_eq!(filter.value().get(), Some("a".to_string()));
        assert_eq!(*seen.lock(), vec![Some("a".to_string())]);
        assert!(!dispatcher.has_pending());
    }

    #[test]
    fn test_marker_selection_is_deferred_clear() {
        let (selection, filter, dispatcher) = wire();
        selection.select(0, ListEntry::item("a"));

        selection.select(1, ListEntry::AddMarker);
        assert_eq!(filter.value().get(), None);
        // Raw selection still on the marker until the next turn.
        assert_eq!(selection.selected_entry(), Some(ListEntry::AddMarker));

        assert_eq!(dispatcher.process_pending(), 1);
        assert!(selection.is_empty());
        assert_eq!(filter.value().get(), None);
    }

    #[test]
    fn test_item_with_sentinel_text_is_treated_as_marker() {
        let (selection, filter, dispatcher) = wire();
        selection.select(0, ListEntry::item("a"));

        selection.select(1, ListEntry::item(Marker::default().text()));
        assert_eq!(filter.value().get(), None);

        dispatcher.process_pending();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_real_selection_before_next_turn_is_kept() {
        let (selection, filter, dispatcher) = wire();
        selection.select(1, ListEntry::AddMarker);
        selection.select(0, ListEntry::item("b"));

        dispatcher.process_pending();
        assert_eq!(selection.selected_entry(), Some(ListEntry::item("b")));
        assert_eq!(filter.value().get(), Some("b".to_string()));
    }
}
