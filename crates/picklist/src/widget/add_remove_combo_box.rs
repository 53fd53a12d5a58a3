//! Dropdown list with inline remove buttons and an "add" row.
//!
//! [`AddRemoveComboBox`] wraps a [`StringListModel`] in which one entry, the
//! add row, acts as a command instead of a value. The control keeps the add
//! row pinned last, never reports it as the current value, and routes each
//! row's button to the add or remove action.
//!
//! # Example
//!
//! ```
//! use picklist::widget::{AddRemoveComboBox, RemoveAction};
//! use picklist::ADD_MARKER_PLACEHOLDER;
//!
//! let combo = AddRemoveComboBox::builder()
//!     .with_items(["Dummy", ADD_MARKER_PLACEHOLDER, "List"])
//!     .with_remove_action(RemoveAction::RemoveFromList)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(combo.texts(), vec!["Dummy", "List", ADD_MARKER_PLACEHOLDER]);
//! assert_eq!(combo.current_value().as_deref(), Some("Dummy"));
//!
//! combo.activate_row(0).unwrap();
//! assert_eq!(combo.texts(), vec!["List", ADD_MARKER_PLACEHOLDER]);
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use picklist_core::logging::targets;
use picklist_core::{ConnectionId, Dispatcher, ReadOnlyProperty, Signal};

use crate::config::ComboConfig;
use crate::error::{Error, Result};
use crate::model::{
    ADD_MARKER_PLACEHOLDER, EntryOrdering, ListEntry, Marker, OrderingManager, SelectionModel,
    StringListModel,
};
use crate::platform::Collation;

use super::prompt::{PromptRequest, TextPrompt};
use super::row::{RowAction, RowState};
use super::selection_filter::SelectionFilter;

// ============================================================================
// Actions
// ============================================================================

/// Callback run when the add row is activated.
pub type AddCallback = Arc<dyn Fn() + Send + Sync>;

/// Callback run with the item text when a remove button is activated.
pub type RemoveCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// What activating the add row does.
#[derive(Clone, Default)]
pub enum AddAction {
    /// Nothing configured; activation is an error.
    #[default]
    Unconfigured,
    /// Run a user callback.
    Callback(AddCallback),
    /// Ask for text, append it and select it.
    Prompt(Arc<dyn TextPrompt>),
}

impl AddAction {
    /// Wrap a closure as an add action.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(f))
    }

    /// Use `prompt` for the built-in add flow.
    pub fn prompt<P>(prompt: P) -> Self
    where
        P: TextPrompt + 'static,
    {
        Self::Prompt(Arc::new(prompt))
    }
}

impl fmt::Debug for AddAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unconfigured => "Unconfigured",
            Self::Callback(_) => "Callback",
            Self::Prompt(_) => "Prompt",
        })
    }
}

/// What activating a remove button does.
#[derive(Clone, Default)]
pub enum RemoveAction {
    /// Nothing configured; activation is an error.
    #[default]
    Unconfigured,
    /// Run a user callback with the item text.
    Callback(RemoveCallback),
    /// Remove the first entry with the item text.
    RemoveFromList,
}

impl RemoveAction {
    /// Wrap a closure as a remove action.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(f))
    }
}

impl fmt::Debug for RemoveAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unconfigured => "Unconfigured",
            Self::Callback(_) => "Callback",
            Self::RemoveFromList => "RemoveFromList",
        })
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`AddRemoveComboBox`].
#[derive(Debug, Default)]
pub struct AddRemoveComboBoxBuilder {
    model: Option<Arc<StringListModel>>,
    items: Option<Vec<String>>,
    config: ComboConfig,
    marker_set: bool,
    dispatcher: Option<Dispatcher>,
    add_action: AddAction,
    remove_action: RemoveAction,
}

impl AddRemoveComboBoxBuilder {
    /// Use an existing model.
    ///
    /// Cannot be combined with [`with_items`](Self::with_items), and a marker
    /// set with [`with_marker`](Self::with_marker) must match the model's.
    pub fn with_model(mut self, model: Arc<StringListModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Build a new model from flat texts; entries equal to the marker become
    /// the add row.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = Some(items.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: ComboConfig) -> Self {
        self.marker_set = config.marker != ADD_MARKER_PLACEHOLDER;
        self.config = config;
        self
    }

    /// Collate real items.
    pub fn with_sort_alphabetically(mut self, sort: bool) -> Self {
        self.config.sort_alphabetically = sort;
        self
    }

    /// Text that identifies the add row.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.marker = marker.into();
        self.marker_set = true;
        self
    }

    /// Locale used for collation.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.config.locale = Some(locale.into());
        self
    }

    /// Whether to select the first entry once built.
    pub fn with_select_first(mut self, select_first: bool) -> Self {
        self.config.select_first = select_first;
        self
    }

    /// Share a dispatcher with the host event loop.
    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Set the add action.
    pub fn with_add_action(mut self, action: AddAction) -> Self {
        self.add_action = action;
        self
    }

    /// Set the remove action.
    pub fn with_remove_action(mut self, action: RemoveAction) -> Self {
        self.remove_action = action;
        self
    }

    /// Run `f` when the add row is activated.
    pub fn with_add_callback<F>(self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.with_add_action(AddAction::callback(f))
    }

    /// Run `f` with the item text when a remove button is activated.
    pub fn with_remove_callback<F>(self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.with_remove_action(RemoveAction::callback(f))
    }

    /// Build the control.
    ///
    /// Fails with [`Error::MissingModel`] if neither a model nor items were
    /// supplied, [`Error::ModelAndItems`] if both were, and
    /// [`Error::MarkerMismatch`] if an explicit marker disagrees with the
    /// supplied model.
    pub fn build(self) -> Result<AddRemoveComboBox> {
        let model = match (self.model, self.items) {
            (Some(_), Some(_)) => return Err(Error::ModelAndItems),
            (Some(model), None) => {
                if self.marker_set && !model.marker().matches(&self.config.marker) {
                    return Err(Error::MarkerMismatch {
                        configured: self.config.marker,
                        model: model.marker().text().to_string(),
                    });
                }
                model
            }
            (None, Some(items)) => Arc::new(StringListModel::with_marker(items, self.config.marker())),
            (None, None) => return Err(Error::MissingModel),
        };
        Ok(AddRemoveComboBox::wire(
            model,
            &self.config,
            self.dispatcher.unwrap_or_default(),
            self.add_action,
            self.remove_action,
        ))
    }
}

// ============================================================================
// AddRemoveComboBox
// ============================================================================

/// Single-select list control with an add row and per-row remove buttons.
///
/// # Signals
///
/// - `value_changed(Option<String>)`: the observable value changed. Never
///   carries the add row's text.
pub struct AddRemoveComboBox {
    model: Arc<StringListModel>,
    ordering: OrderingManager,
    selection: Arc<SelectionModel>,
    filter: Arc<SelectionFilter>,
    dispatcher: Dispatcher,
    add_action: RwLock<AddAction>,
    remove_action: RwLock<RemoveAction>,
    resync_connection: ConnectionId,
    filter_connection: ConnectionId,
}

impl AddRemoveComboBox {
    /// Start building a control.
    pub fn builder() -> AddRemoveComboBoxBuilder {
        AddRemoveComboBoxBuilder::default()
    }

    /// Build a control over `items` with `config` and no actions configured.
    pub fn new<I, S>(items: I, config: ComboConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let model = Arc::new(StringListModel::with_marker(items, config.marker()));
        Self::wire(
            model,
            &config,
            Dispatcher::new(),
            AddAction::default(),
            RemoveAction::default(),
        )
    }

    /// Build a control over a shared model.
    ///
    /// Fails with [`Error::MissingModel`] if `model` is `None`.
    pub fn from_model(model: Option<Arc<StringListModel>>, config: ComboConfig) -> Result<Self> {
        let model = model.ok_or(Error::MissingModel)?;
        Ok(Self::wire(
            model,
            &config,
            Dispatcher::new(),
            AddAction::default(),
            RemoveAction::default(),
        ))
    }

    fn wire(
        model: Arc<StringListModel>,
        config: &ComboConfig,
        dispatcher: Dispatcher,
        add_action: AddAction,
        remove_action: RemoveAction,
    ) -> Self {
        let collation = match &config.locale {
            Some(locale) => Collation::with_locale(locale),
            None => Collation::new(),
        };
        // Ordering first so every later slot sees a settled list.
        let ordering =
            OrderingManager::attach(&model, EntryOrdering::new(config.sort_alphabetically, collation));

        let selection = Arc::new(SelectionModel::new());
        let resync_connection = {
            let model_ref = Arc::downgrade(&model);
            let selection_ref = Arc::downgrade(&selection);
            model.signals().invalidated.connect(move |_| {
                if let (Some(model), Some(selection)) = (model_ref.upgrade(), selection_ref.upgrade()) {
                    resync_selection(&model, &selection);
                }
            })
        };

        let filter = Arc::new(SelectionFilter::new(
            Arc::downgrade(&selection),
            dispatcher.clone(),
            model.marker().clone(),
        ));
        let filter_connection = {
            let filter_ref: Weak<SelectionFilter> = Arc::downgrade(&filter);
            selection.selection_changed.connect(move |change| {
                if let Some(filter) = filter_ref.upgrade() {
                    filter.on_selection_changed(change);
                }
            })
        };

        let combo = Self {
            model,
            ordering,
            selection,
            filter,
            dispatcher,
            add_action: RwLock::new(add_action),
            remove_action: RwLock::new(remove_action),
            resync_connection,
            filter_connection,
        };

        tracing::debug!(
            target: targets::COMBO,
            len = combo.model.len(),
            sort_alphabetically = config.sort_alphabetically,
            "combo box created"
        );

        if config.select_first {
            combo.select_first();
        }
        combo
    }

    // =========================================================================
    // Model access
    // =========================================================================

    /// The backing list.
    pub fn model(&self) -> &Arc<StringListModel> {
        &self.model
    }

    /// The add-row marker.
    pub fn marker(&self) -> &Marker {
        self.model.marker()
    }

    /// Dispatcher that runs the control's deferred work.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Number of rows, including the add row.
    pub fn count(&self) -> usize {
        self.model.len()
    }

    /// The list in flat text form, the add row as its marker text.
    pub fn texts(&self) -> Vec<String> {
        self.model.texts()
    }

    /// Row states for the rendering layer.
    pub fn rows(&self) -> Vec<RowState> {
        let selected = self.selection.selected_index();
        self.model
            .snapshot()
            .iter()
            .enumerate()
            .map(|(index, entry)| RowState::from_entry(index, entry, selected == Some(index)))
            .collect()
    }

    /// Row state at `index`.
    pub fn row(&self, index: usize) -> Option<RowState> {
        let entry = self.model.entry(index)?;
        let selected = self.selection.selected_index() == Some(index);
        Some(RowState::from_entry(index, &entry, selected))
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The current value. Never the add row's text.
    pub fn current_value(&self) -> Option<String> {
        self.filter.value().get()
    }

    /// Read-only view of the value property.
    pub fn value(&self) -> ReadOnlyProperty<'_, Option<String>> {
        ReadOnlyProperty::new(self.filter.value())
    }

    /// Signal emitted when the value changes.
    pub fn value_changed(&self) -> &Signal<Option<String>> {
        self.filter.value_changed()
    }

    /// Row of the raw selection. Briefly the add row until the next turn.
    pub fn current_index(&self) -> Option<usize> {
        self.selection.selected_index()
    }

    /// The raw selection model.
    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    /// Select the row at `index`.
    pub fn select_index(&self, index: usize) -> Result<()> {
        let entry = self.entry_at(index)?;
        self.selection.select(index, entry);
        Ok(())
    }

    /// Select the first real item with `text`. Returns `false` if none.
    pub fn select_text(&self, text: &str) -> bool {
        if self.marker().matches(text) {
            return false;
        }
        let entry = ListEntry::item(text);
        match self.model.position(&entry) {
            Some(index) => {
                self.selection.select(index, entry);
                true
            }
            None => false,
        }
    }

    /// Select the first row, if any.
    pub fn select_first(&self) {
        if let Some(entry) = self.model.entry(0) {
            self.selection.select(0, entry);
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&self) {
        self.selection.clear();
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Handle a click on the row body.
    ///
    /// The row is selected. On the add row this also runs the add action.
    pub fn click_row(&self, index: usize) -> Result<()> {
        let entry = self.entry_at(index)?;
        let is_add_row = entry.is_marker();
        self.selection.select(index, entry);
        if is_add_row {
            self.run_add()?;
        }
        Ok(())
    }

    /// Handle a click on the row's button.
    pub fn activate_row(&self, index: usize) -> Result<()> {
        let entry = self.entry_at(index)?;
        match RowState::from_entry(index, &entry, false).action {
            RowAction::Add => self.run_add(),
            RowAction::Remove(item) => self.run_remove(&item),
        }
    }

    /// Replace the add action.
    pub fn set_add_action(&self, action: AddAction) {
        *self.add_action.write() = action;
    }

    /// Replace the remove action.
    pub fn set_remove_action(&self, action: RemoveAction) {
        *self.remove_action.write() = action;
    }

    fn run_add(&self) -> Result<()> {
        // Cloned so the action may replace itself.
        let action = self.add_action.read().clone();
        match action {
            AddAction::Unconfigured => {
                tracing::error!(target: targets::COMBO, "add row activated without an add action");
                Err(Error::AddActionUnconfigured)
            }
            AddAction::Callback(callback) => {
                callback();
                Ok(())
            }
            AddAction::Prompt(prompt) => {
                let Some(text) = prompt.prompt(&PromptRequest::new_item()) else {
                    tracing::debug!(target: targets::COMBO, "add prompt cancelled");
                    return Ok(());
                };
                if text.trim().is_empty() {
                    tracing::debug!(target: targets::COMBO, "ignoring blank item");
                    return Ok(());
                }
                if self.marker().matches(&text) {
                    tracing::debug!(target: targets::COMBO, "ignoring item equal to the add row marker");
                    return Ok(());
                }
                tracing::debug!(target: targets::COMBO, item = %text, "adding item");
                self.model.push(text.clone());
                self.select_text(&text);
                Ok(())
            }
        }
    }

    fn run_remove(&self, item: &str) -> Result<()> {
        let action = self.remove_action.read().clone();
        match action {
            RemoveAction::Unconfigured => {
                tracing::error!(target: targets::COMBO, item, "remove activated without a remove action");
                Err(Error::remove_unconfigured(item))
            }
            RemoveAction::Callback(callback) => {
                callback(item);
                Ok(())
            }
            RemoveAction::RemoveFromList => {
                tracing::debug!(target: targets::COMBO, item, "removing item");
                self.model.remove_item(item);
                Ok(())
            }
        }
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    /// Whether real items are collated.
    pub fn sort_alphabetically(&self) -> bool {
        self.ordering.ordering().sort_alphabetically()
    }

    /// Toggle collation, re-sorting at once if the setting changed.
    pub fn set_sort_alphabetically(&self, sort: bool) {
        self.ordering.set_sort_alphabetically(sort);
    }

    /// Number of sorts performed so far.
    pub fn sort_count(&self) -> usize {
        self.ordering.sort_count()
    }

    /// Returns `true` if the add row is last and real items are in order.
    pub fn is_settled(&self) -> bool {
        self.ordering.is_settled()
    }

    fn entry_at(&self, index: usize) -> Result<ListEntry> {
        self.model.entry(index).ok_or(Error::RowOutOfRange {
            index,
            len: self.model.len(),
        })
    }
}

/// Point the selection back at its entry after the list changed.
fn resync_selection(model: &StringListModel, selection: &SelectionModel) {
    let Some(current) = selection.selected() else {
        return;
    };
    if model.entry(current.index).as_ref() == Some(&current.entry) {
        return;
    }
    match model.position(&current.entry) {
        Some(index) => {
            tracing::trace!(target: targets::SELECTION, from = current.index, to = index, "selection moved");
            selection.relocate(index);
        }
        None => {
            tracing::debug!(target: targets::SELECTION, "selected entry removed");
            selection.clear();
        }
    }
}

impl Drop for AddRemoveComboBox {
    fn drop(&mut self) {
        self.model.signals().invalidated.disconnect(self.resync_connection);
        self.selection.selection_changed.disconnect(self.filter_connection);
    }
}

impl fmt::Debug for AddRemoveComboBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddRemoveComboBox")
            .field("model", &self.model)
            .field("ordering", &self.ordering)
            .field("selection", &self.selection.selected())
            .field("value", &self.current_value())
            .field("add_action", &*self.add_action.read())
            .field("remove_action", &*self.remove_action.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    const ADD: &str = "+";

    fn combo(items: &[&str]) -> AddRemoveComboBox {
        AddRemoveComboBox::builder()
            .with_items(items.iter().copied())
            .with_marker(ADD)
            .build()
            .unwrap()
    }

    #[test]
    fn test_missing_model_is_rejected() {
        let err = AddRemoveComboBox::builder().build().unwrap_err();
        assert!(matches!(err, Error::MissingModel));
        assert!(AddRemoveComboBox::from_model(None, ComboConfig::default()).is_err());
    }

    #[test]
    fn test_marker_pinned_and_first_selected() {
        let combo = combo(&[ADD, "b", "a"]);
        assert_eq!(combo.texts(), vec!["b", "a", ADD]);
        assert_eq!(combo.current_value().as_deref(), Some("b"));
        assert_eq!(combo.current_index(), Some(0));
    }

    #[test]
    fn test_select_first_on_marker_only_list() {
        let combo = combo(&[ADD]);
        assert_eq!(combo.current_value(), None);
        combo.dispatcher().process_pending();
        assert!(combo.selection().is_empty());
    }

    #[test]
    fn test_unconfigured_actions_fail() {
        let combo = combo(&["a", ADD]);
        assert!(matches!(combo.activate_row(1), Err(Error::AddActionUnconfigured)));
        match combo.activate_row(0) {
            Err(Error::RemoveActionUnconfigured { item }) => assert_eq!(item, "a"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(combo.texts(), vec!["a", ADD]);
    }

    #[test]
    fn test_row_out_of_range() {
        let combo = combo(&["a", ADD]);
        assert!(matches!(
            combo.select_index(5),
            Err(Error::RowOutOfRange { index: 5, len: 2 })
        ));
    }

    #[test]
    fn test_callbacks_receive_row_item() {
        let removed = Arc::new(Mutex::new(Vec::new()));
        let adds = Arc::new(Mutex::new(0));
        let r = removed.clone();
        let a = adds.clone();
        let combo = AddRemoveComboBox::builder()
            .with_items(["a", "b", ADD])
            .with_marker(ADD)
            .with_add_callback(move || *a.lock() += 1)
            .with_remove_callback(move |item| r.lock().push(item.to_string()))
            .build()
            .unwrap();

        combo.activate_row(1).unwrap();
        combo.activate_row(2).unwrap();
        assert_eq!(*removed.lock(), vec!["b"]);
        assert_eq!(*adds.lock(), 1);
    }

    #[test]
    fn test_click_add_row_runs_add_and_clears() {
        let combo = AddRemoveComboBox::builder()
            .with_items(["a", ADD])
            .with_marker(ADD)
            .with_add_action(AddAction::prompt(|_: &PromptRequest| -> Option<String> { None }))
            .build()
            .unwrap();

        combo.click_row(1).unwrap();
        assert_eq!(combo.current_value(), None);
        combo.dispatcher().process_pending();
        assert!(combo.selection().is_empty());
    }

    #[test]
    fn test_prompt_adds_and_selects() {
        let combo = AddRemoveComboBox::builder()
            .with_items(["a", ADD])
            .with_marker(ADD)
            .with_add_action(AddAction::prompt(|request: &PromptRequest| {
                assert_eq!(request.title, "New Item");
                Some("z".to_string())
            }))
            .build()
            .unwrap();

        combo.activate_row(1).unwrap();
        assert_eq!(combo.texts(), vec!["a", "z", ADD]);
        assert_eq!(combo.current_value().as_deref(), Some("z"));
        assert_eq!(combo.current_index(), Some(1));
    }

    #[test]
    fn test_blank_prompt_is_ignored() {
        let combo = AddRemoveComboBox::builder()
            .with_items(["a", ADD])
            .with_marker(ADD)
            .with_add_action(AddAction::prompt(|_: &PromptRequest| Some("   ".to_string())))
            .build()
            .unwrap();

        combo.activate_row(1).unwrap();
        assert_eq!(combo.texts(), vec!["a", ADD]);
    }

    #[test]
    fn test_prompt_answer_equal_to_marker_is_ignored() {
        let combo = AddRemoveComboBox::builder()
            .with_items(["a", ADD])
            .with_marker(ADD)
            .with_add_action(AddAction::prompt(|_: &PromptRequest| Some(ADD.to_string())))
            .build()
            .unwrap();

        combo.activate_row(1).unwrap();
        assert_eq!(combo.texts(), vec!["a", ADD]);
        assert_eq!(combo.current_value().as_deref(), Some("a"));
    }

    #[test]
    fn test_model_conflicts_are_rejected() {
        let model = Arc::new(StringListModel::with_marker(["a", ADD], Marker::new(ADD)));

        let err = AddRemoveComboBox::builder()
            .with_model(model.clone())
            .with_items(["b"])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::ModelAndItems));

        let err = AddRemoveComboBox::builder()
            .with_model(model.clone())
            .with_marker("Add")
            .build()
            .unwrap_err();
        match err {
            Error::MarkerMismatch { configured, model } => {
                assert_eq!(configured, "Add");
                assert_eq!(model, ADD);
            }
            other => panic!("unexpected {other:?}"),
        }

        let combo = AddRemoveComboBox::builder()
            .with_model(model)
            .with_marker(ADD)
            .build()
            .unwrap();
        assert_eq!(combo.texts(), vec!["a", ADD]);
    }

    #[test]
    fn test_tagged_sentinel_items_behave_as_add_row() {
        let model = Arc::new(StringListModel::from_entries(
            vec![ListEntry::item("b"), ListEntry::item(ADD)],
            Marker::new(ADD),
        ));
        let combo = AddRemoveComboBox::builder().with_model(model.clone()).build().unwrap();

        model.push_entry(ListEntry::item("z"));
        assert_eq!(combo.texts(), vec!["b", "z", ADD]);
        let rows = combo.rows();
        assert!(rows[2].is_add_row());
        assert_eq!(rows[2].display_text, "");

        assert!(!combo.select_text(ADD));
        assert_eq!(combo.current_value().as_deref(), Some("b"));
    }

    #[test]
    fn test_selection_follows_reorder_and_removal() {
        let combo = AddRemoveComboBox::builder()
            .with_items(["b", "a", ADD])
            .with_marker(ADD)
            .with_remove_action(RemoveAction::RemoveFromList)
            .build()
            .unwrap();
        assert!(combo.select_text("a"));
        assert_eq!(combo.current_index(), Some(1));

        combo.set_sort_alphabetically(true);
        assert_eq!(combo.texts(), vec!["a", "b", ADD]);
        assert_eq!(combo.current_index(), Some(0));
        assert_eq!(combo.current_value().as_deref(), Some("a"));

        combo.activate_row(0).unwrap();
        assert_eq!(combo.texts(), vec!["b", ADD]);
        assert_eq!(combo.current_value(), None);
        assert!(combo.selection().is_empty());
    }

    #[test]
    fn test_rows_describe_actions() {
        let combo = combo(&["a", ADD]);
        let rows = combo.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].action, RowAction::Remove("a".into()));
        assert!(rows[0].selected);
        assert!(rows[1].is_add_row());
        assert_eq!(rows[1].display_text, "");
    }

    #[test]
    fn test_drop_disconnects_from_model() {
        let model = Arc::new(StringListModel::with_marker(["a", ADD], Marker::new(ADD)));
        {
            let _combo =
                AddRemoveComboBox::from_model(Some(model.clone()), ComboConfig::default()).unwrap();
            assert_eq!(model.signals().invalidated.connection_count(), 2);
        }
        assert_eq!(model.signals().invalidated.connection_count(), 0);
    }
}
