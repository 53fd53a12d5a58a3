//! List entries and the add-row marker.
//!
//! The host hands the control a flat list of strings in which one designated
//! string stands for the "add new item" row. Internally every entry is tagged
//! as either a real item or the marker; the sentinel text is only consulted
//! when converting to or from the flat form.

use std::fmt;

/// Sentinel text that marks the add row when no other marker is configured.
///
/// Chosen so that it is very unlikely to collide with a real item.
pub const ADD_MARKER_PLACEHOLDER: &str = "ADD_AN_ADD_CELL_RIGHT_HERE_RIGHT_NOW";

/// One element of the ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListEntry {
    /// A selectable text item.
    Item(String),
    /// The synthetic "add new item" command row.
    AddMarker,
}

impl ListEntry {
    /// Create a real item entry.
    pub fn item(text: impl Into<String>) -> Self {
        Self::Item(text.into())
    }

    /// Returns `true` for the add-row marker.
    pub fn is_marker(&self) -> bool {
        matches!(self, Self::AddMarker)
    }

    /// The item text, or `None` for the marker.
    pub fn as_item(&self) -> Option<&str> {
        match self {
            Self::Item(text) => Some(text),
            Self::AddMarker => None,
        }
    }

    /// Consume the entry, returning the item text, or `None` for the marker.
    pub fn into_item(self) -> Option<String> {
        match self {
            Self::Item(text) => Some(text),
            Self::AddMarker => None,
        }
    }
}

/// The configured sentinel text identifying the add row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker {
    text: String,
}

impl Marker {
    /// Create a marker with custom sentinel text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The sentinel text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if `text` is the sentinel.
    pub fn matches(&self, text: &str) -> bool {
        self.text == text
    }

    /// Tag a flat string.
    pub fn classify(&self, text: impl Into<String>) -> ListEntry {
        let text = text.into();
        if self.matches(&text) {
            ListEntry::AddMarker
        } else {
            ListEntry::Item(text)
        }
    }

    /// Re-tag an item whose text is the sentinel as the marker.
    pub fn normalize(&self, entry: ListEntry) -> ListEntry {
        match entry {
            ListEntry::Item(text) if self.matches(&text) => ListEntry::AddMarker,
            other => other,
        }
    }

    /// Render an entry back to its flat string.
    pub fn flatten(&self, entry: &ListEntry) -> String {
        match entry {
            ListEntry::Item(text) => text.clone(),
            ListEntry::AddMarker => self.text.clone(),
        }
    }

    /// Tag a whole flat list.
    pub fn classify_all<I, S>(&self, texts: I) -> Vec<ListEntry>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts.into_iter().map(|t| self.classify(t)).collect()
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::new(ADD_MARKER_PLACEHOLDER)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_uses_sentinel() {
        let marker = Marker::default();
        assert_eq!(marker.classify(ADD_MARKER_PLACEHOLDER), ListEntry::AddMarker);
        assert_eq!(marker.classify("Dummy"), ListEntry::item("Dummy"));
    }

    #[test]
    fn test_custom_marker() {
        let marker = Marker::new("Add");
        assert!(marker.classify("Add").is_marker());
        assert!(!marker.classify(ADD_MARKER_PLACEHOLDER).is_marker());
        assert_eq!(marker.flatten(&ListEntry::AddMarker), "Add");
    }

    #[test]
    fn test_flat_round_trip() {
        let marker = Marker::new("+");
        let flat = vec!["b", "+", "a"];
        let entries = marker.classify_all(flat.clone());
        let back: Vec<String> = entries.iter().map(|e| marker.flatten(e)).collect();
        assert_eq!(back, flat);
    }

    #[test]
    fn test_entry_accessors() {
        assert_eq!(ListEntry::item("x").as_item(), Some("x"));
        assert_eq!(ListEntry::AddMarker.as_item(), None);
        assert_eq!(ListEntry::item("y").into_item(), Some("y".to_string()));
    }
}
