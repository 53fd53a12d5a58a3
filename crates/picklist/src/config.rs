//! Control configuration.
//!
//! ```
//! use picklist::config::ComboConfig;
//!
//! let config = ComboConfig::from_toml_str(r#"
//!     sort_alphabetically = true
//!     marker = "Add"
//! "#).unwrap();
//! assert!(config.sort_alphabetically);
//! assert_eq!(config.marker, "Add");
//! assert!(config.select_first);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{ADD_MARKER_PLACEHOLDER, Marker};

/// Settings for an [`AddRemoveComboBox`](crate::widget::AddRemoveComboBox).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboConfig {
    /// Collate real items instead of keeping insertion order.
    pub sort_alphabetically: bool,
    /// Text that marks the add row in the flat item list.
    pub marker: String,
    /// BCP 47 locale for collation; the system locale when absent.
    pub locale: Option<String>,
    /// Select the first entry when the control is built.
    pub select_first: bool,
}

impl Default for ComboConfig {
    fn default() -> Self {
        Self {
            sort_alphabetically: false,
            marker: ADD_MARKER_PLACEHOLDER.to_string(),
            locale: None,
            select_first: true,
        }
    }
}

impl ComboConfig {
    /// Parse configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::config_io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// The marker described by this configuration.
    pub fn marker(&self) -> Marker {
        Marker::new(self.marker.clone())
    }
}
