//! Error types for Picklist controls.

use std::path::PathBuf;

/// Result type alias for control operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by list controls.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The control was built without a backing list.
    #[error("no backing list was supplied to the control")]
    MissingModel,

    /// Both a backing list and initial items were supplied.
    #[error("both a backing list and initial items were supplied to the control")]
    ModelAndItems,

    /// The configured marker differs from the backing list's marker.
    #[error("configured marker '{configured}' differs from the backing list's marker '{model}'")]
    MarkerMismatch { configured: String, model: String },

    /// The add row was activated but no add action is configured.
    #[error("the add row was activated but no add action is configured")]
    AddActionUnconfigured,

    /// A remove button was activated but no remove action is configured.
    #[error("remove was requested for '{item}' but no remove action is configured")]
    RemoveActionUnconfigured { item: String },

    /// A row index past the end of the list.
    #[error("row {index} is out of range for a list of {len} rows")]
    RowOutOfRange { index: usize, len: usize },

    /// Configuration text could not be parsed.
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be serialized.
    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Configuration file could not be read.
    #[error("failed to read configuration '{path}': {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a remove-action error.
    pub fn remove_unconfigured(item: impl Into<String>) -> Self {
        Self::RemoveActionUnconfigured { item: item.into() }
    }

    /// Create a configuration I/O error.
    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for misconfiguration of the control itself.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingModel
                | Self::ModelAndItems
                | Self::MarkerMismatch { .. }
                | Self::AddActionUnconfigured
                | Self::RemoveActionUnconfigured { .. }
        )
    }
}
