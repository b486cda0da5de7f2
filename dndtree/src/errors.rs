use thiserror::Error;

/// Errors emitted while reading settings.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("settings IO failed")]
    Io(#[from] std::io::Error),
    #[error("settings JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("settings validation failed: {message}")]
    Validation { message: String },
}

/// Errors emitted while reading the item list.
#[derive(Debug, Error)]
pub(crate) enum ItemsError {
    #[error("items IO failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("items JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}
