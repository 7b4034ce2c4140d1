use thiserror::Error;

/// Errors emitted while constructing the navigation panel.
#[derive(Debug, Error)]
pub(crate) enum PanelError {
    #[error("invalid panel configuration: {message}")]
    Config { message: String },
}

/// Errors emitted by the panel state store.
#[derive(Debug, Error)]
pub(crate) enum PanelStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
