use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history record {name} not found")]
    NotFound { name: String },
    #[error("invalid history record name {name:?}")]
    InvalidName { name: String },
    #[error("failed to read history file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to decode history file {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },
}
