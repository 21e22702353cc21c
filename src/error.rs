//! Level and tuning load errors

use thiserror::Error;

/// Errors raised while loading level data or tuning files.
///
/// The simulation itself never fails; these only surface at load time.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid level: {0}")]
    InvalidLevel(String),

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),
}
