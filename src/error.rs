//! Configuration errors
//!
//! The simulation itself never fails; only parsing host-supplied names and
//! loading tuning/settings documents can.

/// Error raised while turning host configuration into simulation values.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("unknown pet size: {0}")]
    UnknownSize(String),

    #[error("unknown pet kind: {0}")]
    UnknownKind(String),

    #[error("unknown pet color: {0}")]
    UnknownColor(String),

    #[error("invalid tuning value `{field}`: {reason}")]
    InvalidTuning { field: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
