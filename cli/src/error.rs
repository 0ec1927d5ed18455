use aurora_error::AuroraError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("codec error: {0}")]
    Core(#[from] aurora_core::CoreError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid frame JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AuroraError for CliError {
    fn kind(&self) -> &'static str {
        "cli"
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
