use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReleaseError>;

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("failed to read release dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("release dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration value for {key}: {value}")]
    Config { key: &'static str, value: String },
}
