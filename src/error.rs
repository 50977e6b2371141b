use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TreesketchError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Clipboard read failed: {0}")]
    Clipboard(String),
    #[error("Clipboard not supported on {0}")]
    ClipboardUnsupported(String),
    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),
    #[error("Input looks binary: {0}")]
    BinaryInput(PathBuf),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Invalid pattern: {0}")]
    Pattern(String),
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
impl TreesketchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreesketchError::Io {
            path: path.into(),
            source,
        }
    }
}
