use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Snapshot IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot parse error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot write failed: {path} - {message}")]
    SnapshotWrite { path: String, message: String },
}

impl StorageError {
    pub fn snapshot_write(path: impl AsRef<str>, message: impl AsRef<str>) -> Self {
        StorageError::SnapshotWrite {
            path: path.as_ref().to_string(),
            message: message.as_ref().to_string(),
        }
    }
}

// Result type alias for convenience
pub type StorageResult<T> = Result<T, StorageError>;
