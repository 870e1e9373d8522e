use thiserror::Error;

/// Failures reading or writing the persisted session subset.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The platform storage backend could not be reached (no window, storage disabled).
    #[error("Session storage is unavailable: {0}")]
    Unavailable(String),
    /// Persisted state exists but is not a valid session record.
    #[error("Failed to decode persisted session: {0}")]
    Decode(#[from] serde_json::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
