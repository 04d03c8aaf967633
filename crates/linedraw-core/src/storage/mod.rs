//! Storage abstraction for persisted editor state.
//!
//! Backends store JSON payloads under string keys. The line document goes
//! through [`crate::project`]; cosmetic settings through
//! [`crate::settings`]. Both are independent of each other.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("key not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for key-value persistence backends.
///
/// Implementations can keep payloads in memory or on the filesystem;
/// values are opaque JSON strings.
pub trait Storage: Send + Sync {
    /// Store a payload under a key, replacing any previous value.
    fn save(&self, key: &str, payload: &str) -> StorageResult<()>;

    /// Load the payload stored under a key.
    fn load(&self, key: &str) -> StorageResult<String>;

    /// Delete the payload stored under a key. Missing keys are not an
    /// error.
    fn delete(&self, key: &str) -> StorageResult<()>;

    /// List all stored keys.
    fn list(&self) -> StorageResult<Vec<String>>;

    /// Check whether a key has a stored payload.
    fn exists(&self, key: &str) -> StorageResult<bool>;
}
