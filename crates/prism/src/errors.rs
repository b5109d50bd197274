//! Shared error types for the prism project.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("Persistent storage is unavailable")]
    Unavailable,
    #[error("Failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("Failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Failed to update class `{class}` on the document root: {reason}")]
pub struct ClassListError {
    pub class: String,
    pub reason: String,
}

/// Raised by a synchronization pass. The in-memory value has already been
/// updated when one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    ClassList(#[from] ClassListError),
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ScopeError {
    #[error("Preferences were requested outside of {0}")]
    MissingProvider(&'static str),
}
