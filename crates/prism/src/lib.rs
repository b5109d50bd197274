//! The shared library for Prism, a persisted accessibility preference store.
//!
//! This library holds everything that does not need a browser: the preference
//! model, the store that keeps memory, storage and the document root class list
//! in step, the collaborator traits it talks through, error types and logging.
//! The Yew provider lives in `prism-frontend`.

pub mod config;
pub mod document;
pub mod errors;
pub mod log;
pub mod memory;
pub mod prefs;
pub mod storage;
pub mod store;

pub use config::PreferenceConfig;
pub use document::ClassTarget;
pub use prefs::{ColorBlindMode, Preferences};
pub use storage::PreferenceStorage;
pub use store::PreferenceStore;

pub use serde;
pub use serde_json;
pub use tracing;
