use crate::errors::StorageError;

/// Key-value string storage that preferences are persisted to.
///
/// Values are raw strings; encoding is the store's concern.
pub trait PreferenceStorage {
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
