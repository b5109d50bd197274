//! In-memory collaborators for hosts without a browser, and for tests.

use std::collections::{BTreeSet, HashMap};

use crate::document::ClassTarget;
use crate::errors::{ClassListError, StorageError};
use crate::storage::PreferenceStorage;

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Makes every subsequent write fail, the way a full quota would.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClassList {
    classes: BTreeSet<String>,
}

impl MemoryClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, name: &str) -> Self {
        self.classes.insert(name.to_string());
        self
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl ClassTarget for MemoryClassList {
    fn add_class(&mut self, name: &str) -> Result<(), ClassListError> {
        // Same rule as DOMTokenList: tokens may not be empty or contain whitespace
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(ClassListError {
                class: name.to_string(),
                reason: "invalid token".to_string(),
            });
        }
        self.classes.insert(name.to_string());
        Ok(())
    }

    fn remove_class(&mut self, name: &str) -> Result<(), ClassListError> {
        self.classes.remove(name);
        Ok(())
    }

    fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }
}
