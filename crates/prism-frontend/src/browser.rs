//! Browser-backed collaborators for the preference store.
//!
//! Outside a browser (server-side rendering, native tests) there is no
//! window: storage reports itself unavailable and class updates are dropped.

use prism::errors::{ClassListError, StorageError};
use prism::{ClassTarget, PreferenceStorage};
use web_sys::{Element, Window};

fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// `window.localStorage`, holding raw strings.
///
/// Looked up on every access; a blocked or disabled storage yields
/// [`StorageError::Unavailable`] instead of throwing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn raw() -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::raw()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::raw()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}

/// The `<html>` element. Class updates are dropped when there is no document.
#[derive(Debug, Clone, Default)]
pub struct DocumentRoot {
    element: Option<Element>,
}

impl DocumentRoot {
    pub fn current() -> Self {
        let element = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if element.is_none() {
            prism::log::warn!("No document root, accessibility classes will not be applied");
        }
        Self { element }
    }
}

impl ClassTarget for DocumentRoot {
    fn add_class(&mut self, name: &str) -> Result<(), ClassListError> {
        match &self.element {
            Some(html) => html.class_list().add_1(name).map_err(|e| ClassListError {
                class: name.to_string(),
                reason: format!("{e:?}"),
            }),
            None => Ok(()),
        }
    }

    fn remove_class(&mut self, name: &str) -> Result<(), ClassListError> {
        match &self.element {
            Some(html) => html.class_list().remove_1(name).map_err(|e| ClassListError {
                class: name.to_string(),
                reason: format!("{e:?}"),
            }),
            None => Ok(()),
        }
    }

    fn has_class(&self, name: &str) -> bool {
        self.element
            .as_ref()
            .is_some_and(|html| html.class_list().contains(name))
    }
}
