//! The preference store: single source of truth for the accessibility
//! preferences.
//!
//! Every change is written through immediately. The new value is applied in
//! memory first, then the document root class list is updated, then the value
//! is persisted. A failing step is returned to the caller but never rolls the
//! in-memory value back.

use tracing::{debug, warn};

use crate::config::PreferenceConfig;
use crate::document::ClassTarget;
use crate::errors::SyncError;
use crate::prefs::{ColorBlindMode, Preferences};
use crate::storage::PreferenceStorage;

#[derive(Debug)]
pub struct PreferenceStore<S, T> {
    storage: S,
    target: T,
    config: PreferenceConfig,
    preferences: Preferences,
}

impl<S, T> PreferenceStore<S, T>
where
    S: PreferenceStorage,
    T: ClassTarget,
{
    /// Reads both preferences from `storage` without touching `target`.
    ///
    /// Missing, unreadable or malformed values fall back to their defaults.
    pub fn load(storage: S, target: T, config: PreferenceConfig) -> Self {
        let preferences = Preferences {
            dark_mode: read_dark_mode(&storage, &config.dark_mode_key),
            color_blind_mode: read_color_blind_mode(&storage, &config.color_blind_mode_key),
        };
        debug!(?preferences, "Loaded accessibility preferences");

        Self {
            storage,
            target,
            config,
            preferences,
        }
    }

    /// Loads the preferences and runs one synchronization pass for each, so
    /// the document root matches them from the start.
    pub fn open(storage: S, target: T, config: PreferenceConfig) -> Self {
        let mut store = Self::load(storage, target, config);
        if let Err(err) = store.apply() {
            warn!(%err, "Initial preference synchronization failed");
        }
        store
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn dark_mode(&self) -> bool {
        self.preferences.dark_mode
    }

    pub fn color_blind_mode(&self) -> ColorBlindMode {
        self.preferences.color_blind_mode
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_parts(self) -> (S, T) {
        (self.storage, self.target)
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<(), SyncError> {
        if self.preferences.dark_mode == enabled {
            return Ok(());
        }
        debug!(enabled, "Dark mode changed");
        self.preferences.dark_mode = enabled;
        self.sync_dark_mode()
    }

    pub fn toggle_dark_mode(&mut self) -> Result<(), SyncError> {
        self.set_dark_mode(!self.preferences.dark_mode)
    }

    pub fn set_color_blind_mode(&mut self, mode: ColorBlindMode) -> Result<(), SyncError> {
        if self.preferences.color_blind_mode == mode {
            return Ok(());
        }
        debug!(%mode, "Color blind mode changed");
        self.preferences.color_blind_mode = mode;
        self.sync_color_blind_mode()
    }

    /// Runs both synchronization passes. Both are attempted; the first
    /// failure is returned.
    pub fn apply(&mut self) -> Result<(), SyncError> {
        let color_blind = self.sync_color_blind_mode();
        let dark = self.sync_dark_mode();
        color_blind.and(dark)
    }

    fn sync_color_blind_mode(&mut self) -> Result<(), SyncError> {
        let mode = self.preferences.color_blind_mode;

        for simulated in ColorBlindMode::SIMULATED {
            self.target.remove_class(simulated.as_str())?;
        }
        if let Some(class) = mode.class_name() {
            self.target.add_class(class)?;
        }

        self.storage
            .set(&self.config.color_blind_mode_key, mode.as_str())?;
        Ok(())
    }

    fn sync_dark_mode(&mut self) -> Result<(), SyncError> {
        let enabled = self.preferences.dark_mode;

        if enabled {
            self.target.add_class(&self.config.dark_class)?;
        } else {
            self.target.remove_class(&self.config.dark_class)?;
        }

        let encoded = serde_json::Value::Bool(enabled).to_string();
        self.storage.set(&self.config.dark_mode_key, &encoded)?;
        Ok(())
    }
}

fn read_dark_mode(storage: &impl PreferenceStorage, key: &str) -> bool {
    let raw = match storage.get(key) {
        Ok(Some(raw)) if !raw.is_empty() => raw,
        Ok(_) => return false,
        Err(err) => {
            warn!(%err, "Could not read dark mode, using default");
            return false;
        }
    };

    serde_json::from_str::<bool>(&raw).unwrap_or_else(|err| {
        warn!(key, value = %raw, %err, "Ignoring malformed dark mode flag");
        false
    })
}

fn read_color_blind_mode(storage: &impl PreferenceStorage, key: &str) -> ColorBlindMode {
    let raw = match storage.get(key) {
        Ok(Some(raw)) if !raw.is_empty() => raw,
        Ok(_) => return ColorBlindMode::None,
        Err(err) => {
            warn!(%err, "Could not read color blind mode, using default");
            return ColorBlindMode::None;
        }
    };

    raw.parse().unwrap_or_else(|err| {
        warn!(key, %err, "Ignoring unrecognized color blind mode");
        ColorBlindMode::None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StorageError;
    use crate::memory::{MemoryClassList, MemoryStorage};

    const DARK_KEY: &str = PreferenceConfig::DEFAULT_DARK_MODE_KEY;
    const MODE_KEY: &str = PreferenceConfig::DEFAULT_COLOR_BLIND_MODE_KEY;

    type TestStore = PreferenceStore<MemoryStorage, MemoryClassList>;

    fn open(storage: MemoryStorage) -> TestStore {
        PreferenceStore::open(storage, MemoryClassList::new(), PreferenceConfig::default())
    }

    fn simulated_classes(store: &TestStore) -> Vec<&'static str> {
        ColorBlindMode::SIMULATED
            .iter()
            .map(|mode| mode.as_str())
            .filter(|class| store.target().has_class(class))
            .collect()
    }

    #[test]
    fn fresh_environment_uses_defaults() {
        let store = open(MemoryStorage::new());

        assert!(!store.dark_mode());
        assert_eq!(store.color_blind_mode(), ColorBlindMode::None);
        assert!(!store.target().has_class("dark"));
        assert!(simulated_classes(&store).is_empty());
    }

    #[test]
    fn open_persists_defaults() {
        let store = open(MemoryStorage::new());

        assert_eq!(store.storage().value(DARK_KEY), Some("false"));
        assert_eq!(store.storage().value(MODE_KEY), Some("none"));
    }

    #[test]
    fn load_does_not_touch_storage_or_target() {
        let store = PreferenceStore::load(
            MemoryStorage::new().with_entry(DARK_KEY, "true"),
            MemoryClassList::new(),
            PreferenceConfig::default(),
        );

        assert!(store.dark_mode());
        assert!(!store.target().has_class("dark"));
        assert_eq!(store.storage().len(), 1);
    }

    #[test]
    fn open_clears_stale_classes() {
        let target = MemoryClassList::new()
            .with_class("protanopia")
            .with_class("dark")
            .with_class("app");
        let store = PreferenceStore::open(MemoryStorage::new(), target, PreferenceConfig::default());

        let classes: Vec<&str> = store.target().classes().collect();
        assert_eq!(classes, vec!["app"]);
    }

    #[test]
    fn dark_mode_write_through() {
        for enabled in [true, false] {
            let mut store = open(MemoryStorage::new());
            store.set_dark_mode(!enabled).unwrap();
            store.set_dark_mode(enabled).unwrap();

            assert_eq!(store.dark_mode(), enabled);
            assert_eq!(store.target().has_class("dark"), enabled);
            assert_eq!(
                store.storage().value(DARK_KEY),
                Some(serde_json::to_string(&enabled).unwrap().as_str())
            );
        }
    }

    #[test]
    fn dark_mode_on_then_off() {
        let mut store = open(MemoryStorage::new());
        store.set_dark_mode(true).unwrap();
        store.set_dark_mode(false).unwrap();

        assert!(!store.target().has_class("dark"));
        assert_eq!(store.storage().value(DARK_KEY), Some("false"));
    }

    #[test]
    fn toggle_flips_dark_mode() {
        let mut store = open(MemoryStorage::new());
        store.toggle_dark_mode().unwrap();
        assert!(store.dark_mode());
        store.toggle_dark_mode().unwrap();
        assert!(!store.dark_mode());
    }

    #[test]
    fn every_mode_sets_exactly_its_class() {
        let mut store = open(MemoryStorage::new());

        for mode in ColorBlindMode::ALL {
            store.set_color_blind_mode(mode).unwrap();

            assert_eq!(store.color_blind_mode(), mode);
            assert_eq!(store.storage().value(MODE_KEY), Some(mode.as_str()));
            let expected: Vec<&str> = mode.class_name().into_iter().collect();
            assert_eq!(simulated_classes(&store), expected);
        }
    }

    #[test]
    fn switching_modes_replaces_class() {
        let mut store = open(MemoryStorage::new());
        store.set_color_blind_mode(ColorBlindMode::Protanopia).unwrap();
        store.set_color_blind_mode(ColorBlindMode::Deuteranopia).unwrap();

        assert!(store.target().has_class("deuteranopia"));
        assert!(!store.target().has_class("protanopia"));
    }

    #[test]
    fn none_clears_every_simulated_class() {
        for mode in ColorBlindMode::SIMULATED {
            let mut store = open(MemoryStorage::new());
            store.set_color_blind_mode(mode).unwrap();
            store.set_color_blind_mode(ColorBlindMode::None).unwrap();

            assert!(simulated_classes(&store).is_empty());
            assert_eq!(store.storage().value(MODE_KEY), Some("none"));
        }
    }

    #[test]
    fn color_blind_mode_leaves_dark_class_alone() {
        let mut store = open(MemoryStorage::new());
        store.set_dark_mode(true).unwrap();
        store.set_color_blind_mode(ColorBlindMode::Achromatopsia).unwrap();
        store.set_color_blind_mode(ColorBlindMode::None).unwrap();

        assert!(store.target().has_class("dark"));
    }

    #[test]
    fn setting_same_value_twice_is_idempotent() {
        let mut once = open(MemoryStorage::new());
        once.set_dark_mode(true).unwrap();
        once.set_color_blind_mode(ColorBlindMode::Tritanopia).unwrap();

        let mut twice = open(MemoryStorage::new());
        for _ in 0..2 {
            twice.set_dark_mode(true).unwrap();
            twice.set_color_blind_mode(ColorBlindMode::Tritanopia).unwrap();
        }

        assert_eq!(once.target(), twice.target());
        assert_eq!(once.storage().value(DARK_KEY), twice.storage().value(DARK_KEY));
        assert_eq!(once.storage().value(MODE_KEY), twice.storage().value(MODE_KEY));
    }

    #[test]
    fn preferences_survive_a_new_store() {
        let mut store = open(MemoryStorage::new());
        store.set_dark_mode(true).unwrap();
        store.set_color_blind_mode(ColorBlindMode::Tritanopia).unwrap();
        let (storage, _) = store.into_parts();

        let reopened = open(storage);
        assert_eq!(
            reopened.preferences(),
            Preferences {
                dark_mode: true,
                color_blind_mode: ColorBlindMode::Tritanopia,
            }
        );
        assert!(reopened.target().has_class("dark"));
        assert!(reopened.target().has_class("tritanopia"));
    }

    #[test]
    fn empty_stored_values_use_defaults() {
        let store = open(
            MemoryStorage::new()
                .with_entry(DARK_KEY, "")
                .with_entry(MODE_KEY, ""),
        );

        assert_eq!(store.preferences(), Preferences::default());
    }

    #[test]
    fn malformed_dark_mode_falls_back_to_false() {
        for raw in ["yes", "1", "\"true\"", "null", "{"] {
            let store = open(MemoryStorage::new().with_entry(DARK_KEY, raw));
            assert!(!store.dark_mode(), "{raw} should not enable dark mode");
            assert_eq!(store.storage().value(DARK_KEY), Some("false"));
        }
    }

    // Stored modes are validated on load rather than accepted verbatim
    #[test]
    fn unrecognized_stored_mode_falls_back_to_none() {
        let store = open(MemoryStorage::new().with_entry(MODE_KEY, "sepia"));

        assert_eq!(store.color_blind_mode(), ColorBlindMode::None);
        assert!(!store.target().has_class("sepia"));
        assert_eq!(store.storage().value(MODE_KEY), Some("none"));
    }

    #[test]
    fn write_failure_is_reported_but_value_kept() {
        let mut storage = MemoryStorage::new();
        storage.set_fail_writes(true);
        let mut store =
            PreferenceStore::load(storage, MemoryClassList::new(), PreferenceConfig::default());

        let err = store.set_color_blind_mode(ColorBlindMode::Protanopia).unwrap_err();
        assert_eq!(
            err,
            SyncError::Storage(StorageError::Write {
                key: MODE_KEY.to_string(),
                reason: "quota exceeded".to_string(),
            })
        );
        assert_eq!(store.color_blind_mode(), ColorBlindMode::Protanopia);
        assert!(store.target().has_class("protanopia"));

        assert!(store.set_dark_mode(true).is_err());
        assert!(store.dark_mode());
        assert!(store.target().has_class("dark"));
        assert!(store.storage().is_empty());
    }

    #[test]
    fn open_tolerates_failing_storage() {
        let mut storage = MemoryStorage::new().with_entry(DARK_KEY, "true");
        storage.set_fail_writes(true);
        let store = PreferenceStore::open(storage, MemoryClassList::new(), PreferenceConfig::default());

        assert!(store.dark_mode());
        assert!(store.target().has_class("dark"));
    }

    #[test]
    fn custom_config_is_honored() {
        let config = PreferenceConfig {
            dark_mode_key: "app.dark".to_string(),
            color_blind_mode_key: "app.cvd".to_string(),
            dark_class: "theme-dark".to_string(),
        };
        let storage = MemoryStorage::new().with_entry("app.cvd", "achromatopsia");
        let mut store = PreferenceStore::open(storage, MemoryClassList::new(), config);
        store.set_dark_mode(true).unwrap();

        assert_eq!(store.color_blind_mode(), ColorBlindMode::Achromatopsia);
        assert!(store.target().has_class("theme-dark"));
        assert!(!store.target().has_class("dark"));
        assert_eq!(store.storage().value("app.dark"), Some("true"));
        assert_eq!(store.storage().value(DARK_KEY), None);
    }

    #[test]
    fn invalid_dark_class_surfaces_class_list_error() {
        let config = PreferenceConfig {
            dark_class: "dark mode".to_string(),
            ..PreferenceConfig::default()
        };
        let mut store = PreferenceStore::load(MemoryStorage::new(), MemoryClassList::new(), config);

        assert!(matches!(
            store.set_dark_mode(true),
            Err(SyncError::ClassList(_))
        ));
        assert!(store.dark_mode());
    }
}
