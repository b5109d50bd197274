//! Storage keys and class names used by the store.

/// Where preferences are persisted and which class marks dark mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceConfig {
    pub dark_mode_key: String,
    pub color_blind_mode_key: String,
    pub dark_class: String,
}

impl PreferenceConfig {
    pub const DEFAULT_DARK_MODE_KEY: &'static str = "accessibility-dark-mode";
    pub const DEFAULT_COLOR_BLIND_MODE_KEY: &'static str = "accessibility-colorblind-mode";
    pub const DEFAULT_DARK_CLASS: &'static str = "dark";
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            dark_mode_key: Self::DEFAULT_DARK_MODE_KEY.to_string(),
            color_blind_mode_key: Self::DEFAULT_COLOR_BLIND_MODE_KEY.to_string(),
            dark_class: Self::DEFAULT_DARK_CLASS.to_string(),
        }
    }
}
