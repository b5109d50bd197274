//! The accessibility preferences held by a [`PreferenceStore`](crate::PreferenceStore).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color-vision-deficiency simulation preset, applied to the document root as
/// a single class name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBlindMode {
    #[default]
    None,
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Achromatopsia,
}

impl ColorBlindMode {
    pub const ALL: [ColorBlindMode; 5] = [
        ColorBlindMode::None,
        ColorBlindMode::Protanopia,
        ColorBlindMode::Deuteranopia,
        ColorBlindMode::Tritanopia,
        ColorBlindMode::Achromatopsia,
    ];

    /// Every mode that maps to a class on the document root.
    pub const SIMULATED: [ColorBlindMode; 4] = [
        ColorBlindMode::Protanopia,
        ColorBlindMode::Deuteranopia,
        ColorBlindMode::Tritanopia,
        ColorBlindMode::Achromatopsia,
    ];

    /// The raw token written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorBlindMode::None => "none",
            ColorBlindMode::Protanopia => "protanopia",
            ColorBlindMode::Deuteranopia => "deuteranopia",
            ColorBlindMode::Tritanopia => "tritanopia",
            ColorBlindMode::Achromatopsia => "achromatopsia",
        }
    }

    pub fn class_name(&self) -> Option<&'static str> {
        match self {
            ColorBlindMode::None => None,
            mode => Some(mode.as_str()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorBlindMode::None => "None",
            ColorBlindMode::Protanopia => "Protanopia (red-blind)",
            ColorBlindMode::Deuteranopia => "Deuteranopia (green-blind)",
            ColorBlindMode::Tritanopia => "Tritanopia (blue-blind)",
            ColorBlindMode::Achromatopsia => "Achromatopsia (no color)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown color blind mode `{0}`")]
pub struct UnknownColorBlindMode(pub String);

impl FromStr for ColorBlindMode {
    type Err = UnknownColorBlindMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorBlindMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownColorBlindMode(s.to_string()))
    }
}

impl fmt::Display for ColorBlindMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of both preferences, as handed to consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub dark_mode: bool,
    pub color_blind_mode: ColorBlindMode,
}
