//! Context providers for shared application state.

pub mod accessibility;

pub use accessibility::{AccessibilityContext, AccessibilityProvider, use_accessibility};
