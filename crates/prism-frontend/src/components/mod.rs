//! Reusable UI components for the Prism frontend.

pub mod accessibility_settings;
pub mod header;
pub mod scope_notice;

pub use accessibility_settings::*;
pub use header::*;
pub use scope_notice::*;
