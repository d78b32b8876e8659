//! # bita-core
//!
//! Core types shared by every bita-rs crate: the error enum, site settings,
//! settings loading, and tracing setup. This crate has no dependency on the
//! form or UI layers.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Site and per-form configuration
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{BitaError, BitaResult};
pub use settings::{FormSettings, Settings, SuccessDisplay};
