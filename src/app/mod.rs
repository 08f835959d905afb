//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (FontChoice, flags, sectioned document, menu model, commands)
//! - `infrastructure/` - External integrations (preference backends, files, host UI traits, font smoothing, error)
//! - `services/` - Business operations (preference store, section patching, live style mirror, smoothing toggle)
//! - `controllers/` - Orchestration (font application, menu synthesis, first-run migration)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenient external access
pub use domain::{Command, FeatureFlags, FontChoice, MenuEntry, MenuModel, StringKey};
pub use infrastructure::error::{AppError, Result};
pub use state::{FontSetter, Host};
