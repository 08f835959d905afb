//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Preference backends
//! - Override file I/O
//! - Host UI traits and built-in strings
//! - Platform font-smoothing control
//! - Error types

pub mod error;
pub mod files;
pub mod host;
pub mod platform;
pub mod prefs;
pub mod strings;
