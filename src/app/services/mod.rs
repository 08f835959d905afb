//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Namespaced preference access
//! - Managed-section patching of the override file
//! - The live style mirror
//! - Platform font-smoothing toggle

pub mod preferences;
pub mod section_patch;
pub mod smoothing;
pub mod style_mirror;
