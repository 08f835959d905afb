//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Font choice, feature flags and preference keys
//! - The managed-section document model
//! - The selector menu model
//! - Command and string key types

pub mod menu;
pub mod messages;
pub mod section;
pub mod settings;
pub mod strings;

pub use menu::{ControlKind, MenuEntry, MenuModel};
pub use messages::Command;
pub use section::{SectionError, SectionedDocument};
pub use settings::{FeatureFlags, FontChoice};
pub use strings::StringKey;
