//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the host UI:
//! - Font application (set, restore, menu-font override, show-all toggle)
//! - Selector menu synthesis
//! - First-run migration

pub mod first_run;
pub mod fonts;
pub mod menu;
