//! FontSetter - keeps a chosen display font in sync across web-page content,
//! browser chrome and the user-editable `userChrome.css` override file.
//!
//! The engine lives in [`app`]; [`ui`] holds the FLTK host adapter used by the
//! `fontsetter` binary.

pub mod app;
pub mod ui;

pub use app::{AppError, Command, FontSetter, Host, MenuEntry, MenuModel, Result};
