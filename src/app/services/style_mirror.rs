//! Live style mirror: the window-local style sheet FontSetter owns.
//!
//! The sheet holds either nothing or one universal font rule, followed by
//! per-entry preview rules appended during a menu refresh. It is never
//! persisted; the preference store stays authoritative.

use crate::app::domain::menu::entry_element_id;
use crate::app::domain::section::quote_css_string;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::host::{StyleHost, StyleSheet};

/// href of the style sheet the host loads for FontSetter.
pub const FONT_SHEET_HREF: &str = "chrome://fontsetter/content/fontsetter-font.css";

const GLOBAL_SELECTOR: &str = "* {";

pub fn global_rule(font_name: &str) -> String {
    format!("* {{font-family: {};}}", quote_css_string(font_name))
}

pub fn preview_rule(index: usize, font_name: &str) -> String {
    format!(
        "#{} > label {{font-family: {} !important;}}",
        entry_element_id(index),
        quote_css_string(font_name)
    )
}

/// The universal font rules currently in `sheet`.
pub fn global_rules(sheet: &dyn StyleSheet) -> Vec<String> {
    sheet
        .rules()
        .into_iter()
        .filter(|rule| rule.starts_with(GLOBAL_SELECTOR))
        .collect()
}

fn font_sheet(styles: &mut dyn StyleHost) -> Result<&mut dyn StyleSheet> {
    styles
        .sheet(FONT_SHEET_HREF)
        .ok_or_else(|| AppError::ContainerMissing(FONT_SHEET_HREF.to_string()))
}

fn clear_sheet(sheet: &mut dyn StyleSheet) -> Result<()> {
    while sheet.rule_count() != 0 {
        sheet.delete_rule(0)?;
    }
    Ok(())
}

/// Replace everything in the sheet with one universal rule for `font_name`.
pub fn set_rule(styles: &mut dyn StyleHost, font_name: &str) -> Result<()> {
    reset(styles, Some(font_name))
}

/// Remove every rule from the sheet.
pub fn clear_rules(styles: &mut dyn StyleHost) -> Result<()> {
    reset(styles, None)
}

/// Clear the sheet, then re-add the universal rule for `font_name` if given.
///
/// A menu refresh starts with this so preview rules never pile up.
pub fn reset(styles: &mut dyn StyleHost, font_name: Option<&str>) -> Result<()> {
    let sheet = font_sheet(styles)?;
    clear_sheet(sheet)?;
    if let Some(name) = font_name {
        sheet.insert_rule(&global_rule(name), 0)?;
    }
    Ok(())
}

/// Append a preview rule making entry `index` render in `font_name`.
pub fn set_label_rule(styles: &mut dyn StyleHost, index: usize, font_name: &str) -> Result<()> {
    let sheet = font_sheet(styles)?;
    let at = sheet.rule_count();
    sheet.insert_rule(&preview_rule(index, font_name), at)
}
