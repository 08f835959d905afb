//! Seams to the host UI shell and its services.
//!
//! The engine only talks to the outside world through these traits; the FLTK
//! adapter in `crate::ui` implements them for the desktop binary.

use crate::app::domain::{MenuEntry, StringKey};

use super::error::{AppError, Result};

/// A popup whose children the engine owns.
pub trait MenuPopup {
    /// Remove every child entry.
    fn clear(&mut self);

    fn append(&mut self, entry: &MenuEntry);
}

/// A toolbar whose item set can be customized and persisted.
pub trait Toolbar {
    fn current_set(&self) -> Vec<String>;
    fn set_current_set(&mut self, items: Vec<String>);
    fn is_collapsed(&self) -> bool;
    fn set_collapsed(&mut self, collapsed: bool);
    /// Persist the item set and collapsed state across sessions.
    fn persist(&mut self);
}

/// Menu, toolbar and alert surfaces of the host window.
pub trait UiShell {
    fn popup(&mut self, id: &str) -> Option<&mut dyn MenuPopup>;

    /// Whether an element with `id` exists in the window.
    fn has_element(&self, id: &str) -> bool;

    /// Open popup `popup_id` below `anchor_id`. Returns false when either is missing.
    fn open_popup(&mut self, popup_id: &str, anchor_id: &str) -> bool;

    fn toolbar(&mut self, id: &str) -> Option<&mut dyn Toolbar>;

    /// Show a modal message to the user.
    fn alert(&mut self, message: &str);
}

/// A programmatically owned style sheet.
pub trait StyleSheet {
    fn rule_count(&self) -> usize;

    fn rules(&self) -> Vec<String>;

    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<()>;

    fn delete_rule(&mut self, index: usize) -> Result<()>;
}

/// Looks up the window's style sheets by href.
pub trait StyleHost {
    fn sheet(&mut self, href: &str) -> Option<&mut dyn StyleSheet>;
}

/// The installed-font enumeration service.
pub trait FontEnumerator {
    /// Fonts the platform considers relevant to `language` (e.g. "zh-CN").
    fn fonts_for_language(&self, language: &str) -> Result<Vec<String>>;

    fn all_fonts(&self) -> Result<Vec<String>>;
}

/// Localized strings, looked up by symbolic key.
pub trait StringBundle {
    fn get(&self, key: StringKey) -> String;
}

/// A style sheet kept as a plain list of rule texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleListSheet {
    rules: Vec<String>,
}

impl RuleListSheet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StyleSheet for RuleListSheet {
    fn rule_count(&self) -> usize {
        self.rules.len()
    }

    fn rules(&self) -> Vec<String> {
        self.rules.clone()
    }

    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<()> {
        let rule = rule.trim();
        let well_formed = rule
            .find('{')
            .map(|open| open > 0 && rule.ends_with('}'))
            .unwrap_or(false);
        if !well_formed || index > self.rules.len() {
            return Err(AppError::InvalidRule(rule.to_string()));
        }
        self.rules.insert(index, rule.to_string());
        Ok(())
    }

    fn delete_rule(&mut self, index: usize) -> Result<()> {
        if index >= self.rules.len() {
            return Err(AppError::InvalidRule(format!("no rule at index {}", index)));
        }
        self.rules.remove(index);
        Ok(())
    }
}
