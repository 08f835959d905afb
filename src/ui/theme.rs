use fltk::{app, enums::Font};

use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::host::{RuleListSheet, StyleHost, StyleSheet};
use crate::app::services::style_mirror::FONT_SHEET_HREF;

/// Pull the family name out of a `* {font-family: "..."}` rule.
pub fn global_font_family(rule: &str) -> Option<String> {
    let rest = rule.strip_prefix("* {")?;
    let rest = rest.trim_start().strip_prefix("font-family:")?.trim_start();
    let rest = rest.strip_prefix('"')?;

    let mut family = String::new();
    let mut chars = rest.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => family.push(chars.next()?),
            '"' => return Some(family),
            _ => family.push(ch),
        }
    }
    None
}

/// The font sheet of the FLTK window. The universal rule becomes the
/// application's default font; preview rules are only recorded, the menu
/// sets each entry's label font itself.
pub struct FontSheet {
    rules: RuleListSheet,
}

impl FontSheet {
    fn apply_default_font(&self) {
        let family = self.rules.rules().iter().find_map(|r| global_font_family(r));
        match family {
            Some(name) => app::set_font(Font::by_name(&name)),
            None => app::set_font(Font::Helvetica),
        }
        app::redraw();
    }
}

impl StyleSheet for FontSheet {
    fn rule_count(&self) -> usize {
        self.rules.rule_count()
    }

    fn rules(&self) -> Vec<String> {
        self.rules.rules()
    }

    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<()> {
        self.rules.insert_rule(rule, index)?;
        if global_font_family(rule).is_some() {
            self.apply_default_font();
        }
        Ok(())
    }

    fn delete_rule(&mut self, index: usize) -> Result<()> {
        let was_global = self
            .rules
            .rules()
            .get(index)
            .is_some_and(|r| global_font_family(r).is_some());
        self.rules.delete_rule(index)?;
        if was_global {
            self.apply_default_font();
        }
        Ok(())
    }
}

pub struct FltkStyles {
    sheet: FontSheet,
}

impl FltkStyles {
    pub fn new() -> Self {
        Self {
            sheet: FontSheet {
                rules: RuleListSheet::new(),
            },
        }
    }
}

impl Default for FltkStyles {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleHost for FltkStyles {
    fn sheet(&mut self, href: &str) -> Option<&mut dyn StyleSheet> {
        if href == FONT_SHEET_HREF {
            Some(&mut self.sheet)
        } else {
            None
        }
    }
}
