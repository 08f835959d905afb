//! Font application: drives the preference store, the override file and the
//! live style mirror in a fixed order.
//!
//! The preference write always comes first, so an interrupted sequence leaves
//! the stored choice as the source of truth to recover from.

use crate::app::domain::FontChoice;
use crate::app::domain::section::font_rule_body;
use crate::app::domain::settings::{keys, web_font_keys};
use crate::app::infrastructure::error::AppError;
use crate::app::services::{section_patch, style_mirror};
use crate::app::state::FontSetter;

fn log_mirror_error(action: &str, e: AppError) {
    match e {
        AppError::ContainerMissing(_) => {
            log::debug!("fontsetter: {}: style sheet not found", action)
        }
        e => log::warn!("fontsetter: {}: {}", action, e),
    }
}

impl FontSetter {
    /// Make `name` the display font everywhere. An empty name does nothing,
    /// and neither does a choice the preference store refuses.
    pub fn set_font(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }

        if !self.prefs.set_font_choice(&FontChoice::new(name)) {
            log::warn!("fontsetter: set font: choice not saved, nothing changed");
            return;
        }
        self.apply_to_web_content(name);
        if !self.prefs.use_default_menu_font() {
            self.apply_to_chrome(name);
        }
        self.refresh_menu();
    }

    /// Forget the chosen font and return every surface to the platform default.
    pub fn restore_default(&mut self) {
        if !self.prefs.set_font_choice(&FontChoice::default()) {
            log::warn!("fontsetter: restore default: choice not saved, nothing changed");
            return;
        }
        self.reset_web_content();
        self.clear_chrome();
        self.refresh_menu();
    }

    /// Switch between applying the chosen font to the chrome and leaving the
    /// chrome on the platform font. The stored choice is not touched.
    pub fn toggle_menu_font_override(&mut self) {
        let use_default = !self.prefs.use_default_menu_font();
        if !self.prefs.set(keys::USE_DEFAULT_MENU_FONT, use_default) {
            log::warn!("fontsetter: apply to menu: flag not saved, nothing changed");
            return;
        }

        if use_default {
            self.clear_chrome();
        } else if let Some(name) = self.prefs.font_choice().as_option() {
            self.apply_to_chrome(name);
        }

        self.refresh_menu();
    }

    pub fn toggle_show_all_fonts(&mut self) {
        let show_all = !self.prefs.show_all_fonts();
        if !self.prefs.set(keys::SHOW_ALL_FONTS, show_all) {
            log::warn!("fontsetter: show all fonts: flag not saved");
            return;
        }
        self.refresh_menu();
    }

    fn apply_to_web_content(&mut self, name: &str) {
        for key in web_font_keys() {
            self.prefs.set_host(&key, name.to_string());
        }
    }

    fn reset_web_content(&mut self) {
        for key in web_font_keys() {
            self.prefs.reset_host(&key);
        }
    }

    /// Live style sheet first, then the override file.
    fn apply_to_chrome(&mut self, name: &str) {
        if let Err(e) = style_mirror::set_rule(self.host.styles.as_mut(), name) {
            log_mirror_error("set font for browser", e);
        }

        let body = font_rule_body(name);
        if let Err(e) =
            section_patch::apply_section(self.resources.as_mut(), &self.chrome_file, &body)
        {
            log::warn!("fontsetter: set font for userChrome: {}", e);
        }
    }

    fn clear_chrome(&mut self) {
        if let Err(e) = style_mirror::clear_rules(self.host.styles.as_mut()) {
            log_mirror_error("unset font for browser", e);
        }

        if let Err(e) = section_patch::remove_section(self.resources.as_mut(), &self.chrome_file) {
            log::warn!("fontsetter: unset font for userChrome: {}", e);
        }
    }
}
