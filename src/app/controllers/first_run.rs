use crate::app::domain::StringKey;
use crate::app::domain::settings::{UI_CHANGE_THRESHOLD, host_keys, keys};
use crate::app::state::{FontSetter, TOOLBAR_BUTTON_ID};

/// Toolbar the FontSetter button is placed on.
pub const ADDON_BAR_ID: &str = "addon-bar";

impl FontSetter {
    /// One-time migration for profiles whose stored UI version predates
    /// [`UI_CHANGE_THRESHOLD`]. Returns whether it ran.
    pub fn check_first_run(&mut self) -> bool {
        if self.prefs.flags().schema_at_least(UI_CHANGE_THRESHOLD) {
            return false;
        }

        log::debug!("fontsetter: running first-run migration");
        self.prefs.set(keys::USE_DEFAULT_MENU_FONT, false);
        if self.smoothing.is_some() {
            self.apply_platform_defaults();
        }
        self.place_toolbar_button();

        self.prefs.set(keys::FIRST_RUN, false);
        self.prefs
            .set(keys::LAST_UI_CHANGE, UI_CHANGE_THRESHOLD.to_string());
        true
    }

    fn apply_platform_defaults(&mut self) {
        if self.prefs.get(keys::RESTORE_USE_DOCUMENT_FONTS, true) {
            let current = self.prefs.font_choice();
            self.prefs.reset_host(host_keys::USE_DOCUMENT_FONTS);
            if let Some(name) = current.as_option() {
                self.set_font(name);
            }
            return;
        }

        let default_font = self.host.strings.get(StringKey::DefaultFont);
        let installed = match self.host.fonts.all_fonts() {
            Ok(fonts) => fonts,
            Err(e) => {
                log::warn!("fontsetter: check first run: {}", e);
                return;
            }
        };
        if !installed.iter().any(|name| *name == default_font) {
            return;
        }

        self.set_font(&default_font);
        if let Some(smoothing) = self.smoothing.as_mut() {
            if let Err(e) = smoothing.enable() {
                log::warn!("fontsetter: check first run: set clear type: {}", e);
            }
        }
    }

    fn place_toolbar_button(&mut self) {
        let Some(toolbar) = self.host.shell.toolbar(ADDON_BAR_ID) else {
            log::debug!("fontsetter: {} not found", ADDON_BAR_ID);
            return;
        };

        let mut items = toolbar.current_set();
        if !items.iter().any(|item| item == TOOLBAR_BUTTON_ID) {
            items.push(TOOLBAR_BUTTON_ID.to_string());
            toolbar.set_current_set(items);
        }
        if toolbar.is_collapsed() {
            toolbar.set_collapsed(false);
        }
        toolbar.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::platform::{FE_FONTSMOOTHINGCLEARTYPE, FE_FONTSMOOTHINGSTANDARD};
    use crate::app::infrastructure::prefs::PrefValue;
    use crate::app::test_support::{FakeFonts, FakeShell, FakeSmoothing, FakeStyles, Harness};

    #[test]
    fn test_runs_once_and_bumps_version() {
        let mut h = Harness::new(FakeFonts::new(&["宋体"], &["Arial"]));
        {
            let mut log = h.shell.borrow_mut();
            log.toolbar_set = vec!["home-button".to_string()];
            log.collapsed = true;
        }

        assert!(h.setter.check_first_run());
        assert_eq!(h.setter.prefs().flags().schema_version, "0.3");
        assert!(!h.setter.prefs().get(keys::FIRST_RUN, true));

        let log = h.shell.borrow();
        assert_eq!(log.toolbar_set, vec!["home-button", TOOLBAR_BUTTON_ID]);
        assert!(!log.collapsed);
        assert_eq!(log.persisted, 1);
        drop(log);

        assert!(!h.setter.check_first_run());
        assert_eq!(h.shell.borrow().persisted, 1);
    }

    #[test]
    fn test_button_not_duplicated() {
        let mut h = Harness::new(FakeFonts::new(&[], &[]));
        h.shell.borrow_mut().toolbar_set = vec![TOOLBAR_BUTTON_ID.to_string()];
        h.setter.check_first_run();
        assert_eq!(h.shell.borrow().toolbar_set, vec![TOOLBAR_BUTTON_ID]);
    }

    #[test]
    fn test_resets_document_fonts_and_reapplies_choice() {
        let mut h = Harness::build(
            FakeShell::new(),
            FakeStyles::with_sheet(),
            FakeFonts::new(&["宋体"], &["宋体"]),
            Some(FakeSmoothing::new(FE_FONTSMOOTHINGCLEARTYPE)),
        );
        h.setter.prefs.set(keys::USE_DEFAULT_MENU_FONT, true);
        h.setter.prefs.set(keys::CURRENT_FONT, "宋体".to_string());
        h.setter.prefs.set_host(host_keys::USE_DOCUMENT_FONTS, 0i64);

        h.setter.check_first_run();

        assert!(!h.setter.prefs().use_default_menu_font());
        assert_eq!(
            h.setter.prefs().backend().read(host_keys::USE_DOCUMENT_FONTS).unwrap(),
            None
        );
        assert_eq!(
            h.setter.prefs().backend().read("font.name.serif.zh-CN").unwrap(),
            Some(PrefValue::Str("宋体".to_string()))
        );
        assert!(h.chrome_text().is_some());
    }

    #[test]
    fn test_applies_localized_default_font_with_cleartype() {
        let fake = FakeSmoothing::new(FE_FONTSMOOTHINGSTANDARD);
        let state = fake.state();
        let mut h = Harness::build(
            FakeShell::new(),
            FakeStyles::with_sheet(),
            FakeFonts::new(&[], &["Arial", "Segoe UI"]),
            Some(fake),
        );
        h.setter.prefs.set(keys::RESTORE_USE_DOCUMENT_FONTS, false);

        h.setter.check_first_run();

        assert_eq!(h.setter.prefs().font_choice().name(), "Segoe UI");
        assert_eq!(state.borrow().kind, FE_FONTSMOOTHINGCLEARTYPE);
    }

    #[test]
    fn test_smoothing_failure_still_completes_migration() {
        let fake = FakeSmoothing::new(FE_FONTSMOOTHINGSTANDARD);
        fake.state().borrow_mut().fail = true;
        let mut h = Harness::build(
            FakeShell::new(),
            FakeStyles::with_sheet(),
            FakeFonts::new(&[], &["Segoe UI"]),
            Some(fake),
        );
        h.setter.prefs.set(keys::RESTORE_USE_DOCUMENT_FONTS, false);

        assert!(h.setter.check_first_run());
        assert!(h.setter.prefs().flags().schema_at_least(UI_CHANGE_THRESHOLD));
        assert!(h.shell.borrow().alerts.is_empty());
    }

    #[test]
    fn test_no_platform_defaults_without_smoothing() {
        let mut h = Harness::new(FakeFonts::new(&[], &["Segoe UI"]));
        h.setter.prefs.set(keys::RESTORE_USE_DOCUMENT_FONTS, false);
        h.setter.check_first_run();
        assert!(h.setter.prefs().font_choice().is_default());
    }
}
