//! Menu synthesis: rebuilds the selector popup from preferences and the
//! installed fonts, and registers a preview rule per font entry.

use crate::app::domain::menu::SELECTOR_MENU_ID;
use crate::app::domain::settings::{DEFAULT_LOCALE, host_keys};
use crate::app::domain::{ControlKind, FontChoice, MenuEntry, MenuModel, StringKey};
use crate::app::infrastructure::host::{FontEnumerator, StringBundle, StyleHost};
use crate::app::services::preferences::Preferences;
use crate::app::services::smoothing::FontSmoothing;
use crate::app::services::style_mirror;
use crate::app::state::FontSetter;

/// Suffix some OEM font links carry; such fonts are never listed by script.
const VENDOR_SUFFIX: &str = "_boot";

/// Whether `name` belongs in the script-specific list: it must start outside
/// printable ASCII and must not be a vendor link.
pub fn is_script_font(name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };
    (first as u32) >= 127 && !name.ends_with(VENDOR_SUFFIX)
}

/// What a refresh reads from.
pub struct MenuSources<'a> {
    pub prefs: &'a Preferences,
    pub fonts: &'a dyn FontEnumerator,
    pub strings: &'a dyn StringBundle,
    pub smoothing: Option<&'a mut FontSmoothing>,
    /// `None` when the font style sheet is unavailable; previews are skipped.
    pub styles: Option<&'a mut dyn StyleHost>,
}

struct FontListBuilder<'m, 's> {
    model: &'m mut MenuModel,
    styles: Option<&'s mut dyn StyleHost>,
    current: FontChoice,
    next_index: usize,
}

impl FontListBuilder<'_, '_> {
    fn push(&mut self, name: &str) {
        let index = self.next_index;
        self.next_index += 1;
        self.model.push(MenuEntry::Font {
            label: name.to_string(),
            checked: self.current.matches(name),
            index,
        });

        if let Some(styles) = self.styles.as_deref_mut() {
            if let Err(e) = style_mirror::set_label_rule(styles, index, name) {
                log::debug!("fontsetter: style for menu item {} failed: {}", index, e);
            }
        }
    }
}

/// Build the selector menu model.
pub fn build_menu(sources: MenuSources<'_>) -> MenuModel {
    let MenuSources {
        prefs,
        fonts,
        strings,
        smoothing,
        styles,
    } = sources;
    let mut model = MenuModel::new();

    model.push(MenuEntry::Control {
        kind: ControlKind::RestoreDefault,
        label: strings.get(StringKey::RestoreDefault),
        checked: None,
    });
    model.push(MenuEntry::Control {
        kind: ControlKind::ApplyToMenu,
        label: strings.get(StringKey::ApplyToMenu),
        checked: Some(!prefs.use_default_menu_font()),
    });
    if let Some(smoothing) = smoothing {
        match smoothing.is_enabled() {
            Ok(enabled) => model.push(MenuEntry::Control {
                kind: ControlKind::UseSmoothing,
                label: strings.get(StringKey::UseClearType),
                checked: Some(enabled),
            }),
            Err(e) => log::debug!("fontsetter: get clear type failed: {}", e),
        }
    }

    let language = prefs.get_host(host_keys::LOCALE, DEFAULT_LOCALE.to_string());
    let script_fonts = fonts.fonts_for_language(&language).unwrap_or_else(|e| {
        log::warn!("fontsetter: enumerating {} fonts failed: {}", language, e);
        Vec::new()
    });
    let show_all = prefs.show_all_fonts();

    let mut builder = FontListBuilder {
        model: &mut model,
        styles,
        current: prefs.font_choice(),
        next_index: 0,
    };

    for name in script_fonts.iter().filter(|name| is_script_font(name)) {
        builder.push(name);
    }
    let script_entries = builder.next_index;

    if script_entries > 0 {
        builder.model.push(MenuEntry::Separator);
        builder.model.push(MenuEntry::Control {
            kind: ControlKind::ShowAllFonts,
            label: strings.get(StringKey::DisplayAllFonts),
            checked: Some(show_all),
        });
    }

    if show_all || script_entries == 0 {
        if script_entries > 0 {
            builder.model.push(MenuEntry::Separator);
        }
        match fonts.all_fonts() {
            Ok(all) => {
                for name in &all {
                    builder.push(name);
                }
            }
            Err(e) => log::warn!("fontsetter: enumerating all fonts failed: {}", e),
        }
    }

    model
}

impl FontSetter {
    /// Rebuild the selector popup. Does nothing (beyond a log line) when the
    /// popup has not been created yet.
    pub fn refresh_menu(&mut self) {
        let Some(popup) = self.host.shell.popup(SELECTOR_MENU_ID) else {
            log::debug!("fontsetter: menu is not loaded yet");
            return;
        };
        popup.clear();

        // Start the sheet over: the chrome font rule (if any), no previews.
        let chrome_font = if self.prefs.use_default_menu_font() {
            None
        } else {
            self.prefs.font_choice().as_option().map(str::to_string)
        };
        let styles = match style_mirror::reset(self.host.styles.as_mut(), chrome_font.as_deref()) {
            Ok(()) => {
                let styles: &mut dyn StyleHost = self.host.styles.as_mut();
                Some(styles)
            }
            Err(e) => {
                log::debug!("fontsetter: previews disabled: {}", e);
                None
            }
        };

        let model = build_menu(MenuSources {
            prefs: &self.prefs,
            fonts: self.host.fonts.as_ref(),
            strings: self.host.strings.as_ref(),
            smoothing: self.smoothing.as_mut(),
            styles,
        });

        for entry in model.entries() {
            popup.append(entry);
        }
    }
}
