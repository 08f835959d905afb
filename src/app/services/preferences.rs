use crate::app::domain::settings::{PREF_NAMESPACE, keys};
use crate::app::domain::{FeatureFlags, FontChoice};
use crate::app::infrastructure::prefs::{PrefBackend, PrefType};

/// Typed, namespaced access to the preference backend.
///
/// Storage failures never escape: reads fall back to the supplied default,
/// writes report `false`, and both are logged.
pub struct Preferences {
    backend: Box<dyn PrefBackend>,
}

impl Preferences {
    pub fn new(backend: Box<dyn PrefBackend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &dyn PrefBackend {
        self.backend.as_ref()
    }

    fn namespaced(key: &str) -> String {
        format!("{}{}", PREF_NAMESPACE, key)
    }

    /// Read engine preference `key`, or `default` when unset or unreadable.
    pub fn get<T: PrefType>(&self, key: &str, default: T) -> T {
        self.get_host(&Self::namespaced(key), default)
    }

    /// Write engine preference `key`. Returns false when the write failed.
    pub fn set<T: PrefType>(&mut self, key: &str, value: T) -> bool {
        self.set_host(&Self::namespaced(key), value)
    }

    /// Return engine preference `key` to its default.
    pub fn reset(&mut self, key: &str) {
        self.reset_host(&Self::namespaced(key));
    }

    /// Read a host preference by its full name.
    pub fn get_host<T: PrefType>(&self, full_key: &str, default: T) -> T {
        match self.backend.read(full_key) {
            Ok(Some(value)) => T::from_pref(&value).unwrap_or_else(|| {
                log::debug!("fontsetter: {} holds {:?}, using default", full_key, value);
                default
            }),
            Ok(None) => default,
            Err(e) => {
                log::warn!("fontsetter: reading {} failed: {}", full_key, e);
                default
            }
        }
    }

    /// Write a host preference by its full name.
    pub fn set_host<T: PrefType>(&mut self, full_key: &str, value: T) -> bool {
        match self.backend.write(full_key, value.into()) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("fontsetter: writing {} failed: {}", full_key, e);
                false
            }
        }
    }

    /// Return a host preference to its platform default. Resetting a key that
    /// is already at its default does nothing.
    pub fn reset_host(&mut self, full_key: &str) {
        match self.backend.clear(full_key) {
            Ok(true) => {}
            Ok(false) => log::debug!("fontsetter: {} is already default", full_key),
            Err(e) => log::warn!("fontsetter: resetting {} failed: {}", full_key, e),
        }
    }

    /// Store the default of every engine flag that has no value yet.
    pub fn init_defaults(&mut self) {
        self.init(keys::CURRENT_FONT, String::new());
        self.init(keys::USE_DEFAULT_MENU_FONT, false);
        self.init(keys::SHOW_ALL_FONTS, false);
        self.init(keys::DEBUG, false);
        self.init(keys::RESTORE_USE_DOCUMENT_FONTS, true);
    }

    fn init<T: PrefType>(&mut self, key: &str, default: T) {
        let full_key = Self::namespaced(key);
        match self.backend.read(&full_key) {
            Ok(Some(_)) => {}
            Ok(None) => {
                self.set_host(&full_key, default);
            }
            Err(e) => log::warn!("fontsetter: reading {} failed: {}", full_key, e),
        }
    }

    pub fn font_choice(&self) -> FontChoice {
        FontChoice::new(self.get(keys::CURRENT_FONT, String::new()))
    }

    pub fn set_font_choice(&mut self, choice: &FontChoice) -> bool {
        self.set(keys::CURRENT_FONT, choice.name().to_string())
    }

    pub fn use_default_menu_font(&self) -> bool {
        self.get(keys::USE_DEFAULT_MENU_FONT, false)
    }

    pub fn show_all_fonts(&self) -> bool {
        self.get(keys::SHOW_ALL_FONTS, false)
    }

    pub fn debug_enabled(&self) -> bool {
        self.get(keys::DEBUG, false)
    }

    /// Snapshot of every flag.
    pub fn flags(&self) -> FeatureFlags {
        let defaults = FeatureFlags::default();
        FeatureFlags {
            use_default_menu_font: self.use_default_menu_font(),
            show_all_fonts: self.show_all_fonts(),
            debug_logging: self.debug_enabled(),
            schema_version: self.get(keys::LAST_UI_CHANGE, defaults.schema_version),
        }
    }
}
