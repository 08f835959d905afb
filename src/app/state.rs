use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;

use super::domain::Command;
use super::domain::menu::SELECTOR_MENU_ID;
use super::infrastructure::files::ResourceStore;
use super::infrastructure::host::{FontEnumerator, StringBundle, StyleHost, UiShell};
use super::infrastructure::prefs::PrefBackend;
use super::services::preferences::Preferences;
use super::services::smoothing::FontSmoothing;

/// How long the host waits after window load before running [`FontSetter::startup`].
pub const STARTUP_DELAY: Duration = Duration::from_millis(50);

pub const STATUSBAR_ANCHOR: &str = "fontsetter-statusbar";
pub const TOOLBAR_BUTTON_ID: &str = "tcfontsetter";

/// The host services the engine drives.
pub struct Host {
    pub shell: Box<dyn UiShell>,
    pub styles: Box<dyn StyleHost>,
    pub fonts: Box<dyn FontEnumerator>,
    pub strings: Box<dyn StringBundle>,
}

/// The font-configuration engine for one window.
///
/// Owns the preference store, the override file location, the host
/// collaborators and, where the platform has one, the smoothing control.
/// Every user command enters through [`FontSetter::dispatch`].
pub struct FontSetter {
    pub(crate) prefs: Preferences,
    pub(crate) resources: Box<dyn ResourceStore>,
    pub(crate) chrome_file: PathBuf,
    pub(crate) host: Host,
    pub(crate) smoothing: Option<FontSmoothing>,
}

impl FontSetter {
    pub fn new(
        backend: Box<dyn PrefBackend>,
        resources: Box<dyn ResourceStore>,
        chrome_file: PathBuf,
        host: Host,
        smoothing: Option<FontSmoothing>,
    ) -> Self {
        Self {
            prefs: Preferences::new(backend),
            resources,
            chrome_file,
            host,
            smoothing,
        }
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    pub fn chrome_file(&self) -> &Path {
        &self.chrome_file
    }

    pub fn has_smoothing(&self) -> bool {
        self.smoothing.is_some()
    }

    /// The delayed startup task: store flag defaults, pick the log level,
    /// migrate once, build the menu. Skipping it is harmless; it simply runs
    /// next session.
    pub fn startup(&mut self) {
        self.prefs.init_defaults();
        self.apply_log_level();
        self.check_first_run();
        self.refresh_menu();
    }

    fn apply_log_level(&self) {
        let level = if self.prefs.debug_enabled() {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        log::set_max_level(level);
    }

    /// Handle one command from the host UI.
    pub fn dispatch(&mut self, command: Command) {
        log::debug!("fontsetter: dispatch {:?}", command);
        match command {
            Command::OpenPopup => self.open_popup(),
            Command::RestoreDefault => self.restore_default(),
            Command::ToggleMenuFont => self.toggle_menu_font_override(),
            Command::ToggleShowAllFonts => self.toggle_show_all_fonts(),
            Command::ToggleSmoothing => self.toggle_smoothing(),
            Command::SetFont(name) => self.set_font(&name),
        }
    }

    /// Show the selector popup under the status-bar panel, or the toolbar
    /// button when there is no status bar.
    pub fn open_popup(&mut self) {
        let anchor = if self.host.shell.has_element(STATUSBAR_ANCHOR) {
            STATUSBAR_ANCHOR
        } else {
            TOOLBAR_BUTTON_ID
        };

        if !self.host.shell.open_popup(SELECTOR_MENU_ID, anchor) {
            log::debug!("fontsetter: cannot open popup at {}", anchor);
        }
    }

    /// Flip ClearType. The only command that reports failure to the user.
    pub fn toggle_smoothing(&mut self) {
        let Some(smoothing) = self.smoothing.as_mut() else {
            log::debug!("fontsetter: no font smoothing control on this platform");
            return;
        };

        match smoothing.toggle() {
            Ok(enabled) => log::debug!("fontsetter: ClearType now {}", enabled),
            Err(e) => {
                log::warn!("fontsetter: switch clear type failed: {}", e);
                self.host.shell.alert(&e.to_string());
                return;
            }
        }

        self.refresh_menu();
    }
}
