/// Prefix every engine-owned preference key is stored under.
pub const PREF_NAMESPACE: &str = "extensions.fontsetter.";

/// Engine preference keys (relative to [`PREF_NAMESPACE`]).
pub mod keys {
    pub const CURRENT_FONT: &str = "currentfont";
    pub const USE_DEFAULT_MENU_FONT: &str = "use_default_menu_font";
    pub const SHOW_ALL_FONTS: &str = "show_all_fonts";
    pub const DEBUG: &str = "debug";
    pub const LAST_UI_CHANGE: &str = "lastUIChange";
    pub const FIRST_RUN: &str = "firstrun";
    pub const RESTORE_USE_DOCUMENT_FONTS: &str = "restore_use_document_fonts";
}

/// Host preference keys, read and written without the namespace prefix.
pub mod host_keys {
    pub const LOCALE: &str = "general.useragent.locale";
    pub const USE_DOCUMENT_FONTS: &str = "browser.display.use_document_fonts";
}

pub const DEFAULT_LOCALE: &str = "zh-CN";

/// Schema version below which the first-run migration runs.
pub const UI_CHANGE_THRESHOLD: &str = "0.3";

const INITIAL_SCHEMA_VERSION: &str = "0.0";

const WEB_FONT_GENERICS: [&str; 3] = ["monospace", "sans-serif", "serif"];
const WEB_FONT_SCRIPTS: [&str; 4] = ["zh-CN", "zh-HK", "zh-TW", "x-western"];

/// Every `font.name.<generic>.<script>` key the web-content mirror writes.
pub fn web_font_keys() -> impl Iterator<Item = String> {
    WEB_FONT_GENERICS.iter().flat_map(|generic| {
        WEB_FONT_SCRIPTS
            .iter()
            .map(move |script| format!("font.name.{}.{}", generic, script))
    })
}

/// The user's chosen display font. An empty name means "use the platform default".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontChoice {
    name: String,
}

impl FontChoice {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_default(&self) -> bool {
        self.name.is_empty()
    }

    /// True when a font is chosen and it is `candidate`.
    pub fn matches(&self, candidate: &str) -> bool {
        !self.is_default() && self.name == candidate
    }

    /// The chosen name, or `None` for the platform default.
    pub fn as_option(&self) -> Option<&str> {
        if self.is_default() { None } else { Some(&self.name) }
    }
}

/// Boolean settings plus the migration schema version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFlags {
    pub use_default_menu_font: bool,
    pub show_all_fonts: bool,
    pub debug_logging: bool,
    pub schema_version: String,
}

fn default_schema_version() -> String {
    INITIAL_SCHEMA_VERSION.to_string()
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            use_default_menu_font: false,
            show_all_fonts: false,
            debug_logging: false,
            schema_version: default_schema_version(),
        }
    }
}

impl FeatureFlags {
    /// Whether the stored schema version already satisfies `threshold`.
    pub fn schema_at_least(&self, threshold: &str) -> bool {
        parse_schema_version(&self.schema_version) >= parse_schema_version(threshold)
    }
}

/// Parse a short "major.minor" version, padding missing components with zero.
/// Anything unparseable counts as 0.0.0 so the migration runs.
pub fn parse_schema_version(raw: &str) -> semver::Version {
    let mut parts: Vec<&str> = raw.trim().split('.').collect();
    while parts.len() < 3 {
        parts.push("0");
    }
    semver::Version::parse(&parts.join(".")).unwrap_or_else(|_| semver::Version::new(0, 0, 0))
}
