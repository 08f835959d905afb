use fltk::app;

use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::host::FontEnumerator;

/// Languages whose fonts are usually named in their own script.
const NATIVE_NAMED_LANGUAGES: [&str; 3] = ["zh", "ja", "ko"];

/// Installed fonts as FLTK sees them. The app must have been created with
/// `load_system_fonts()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FltkFonts;

fn installed() -> Vec<String> {
    let mut names: Vec<String> = app::fonts()
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    names.dedup();
    names
}

impl FontEnumerator for FltkFonts {
    fn fonts_for_language(&self, language: &str) -> Result<Vec<String>> {
        let primary = language.split('-').next().unwrap_or_default().to_ascii_lowercase();
        if !NATIVE_NAMED_LANGUAGES.contains(&primary.as_str()) {
            return Ok(Vec::new());
        }
        Ok(installed()
            .into_iter()
            .filter(|name| !name.is_ascii())
            .collect())
    }

    fn all_fonts(&self) -> Result<Vec<String>> {
        Ok(installed())
    }
}
