use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Whole-file text access used by the section patcher.
pub trait ResourceStore {
    /// The full text of `path`, `None` when it does not exist.
    fn read_text(&self, path: &Path) -> std::io::Result<Option<String>>;

    /// Replace the contents of `path` with `text` (truncate, then write).
    fn write_text(&mut self, path: &Path, text: &str) -> std::io::Result<()>;
}

/// The local filesystem. Parent directories are created on write.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsResources;

impl ResourceStore for FsResources {
    fn read_text(&self, path: &Path) -> std::io::Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write_text(&mut self, path: &Path, text: &str) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, text)
    }
}

/// Returns the default override file: config_dir/fontsetter/chrome/userChrome.css
pub fn default_chrome_file() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("fontsetter");
    path.push("chrome");
    path.push("userChrome.css");
    path
}
