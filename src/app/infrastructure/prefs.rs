use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::{AppError, Result};

/// A stored preference value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl From<bool> for PrefValue {
    fn from(value: bool) -> Self {
        PrefValue::Bool(value)
    }
}

impl From<i64> for PrefValue {
    fn from(value: i64) -> Self {
        PrefValue::Int(value)
    }
}

impl From<String> for PrefValue {
    fn from(value: String) -> Self {
        PrefValue::Str(value)
    }
}

impl From<&str> for PrefValue {
    fn from(value: &str) -> Self {
        PrefValue::Str(value.to_string())
    }
}

/// Types that can be read back out of a [`PrefValue`].
pub trait PrefType: Sized + Into<PrefValue> {
    fn from_pref(value: &PrefValue) -> Option<Self>;
}

impl PrefType for bool {
    fn from_pref(value: &PrefValue) -> Option<Self> {
        match value {
            PrefValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl PrefType for i64 {
    fn from_pref(value: &PrefValue) -> Option<Self> {
        match value {
            PrefValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl PrefType for String {
    fn from_pref(value: &PrefValue) -> Option<Self> {
        match value {
            PrefValue::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

/// Raw key/value persistence. Keys are full, already-namespaced names.
pub trait PrefBackend {
    /// The user value for `key`, `None` when the key is at its default.
    fn read(&self, key: &str) -> Result<Option<PrefValue>>;

    fn write(&mut self, key: &str, value: PrefValue) -> Result<()>;

    /// Drop the user value for `key`. Returns false when it had none.
    fn clear(&mut self, key: &str) -> Result<bool>;
}

/// Preferences held in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    values: BTreeMap<String, PrefValue>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &BTreeMap<String, PrefValue> {
        &self.values
    }
}

impl PrefBackend for MemoryPrefs {
    fn read(&self, key: &str) -> Result<Option<PrefValue>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: PrefValue) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<bool> {
        Ok(self.values.remove(key).is_some())
    }
}

/// Preferences persisted as a JSON object, flushed on every write.
#[derive(Debug)]
pub struct JsonPrefFile {
    path: PathBuf,
    values: BTreeMap<String, PrefValue>,
    /// Why an existing file could not be read. Such a file is never overwritten.
    unreadable: Option<String>,
}

impl JsonPrefFile {
    /// Load preferences from `path`. A missing file starts empty; a corrupt
    /// one is logged and also starts empty. A file that exists but cannot be
    /// read is logged, starts empty and stays read-only.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut unreadable = None;

        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => values,
                Err(e) => {
                    log::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                log::warn!("Failed to read {}: {}. Changes will not be saved.", path.display(), e);
                unreadable = Some(e.to_string());
                BTreeMap::new()
            }
        };

        Self {
            path,
            values,
            unreadable,
        }
    }

    /// Get prefs file path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("fontsetter");
        path.push("prefs.json");
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;

        Ok(())
    }

    /// Apply `change`, and roll it back if it cannot be flushed.
    fn commit(&mut self, key: &str, change: Option<PrefValue>) -> Result<()> {
        if let Some(reason) = &self.unreadable {
            return Err(AppError::Storage(format!(
                "not overwriting unreadable {}: {}",
                self.path.display(),
                reason
            )));
        }

        let previous = match change {
            Some(value) => self.values.insert(key.to_string(), value),
            None => self.values.remove(key),
        };

        if let Err(e) = self.flush() {
            match previous {
                Some(value) => self.values.insert(key.to_string(), value),
                None => self.values.remove(key),
            };
            return Err(AppError::Storage(format!(
                "failed to write {}: {}",
                self.path.display(),
                e
            )));
        }

        Ok(())
    }
}

impl PrefBackend for JsonPrefFile {
    fn read(&self, key: &str) -> Result<Option<PrefValue>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: PrefValue) -> Result<()> {
        if self.values.get(key) == Some(&value) {
            return Ok(());
        }
        self.commit(key, Some(value))
    }

    fn clear(&mut self, key: &str) -> Result<bool> {
        if !self.values.contains_key(key) {
            return Ok(false);
        }
        self.commit(key, None)?;
        Ok(true)
    }
}
