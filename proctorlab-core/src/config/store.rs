//! Key-value settings stores
//!
//! Settings are a flat table of string keys to scalar values, persisted
//! as TOML in the user configuration directory. Each mutation writes the
//! whole table back to disk; the file is small and the write is cheap
//! relative to the drag gesture driving it.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use toml::Value;
use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult};

/// File name of the settings table inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Directory name under the platform config dir.
const CONFIG_DIR_NAME: &str = "proctorlab";

/// Persistent key-value settings.
///
/// Readers supply a default per key; missing or mistyped entries fall
/// back to it silently. Writers are fire-and-forget from the caller's
/// perspective: persistence failures are logged, never propagated into
/// the UI event path.
pub trait SettingsStore {
    /// Returns the float stored under `key`, or `default` if absent.
    fn get_float(&self, key: &str, default: f64) -> f64;

    /// Stores a float under `key`.
    fn set_float(&mut self, key: &str, value: f64);

    /// Returns the string stored under `key`, or `default` if absent.
    fn get_string(&self, key: &str, default: &str) -> String;

    /// Stores a string under `key`.
    fn set_string(&mut self, key: &str, value: &str);
}

/// TOML-file-backed settings store.
///
/// The table is loaded once at construction. A missing file yields an
/// empty table; a malformed file is logged and treated as empty rather
/// than failing startup.
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    values: toml::Table,
}

impl FileSettingsStore {
    /// Opens the store at the default platform location
    /// (`<config dir>/proctorlab/settings.toml`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] when the platform config
    /// directory cannot be determined.
    pub fn new() -> ConfigResult<Self> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_path(
            dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME),
        ))
    }

    /// Opens the store at an explicit path.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::load_table(&path);
        Self { path, values }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_table(path: &Path) -> toml::Table {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file yet, starting empty");
                return toml::Table::new();
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read settings file");
                return toml::Table::new();
            }
        };
        match contents.parse::<toml::Table>() {
            Ok(table) => table,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "settings file is not valid TOML, ignoring it");
                toml::Table::new()
            }
        }
    }

    /// Writes the current table to disk, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file or its directory cannot
    /// be written, or [`ConfigError::Serialize`] when the table cannot be
    /// rendered as TOML.
    pub fn save(&self) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: self.path.clone(),
                source,
            })?;
        }
        let rendered = toml::to_string(&self.values)?;
        fs::write(&self.path, rendered).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    fn save_or_warn(&self) {
        if let Err(err) = self.save() {
            warn!(error = %err, "failed to persist settings");
        }
    }
}

impl SettingsStore for FileSettingsStore {
    fn get_float(&self, key: &str, default: f64) -> f64 {
        match self.values.get(key) {
            Some(Value::Float(value)) => *value,
            Some(Value::Integer(value)) => *value as f64,
            _ => default,
        }
    }

    fn set_float(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), Value::Float(value));
        self.save_or_warn();
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), Value::String(value.to_string()));
        self.save_or_warn();
    }
}

/// In-memory settings store.
///
/// The injected fake used by tests and headless tooling; behaves like
/// [`FileSettingsStore`] minus the disk.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: HashMap<String, Value>,
}

impl MemorySettingsStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_float(&self, key: &str, default: f64) -> f64 {
        match self.values.get(key) {
            Some(Value::Float(value)) => *value,
            Some(Value::Integer(value)) => *value as f64,
            _ => default,
        }
    }

    fn set_float(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), Value::Float(value));
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), Value::String(value.to_string()));
    }
}
