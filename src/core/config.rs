//! Persisted message-format configuration.
//!
//! The message decoration template survives across invocations in a small
//! JSON file under the per-OS config directory. The store is an explicitly
//! injected dependency of the decoration path and the `fmt` command, so the
//! decoration logic stays testable without touching the filesystem.

use crate::core::dirs::get_config_directory;
use crate::core::error::Result;
use crate::core::message::{is_valid_template, DEFAULT_FORMAT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Process-wide configuration storage with cross-invocation persistence.
pub trait MessageFormatStore {
    /// The persisted template, or none when unset.
    fn get(&self) -> Option<String>;

    /// Persists a template. A value failing the validity rule clears the
    /// stored value back to default instead of storing garbage.
    fn set(&mut self, value: &str) -> Result<()>;

    /// The effective template used for decoration.
    fn format(&self) -> String {
        self.get().unwrap_or_else(|| DEFAULT_FORMAT.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct ConfigFile {
    message_format: Option<String>,
}

/// JSON-file-backed store at `<config-dir>/git-shorthand/config.json`.
pub struct FileFormatStore {
    config_path: PathBuf,
}

impl FileFormatStore {
    pub fn open() -> Result<Self> {
        let config_dir = get_config_directory()?;
        Ok(Self {
            config_path: config_dir.join("config.json"),
        })
    }

    /// Store rooted at an explicit file path.
    pub fn at(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    fn load(&self) -> ConfigFile {
        let content = match std::fs::read_to_string(&self.config_path) {
            Ok(content) => content,
            Err(_) => return ConfigFile::default(),
        };
        serde_json::from_str(&content).unwrap_or_else(|err| {
            log::warn!(
                "ignoring unreadable config file '{}': {err}",
                self.config_path.display()
            );
            ConfigFile::default()
        })
    }

    fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }
}

impl MessageFormatStore for FileFormatStore {
    fn get(&self) -> Option<String> {
        self.load().message_format
    }

    fn set(&mut self, value: &str) -> Result<()> {
        let config = ConfigFile {
            message_format: is_valid_template(value).then(|| value.to_string()),
        };
        log::debug!(
            "persisting message format {:?} to '{}'",
            config.message_format,
            self.config_path.display()
        );
        self.save(&config)
    }
}
