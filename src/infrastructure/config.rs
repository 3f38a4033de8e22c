//! Configuration management

use crate::domain::{CorruptImagePolicy, ImageNaming};
use crate::error::{PastepadError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-notepad metadata directory
pub const PASTEPAD_DIR: &str = ".pastepad";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::detect_default_editor")]
    pub editor: String,
    #[serde(default = "Config::default_export_dir")]
    pub export_dir: String,
    #[serde(default)]
    pub image_naming: ImageNaming,
    #[serde(default)]
    pub on_corrupt_image: CorruptImagePolicy,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            export_dir: Self::default_export_dir(),
            image_naming: ImageNaming::default(),
            on_corrupt_image: CorruptImagePolicy::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .pastepad/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(PASTEPAD_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PastepadError::NotPastepadDirectory(path.to_path_buf())
            } else {
                PastepadError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| PastepadError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .pastepad/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let pastepad_dir = path.join(PASTEPAD_DIR);
        let config_path = pastepad_dir.join("config.toml");

        // Ensure .pastepad directory exists
        if !pastepad_dir.exists() {
            fs::create_dir(&pastepad_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| PastepadError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Resolve the export directory against the notepad root
    pub fn export_path(&self, root: &Path) -> PathBuf {
        let dir = Path::new(&self.export_dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            root.join(dir)
        }
    }

    /// Export into the notepad root unless configured otherwise
    fn default_export_dir() -> String {
        ".".to_string()
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new();
        assert_eq!(config.export_dir, ".");
        assert_eq!(config.image_naming, ImageNaming::Fixed);
        assert_eq!(config.on_corrupt_image, CorruptImagePolicy::Skip);
        assert!(!config.editor.is_empty());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.image_naming = ImageNaming::Detected;
        config.export_dir = "out".to_string();

        // Save config
        config.save_to_dir(temp.path()).unwrap();

        // Check .pastepad directory was created
        assert!(temp.path().join(".pastepad").exists());
        assert!(temp.path().join(".pastepad/config.toml").exists());

        // Load config and verify it matches
        let loaded = Config::load_from_dir(temp.path()).unwrap();

        assert_eq!(loaded.image_naming, ImageNaming::Detected);
        assert_eq!(loaded.export_dir, "out");
        assert_eq!(loaded.editor, config.editor);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        // Try to load config from directory without .pastepad
        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            PastepadError::NotPastepadDirectory(_) => {}
            other => panic!("Expected NotPastepadDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".pastepad")).unwrap();
        fs::write(
            temp.path().join(".pastepad/config.toml"),
            "on_corrupt_image = \"abort\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.on_corrupt_image, CorruptImagePolicy::Abort);
        assert_eq!(loaded.image_naming, ImageNaming::Fixed);
        assert_eq!(loaded.export_dir, ".");
    }

    #[test]
    fn test_load_invalid_value_is_config_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".pastepad")).unwrap();
        fs::write(
            temp.path().join(".pastepad/config.toml"),
            "image_naming = \"sometimes\"\n",
        )
        .unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(PastepadError::Config(_))
        ));
    }

    #[test]
    fn test_export_path_relative_and_absolute() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();

        assert_eq!(config.export_path(temp.path()), temp.path().join("."));

        config.export_dir = "exports".to_string();
        assert_eq!(config.export_path(temp.path()), temp.path().join("exports"));

        let absolute = temp.path().join("elsewhere");
        config.export_dir = absolute.to_string_lossy().to_string();
        assert_eq!(config.export_path(Path::new("/unused")), absolute);
    }

    #[test]
    fn test_default_editor_detection() {
        let editor = Config::detect_default_editor();
        assert!(!editor.is_empty());

        // Should be notepad on Windows, nano on Unix (or env var if set)
        if cfg!(windows) {
            assert!(
                editor == "notepad"
                    || std::env::var("EDITOR").is_ok()
                    || std::env::var("VISUAL").is_ok()
            );
        } else {
            assert!(
                editor == "nano"
                    || std::env::var("EDITOR").is_ok()
                    || std::env::var("VISUAL").is_ok()
            );
        }
    }
}
