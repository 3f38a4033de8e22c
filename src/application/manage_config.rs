//! Config management use case

use crate::domain::{CorruptImagePolicy, ImageNaming};
use crate::error::{PastepadError, Result};
use crate::infrastructure::{Config, FileStorage};
use std::str::FromStr;

/// Keys accepted by `config get`
pub const READABLE_KEYS: &str = "editor, export_dir, image_naming, on_corrupt_image, created";

/// Service for managing notepad configuration
pub struct ConfigService {
    storage: FileStorage,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(storage: FileStorage) -> Self {
        ConfigService { storage }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.storage.load_config()?;

        match key {
            "editor" => Ok(config.editor),
            "export_dir" => Ok(config.export_dir),
            "image_naming" => Ok(config.image_naming.to_string()),
            "on_corrupt_image" => Ok(config.on_corrupt_image.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(PastepadError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, READABLE_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.storage.load_config()?;

        match key {
            "editor" => config.editor = value.to_string(),
            "export_dir" => {
                if value.trim().is_empty() {
                    return Err(PastepadError::Config(
                        "export_dir cannot be empty".to_string(),
                    ));
                }
                config.export_dir = value.to_string();
            }
            "image_naming" => {
                config.image_naming = ImageNaming::from_str(value).map_err(PastepadError::Config)?;
            }
            "on_corrupt_image" => {
                config.on_corrupt_image =
                    CorruptImagePolicy::from_str(value).map_err(PastepadError::Config)?;
            }
            "created" => {
                return Err(PastepadError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(PastepadError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: editor, export_dir, image_naming, on_corrupt_image",
                    key
                )));
            }
        }

        self.storage.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.storage.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        let service = ConfigService::new(FileStorage::new(temp.path().to_path_buf()));
        (temp, service)
    }

    #[test]
    fn test_get_defaults() {
        let (_temp, service) = service();
        assert_eq!(service.get("image_naming").unwrap(), "fixed");
        assert_eq!(service.get("on_corrupt_image").unwrap(), "skip");
        assert_eq!(service.get("export_dir").unwrap(), ".");
    }

    #[test]
    fn test_set_then_get() {
        let (_temp, service) = service();

        service.set("image_naming", "detected").unwrap();
        service.set("export_dir", "exports").unwrap();

        assert_eq!(service.get("image_naming").unwrap(), "detected");
        assert_eq!(service.get("export_dir").unwrap(), "exports");
    }

    #[test]
    fn test_set_invalid_value() {
        let (_temp, service) = service();
        assert!(service.set("on_corrupt_image", "maybe").is_err());
        assert!(service.set("export_dir", " ").is_err());
    }

    #[test]
    fn test_created_is_read_only() {
        let (_temp, service) = service();
        assert!(service.get("created").is_ok());
        assert!(service.set("created", "2020-01-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = service();
        let err = service.get("colour").unwrap_err();
        assert!(err.to_string().contains("Unknown config key: 'colour'"));
    }
}
