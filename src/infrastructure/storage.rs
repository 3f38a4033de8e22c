//! Key-value storage backends

use crate::error::{PastepadError, Result};
use crate::infrastructure::config::{Config, PASTEPAD_DIR};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// String-valued key-value storage, in the manner of browser local storage.
///
/// Values are opaque strings; encoding is the caller's business.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage rooted at a notepad directory: one file per key under
/// `.pastepad/storage/`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    pub root: PathBuf,
}

impl FileStorage {
    /// Create a storage for the given notepad root
    pub fn new(root: PathBuf) -> Self {
        FileStorage { root }
    }

    /// Discover the notepad root.
    /// First checks the PASTEPAD_ROOT environment variable, then walks up from
    /// the current directory.
    pub fn discover() -> Result<Self> {
        // 1. Check PASTEPAD_ROOT environment variable first
        if let Ok(root_path) = std::env::var("PASTEPAD_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_pastepad_dir(&path) {
                return Ok(FileStorage::new(path));
            } else {
                return Err(PastepadError::Config(format!(
                    "PASTEPAD_ROOT is set to '{}' but no .pastepad directory found. \
                    Run 'pastepad init' in that directory or unset PASTEPAD_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the notepad root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_pastepad_dir(&current) {
                return Ok(FileStorage::new(current));
            }

            // Try to move to parent directory
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                // Reached filesystem root without finding .pastepad
                None => return Err(PastepadError::NotPastepadDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_pastepad_dir(path: &Path) -> bool {
        path.join(PASTEPAD_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the .pastepad directory structure
    pub fn initialize(&self) -> Result<()> {
        let pastepad_dir = self.root.join(PASTEPAD_DIR);

        if pastepad_dir.exists() {
            return Err(PastepadError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(self.storage_dir())?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn storage_dir(&self) -> PathBuf {
        self.root.join(PASTEPAD_DIR).join("storage")
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(PastepadError::Config(format!(
                "Invalid storage key: '{}'",
                key
            )));
        }
        Ok(self.storage_dir().join(key))
    }

    /// Best-effort atomic replace: write to a temp file in the same directory,
    /// then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.pastepad-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("value"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        // Best-effort atomic-ish replacement on platforms where rename cannot overwrite
        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PastepadError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        Self::write_atomic(&path, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn initialized() -> (TempDir, FileStorage) {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().to_path_buf());
        storage.initialize().unwrap();
        (temp, storage)
    }

    #[test]
    fn test_initialize_creates_storage_dir() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().to_path_buf());

        storage.initialize().unwrap();

        assert!(temp.path().join(".pastepad/storage").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (_temp, storage) = initialized();
        assert!(storage.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let (temp, _storage) = initialized();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let found = FileStorage::discover_from(&subdir).unwrap();
        assert_eq!(found.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_missing() {
        let temp = TempDir::new().unwrap();

        match FileStorage::discover_from(temp.path()).unwrap_err() {
            PastepadError::NotPastepadDirectory(_) => {}
            other => panic!("Expected NotPastepadDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_missing_key() {
        let (_temp, storage) = initialized();
        assert_eq!(storage.get("notes").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let (temp, mut storage) = initialized();

        storage.set("notes", "[\"a\"]").unwrap();

        assert_eq!(storage.get("notes").unwrap().as_deref(), Some("[\"a\"]"));
        let on_disk = fs::read_to_string(temp.path().join(".pastepad/storage/notes")).unwrap();
        assert_eq!(on_disk, "[\"a\"]");
    }

    #[test]
    fn test_set_overwrites_without_leftovers() {
        let (temp, mut storage) = initialized();

        storage.set("images", "one").unwrap();
        storage.set("images", "two").unwrap();

        assert_eq!(storage.get("images").unwrap().as_deref(), Some("two"));
        let entries: Vec<_> = fs::read_dir(temp.path().join(".pastepad/storage"))
            .unwrap()
            .filter_map(|e| e.ok())
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let (_temp, mut storage) = initialized();
        assert!(storage.set("../escape", "x").is_err());
        assert!(storage.get("").is_err());
    }

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        storage.set("k", "w").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("w"));
    }
}
