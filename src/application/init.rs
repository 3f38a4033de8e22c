//! Initialize notepad use case

use crate::application::store::NoteStore;
use crate::error::Result;
use crate::infrastructure::{Config, FileStorage};
use std::fs;
use std::path::Path;

/// Initialize a new notepad at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let storage = FileStorage::new(path.to_path_buf());
    storage.initialize()?;
    storage.save_config(&Config::new())?;

    // Seed both keys so the storage directory mirrors an empty notebook
    NoteStore::load(storage)?.persist()?;

    println!("Initialized pastepad at {}", path.display());

    Ok(())
}
