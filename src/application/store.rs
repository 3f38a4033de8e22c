//! Note/image store: the notebook mirrored into key-value storage

use crate::domain::{ImagePayload, Notebook};
use crate::error::{PastepadError, Result};
use crate::infrastructure::KeyValueStorage;
use serde::de::DeserializeOwned;

/// Storage key holding the JSON array of notes
pub const NOTES_KEY: &str = "notes";

/// Storage key holding the JSON array of image data URLs
pub const IMAGES_KEY: &str = "images";

/// Owns the notebook and its storage.
///
/// Every mutation that changes the notebook rewrites both storage keys before
/// returning, so the persisted copy always matches memory once a call
/// completes. Mutations that change nothing do not write.
#[derive(Debug)]
pub struct NoteStore<S: KeyValueStorage> {
    storage: S,
    notebook: Notebook,
}

impl<S: KeyValueStorage> NoteStore<S> {
    /// Restore the notebook from storage.
    ///
    /// A missing key, or one that is not UTF-8 or not a JSON string array,
    /// yields an empty sequence; only other storage I/O failures are errors.
    pub fn load(storage: S) -> Result<Self> {
        let notes: Vec<String> = Self::read_list(&storage, NOTES_KEY)?;
        let images: Vec<ImagePayload> = Self::read_list(&storage, IMAGES_KEY)?;
        log::debug!("loaded {} notes and {} images", notes.len(), images.len());

        Ok(NoteStore {
            storage,
            notebook: Notebook::new(notes, images),
        })
    }

    fn read_list<T: DeserializeOwned>(storage: &S, key: &str) -> Result<Vec<T>> {
        let raw = match storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(PastepadError::Io(e)) if e.kind() == std::io::ErrorKind::InvalidData => {
                log::warn!("ignoring unreadable '{}' entry: {}", key, e);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        match serde_json::from_str::<Option<Vec<T>>>(&raw) {
            Ok(list) => Ok(list.unwrap_or_default()),
            Err(e) => {
                log::warn!("ignoring malformed '{}' entry: {}", key, e);
                Ok(Vec::new())
            }
        }
    }

    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    pub fn notes(&self) -> &[String] {
        self.notebook.notes()
    }

    pub fn images(&self) -> &[ImagePayload] {
        self.notebook.images()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Add a note; returns false (and writes nothing) for blank text
    pub fn add_note(&mut self, text: &str) -> Result<bool> {
        if !self.notebook.add_note(text) {
            log::debug!("ignoring blank note");
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Delete the note at 0-based `index`; out of range returns `None`
    pub fn delete_note(&mut self, index: usize) -> Result<Option<String>> {
        let removed = self.notebook.delete_note(index);
        if removed.is_some() {
            self.persist()?;
        }
        Ok(removed)
    }

    pub fn append_image(&mut self, image: ImagePayload) -> Result<()> {
        self.notebook.append_image(image);
        self.persist()
    }

    /// Append a batch of images in order with a single write
    pub fn append_images(&mut self, images: Vec<ImagePayload>) -> Result<usize> {
        let added = self.notebook.append_images(images);
        if added > 0 {
            self.persist()?;
        }
        Ok(added)
    }

    /// Rewrite both sequences to storage
    pub fn persist(&mut self) -> Result<()> {
        let notes = serde_json::to_string(self.notebook.notes())?;
        let images = serde_json::to_string(self.notebook.images())?;
        self.storage.set(NOTES_KEY, &notes)?;
        self.storage.set(IMAGES_KEY, &images)?;
        Ok(())
    }
}
