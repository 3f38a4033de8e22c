//! Paste events and the sources they are read from

use crate::domain::detect_mime_type;
use crate::error::{PastepadError, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Source name that reads one item from standard input
pub const STDIN_SOURCE: &str = "-";

/// One piece of pasted content with its declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardItem {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ClipboardItem {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        ClipboardItem {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Build an item whose type is sniffed from its content
    pub fn sniffed(bytes: Vec<u8>) -> Self {
        ClipboardItem::new(detect_mime_type(&bytes), bytes)
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// A single paste: the ordered list of items it carried
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteEvent {
    pub items: Vec<ClipboardItem>,
}

impl PasteEvent {
    pub fn new(items: Vec<ClipboardItem>) -> Self {
        PasteEvent { items }
    }

    /// Collect items from command-line sources, in argument order.
    ///
    /// A file becomes one item, a directory contributes every file beneath
    /// it (sorted by path, hidden entries skipped), and `-` reads stdin.
    pub fn from_sources(sources: &[PathBuf]) -> Result<Self> {
        let mut items = Vec::new();
        for source in sources {
            if source.as_os_str() == STDIN_SOURCE {
                let mut bytes = Vec::new();
                std::io::stdin().read_to_end(&mut bytes)?;
                items.push(ClipboardItem::sniffed(bytes));
            } else if source.is_dir() {
                items.extend(Self::read_directory(source)?);
            } else if source.is_file() {
                items.push(ClipboardItem::sniffed(fs::read(source)?));
            } else {
                return Err(PastepadError::PasteSource(source.clone()));
            }
        }
        Ok(PasteEvent { items })
    }

    fn read_directory(dir: &Path) -> Result<Vec<ClipboardItem>> {
        let walker = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || entry
                        .file_name()
                        .to_str()
                        .is_none_or(|name| !name.starts_with('.'))
            });

        let mut items = Vec::new();
        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            items.push(ClipboardItem::sniffed(fs::read(entry.path())?));
        }
        Ok(items)
    }
}
