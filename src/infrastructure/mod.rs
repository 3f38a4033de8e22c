//! Infrastructure layer - External I/O and persistence

pub mod clipboard;
pub mod config;
pub mod download;
pub mod editor;
pub mod storage;

pub use clipboard::{ClipboardItem, PasteEvent};
pub use config::Config;
pub use download::{DirectoryDownloader, Downloader};
pub use editor::EditorSession;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
