//! Application layer - Use cases and orchestration

pub mod add_note;
pub mod export;
pub mod init;
pub mod manage_config;
pub mod paste;
pub mod store;

pub use add_note::{AddNoteService, NoteInput};
pub use export::{ExportReport, ExportService, SkippedImage};
pub use paste::PasteCapture;
pub use store::NoteStore;
