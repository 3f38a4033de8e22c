//! Domain layer - Notes, image payloads and export rules

pub mod export_policy;
pub mod notebook;
pub mod payload;

pub use export_policy::{CorruptImagePolicy, ImageNaming, NOTES_FILENAME, NOTES_MIME_TYPE};
pub use notebook::Notebook;
pub use payload::{detect_mime_type, DecodedImage, ImagePayload};
