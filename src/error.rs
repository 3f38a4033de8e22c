//! Error types for pastepad

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pastepad application
#[derive(Debug, Error)]
pub enum PastepadError {
    #[error("Not a pastepad directory: {0}")]
    NotPastepadDirectory(PathBuf),

    #[error("Invalid image payload: {0}")]
    InvalidPayload(String),

    #[error("Corrupt image at position {index}: {reason}")]
    CorruptImage { index: usize, reason: String },

    #[error("Note not found at position {0}")]
    NoteNotFound(usize),

    #[error("Paste source not found: {0}")]
    PasteSource(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PastepadError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PastepadError::NotPastepadDirectory(_) => 2,
            PastepadError::PasteSource(_) => 3,
            PastepadError::NoteNotFound(_) => 4,
            PastepadError::CorruptImage { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PastepadError::NotPastepadDirectory(path) => {
                format!(
                    "Not a pastepad directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'pastepad init' in this directory to start a notepad\n\
                    • Navigate to an existing pastepad directory\n\
                    • Set PASTEPAD_ROOT environment variable to your notepad path",
                    path.display()
                )
            }
            PastepadError::NoteNotFound(position) => {
                format!(
                    "No note at position {}\n\n\
                    Suggestions:\n\
                    • Use 'pastepad list' to see note positions\n\
                    • Positions start at 1",
                    position
                )
            }
            PastepadError::PasteSource(path) => {
                format!(
                    "Paste source not found: {}\n\n\
                    Suggestions:\n\
                    • Pass image files or directories containing images\n\
                    • Use '-' to read a single item from stdin",
                    path.display()
                )
            }
            PastepadError::CorruptImage { index, reason } => {
                format!(
                    "Corrupt image at position {}: {}\n\n\
                    Suggestions:\n\
                    • Skip unreadable images: pastepad config on_corrupt_image skip",
                    index, reason
                )
            }
            PastepadError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Pass the note directly: pastepad add 'my note'",
                    msg
                )
            }
            PastepadError::Config(msg) => {
                if msg.contains("image_naming") {
                    format!(
                        "{}\n\n\
                        Valid values: fixed, detected\n\
                        Example: pastepad config image_naming detected",
                        msg
                    )
                } else if msg.contains("on_corrupt_image") {
                    format!(
                        "{}\n\n\
                        Valid values: skip, abort\n\
                        Example: pastepad config on_corrupt_image abort",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PastepadError
pub type Result<T> = std::result::Result<T, PastepadError>;
