//! pastepad - Terminal notepad for text notes and pasted images
//!
//! Notes and images live in a small key-value store under `.pastepad/`,
//! rewritten after every change, and can be exported as `notes.txt` plus one
//! file per image.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PastepadError;
