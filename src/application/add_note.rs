//! Add note use case

use crate::application::store::NoteStore;
use crate::error::Result;
use crate::infrastructure::config::PASTEPAD_DIR;
use crate::infrastructure::{EditorSession, FileStorage};
use std::io::Read;

/// Where the text of a new note comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteInput {
    /// Words from the command line, joined with single spaces
    Words(Vec<String>),
    /// Everything on standard input
    Stdin,
    /// A draft composed in the configured editor
    Editor,
}

/// Service for composing and adding notes
pub struct AddNoteService {
    store: NoteStore<FileStorage>,
    editor: String,
}

impl AddNoteService {
    pub fn new(store: NoteStore<FileStorage>, editor: String) -> Self {
        AddNoteService { store, editor }
    }

    /// Resolve the input to text and add it. Returns false when the text was
    /// blank and nothing was added.
    pub fn execute(&mut self, input: NoteInput) -> Result<bool> {
        let text = match input {
            NoteInput::Words(words) => return self.store.add_note(&words.join(" ")),
            NoteInput::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                text
            }
            NoteInput::Editor => {
                let draft = self
                    .store
                    .storage()
                    .root()
                    .join(PASTEPAD_DIR)
                    .join("NOTE_EDITMSG");
                EditorSession::new(self.editor.clone()).compose(&draft)?
            }
        };

        self.store.add_note(strip_line_ending(&text))
    }

    pub fn store(&self) -> &NoteStore<FileStorage> {
        &self.store
    }
}

/// Drop the single trailing newline editors and pipes append
fn strip_line_ending(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}
