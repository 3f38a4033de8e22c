//! Editor integration for composing notes

use crate::error::{PastepadError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Session for composing a note in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open `draft_path` in the editor, wait for it to exit and return what
    /// was written. The draft file is removed afterwards.
    pub fn compose(&self, draft_path: &Path) -> Result<String> {
        fs::write(draft_path, "")?;

        let outcome = self.run(draft_path).and_then(|_| {
            fs::read_to_string(draft_path).map_err(PastepadError::Io)
        });

        if let Err(e) = fs::remove_file(draft_path) {
            log::debug!("could not remove draft {}: {}", draft_path.display(), e);
        }

        outcome
    }

    fn run(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();

        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&program);
            cmd
        } else {
            Command::new(&program)
        };

        let status = cmd.args(&all_args).status().map_err(|e| {
            PastepadError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(PastepadError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            let fallback = if cfg!(windows) { "notepad" } else { "nano" };
            return (fallback.to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}
