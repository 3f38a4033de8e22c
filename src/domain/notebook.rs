//! Notebook aggregate: ordered notes and pasted images

use crate::domain::ImagePayload;

/// In-memory notes and images, in insertion order.
///
/// Mutators report whether anything changed so callers know when a
/// persist is due.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    notes: Vec<String>,
    images: Vec<ImagePayload>,
}

impl Notebook {
    pub fn new(notes: Vec<String>, images: Vec<ImagePayload>) -> Self {
        Notebook { notes, images }
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn images(&self) -> &[ImagePayload] {
        &self.images
    }

    /// Append a note. Blank text (after trimming) is ignored; otherwise the
    /// text is stored exactly as given.
    pub fn add_note(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.notes.push(text.to_string());
        true
    }

    /// Remove and return the note at `index`; out of range is a no-op.
    pub fn delete_note(&mut self, index: usize) -> Option<String> {
        if index < self.notes.len() {
            Some(self.notes.remove(index))
        } else {
            None
        }
    }

    pub fn append_image(&mut self, image: ImagePayload) {
        self.images.push(image);
    }

    /// Append several images, keeping their order. Returns how many were added.
    pub fn append_images(&mut self, images: Vec<ImagePayload>) -> usize {
        let count = images.len();
        self.images.extend(images);
        count
    }

    /// Notes joined with newlines, as written to the exported text file
    pub fn notes_text(&self) -> String {
        self.notes.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notebook_with(notes: &[&str]) -> Notebook {
        Notebook::new(notes.iter().map(|s| s.to_string()).collect(), vec![])
    }

    #[test]
    fn test_add_note_appends_unchanged() {
        let mut book = notebook_with(&["first"]);
        assert!(book.add_note("  second with spaces "));
        assert_eq!(book.notes(), &["first", "  second with spaces "]);
    }

    #[test]
    fn test_add_blank_note_ignored() {
        let mut book = notebook_with(&["first"]);
        assert!(!book.add_note(""));
        assert!(!book.add_note(" \n\t "));
        assert_eq!(book.notes(), &["first"]);
    }

    #[test]
    fn test_duplicates_permitted() {
        let mut book = Notebook::default();
        book.add_note("same");
        book.add_note("same");
        assert_eq!(book.notes().len(), 2);
    }

    #[test]
    fn test_delete_shifts_left() {
        let mut book = notebook_with(&["a", "b", "c", "d"]);
        assert_eq!(book.delete_note(1), Some("b".to_string()));
        assert_eq!(book.notes(), &["a", "c", "d"]);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut book = notebook_with(&["a"]);
        assert_eq!(book.delete_note(1), None);
        assert_eq!(book.notes(), &["a"]);
    }

    #[test]
    fn test_append_images_keeps_order() {
        let mut book = Notebook::default();
        book.append_image(ImagePayload::encode("image/png", b"0"));
        let added = book.append_images(vec![
            ImagePayload::encode("image/png", b"1"),
            ImagePayload::encode("image/gif", b"2"),
        ]);
        assert_eq!(added, 2);
        let bytes: Vec<_> = book.images().iter().map(|i| i.decode().unwrap().bytes).collect();
        assert_eq!(bytes, vec![b"0".to_vec(), b"1".to_vec(), b"2".to_vec()]);
    }

    #[test]
    fn test_notes_text() {
        assert_eq!(notebook_with(&["x", "y"]).notes_text(), "x\ny");
        assert_eq!(Notebook::default().notes_text(), "");
    }
}
