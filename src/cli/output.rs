//! Output formatting utilities

use crate::application::ExportReport;
use crate::domain::ImagePayload;
use std::path::Path;

/// Format notes for display, numbered from 1
pub fn format_note_list(notes: &[String]) -> String {
    if notes.is_empty() {
        return "No notes yet. Start adding some!".to_string();
    }

    let mut output = String::new();
    for (index, note) in notes.iter().enumerate() {
        let mut lines = note.lines();
        output.push_str(&format!("{:>3}  {}\n", index + 1, lines.next().unwrap_or("")));
        for line in lines {
            output.push_str(&format!("     {}\n", line));
        }
    }
    output
}

/// Format images for display: position, mime type and decoded size
pub fn format_image_list(images: &[ImagePayload]) -> String {
    if images.is_empty() {
        return "No images yet. Paste some images here!".to_string();
    }

    let mut output = String::new();
    for (index, image) in images.iter().enumerate() {
        let line = match image.decode() {
            Ok(decoded) => format!(
                "{:>3}  {}  {} bytes\n",
                index + 1,
                decoded.mime_type,
                decoded.bytes.len()
            ),
            Err(_) => format!("{:>3}  (unreadable)\n", index + 1),
        };
        output.push_str(&line);
    }
    output
}

/// Summarize an export
pub fn format_export_report(report: &ExportReport, dir: &Path) -> String {
    let mut output = format!(
        "Saved {} file(s) to {}\n",
        report.written.len(),
        dir.display()
    );
    for path in &report.written {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        output.push_str(&format!("  {}\n", name));
    }
    for skipped in &report.skipped {
        output.push_str(&format!(
            "Skipped image {}: {}\n",
            skipped.position, skipped.reason
        ));
    }
    output
}
