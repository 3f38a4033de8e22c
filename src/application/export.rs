//! Export use case: notes to a text file, images to one file each

use crate::domain::{CorruptImagePolicy, ImageNaming, Notebook, NOTES_FILENAME, NOTES_MIME_TYPE};
use crate::error::{PastepadError, Result};
use crate::infrastructure::{Config, Downloader};
use std::path::PathBuf;

/// An image left out of an export because it could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedImage {
    /// 1-based position in the image list
    pub position: usize,
    pub reason: String,
}

/// What an export produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedImage>,
}

/// Materializes a notebook as downloads
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportService {
    naming: ImageNaming,
    on_corrupt: CorruptImagePolicy,
}

impl ExportService {
    pub fn new(naming: ImageNaming, on_corrupt: CorruptImagePolicy) -> Self {
        ExportService { naming, on_corrupt }
    }

    pub fn from_config(config: &Config) -> Self {
        ExportService::new(config.image_naming, config.on_corrupt_image)
    }

    /// Download `notes.txt` (even when there are no notes), then every image
    /// in list order.
    ///
    /// Under [`CorruptImagePolicy::Abort`] the first undecodable image stops
    /// the export; files already downloaded are kept.
    pub fn export_all<D: Downloader>(
        &self,
        notebook: &Notebook,
        downloader: &mut D,
    ) -> Result<ExportReport> {
        let mut report = ExportReport::default();

        let text = notebook.notes_text();
        report.written.push(downloader.download(
            NOTES_FILENAME,
            NOTES_MIME_TYPE,
            text.as_bytes(),
        )?);

        for (index, payload) in notebook.images().iter().enumerate() {
            let position = index + 1;
            let image = match payload.decode() {
                Ok(image) => image,
                Err(e) => match self.on_corrupt {
                    CorruptImagePolicy::Abort => {
                        return Err(PastepadError::CorruptImage {
                            index: position,
                            reason: e.to_string(),
                        });
                    }
                    CorruptImagePolicy::Skip => {
                        log::warn!("skipping image {}: {}", position, e);
                        report.skipped.push(SkippedImage {
                            position,
                            reason: e.to_string(),
                        });
                        continue;
                    }
                },
            };

            let filename = self.naming.filename(index, &image);
            report
                .written
                .push(downloader.download(&filename, &image.mime_type, &image.bytes)?);
        }

        log::info!(
            "exported {} files, skipped {} images",
            report.written.len(),
            report.skipped.len()
        );
        Ok(report)
    }
}
