//! File download targets for exports

use crate::error::{PastepadError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Somewhere an exported payload can be saved under a file name
pub trait Downloader {
    /// Save `bytes` as `filename`; returns where it ended up
    fn download(&mut self, filename: &str, mime_type: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Writes downloads as files into one directory, replacing existing files
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    dir: PathBuf,
}

impl DirectoryDownloader {
    pub fn new(dir: PathBuf) -> Self {
        DirectoryDownloader { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Downloader for DirectoryDownloader {
    fn download(&mut self, filename: &str, mime_type: &str, bytes: &[u8]) -> Result<PathBuf> {
        if filename.is_empty() || filename.contains(['/', '\\']) {
            return Err(PastepadError::Config(format!(
                "Invalid download file name: '{}'",
                filename
            )));
        }

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.dir.join(filename);
        fs::write(&path, bytes)?;
        log::debug!(
            "saved {} ({}, {} bytes)",
            path.display(),
            mime_type,
            bytes.len()
        );
        Ok(path)
    }
}
