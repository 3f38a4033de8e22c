//! Export policies: image file naming and corrupt payload handling

use crate::domain::payload::DecodedImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the exported notes file
pub const NOTES_FILENAME: &str = "notes.txt";

/// Mime type of the exported notes file
pub const NOTES_MIME_TYPE: &str = "text/plain;charset=utf-8";

/// How exported image files get their extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageNaming {
    /// Always `image_<n>.png`, whatever the payload's real type
    #[default]
    Fixed,
    /// Extension follows the payload's mime type (`image_<n>.jpg`, ...)
    Detected,
}

impl ImageNaming {
    /// File name for the image at 0-based `index`
    pub fn filename(&self, index: usize, image: &DecodedImage) -> String {
        let extension = match self {
            ImageNaming::Fixed => "png",
            ImageNaming::Detected => image.extension(),
        };
        format!("image_{}.{}", index + 1, extension)
    }
}

impl FromStr for ImageNaming {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(ImageNaming::Fixed),
            "detected" => Ok(ImageNaming::Detected),
            _ => Err(format!(
                "Invalid image_naming: '{}'. Valid values are: fixed, detected",
                s
            )),
        }
    }
}

impl fmt::Display for ImageNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageNaming::Fixed => write!(f, "fixed"),
            ImageNaming::Detected => write!(f, "detected"),
        }
    }
}

/// What export does with an image payload that fails to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CorruptImagePolicy {
    /// Log it, record it in the report, continue with the next image
    #[default]
    Skip,
    /// Stop the export with an error
    Abort,
}

impl FromStr for CorruptImagePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(CorruptImagePolicy::Skip),
            "abort" => Ok(CorruptImagePolicy::Abort),
            _ => Err(format!(
                "Invalid on_corrupt_image: '{}'. Valid values are: skip, abort",
                s
            )),
        }
    }
}

impl fmt::Display for CorruptImagePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorruptImagePolicy::Skip => write!(f, "skip"),
            CorruptImagePolicy::Abort => write!(f, "abort"),
        }
    }
}
