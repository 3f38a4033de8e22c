//! Encoded image payloads
//!
//! Images are stored as data URLs (`data:<mime>;base64,<body>`), the same
//! self-describing text form a clipboard reader hands back.

use crate::error::{PastepadError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const FALLBACK_MIME: &str = "application/octet-stream";

fn data_url_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?s)^data:([^;,]*)((?:;[^;,]*)*),(.*)$").unwrap())
}

/// An image as persisted in the store: a data URL string.
///
/// Persisted values are not validated on load, so a payload may be corrupt
/// until [`ImagePayload::decode`] proves otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImagePayload(String);

/// Raw image content recovered from a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    /// Encode raw bytes with their mime type into a data URL payload
    pub fn encode(mime_type: &str, bytes: &[u8]) -> Self {
        ImagePayload(format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)))
    }

    /// Wrap an already-encoded data URL without validating it
    pub fn from_data_url(data_url: impl Into<String>) -> Self {
        ImagePayload(data_url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Mime type from the header, without decoding the body
    pub fn mime_type(&self) -> Option<&str> {
        let header = self.0.strip_prefix("data:")?.split(',').next()?;
        let mime = header.split(';').next()?;
        if mime.is_empty() {
            None
        } else {
            Some(mime)
        }
    }

    /// Decode the payload back into mime type and bytes
    pub fn decode(&self) -> Result<DecodedImage> {
        let captures = data_url_regex()
            .captures(&self.0)
            .ok_or_else(|| PastepadError::InvalidPayload("not a data URL".to_string()))?;

        let mime = captures.get(1).map_or("", |m| m.as_str());
        let params = captures.get(2).map_or("", |m| m.as_str());
        let body = captures.get(3).map_or("", |m| m.as_str());

        if !params.split(';').any(|p| p.eq_ignore_ascii_case("base64")) {
            return Err(PastepadError::InvalidPayload(
                "only base64 data URLs are supported".to_string(),
            ));
        }

        let bytes = STANDARD
            .decode(body.trim())
            .map_err(|e| PastepadError::InvalidPayload(format!("bad base64 body: {}", e)))?;

        let mime_type = if mime.is_empty() { FALLBACK_MIME } else { mime };

        Ok(DecodedImage {
            mime_type: mime_type.to_string(),
            bytes,
        })
    }
}

impl DecodedImage {
    /// Preferred file extension for the mime type, `bin` when unknown
    pub fn extension(&self) -> &'static str {
        ImageFormat::from_mime_type(&self.mime_type)
            .and_then(|format| format.extensions_str().first().copied())
            .unwrap_or("bin")
    }
}

/// Sniff the mime type of raw content.
///
/// Recognised image formats report their image mime type; anything else is
/// `text/plain` when it is valid UTF-8 and `application/octet-stream` otherwise.
pub fn detect_mime_type(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(format) => format.to_mime_type(),
        Err(_) if std::str::from_utf8(bytes).is_ok() => "text/plain",
        Err(_) => FALLBACK_MIME,
    }
}
