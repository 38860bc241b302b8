//! Photo evidence references.
//!
//! Captured photos are embedded as `data:image/...;base64,...` URIs so a
//! record stays portable without external file storage. Demonstration data
//! points at remote `http(s)` images instead.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{PhotoSlot, SubmissionDomainError};

const DATA_URI_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Reference to one evidence photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoRef(String);

impl PhotoRef {
    /// Embeds raw image bytes as a base64 data URI.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionDomainError::MissingPhoto`] for empty bytes and
    /// [`SubmissionDomainError::InvalidPhoto`] when `mime_type` is not an
    /// `image/*` type.
    pub fn embed(
        slot: PhotoSlot,
        mime_type: &str,
        bytes: &[u8],
    ) -> Result<Self, SubmissionDomainError> {
        if bytes.is_empty() {
            return Err(SubmissionDomainError::MissingPhoto(slot));
        }
        validate_mime(slot, mime_type)?;
        Ok(Self(format!(
            "{DATA_URI_PREFIX}{mime_type}{BASE64_MARKER}{}",
            STANDARD.encode(bytes)
        )))
    }

    /// Validates an existing reference for a new submission.
    ///
    /// Accepts base64 image data URIs with a decodable payload and
    /// `http(s)` URLs.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionDomainError::MissingPhoto`] for blank input and
    /// [`SubmissionDomainError::InvalidPhoto`] otherwise.
    pub fn parse(slot: PhotoSlot, value: impl Into<String>) -> Result<Self, SubmissionDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SubmissionDomainError::MissingPhoto(slot));
        }
        if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
            return Ok(Self(trimmed.to_owned()));
        }
        let Some((mime_type, payload)) = split_data_uri(trimmed) else {
            return Err(invalid(slot, "expected a base64 data URI or http(s) URL"));
        };
        validate_mime(slot, mime_type)?;
        if payload.is_empty() {
            return Err(SubmissionDomainError::MissingPhoto(slot));
        }
        STANDARD
            .decode(payload)
            .map_err(|err| invalid(slot, &err.to_string()))?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Wraps a reference known to be well formed.
    pub(super) const fn from_trusted(value: String) -> Self {
        Self(value)
    }

    /// Returns `true` when the image data is embedded in the reference.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        self.0.starts_with(DATA_URI_PREFIX)
    }

    /// Returns the MIME type and decoded bytes of an embedded image.
    #[must_use]
    pub fn decode(&self) -> Option<(&str, Vec<u8>)> {
        let (mime_type, payload) = split_data_uri(&self.0)?;
        let bytes = STANDARD.decode(payload).ok()?;
        Some((mime_type, bytes))
    }

    /// Returns the reference as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_embedded() {
            let mime_type = split_data_uri(&self.0).map_or("image", |(mime, _)| mime);
            write!(f, "<embedded {mime_type}>")
        } else {
            f.write_str(&self.0)
        }
    }
}

fn split_data_uri(value: &str) -> Option<(&str, &str)> {
    value.strip_prefix(DATA_URI_PREFIX)?.split_once(BASE64_MARKER)
}

fn validate_mime(slot: PhotoSlot, mime_type: &str) -> Result<(), SubmissionDomainError> {
    match mime_type.strip_prefix("image/") {
        Some(subtype) if !subtype.is_empty() => Ok(()),
        _ => Err(invalid(slot, &format!("unsupported media type '{mime_type}'"))),
    }
}

fn invalid(slot: PhotoSlot, reason: &str) -> SubmissionDomainError {
    SubmissionDomainError::InvalidPhoto {
        slot,
        reason: reason.to_owned(),
    }
}
