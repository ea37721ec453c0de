//! Sightings: photographs recorded against a dive entry.

use super::DiveEntryId;

/// Maximum filename length accepted for stored photos, in bytes.
pub const MAX_FILENAME_BYTES: usize = 255;

/// Server-generated identifier of a sighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SightingId(i64);

impl SightingId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for SightingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reasons an uploaded filename cannot be used for storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhotoFilenameError {
    /// Nothing remains after stripping directory components.
    #[error("filename must not be empty")]
    Empty,
    /// The name refers to the current or parent directory.
    #[error("filename must not be a relative directory reference")]
    DirectoryReference,
    /// The name contains a NUL byte.
    #[error("filename must not contain NUL bytes")]
    ContainsNul,
    /// The name exceeds [`MAX_FILENAME_BYTES`].
    #[error("filename must be at most {max} bytes")]
    TooLong { max: usize },
}

/// Client-supplied photo filename reduced to a single path component.
///
/// Directory prefixes (either `/` or `\` separated) are discarded so the
/// name can only address an entry directly inside the upload directory.
///
/// # Examples
/// ```
/// use nudilog::domain::PhotoFilename;
///
/// let name = PhotoFilename::new("../../etc/nudibranch.jpg").expect("valid name");
/// assert_eq!(name.as_str(), "nudibranch.jpg");
/// assert!(PhotoFilename::new("..").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFilename(String);

impl PhotoFilename {
    /// Sanitise and validate a raw upload filename.
    pub fn new(raw: &str) -> Result<Self, PhotoFilenameError> {
        let name = raw.rsplit(['/', '\\']).next().unwrap_or_default();
        if name.is_empty() {
            return Err(PhotoFilenameError::Empty);
        }
        if name == "." || name == ".." {
            return Err(PhotoFilenameError::DirectoryReference);
        }
        if name.contains('\0') {
            return Err(PhotoFilenameError::ContainsNul);
        }
        if name.len() > MAX_FILENAME_BYTES {
            return Err(PhotoFilenameError::TooLong {
                max: MAX_FILENAME_BYTES,
            });
        }
        Ok(Self(name.to_owned()))
    }

    /// Borrow the sanitised name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PhotoFilename {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Fields recorded when a photo has been stored for a dive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSighting {
    pub dive_entry_id: DiveEntryId,
    pub filename: PhotoFilename,
    pub file_path: String,
}

/// A persisted sighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sighting {
    pub id: SightingId,
    pub dive_entry_id: DiveEntryId,
    /// Sanitised original filename.
    pub filename: String,
    /// Location of the stored bytes.
    pub file_path: String,
}
