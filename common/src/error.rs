//! Error types for the study dashboard core.
//!
//! Decode failures never show up here: a corrupt slot simply loads as empty.
//! What remains are storage-layer failures, encode failures that overwrote a
//! slot with the empty sentinel, an unreadable embedded configuration, and
//! rejected uploader drafts.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No storage area is available (for example, localStorage is blocked).
    #[error("storage is unavailable")]
    StorageUnavailable,

    /// The backend failed to read a key.
    #[error("failed to read '{key}' from storage: {message}")]
    StorageRead { key: String, message: String },

    /// The backend failed to write a key.
    #[error("failed to write '{key}' to storage: {message}")]
    StorageWrite { key: String, message: String },

    /// The backend failed to clear the storage area.
    #[error("failed to clear storage: {message}")]
    StorageClear { message: String },

    /// Serialisation failed; the slot now holds the empty sentinel.
    #[error("failed to encode '{key}', slot was emptied: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The embedded session configuration could not be parsed.
    #[error("invalid session configuration: {source}")]
    Config {
        #[source]
        source: serde_json::Error,
    },

    /// The uploader form is missing required values.
    #[error("invalid file details: {message}")]
    InvalidDraft { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    #[must_use]
    pub fn storage_read(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StorageRead {
            key: key.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn storage_write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StorageWrite {
            key: key.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn storage_clear(message: impl Into<String>) -> Self {
        Self::StorageClear {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_draft(message: impl Into<String>) -> Self {
        Self::InvalidDraft {
            message: message.into(),
        }
    }

    /// True when the error means data the caller asked to keep was dropped.
    #[must_use]
    pub fn is_data_loss(&self) -> bool {
        matches!(self, Self::Encode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = Error::storage_write("edu_data_encoded_v1", "QuotaExceededError");
        let msg = err.to_string();
        assert!(msg.contains("edu_data_encoded_v1"));
        assert!(msg.contains("QuotaExceededError"));

        assert_eq!(Error::StorageUnavailable.to_string(), "storage is unavailable");
    }

    #[test]
    fn test_invalid_draft_display() {
        let err = Error::invalid_draft("a file name is required");
        assert_eq!(err.to_string(), "invalid file details: a file name is required");
        assert!(!err.is_data_loss());
    }

    #[test]
    fn test_config_error_display() {
        let source = serde_json::from_str::<u8>("{").unwrap_err();
        let err = Error::Config { source };
        assert!(err.to_string().starts_with("invalid session configuration"));
        assert!(!err.is_data_loss());
    }

    #[test]
    fn test_encode_error_is_data_loss() {
        let source = serde_json::from_str::<u8>("nope").unwrap_err();
        let err = Error::Encode {
            key: "user_logs_encoded_v1".to_string(),
            source,
        };
        assert!(err.is_data_loss());
        assert!(err.to_string().contains("user_logs_encoded_v1"));
    }
}
