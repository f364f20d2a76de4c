//! Session configuration.
//!
//! Defaults match the storage keys and history cap the dashboard has always
//! used. `initial_role` decides whether a fresh page load starts at the login
//! surface (`Anonymous`) or skips straight to a dashboard.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::Role;

pub const DEFAULT_FILES_KEY: &str = "edu_data_encoded_v1";
pub const DEFAULT_LOGINS_KEY: &str = "user_logs_encoded_v1";
pub const DEFAULT_MAX_LOGIN_RECORDS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Storage key holding the encoded study file collection.
    pub files_key: String,
    /// Storage key holding the encoded login history.
    pub logins_key: String,
    /// Number of login records kept, most recent first.
    pub max_login_records: usize,
    /// Role the session starts in before any login.
    pub initial_role: Role,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            files_key: DEFAULT_FILES_KEY.to_string(),
            logins_key: DEFAULT_LOGINS_KEY.to_string(),
            max_login_records: DEFAULT_MAX_LOGIN_RECORDS,
            initial_role: Role::Anonymous,
        }
    }
}

impl SessionConfig {
    /// Parses a JSON object of overrides. Missing fields keep their
    /// defaults; unknown fields are ignored.
    pub fn from_json(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text).map_err(|source| Error::Config { source })
    }

    #[must_use]
    pub fn with_keys(mut self, files_key: impl Into<String>, logins_key: impl Into<String>) -> Self {
        self.files_key = files_key.into();
        self.logins_key = logins_key.into();
        self
    }

    #[must_use]
    pub fn with_max_login_records(mut self, max: usize) -> Self {
        self.max_login_records = max;
        self
    }

    #[must_use]
    pub fn with_initial_role(mut self, role: Role) -> Self {
        self.initial_role = role;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.files_key, "edu_data_encoded_v1");
        assert_eq!(config.logins_key, "user_logs_encoded_v1");
        assert_eq!(config.max_login_records, 100);
        assert_eq!(config.initial_role, Role::Anonymous);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            SessionConfig::from_json(r#"{"initial_role": "Student", "max_login_records": 5}"#)
                .unwrap();
        assert_eq!(config.initial_role, Role::Student);
        assert_eq!(config.max_login_records, 5);
        assert_eq!(config.files_key, DEFAULT_FILES_KEY);
    }

    #[test]
    fn test_blank_json_is_default() {
        assert_eq!(SessionConfig::from_json("  \n ").unwrap(), SessionConfig::default());
        assert_eq!(SessionConfig::from_json("{}").unwrap(), SessionConfig::default());
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = SessionConfig::from_json(r#"{"initial_role": "Admin"}"#).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(SessionConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_builders() {
        let config = SessionConfig::default()
            .with_keys("f", "l")
            .with_max_login_records(3)
            .with_initial_role(Role::Uploader);
        assert_eq!(config.files_key, "f");
        assert_eq!(config.logins_key, "l");
        assert_eq!(config.max_login_records, 3);
        assert_eq!(config.initial_role, Role::Uploader);
    }
}
