use serde::{Deserialize, Serialize};

/// Raw values submitted by the student login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// One student login event, as persisted in the logins slot.
///
/// The password is kept verbatim. Nothing in this crate verifies it, and it
/// must not be treated as a credential store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRecord {
    pub email: String,
    pub password: String,
    pub login_time: String,
}
