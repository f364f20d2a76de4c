use serde::{Deserialize, Serialize};

/// Capability mode the current session acts under.
///
/// Held in memory only. `Anonymous` is the resting state after a logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Anonymous,
    Uploader,
    Student,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Anonymous => "Guest",
            Role::Uploader => "Uploader",
            Role::Student => "Student",
        }
    }
}
