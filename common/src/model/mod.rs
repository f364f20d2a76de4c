pub mod login;
pub mod role;
pub mod study_file;

pub use login::{Credentials, LoginRecord};
pub use role::Role;
pub use study_file::{Category, FileDraft, StudyFile, Subject, UNITS};

/// Local wall-clock time formatted for display, e.g. `3/14/2025, 9:26:53 AM`.
pub fn display_timestamp() -> String {
    chrono::Local::now()
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}
