//! Properties of the `UploaderDashboard`.
//!
//! The dashboard only reads the collections; every change goes back to the
//! root `App` through a callback, and `App` applies it to the session.

use common::model::{LoginRecord, StudyFile};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UploaderProps {
    /// Current file collection, in upload order. Rendered as the files
    /// table and used to resolve the name shown in the delete confirmation.
    pub files: Vec<StudyFile>,

    /// Student login history, most recent first. Rendered read-only in the
    /// "Student logins" tab.
    pub logins: Vec<LoginRecord>,

    /// Receives a freshly built record after a valid "add file" submit.
    /// The session appends it and persists the whole collection.
    pub on_add_file: Callback<StudyFile>,

    /// Receives the id of a file the uploader confirmed for deletion.
    pub on_remove_file: Callback<String>,

    /// Fired by the header "Log out" button. The session returns to the
    /// anonymous role and the login surface replaces this dashboard.
    pub on_logout: Callback<()>,
}
