//! Runtime state of the uploader dashboard.
//!
//! Only UI state lives here: the active tab, the draft behind the "add file"
//! sheet and the pending delete. The file and login collections come in
//! through props and are owned by the session.

use common::model::FileDraft;
use yew::prelude::*;

/// Which table the dashboard shows.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Uploaded study files, with delete buttons.
    Files,
    /// Read-only student login history.
    Logins,
}

/// State container for the `UploaderDashboard` component.
///
/// Fields are `pub` because they are read by `view` and mutated by `update`.
pub struct UploaderDashboard {
    /// Active tab; switched by `Msg::SetTab`.
    pub tab: Tab,

    /// Values of the "add file" form. Kept between openings of the sheet
    /// until a file is added successfully.
    pub draft: FileDraft,

    /// Validation message from the last failed submit.
    pub draft_error: Option<String>,

    /// Reference to the `TopSheet` holding the "add file" form, passed to
    /// `open_top_sheet` / `close_top_sheet`.
    pub add_sheet_ref: NodeRef,

    /// Id of the file awaiting delete confirmation.
    pub pending_delete: Option<String>,
}

impl UploaderDashboard {
    /// Builds the initial state:
    /// - the files tab is active
    /// - the draft holds the form defaults (first subject, `Notes`, unit 1)
    /// - no validation error and no pending delete
    /// - an empty `NodeRef`, bound when the sheet renders
    pub fn new() -> Self {
        Self {
            tab: Tab::Files,
            draft: FileDraft::default(),
            draft_error: None,
            add_sheet_ref: NodeRef::default(),
            pending_delete: None,
        }
    }
}
