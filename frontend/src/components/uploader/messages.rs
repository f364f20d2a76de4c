use super::state::Tab;

pub enum Msg {
    SetTab(Tab),
    SetName(String),
    SetSubject(String),
    SetCategory(String),
    SetUnit(String),
    SetUrl(String),
    OpenAddSheet,
    CloseAddSheet,
    SubmitFile,
    RequestDelete(String),
    ConfirmDelete,
    CancelDelete,
    Logout,
}
