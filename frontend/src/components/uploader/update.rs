use common::model::{Category, FileDraft, Subject};
use yew::prelude::*;

use crate::top_sheet::{close_top_sheet, open_top_sheet};

use super::messages::Msg;
use super::state::UploaderDashboard;

pub fn update(
    component: &mut UploaderDashboard,
    ctx: &Context<UploaderDashboard>,
    msg: Msg,
) -> bool {
    let props = ctx.props();
    match msg {
        Msg::SetTab(tab) => {
            component.tab = tab;
            true
        }
        Msg::SetName(name) => {
            component.draft.name = name;
            false
        }
        Msg::SetSubject(label) => {
            if let Some(subject) = Subject::from_label(&label) {
                component.draft.subject = subject;
            }
            false
        }
        Msg::SetCategory(label) => {
            if let Some(category) = Category::from_label(&label) {
                component.draft.category = category;
            }
            false
        }
        Msg::SetUnit(value) => {
            if let Ok(unit) = value.trim().parse() {
                component.draft.unit = unit;
            }
            false
        }
        Msg::SetUrl(url) => {
            component.draft.url = url;
            false
        }
        Msg::OpenAddSheet => {
            component.draft_error = None;
            open_top_sheet(&component.add_sheet_ref);
            true
        }
        Msg::CloseAddSheet => {
            close_top_sheet(&component.add_sheet_ref);
            false
        }
        Msg::SubmitFile => match component.draft.build() {
            Ok(file) => {
                props.on_add_file.emit(file);

                component.draft = FileDraft::default();
                component.draft_error = None;
                close_top_sheet(&component.add_sheet_ref);
                true
            }
            Err(err) => {
                component.draft_error = Some(err.to_string());
                true
            }
        },
        Msg::RequestDelete(id) => {
            component.pending_delete = Some(id);
            true
        }
        Msg::ConfirmDelete => {
            if let Some(id) = component.pending_delete.take() {
                props.on_remove_file.emit(id);
            }
            true
        }
        Msg::CancelDelete => {
            component.pending_delete = None;
            true
        }
        Msg::Logout => {
            props.on_logout.emit(());
            false
        }
    }
}
