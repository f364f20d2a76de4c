//! Rendering for the uploader dashboard: header, the files/logins tab bar,
//! the active table, the delete confirmation strip and the "add file" sheet.

use common::model::{Category, LoginRecord, StudyFile, Subject, UNITS};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::top_sheet::TopSheet;

use super::messages::Msg;
use super::state::{Tab, UploaderDashboard};

pub fn view(component: &UploaderDashboard, ctx: &Context<UploaderDashboard>) -> Html {
    let link = ctx.link();
    let props = ctx.props();

    html! {
        <div class="dashboard-root">
            <header class="dashboard-header">
                <div>
                    <h1>{"Uploader dashboard"}</h1>
                    <p class="muted">
                        { format!("{} file(s), {} recent student login(s)", props.files.len(), props.logins.len()) }
                    </p>
                </div>
                <div class="header-actions">
                    <button class="primary-btn" onclick={link.callback(|_| Msg::OpenAddSheet)}>{"Add file"}</button>
                    <button class="ghost-btn" onclick={link.callback(|_| Msg::Logout)}>{"Log out"}</button>
                </div>
            </header>

            { build_tab_bar(component, link) }
            { build_delete_confirmation(component, &props.files, link) }

            {
                match component.tab {
                    Tab::Files => build_files_table(&props.files, link),
                    Tab::Logins => build_logins_table(&props.logins),
                }
            }

            <TopSheet node_ref={component.add_sheet_ref.clone()} title={"Add a study file"}>
                { build_add_form(component, link) }
            </TopSheet>
        </div>
    }
}

fn build_tab_bar(component: &UploaderDashboard, link: &Scope<UploaderDashboard>) -> Html {
    let tab_button = |tab: Tab, label: &'static str| {
        html! {
            <button
                class={classes!("tab-btn", (component.tab == tab).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetTab(tab))}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="tab-bar">
            { tab_button(Tab::Files, "Files") }
            { tab_button(Tab::Logins, "Student logins") }
        </div>
    }
}

fn build_delete_confirmation(
    component: &UploaderDashboard,
    files: &[StudyFile],
    link: &Scope<UploaderDashboard>,
) -> Html {
    let Some(id) = &component.pending_delete else {
        return html! {};
    };
    let name = files
        .iter()
        .find(|f| &f.id == id)
        .map(|f| f.name.clone())
        .unwrap_or_default();

    html! {
        <div class="confirm-strip">
            <span>{ format!("Delete \"{}\"? Students will no longer see it.", name) }</span>
            <button class="danger-btn" onclick={link.callback(|_| Msg::ConfirmDelete)}>{"Delete"}</button>
            <button class="ghost-btn" onclick={link.callback(|_| Msg::CancelDelete)}>{"Cancel"}</button>
        </div>
    }
}

fn build_files_table(files: &[StudyFile], link: &Scope<UploaderDashboard>) -> Html {
    if files.is_empty() {
        return html! { <p class="empty-state">{"No files uploaded yet."}</p> };
    }

    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"Name"}</th>
                    <th>{"Subject"}</th>
                    <th>{"Category"}</th>
                    <th>{"Unit"}</th>
                    <th>{"Uploaded"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for files.iter().map(|file| {
                    let id = file.id.clone();
                    html! {
                        <tr key={file.id.clone()}>
                            <td>
                                <a href={file.url.clone()} target="_blank" rel="noopener noreferrer">{ file.name.clone() }</a>
                            </td>
                            <td>{ file.subject.label() }</td>
                            <td>{ file.category.label() }</td>
                            <td>{ file.unit.to_string() }</td>
                            <td>{ file.upload_date.clone() }</td>
                            <td>
                                <button
                                    class="icon-btn"
                                    title="Delete"
                                    onclick={link.callback(move |_| Msg::RequestDelete(id.clone()))}
                                >
                                    <i class="material-icons">{"delete"}</i>
                                </button>
                            </td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}

fn build_logins_table(logins: &[LoginRecord]) -> Html {
    if logins.is_empty() {
        return html! { <p class="empty-state">{"No student has logged in yet."}</p> };
    }

    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"Email"}</th>
                    <th>{"Logged in"}</th>
                </tr>
            </thead>
            <tbody>
                { for logins.iter().map(|record| html! {
                    <tr>
                        <td>{ record.email.clone() }</td>
                        <td>{ record.login_time.clone() }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

fn build_add_form(component: &UploaderDashboard, link: &Scope<UploaderDashboard>) -> Html {
    let draft = &component.draft;

    html! {
        <div class="form">
            <label for="file-name">{"Name"}</label>
            <input
                id="file-name"
                value={draft.name.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetName(input.value())
                })}
            />

            <label for="file-subject">{"Subject"}</label>
            <select
                id="file-subject"
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::SetSubject(select.value())
                })}
            >
                { for Subject::ALL.iter().map(|s| html! {
                    <option value={s.label()} selected={*s == draft.subject}>{ s.label() }</option>
                }) }
            </select>

            <label for="file-category">{"Category"}</label>
            <select
                id="file-category"
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::SetCategory(select.value())
                })}
            >
                { for Category::ALL.iter().map(|c| html! {
                    <option value={c.label()} selected={*c == draft.category}>{ c.label() }</option>
                }) }
            </select>

            <label for="file-unit">{"Unit"}</label>
            <select
                id="file-unit"
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::SetUnit(select.value())
                })}
            >
                { for UNITS.iter().map(|u| html! {
                    <option value={u.to_string()} selected={*u == draft.unit}>{ format!("Unit {}", u) }</option>
                }) }
            </select>

            <label for="file-url">{"Link"}</label>
            <input
                id="file-url"
                type="url"
                placeholder="https://"
                value={draft.url.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetUrl(input.value())
                })}
            />

            if let Some(error) = &component.draft_error {
                <p class="form-error">{ error.clone() }</p>
            }

            <div class="form-actions">
                <button class="ghost-btn" onclick={link.callback(|_| Msg::CloseAddSheet)}>{"Cancel"}</button>
                <button class="primary-btn" onclick={link.callback(|_| Msg::SubmitFile)}>{"Add file"}</button>
            </div>
        </div>
    }
}
