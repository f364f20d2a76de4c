//! Read-only dashboard for students: filter the shared files by subject,
//! category, unit and name, then open them in a new tab.

use common::catalog::{count_by_subject, FileQuery};
use common::model::{Category, StudyFile, Subject, UNITS};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::card_grid::CardGrid;

#[derive(Properties, PartialEq)]
pub struct StudentProps {
    pub files: Vec<StudyFile>,
    pub on_logout: Callback<()>,
}

pub enum Msg {
    SetSubject(Option<Subject>),
    SetCategory(String),
    SetUnit(String),
    SetSearch(String),
    ClearFilters,
    Logout,
}

pub struct StudentDashboard {
    query: FileQuery,
}

impl Component for StudentDashboard {
    type Message = Msg;
    type Properties = StudentProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            query: FileQuery::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetSubject(subject) => self.query.subject = subject,
            Msg::SetCategory(label) => self.query.category = Category::from_label(&label),
            Msg::SetUnit(value) => self.query.unit = value.parse().ok(),
            Msg::SetSearch(search) => self.query.search = search,
            Msg::ClearFilters => self.query = FileQuery::default(),
            Msg::Logout => {
                ctx.props().on_logout.emit(());
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let files = &ctx.props().files;
        let visible = self.query.apply(files);
        let counts = count_by_subject(files);

        html! {
            <div class="dashboard-root">
                <header class="dashboard-header">
                    <div>
                        <h1>{"Study files"}</h1>
                        <p class="muted">{ format!("{} of {} file(s) shown", visible.len(), files.len()) }</p>
                    </div>
                    <button class="ghost-btn" onclick={link.callback(|_| Msg::Logout)}>{"Log out"}</button>
                </header>

                <nav class="subject-chips">
                    <button
                        class={classes!("chip", self.query.subject.is_none().then_some("active"))}
                        onclick={link.callback(|_| Msg::SetSubject(None))}
                    >
                        { format!("All ({})", files.len()) }
                    </button>
                    { for Subject::ALL.into_iter().map(|subject| {
                        let count = counts.get(&subject).copied().unwrap_or(0);
                        html! {
                            <button
                                class={classes!("chip", (self.query.subject == Some(subject)).then_some("active"))}
                                onclick={link.callback(move |_| Msg::SetSubject(Some(subject)))}
                            >
                                { format!("{} ({})", subject.label(), count) }
                            </button>
                        }
                    }) }
                </nav>

                { self.build_filters(link) }

                if visible.is_empty() {
                    <p class="empty-state">{"No files match these filters yet."}</p>
                } else {
                    <CardGrid columns={3}>
                        { for visible.into_iter().map(file_card) }
                    </CardGrid>
                }
            </div>
        }
    }
}

impl StudentDashboard {
    fn build_filters(&self, link: &yew::html::Scope<Self>) -> Html {
        html! {
            <div class="filter-bar">
                <input
                    type="search"
                    placeholder="Search by name"
                    value={self.query.search.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetSearch(input.value())
                    })}
                />
                <select
                    onchange={link.callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::SetCategory(select.value())
                    })}
                >
                    <option value="" selected={self.query.category.is_none()}>{"All categories"}</option>
                    { for Category::ALL.into_iter().map(|c| html! {
                        <option value={c.label()} selected={self.query.category == Some(c)}>{ c.label() }</option>
                    }) }
                </select>
                <select
                    onchange={link.callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::SetUnit(select.value())
                    })}
                >
                    <option value="" selected={self.query.unit.is_none()}>{"All units"}</option>
                    { for UNITS.into_iter().map(|u| html! {
                        <option value={u.to_string()} selected={self.query.unit == Some(u)}>{ format!("Unit {}", u) }</option>
                    }) }
                </select>
                <button class="ghost-btn" onclick={link.callback(|_| Msg::ClearFilters)}>{"Clear"}</button>
            </div>
        }
    }
}

fn file_card(file: &StudyFile) -> Html {
    html! {
        <article class="file-card" key={file.id.clone()}>
            <span class="badge">{ file.category.label() }</span>
            <h3>{ file.name.clone() }</h3>
            <p class="muted">{ format!("{} · Unit {}", file.subject.label(), file.unit) }</p>
            <p class="muted small">{ format!("Added {}", file.upload_date) }</p>
            <a class="primary-btn" href={file.url.clone()} target="_blank" rel="noopener noreferrer">{"Open"}</a>
        </article>
    }
}
