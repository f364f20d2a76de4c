//! Root component. Owns the session and picks the surface for its role.

use common::model::{Credentials, Role, StudyFile};
use common::routing::Surface;
use common::session::Session;
use yew::{html, Component, Context, Html};

use crate::components::helpers::{report_error, show_toast};
use crate::components::login::LoginSurface;
use crate::components::student::StudentDashboard;
use crate::components::uploader::UploaderDashboard;
use crate::config::load_session_config;
use crate::storage::BrowserStorage;

pub enum Msg {
    Initialized,
    Login(Role, Option<Credentials>),
    Logout,
    AddFile(StudyFile),
    RemoveFile(String),
}

pub struct App {
    session: Session<BrowserStorage>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: Session::new(BrowserStorage::local(), load_session_config()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Initialized => {}
            Msg::Login(role, credentials) => {
                if let Err(err) = self.session.login(role, credentials) {
                    report_error("Could not save the login history", &err);
                }
            }
            Msg::Logout => self.session.logout(),
            Msg::AddFile(file) => {
                let name = file.name.clone();
                match self.session.add_file(file) {
                    Ok(()) => show_toast(&format!("Added \"{}\".", name)),
                    Err(err) => report_error("Could not save the study files", &err),
                }
            }
            Msg::RemoveFile(id) => match self.session.remove_file(&id) {
                Ok(true) => show_toast("File removed."),
                Ok(false) => log::debug!("file {} was already gone", id),
                Err(err) => report_error("Could not save the study files", &err),
            },
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.session.is_ready() {
            return html! {
                <div class="loading-root">
                    <div class="spinner"></div>
                    <p class="muted">{"Preparing session..."}</p>
                </div>
            };
        }

        let link = ctx.link();
        let content = match self.session.surface() {
            Surface::Login => html! {
                <LoginSurface
                    on_login={link.callback(|(role, credentials): (Role, Option<Credentials>)| {
                        Msg::Login(role, credentials)
                    })}
                />
            },
            Surface::Uploader => html! {
                <UploaderDashboard
                    files={self.session.files().to_vec()}
                    logins={self.session.logins().to_vec()}
                    on_add_file={link.callback(Msg::AddFile)}
                    on_remove_file={link.callback(Msg::RemoveFile)}
                    on_logout={link.callback(|_: ()| Msg::Logout)}
                />
            },
            Surface::Student => html! {
                <StudentDashboard
                    files={self.session.files().to_vec()}
                    on_logout={link.callback(|_: ()| Msg::Logout)}
                />
            },
        };

        html! { <div class="app-root">{ content }</div> }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.session.is_ready() {
            self.session.initialize();
            ctx.link().send_message(Msg::Initialized);
        }
    }
}
