//! Landing surface shown while the session is anonymous.
//!
//! Students enter an email and password; both are recorded in the login
//! history by the session. The uploader entry has no credentials. Neither
//! path authenticates anything.

use common::model::{Credentials, Role};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginSurfaceProps {
    pub on_login: Callback<(Role, Option<Credentials>)>,
}

pub enum Msg {
    SetMode(Role),
    SetEmail(String),
    SetPassword(String),
    Submit,
}

pub struct LoginSurface {
    mode: Role,
    email: String,
    password: String,
    error: Option<&'static str>,
}

impl Component for LoginSurface {
    type Message = Msg;
    type Properties = LoginSurfaceProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            mode: Role::Student,
            email: String::new(),
            password: String::new(),
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetMode(mode) => {
                self.mode = mode;
                self.error = None;
                true
            }
            Msg::SetEmail(email) => {
                self.email = email;
                false
            }
            Msg::SetPassword(password) => {
                self.password = password;
                false
            }
            Msg::Submit => match self.mode {
                Role::Student => {
                    if self.email.trim().is_empty() || self.password.is_empty() {
                        self.error = Some("Enter your email and password to continue.");
                        return true;
                    }
                    let credentials = Credentials::new(self.email.trim(), self.password.clone());
                    ctx.props().on_login.emit((Role::Student, Some(credentials)));
                    false
                }
                role => {
                    ctx.props().on_login.emit((role, None));
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let tab = |role: Role| {
            html! {
                <button
                    class={classes!("tab-btn", (self.mode == role).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SetMode(role))}
                >
                    { role.label() }
                </button>
            }
        };

        html! {
            <div class="login-root">
                <div class="login-card">
                    <h1>{"StudyDesk"}</h1>
                    <p class="muted">{"Notes, solved papers and important questions in one place."}</p>
                    <div class="tab-bar">
                        { tab(Role::Student) }
                        { tab(Role::Uploader) }
                    </div>
                    {
                        if self.mode == Role::Student {
                            html! {
                                <div class="form">
                                    <label for="login-email">{"Email"}</label>
                                    <input
                                        id="login-email"
                                        type="email"
                                        value={self.email.clone()}
                                        oninput={link.callback(|e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            Msg::SetEmail(input.value())
                                        })}
                                    />
                                    <label for="login-password">{"Password"}</label>
                                    <input
                                        id="login-password"
                                        type="password"
                                        value={self.password.clone()}
                                        oninput={link.callback(|e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            Msg::SetPassword(input.value())
                                        })}
                                    />
                                </div>
                            }
                        } else {
                            html! {
                                <p class="muted">{"Manage the shared study files and review student logins."}</p>
                            }
                        }
                    }
                    if let Some(error) = self.error {
                        <p class="form-error">{ error }</p>
                    }
                    <button class="primary-btn" onclick={link.callback(|_| Msg::Submit)}>
                        { format!("Continue as {}", self.mode.label().to_lowercase()) }
                    </button>
                </div>
            </div>
        }
    }
}
