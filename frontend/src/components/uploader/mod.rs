//! Uploader dashboard: manages the shared file collection and shows the
//! student login history.
//!
//! Laid out like the other stateful components: `state` holds the form and
//! UI flags, `update` applies messages, `view` renders. The dashboard never
//! edits the session directly; it reports added records and removed ids
//! through `on_add_file` / `on_remove_file`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::UploaderProps;
pub use state::UploaderDashboard;

impl Component for UploaderDashboard {
    type Message = Msg;
    type Properties = UploaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        UploaderDashboard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
