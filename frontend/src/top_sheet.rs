//! Slide-down sheet used for dialogs such as the uploader's "add file" form.
//!
//! The sheet is always mounted; `open_top_sheet` and `close_top_sheet` toggle
//! the `show` class shortly after the call so the CSS transition runs even
//! when the sheet was rendered in the same frame.

use uuid::Uuid;
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct TopSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct TopSheetProps {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub title: String,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = TopSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}>
                if !props.title.is_empty() {
                    <h2 class="top-sheet-title">{ props.title.clone() }</h2>
                }
                { props.children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(sheet_ref: &NodeRef) {
    toggle_show(sheet_ref, "add");
}

pub fn close_top_sheet(sheet_ref: &NodeRef) {
    toggle_show(sheet_ref, "remove");
}

fn toggle_show(sheet_ref: &NodeRef, action: &str) {
    let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    let func = js_sys::Function::new_no_args(&format!(
        "document.getElementById('{}')?.classList.{}('show')",
        sheet.id(),
        action
    ));
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50)
        .is_err()
    {
        log::warn!("could not schedule top sheet {}", action);
    }
}
