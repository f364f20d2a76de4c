//! Small UI utilities shared by the dashboard surfaces.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Shows `message` in a toast at the bottom of the page for three seconds.
///
/// Used to confirm uploads and deletions, and to report storage errors that
/// the session surfaced instead of swallowing.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Reports a failed session operation to both the console and the user.
pub fn report_error(context: &str, err: &common::Error) {
    log::error!("{}: {}", context, err);
    if err.is_data_loss() {
        show_toast(&format!("{}. The saved copy was discarded.", context));
    } else {
        show_toast(&format!("{}.", context));
    }
}
