//! Small DOM utilities for the form page.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast is a plain `div` appended to `<body>` and removed after three
/// seconds. Every failed request ends up here with a static message.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    for (property, value) in [
        ("position", "fixed"),
        ("bottom", "20px"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("background", "rgba(0, 0, 0, 0.8)"),
        ("color", "#fff"),
        ("padding", "10px 20px"),
        ("border-radius", "4px"),
        ("z-index", "10000"),
        ("font-family", "Arial, sans-serif"),
    ] {
        style.set_property(property, value).ok();
    }

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Raises the global `app_dirty` flag read by the unload guard in `index.html`.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(
            &window,
            &wasm_bindgen::JsValue::from_str("app_dirty"),
            &wasm_bindgen::JsValue::from_bool(dirty),
        );
    }
}

/// Inline style for one cell: relative width plus alignment.
pub fn cell_style(flex: f64, align: &str) -> String {
    format!(
        "flex: {} 1 0; text-align: {}; justify-content: {}; display: flex; align-items: center; min-width: 0;",
        flex, align, align
    )
}
