use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, NodeRef, Properties};

/// Full-screen sheet that slides in when the `show` class is present.
/// Visibility is driven imperatively through [`open_top_sheet`] and
/// [`close_top_sheet`] so the CSS transition can run.
pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub title: Option<&'static str>,
    pub on_close: Callback<()>,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = props.on_close.reform(|_| ());
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}>
                <div class="top-sheet-header">
                    <span class="top-sheet-title">{ props.title.unwrap_or_default() }</span>
                    <button class="icon-btn" title="Close" onclick={on_close}>{ "✕" }</button>
                </div>
                { props.children.clone() }
            </div>
        }
    }
}

const SHOW_CLASS: &str = "show";

pub fn open_top_sheet(sheet_ref: NodeRef) {
    // Deferred one tick so a freshly mounted sheet transitions in.
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(50).await;
        if let Some(sheet) = sheet_ref.cast::<web_sys::Element>() {
            let _ = sheet.class_list().add_1(SHOW_CLASS);
        }
    });
}

pub fn close_top_sheet(sheet_ref: NodeRef) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::Element>() {
        let _ = sheet.class_list().remove_1(SHOW_CLASS);
    }
}
