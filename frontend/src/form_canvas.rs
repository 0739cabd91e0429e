use yew::{html, Children, Component, Context, Html, Properties};

/// Fallback width, in pixels, when the schema carries no width hint.
pub const DEFAULT_WIDTH: u32 = 960;

#[derive(Properties, PartialEq)]
pub struct FormCanvasProps {
    /// Width hint stored on the schema.
    #[prop_or_default]
    pub width: Option<u32>,
    pub children: Children,
}

/// Centered sheet the form is laid out on.
pub struct FormCanvas;

impl Component for FormCanvas {
    type Message = ();
    type Properties = FormCanvasProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FormCanvas
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: flex;
             flex-direction: column;
             gap: 12px;
             width: 100%;
             max-width: {}px;
             margin: auto;
             padding: 10mm;
             background: white;
             box-shadow: 0 0 8px #ccc;",
            props.width.unwrap_or(DEFAULT_WIDTH)
        );

        html! {
            <div class="form-canvas" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
