//! Freehand signature capture on a `<canvas>`.
//!
//! Strokes are drawn while the primary mouse button is held. Releasing the
//! button exports the canvas as a PNG data URL through `on_change`; that string
//! is what ends up in the submission map. A stored signature is shown as an
//! image until it is cleared.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const WIDTH: u32 = 320;
const HEIGHT: u32 = 120;

#[derive(Properties, PartialEq)]
pub struct SignaturePadProps {
    /// Current data URL, empty when nothing was signed.
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    pub on_change: Callback<String>,
}

pub enum SignatureMsg {
    Start(f64, f64),
    Move(f64, f64),
    End,
    Clear,
}

pub struct SignaturePad {
    canvas_ref: NodeRef,
    drawing: bool,
}

impl SignaturePad {
    fn context(&self) -> Option<CanvasRenderingContext2d> {
        self.canvas_ref
            .cast::<HtmlCanvasElement>()?
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()
    }

    fn export(&self) -> Option<String> {
        self.canvas_ref.cast::<HtmlCanvasElement>()?.to_data_url().ok()
    }
}

impl Component for SignaturePad {
    type Message = SignatureMsg;
    type Properties = SignaturePadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            drawing: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        if ctx.props().disabled {
            return false;
        }
        match msg {
            SignatureMsg::Start(x, y) => {
                if let Some(context) = self.context() {
                    context.set_line_width(2.0);
                    context.begin_path();
                    context.move_to(x, y);
                    self.drawing = true;
                }
                false
            }
            SignatureMsg::Move(x, y) => {
                if self.drawing {
                    if let Some(context) = self.context() {
                        context.line_to(x, y);
                        context.stroke();
                    }
                }
                false
            }
            SignatureMsg::End => {
                if std::mem::take(&mut self.drawing) {
                    if let Some(url) = self.export() {
                        ctx.props().on_change.emit(url);
                    }
                }
                false
            }
            SignatureMsg::Clear => {
                if let Some(context) = self.context() {
                    context.clear_rect(0.0, 0.0, WIDTH as f64, HEIGHT as f64);
                }
                ctx.props().on_change.emit(String::new());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        if !props.value.is_empty() {
            return html! {
                <div class="signature">
                    <img src={props.value.clone()} width={WIDTH.to_string()} height={HEIGHT.to_string()} alt="Signature" />
                    if !props.disabled {
                        <button class="icon-btn small" title="Clear signature" onclick={link.callback(|_| SignatureMsg::Clear)}>
                            <i class="material-icons">{"backspace"}</i>
                        </button>
                    }
                </div>
            };
        }

        html! {
            <div class="signature">
                <canvas
                    ref={self.canvas_ref.clone()}
                    width={WIDTH.to_string()}
                    height={HEIGHT.to_string()}
                    style={if props.disabled { "border: 1px dashed #bbb; cursor: not-allowed;" } else { "border: 1px solid #888; cursor: crosshair;" }}
                    onmousedown={link.callback(|e: MouseEvent| SignatureMsg::Start(e.offset_x() as f64, e.offset_y() as f64))}
                    onmousemove={link.callback(|e: MouseEvent| SignatureMsg::Move(e.offset_x() as f64, e.offset_y() as f64))}
                    onmouseup={link.callback(|_| SignatureMsg::End)}
                    onmouseleave={link.callback(|_| SignatureMsg::End)}
                />
            </div>
        }
    }
}
