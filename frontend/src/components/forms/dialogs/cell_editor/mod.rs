//! Dialog editing one table cell.
//!
//! The dialog keeps its own `CellEditorState`; edits stay local until "Save",
//! which emits a `CellEdit` to the page. Whenever the page hands in a different
//! cell (or opens/closes the dialog) the local state is re-seeded from props,
//! see `Component::changed` below.

use common::editor::{CellEdit, CellEditorState, SchemaVariant};
use common::model::schema::{Alignment, Cell, CellType};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::tops_sheet::top_sheet::TopSheet;

/// Background classes offered in the picker. `None` keeps the current one.
const BACKGROUNDS: [(&str, &str); 5] = [
    ("bg-card/40", "Card"),
    ("bg-muted", "Muted"),
    ("bg-accent", "Accent"),
    ("bg-primary/10", "Primary"),
    ("bg-transparent", "None"),
];

#[derive(Properties, PartialEq)]
pub struct CellEditorProps {
    pub node_ref: NodeRef,
    /// Snapshot of the targeted cell; `None` while closed.
    pub cell: Option<Cell>,
    #[prop_or_default]
    pub variant: SchemaVariant,
    pub on_save: Callback<CellEdit>,
    pub on_close: Callback<()>,
}

pub enum EditorMsg {
    SetType(String),
    SetValue(String),
    SetPlaceholder(String),
    SetAlignment(String),
    SetBg(String),
    SetFlex(String),
    SetIdentifier(String),
    Save,
    Close,
}

pub struct CellEditorDialog {
    state: CellEditorState,
}

impl Component for CellEditorDialog {
    type Message = EditorMsg;
    type Properties = CellEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut state = CellEditorState::default();
        if let Some(cell) = &ctx.props().cell {
            state.sync(cell, true);
        }
        Self { state }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        match &ctx.props().cell {
            Some(cell) => {
                self.state.sync(cell, true);
            }
            None => {
                let closed = Cell::new(self.state.cell_type);
                self.state.sync(&closed, false);
            }
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            EditorMsg::SetType(raw) => match CellType::parse(&raw) {
                Some(cell_type) => self.state.cell_type = cell_type,
                None => return false,
            },
            EditorMsg::SetValue(value) => self.state.value = value,
            EditorMsg::SetPlaceholder(placeholder) => self.state.placeholder = placeholder,
            EditorMsg::SetAlignment(raw) => match Alignment::parse(&raw) {
                Some(alignment) => self.state.alignment = alignment,
                None => return false,
            },
            EditorMsg::SetBg(bg) => self.state.bg = Some(bg),
            EditorMsg::SetFlex(raw) => self.state.set_flex_input(&raw),
            EditorMsg::SetIdentifier(identifier) => self.state.identifier = identifier,
            EditorMsg::Save => {
                ctx.props().on_save.emit(self.state.save());
                return false;
            }
            EditorMsg::Close => {
                ctx.props().on_close.emit(());
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let state = &self.state;

        let type_options = CellType::ALL
            .into_iter()
            .map(|t| html! { <option value={t.as_str()} selected={t == state.cell_type}>{ t.as_str() }</option> })
            .collect::<Html>();
        let alignment_options = Alignment::ALL
            .into_iter()
            .map(|a| html! { <option value={a.as_str()} selected={a == state.alignment}>{ a.as_str() }</option> })
            .collect::<Html>();
        let current_bg = state.bg.clone().unwrap_or_default();
        let bg_options = BACKGROUNDS
            .into_iter()
            .map(|(class, label)| html! { <option value={class} selected={class == current_bg}>{ label }</option> })
            .collect::<Html>();

        html! {
            <TopSheet node_ref={props.node_ref.clone()} title="Edit cell" on_close={link.callback(|_| EditorMsg::Close)}>
                <div class="cell-editor">
                    <label>{"Type"}
                        <select onchange={link.callback(|e: Event| EditorMsg::SetType(e.target_unchecked_into::<HtmlSelectElement>().value()))}>
                            { type_options }
                        </select>
                    </label>
                    <label>{ if state.cell_type == CellType::Link { "URL" } else { "Text" } }
                        <input type="text" value={state.value.clone()}
                            oninput={link.callback(|e: InputEvent| EditorMsg::SetValue(e.target_unchecked_into::<HtmlInputElement>().value()))} />
                    </label>
                    <label>{"Placeholder"}
                        <input type="text" value={state.placeholder.clone()}
                            oninput={link.callback(|e: InputEvent| EditorMsg::SetPlaceholder(e.target_unchecked_into::<HtmlInputElement>().value()))} />
                    </label>
                    <label>{"Alignment"}
                        <select onchange={link.callback(|e: Event| EditorMsg::SetAlignment(e.target_unchecked_into::<HtmlSelectElement>().value()))}>
                            { alignment_options }
                        </select>
                    </label>
                    <label>{"Background"}
                        <select onchange={link.callback(|e: Event| EditorMsg::SetBg(e.target_unchecked_into::<HtmlSelectElement>().value()))}>
                            if current_bg.is_empty() || !BACKGROUNDS.iter().any(|(class, _)| *class == current_bg) {
                                <option value={current_bg.clone()} selected={true}>{"(current)"}</option>
                            }
                            { bg_options }
                        </select>
                    </label>
                    <label>{"Width (flex)"}
                        <input type="number" step="0.5" min="0.5" value={state.cell_flex.to_string()}
                            oninput={link.callback(|e: InputEvent| EditorMsg::SetFlex(e.target_unchecked_into::<HtmlInputElement>().value()))} />
                    </label>
                    if props.variant.shows_identifier() {
                        <label>{"Identifier"}
                            <input type="text" value={state.identifier.clone()} placeholder="e.g. patient_name"
                                oninput={link.callback(|e: InputEvent| EditorMsg::SetIdentifier(e.target_unchecked_into::<HtmlInputElement>().value()))} />
                        </label>
                    }
                    <div class="dialog-actions">
                        <button class="btn" onclick={link.callback(|_| EditorMsg::Close)}>{"Cancel"}</button>
                        <button class="btn primary" onclick={link.callback(|_| EditorMsg::Save)}>{"Save"}</button>
                    </div>
                </div>
            </TopSheet>
        }
    }
}
