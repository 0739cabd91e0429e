//! View rendering for the form page.
//!
//! A toolbar on top switches between "Builder" and "Viewer". The builder adds
//! schema chrome (title, width, add-field buttons, per-field label and remove,
//! the table editing controls) and a save button with an unsaved-changes dot.
//! The viewer renders the same fields with live inputs and a submit button.

use common::model::schema::{Field, FieldKind, FieldTag};
use common::viewer::duplicate_keys;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::cell_editor::CellEditorDialog;
use super::messages::Msg;
use super::state::{FormPage, Mode};
use super::table::leaf_field;
use crate::form_canvas::{FormCanvas, DEFAULT_WIDTH};

pub fn view(page: &FormPage, ctx: &Context<FormPage>) -> Html {
    let link = ctx.link();

    if !page.ready {
        return html! { <div class="form-loading">{"Loading…"}</div> };
    }
    if let Some(e) = &page.load_error {
        return html! {
            <div class="form-error">
                <p>{"This form could not be loaded."}</p>
                <pre>{ e.clone() }</pre>
            </div>
        };
    }

    let schema = page.store.schema();
    let fields = schema
        .fields
        .iter()
        .map(|field| build_field(page, field, link))
        .collect::<Html>();

    html! {
        <div class="form-page-root">
            { build_toolbar(page, ctx) }
            if page.mode == Mode::Builder {
                { build_schema_bar(page, link) }
                { build_duplicate_warning(page) }
            }
            <FormCanvas width={schema.width}>
                if !schema.title.is_empty() {
                    <h2 class="form-title">{ schema.title.clone() }</h2>
                }
                { fields }
            </FormCanvas>
            <CellEditorDialog
                node_ref={page.cell_dialog_ref.clone()}
                cell={page.editing.as_ref().map(|(_, cell)| cell.clone())}
                variant={ctx.props().variant}
                on_save={link.callback(Msg::SaveCell)}
                on_close={link.callback(|_| Msg::CloseCellEditor)}
            />
        </div>
    }
}

fn build_toolbar(page: &FormPage, ctx: &Context<FormPage>) -> Html {
    let link = ctx.link();
    let dirty = page.store.is_dirty();
    let action = match page.mode {
        Mode::Builder => icon_button(
            "save",
            "Save",
            link.callback(|_| Msg::SaveSchema),
            page.saving,
            dirty,
        ),
        Mode::Viewer => icon_button(
            "send",
            "Submit",
            link.callback(|_| Msg::Submit),
            page.saving || ctx.props().organisation_id.is_none(),
            false,
        ),
    };

    html! {
        <div class="icon-toolbar">
            <div class="tab-bar">
                <button
                    class={classes!("tab-btn", (page.mode == Mode::Builder).then_some("active"))}
                    onclick={link.callback(|_| Msg::SetMode(Mode::Builder))}
                >
                    {"Builder"}
                </button>
                <button
                    class={classes!("tab-btn", (page.mode == Mode::Viewer).then_some("active"))}
                    onclick={link.callback(|_| Msg::SetMode(Mode::Viewer))}
                >
                    {"Viewer"}
                </button>
            </div>
            { action }
        </div>
    }
}

fn build_schema_bar(page: &FormPage, link: &Scope<FormPage>) -> Html {
    let schema = page.store.schema();
    let add_buttons = FieldTag::ALL
        .into_iter()
        .map(|tag| {
            icon_button(
                field_icon(tag),
                tag.as_str(),
                link.callback(move |_| Msg::AddField(tag)),
                false,
                false,
            )
        })
        .collect::<Html>();

    html! {
        <div class="schema-bar">
            <label>{"Title"}
                <input type="text" value={schema.title.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetTitle(e.target_unchecked_into::<HtmlInputElement>().value()))} />
            </label>
            <label>{"Width (px)"}
                <input type="number" min="200" step="10"
                    value={schema.width.unwrap_or(DEFAULT_WIDTH).to_string()}
                    onchange={link.callback(|e: Event| Msg::SetWidth(e.target_unchecked_into::<HtmlInputElement>().value()))} />
            </label>
            <div class="add-field">{ add_buttons }</div>
        </div>
    }
}

fn build_duplicate_warning(page: &FormPage) -> Html {
    let duplicates = duplicate_keys(page.store.schema());
    if duplicates.is_empty() {
        return html! {};
    }
    let items = duplicates
        .iter()
        .map(|(key, count)| html! { <li>{ format!("{} ({} inputs)", key, count) }</li> })
        .collect::<Html>();
    html! {
        <div class="form-warning" title="Inputs sharing a key overwrite each other's value">
            {"Duplicate identifiers:"}
            <ul>{ items }</ul>
        </div>
    }
}

fn build_field(page: &FormPage, field: &Field, link: &Scope<FormPage>) -> Html {
    let body = leaf_field(field, page.mode, page.submission.data(), link);

    if page.mode == Mode::Viewer {
        let caption = match &field.kind {
            FieldKind::Label => None,
            _ => field.label.clone(),
        };
        return html! {
            <section class="form-field">
                if let Some(caption) = caption {
                    <h3 class="field-caption">{ caption }</h3>
                }
                { body }
            </section>
        };
    }

    let (label_id, remove_id) = (field.id.clone(), field.id.clone());
    html! {
        <section class="form-field builder">
            <div class="field-chrome">
                <span class="field-type">{ field.kind.tag().as_str() }</span>
                <input type="text" placeholder="Label" value={field.label.clone().unwrap_or_default()}
                    oninput={link.callback(move |e: InputEvent| {
                        Msg::SetFieldLabel(label_id.clone(), e.target_unchecked_into::<HtmlInputElement>().value())
                    })} />
                <button class="icon-btn" title="Remove field" onclick={link.callback(move |_| Msg::RemoveField(remove_id.clone()))}>
                    <i class="material-icons">{"delete"}</i>
                </button>
            </div>
            { body }
        </section>
    }
}

fn field_icon(tag: FieldTag) -> &'static str {
    match tag {
        FieldTag::Text => "short_text",
        FieldTag::Number => "pin",
        FieldTag::Checkbox => "check_box",
        FieldTag::Label => "title",
        FieldTag::Table => "table_chart",
    }
}

/// Renders a toolbar button with a Material icon and a label. A red dot marks
/// unsaved changes.
fn icon_button(
    icon_name: &str,
    label: &str,
    on_click: Callback<MouseEvent>,
    disabled: bool,
    dirty: bool,
) -> Html {
    html! {
        <button class="icon-btn" onclick={on_click} disabled={disabled} style="position: relative;">
            <i class="material-icons">{ icon_name.to_string() }</i>
            <span class="icon-label">{ label.to_string() }</span>
            if dirty {
                <span
                    title="Unsaved changes"
                    style="position: absolute; top: 4px; right: 6px; width: 8px; height: 8px; background: #e53935; border-radius: 50%;"
                />
            }
        </button>
    }
}
