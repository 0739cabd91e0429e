//! Table rendering shared by the builder and the viewer.
//!
//! Both modes walk the same rows and dispatch on the same `CellType`; they
//! differ only in whether inputs are live and whether the editing chrome
//! (cell edit/delete, add cell, delete row, add row) is shown.

use common::model::schema::{Cell, CellType, Field, Row};
use common::model::submission::{SubmissionData, SubmissionValue};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::cell_style;
use super::messages::Msg;
use super::signature::SignaturePad;
use super::state::{FormPage, Mode};

pub fn table(
    field: &Field,
    rows: &[Row],
    mode: Mode,
    data: &SubmissionData,
    link: &Scope<FormPage>,
) -> Html {
    let rendered_rows = rows
        .iter()
        .enumerate()
        .map(|(r, row)| table_row(field, r, row, mode, data, link))
        .collect::<Html>();

    let add_row = if mode == Mode::Builder {
        let id = field.id.clone();
        html! {
            <button class="icon-btn" title="Add row" onclick={link.callback(move |_| Msg::AddRow(id.clone()))}>
                <i class="material-icons">{"playlist_add"}</i>
                <span class="icon-label">{"Row"}</span>
            </button>
        }
    } else {
        html! {}
    };

    html! {
        <div class="form-table">
            { rendered_rows }
            { add_row }
        </div>
    }
}

fn table_row(
    field: &Field,
    r: usize,
    row: &Row,
    mode: Mode,
    data: &SubmissionData,
    link: &Scope<FormPage>,
) -> Html {
    let cells = row
        .cells()
        .iter()
        .enumerate()
        .map(|(c, cell)| {
            let key = cell.binding_key(&field.id, r, c);
            let body = cell_body(cell, &key, mode, data, link);
            html! {
                <div class={classes!("form-cell", cell.bg.clone())} style={cell_style(cell.flex(), cell.alignment().css())}>
                    { body }
                    { cell_chrome(&field.id, r, c, mode, link) }
                </div>
            }
        })
        .collect::<Html>();

    let row_chrome = if mode == Mode::Builder {
        let (add_id, del_id) = (field.id.clone(), field.id.clone());
        html! {
            <div class="row-chrome">
                <button class="icon-btn" title="Add cell" onclick={link.callback(move |_| Msg::AddCell(add_id.clone(), r))}>
                    <i class="material-icons">{"add"}</i>
                </button>
                <button class="icon-btn" title="Delete row" onclick={link.callback(move |_| Msg::DeleteRow(del_id.clone(), r))}>
                    <i class="material-icons">{"delete_sweep"}</i>
                </button>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="form-row" style="display: flex; gap: 4px; align-items: stretch;">
            { cells }
            { row_chrome }
        </div>
    }
}

fn cell_chrome(field_id: &str, r: usize, c: usize, mode: Mode, link: &Scope<FormPage>) -> Html {
    if mode != Mode::Builder {
        return html! {};
    }
    let (edit_id, del_id) = (field_id.to_string(), field_id.to_string());
    html! {
        <span class="cell-chrome">
            <button class="icon-btn small" title="Edit cell" onclick={link.callback(move |_| Msg::OpenCellEditor(edit_id.clone(), r, c))}>
                <i class="material-icons">{"edit"}</i>
            </button>
            <button class="icon-btn small" title="Delete cell" onclick={link.callback(move |_| Msg::DeleteCell(del_id.clone(), r, c))}>
                <i class="material-icons">{"close"}</i>
            </button>
        </span>
    }
}

/// The input or text of one cell. In builder mode every input is disabled.
fn cell_body(
    cell: &Cell,
    key: &str,
    mode: Mode,
    data: &SubmissionData,
    link: &Scope<FormPage>,
) -> Html {
    let disabled = mode == Mode::Builder;
    let value = cell.value.clone().unwrap_or_default();
    let placeholder = cell.placeholder.clone().unwrap_or_default();

    match cell.cell_type {
        CellType::Label => html! { <span class="cell-label">{ value }</span> },
        CellType::Link => {
            let text = if placeholder.is_empty() { value.clone() } else { placeholder };
            html! { <a href={value} target="_blank" rel="noopener noreferrer">{ text }</a> }
        }
        CellType::Field => html! {
            <input
                type="text"
                placeholder={placeholder}
                disabled={disabled}
                value={data.text(key).to_string()}
                oninput={text_input(key, link)}
            />
        },
        CellType::Date => html! {
            <input
                type="date"
                disabled={disabled}
                value={data.text(key).to_string()}
                onchange={text_change(key, link)}
            />
        },
        CellType::Checkbox => {
            let k = key.to_string();
            html! {
                <label class="cell-checkbox">
                    <input
                        type="checkbox"
                        disabled={disabled}
                        checked={data.flag(key)}
                        onchange={link.callback(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::Input(k.clone(), SubmissionValue::Flag(input.checked()))
                        })}
                    />
                    { value }
                </label>
            }
        }
        CellType::Signature => {
            let k = key.to_string();
            html! {
                <SignaturePad
                    value={AttrValue::from(data.text(key).to_string())}
                    disabled={disabled}
                    on_change={link.callback(move |url: String| Msg::Input(k.clone(), SubmissionValue::Text(url)))}
                />
            }
        }
    }
}

/// Leaf (non-table) fields bind directly under the field id.
pub fn leaf_field(field: &Field, mode: Mode, data: &SubmissionData, link: &Scope<FormPage>) -> Html {
    use common::model::schema::FieldKind;

    let disabled = mode == Mode::Builder;
    let key = field.id.as_str();
    let placeholder = field.placeholder.clone().unwrap_or_default();
    match &field.kind {
        FieldKind::Text => html! {
            <input type="text" placeholder={placeholder} disabled={disabled}
                value={data.text(key).to_string()} oninput={text_input(key, link)} />
        },
        FieldKind::Number => html! {
            <input type="number" placeholder={placeholder} disabled={disabled}
                value={data.text(key).to_string()} oninput={text_input(key, link)} />
        },
        FieldKind::Checkbox => {
            let k = key.to_string();
            html! {
                <input type="checkbox" disabled={disabled} checked={data.flag(key)}
                    onchange={link.callback(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::Input(k.clone(), SubmissionValue::Flag(input.checked()))
                    })} />
            }
        }
        FieldKind::Label => html! {
            <p class="field-label">{ field.label.clone().unwrap_or_default() }</p>
        },
        FieldKind::Table { rows } => table(field, rows, mode, data, link),
    }
}

fn text_input(key: &str, link: &Scope<FormPage>) -> Callback<InputEvent> {
    let k = key.to_string();
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Input(k.clone(), SubmissionValue::Text(input.value()))
    })
}

fn text_change(key: &str, link: &Scope<FormPage>) -> Callback<Event> {
    let k = key.to_string();
    link.callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Input(k.clone(), SubmissionValue::Text(input.value()))
    })
}
