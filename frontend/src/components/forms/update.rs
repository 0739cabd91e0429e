//! Update function for the form page.
//!
//! Elm-style: receives the current `FormPage`, the `Context` and a `Msg`,
//! mutates the state, and returns whether the view should re-render.
//!
//! Key behaviors
//! - Schema edits go straight to the owned `SchemaStore`; nothing is persisted
//!   until `Msg::SaveSchema`.
//! - Saves send the whole serialized schema (create first time, update after).
//! - Viewer inputs merge into the submission map; `Msg::Submit` replaces the
//!   stored submission wholesale.
//! - Failed requests show a static toast and leave local state as it was, so
//!   the user can simply press the same button again.

use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{set_window_dirty_flag, show_toast};
use super::messages::Msg;
use super::state::FormPage;

pub fn update(page: &mut FormPage, ctx: &Context<FormPage>, msg: Msg) -> bool {
    let rerender = match msg {
        Msg::Loaded { store, submission } => {
            page.store = store;
            page.submission = submission;
            page.ready = true;
            page.load_error = None;
            true
        }
        Msg::LoadFailed(e) => {
            error!(format!("loading {} failed: {}", ctx.props().owner_id, e));
            page.ready = true;
            page.load_error = Some(e);
            show_toast("Failed to load the form.");
            true
        }
        Msg::SetMode(mode) => {
            page.mode = mode;
            if page.editing.take().is_some() {
                close_top_sheet(page.cell_dialog_ref.clone());
            }
            true
        }
        Msg::SetTitle(title) => {
            page.store.set_title(title);
            true
        }
        Msg::SetWidth(raw) => match raw.trim().parse::<u32>() {
            Ok(width) if width > 0 => {
                page.store.update_form_width(width);
                true
            }
            _ => false,
        },
        Msg::AddField(tag) => {
            page.store.add_field(tag);
            true
        }
        Msg::RemoveField(id) => {
            page.store.remove_field(&id);
            true
        }
        Msg::SetFieldLabel(id, label) => {
            page.store
                .update_field(&id, common::store::FieldUpdate::label(label));
            true
        }
        Msg::AddRow(field_id) => {
            page.store.add_row(&field_id);
            true
        }
        Msg::AddCell(field_id, row) => {
            page.store.add_cell(&field_id, row);
            true
        }
        Msg::DeleteRow(field_id, row) => {
            page.store.delete_row(&field_id, row);
            true
        }
        Msg::DeleteCell(field_id, row, col) => {
            page.store.delete_cell(&field_id, row, col);
            true
        }
        Msg::OpenCellEditor(field_id, row, col) => {
            page.editing = page.store.open_cell_editor(&field_id, row, col);
            if page.editing.is_some() {
                open_top_sheet(page.cell_dialog_ref.clone());
            }
            true
        }
        Msg::CloseCellEditor => {
            page.editing = None;
            close_top_sheet(page.cell_dialog_ref.clone());
            true
        }
        Msg::SaveCell(edit) => {
            if let Some((target, _)) = page.editing.take() {
                page.store.save_cell(&target, edit);
            }
            close_top_sheet(page.cell_dialog_ref.clone());
            true
        }
        Msg::SaveSchema => {
            if page.saving {
                return false;
            }
            match page.store.save_action(&ctx.props().owner_id) {
                Ok(action) => {
                    page.saving = true;
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match api::save_format(action).await {
                            Ok(record) => link.send_message(Msg::SchemaSaved(record)),
                            Err(e) => link
                                .send_message(Msg::RequestFailed("Failed to save the format.", e)),
                        }
                    });
                }
                Err(e) => {
                    error!(e.to_string());
                    show_toast("Failed to save the format.");
                }
            }
            true
        }
        Msg::SchemaSaved(record) => {
            log!(format!("format {} saved", record.id));
            page.store.mark_saved(&record);
            page.saving = false;
            show_toast("Format saved.");
            true
        }
        Msg::Input(key, value) => {
            page.submission.handle_change(key, value);
            true
        }
        Msg::Submit => {
            let Some(organisation_id) = ctx.props().organisation_id.clone() else {
                show_toast("Select an organisation before submitting.");
                return false;
            };
            if page.saving {
                return false;
            }
            match page
                .submission
                .submit(&organisation_id, &ctx.props().owner_id)
            {
                Ok(write) => {
                    page.saving = true;
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match api::save_submission(write).await {
                            Ok(record) => link.send_message(Msg::Submitted(record)),
                            Err(e) => link.send_message(Msg::RequestFailed(
                                "Failed to save the submission.",
                                e,
                            )),
                        }
                    });
                }
                Err(e) => {
                    error!(e.to_string());
                    show_toast("Failed to save the submission.");
                }
            }
            true
        }
        Msg::Submitted(record) => {
            log!(format!("submission {} saved", record.id));
            page.submission.mark_saved(&record);
            page.saving = false;
            show_toast("Submission saved.");
            true
        }
        Msg::RequestFailed(message, detail) => {
            error!(detail);
            page.saving = false;
            show_toast(message);
            true
        }
    };

    set_window_dirty_flag(page.store.is_dirty());
    rerender
}
