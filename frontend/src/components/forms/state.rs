//! Runtime state of the form page.
//!
//! The page owns the [`SchemaStore`] and the viewer's [`SubmissionState`]; the
//! builder table, the viewer table and the cell editor only receive borrowed
//! data and callbacks, so there is exactly one writer.

use common::model::schema::Cell;
use common::store::{CellTarget, SchemaStore};
use common::viewer::SubmissionState;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Builder,
    Viewer,
}

pub struct FormPage {
    pub store: SchemaStore,
    pub submission: SubmissionState,
    pub mode: Mode,

    /// Target and snapshot of the cell the editor dialog is bound to.
    pub editing: Option<(CellTarget, Cell)>,
    pub cell_dialog_ref: NodeRef,

    /// Guard for the one-time fetch on first render.
    pub loaded: bool,
    /// Set once the fetch finished, successfully or not.
    pub ready: bool,
    pub load_error: Option<String>,
    pub saving: bool,
}

impl FormPage {
    pub fn new(mode: Mode) -> Self {
        Self {
            store: SchemaStore::new(),
            submission: SubmissionState::default(),
            mode,
            editing: None,
            cell_dialog_ref: NodeRef::default(),
            loaded: false,
            ready: false,
            load_error: None,
            saving: false,
        }
    }
}
