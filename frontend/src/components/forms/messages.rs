use common::editor::CellEdit;
use common::model::format::{FormatRecord, SubmissionRecord};
use common::model::schema::FieldTag;
use common::model::submission::SubmissionValue;
use common::store::SchemaStore;
use common::viewer::SubmissionState;

use super::state::Mode;

pub enum Msg {
    Loaded {
        store: SchemaStore,
        submission: SubmissionState,
    },
    LoadFailed(String),
    SetMode(Mode),

    // schema level
    SetTitle(String),
    SetWidth(String),
    AddField(FieldTag),
    RemoveField(String),
    SetFieldLabel(String, String),

    // table structure
    AddRow(String),
    AddCell(String, usize),
    DeleteRow(String, usize),
    DeleteCell(String, usize, usize),
    OpenCellEditor(String, usize, usize),
    CloseCellEditor,
    SaveCell(CellEdit),

    SaveSchema,
    SchemaSaved(FormatRecord),

    // viewer
    Input(String, SubmissionValue),
    Submit,
    Submitted(SubmissionRecord),

    RequestFailed(&'static str, String),
}
