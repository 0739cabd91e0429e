//! # Form / checklist schema
//!
//! The schema is the JSON-serializable description of a form or checklist: an
//! ordered list of fields, where `table` fields carry ragged rows of typed cells.
//!
//! The backend stores the schema as an opaque JSON string (the `format` column).
//! Clients decode it immediately into the types below through
//! [`FormSchema::from_format`], so a malformed payload surfaces as a
//! [`SchemaError::Decode`] instead of a half-populated structure.
//!
//! Wire shape (kept compatible with previously persisted formats):
//!
//! ```json
//! { "id": "f1", "title": "Intake", "fields": [
//!     { "id": "field-1", "type": "table", "rows": [
//!         [ { "type": "label", "value": "Name", "cellFlex": 2 },
//!           { "type": "field", "placeholder": "Field", "identifier": "cell-1" } ]
//!     ] }
//! ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Background class given to cells created by the builder.
pub const DEFAULT_CELL_BG: &str = "bg-card/40";

/// Placeholder given to cells created by the builder.
pub const DEFAULT_CELL_PLACEHOLDER: &str = "Field";

/// The persisted unit: one form or checklist definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Render order.
    pub fields: Vec<Field>,
    /// Display width hint in pixels, independent of field content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl FormSchema {
    /// An empty schema, used when a builder page mounts with nothing persisted.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            fields: Vec::new(),
            width: None,
        }
    }

    /// Decodes a persisted `format` string.
    ///
    /// A missing or blank format means nothing was saved yet and yields `None`.
    /// Anything else must decode completely, including the `fields` list.
    pub fn from_format(format: Option<&str>) -> Result<Option<Self>, SchemaError> {
        match format.map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| SchemaError::Decode(e.to_string())),
        }
    }

    /// Serializes the whole schema into the string stored by the backend.
    pub fn to_format(&self) -> Result<String, SchemaError> {
        serde_json::to_string(self).map_err(|e| SchemaError::Encode(e.to_string()))
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.id == id)
    }
}

/// One named unit within a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl Field {
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            label: None,
            placeholder: None,
            required: None,
            kind,
        }
    }

    pub fn rows(&self) -> Option<&[Row]> {
        match &self.kind {
            FieldKind::Table { rows } => Some(rows),
            _ => None,
        }
    }

    pub fn rows_mut(&mut self) -> Option<&mut Vec<Row>> {
        match &mut self.kind {
            FieldKind::Table { rows } => Some(rows),
            _ => None,
        }
    }
}

/// Field discriminant, serialized under the `type` key of the field object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Checkbox,
    Label,
    Table {
        #[serde(default)]
        rows: Vec<Row>,
    },
}

impl FieldKind {
    /// A kind with empty structure, as created by the "add field" action.
    pub fn fresh(tag: FieldTag) -> Self {
        match tag {
            FieldTag::Text => FieldKind::Text,
            FieldTag::Number => FieldKind::Number,
            FieldTag::Checkbox => FieldKind::Checkbox,
            FieldTag::Label => FieldKind::Label,
            FieldTag::Table => FieldKind::Table { rows: Vec::new() },
        }
    }

    pub fn tag(&self) -> FieldTag {
        match self {
            FieldKind::Text => FieldTag::Text,
            FieldKind::Number => FieldTag::Number,
            FieldKind::Checkbox => FieldTag::Checkbox,
            FieldKind::Label => FieldTag::Label,
            FieldKind::Table { .. } => FieldTag::Table,
        }
    }
}

/// Data-less version of [`FieldKind`], used by toolbars and `add_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTag {
    Text,
    Number,
    Checkbox,
    Label,
    Table,
}

impl FieldTag {
    pub const ALL: [FieldTag; 5] = [
        FieldTag::Text,
        FieldTag::Number,
        FieldTag::Checkbox,
        FieldTag::Label,
        FieldTag::Table,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldTag::Text => "text",
            FieldTag::Number => "number",
            FieldTag::Checkbox => "checkbox",
            FieldTag::Label => "label",
            FieldTag::Table => "table",
        }
    }
}

/// An ordered, independently sized sequence of cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(pub Vec<Cell>);

impl Row {
    pub fn single(cell: Cell) -> Self {
        Row(vec![cell])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One typed, positioned unit within a table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "type")]
    pub cell_type: CellType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(rename = "cellFlex", default, skip_serializing_if = "Option::is_none")]
    pub cell_flex: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

impl Cell {
    /// A bare cell of the given type with every optional property unset.
    pub fn new(cell_type: CellType) -> Self {
        Self {
            cell_type,
            value: None,
            placeholder: None,
            bg: None,
            alignment: None,
            cell_flex: None,
            identifier: None,
        }
    }

    /// The default input cell appended by "add row" / "add cell".
    pub fn default_field(identifier: impl Into<String>) -> Self {
        Self {
            value: Some(String::new()),
            placeholder: Some(DEFAULT_CELL_PLACEHOLDER.to_string()),
            bg: Some(DEFAULT_CELL_BG.to_string()),
            identifier: Some(identifier.into()),
            ..Self::new(CellType::Field)
        }
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment.unwrap_or_default()
    }

    /// Relative width weight; anything unset, non-finite or non-positive reads as 1.
    pub fn flex(&self) -> f64 {
        normalize_flex(self.cell_flex)
    }

    /// The explicit identifier, ignoring blank strings.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Key used to bind this cell's input inside a submission map.
    ///
    /// The explicit identifier wins; otherwise the position within the owning
    /// field is used, in the form `"{field_id}-{row}-{col}"`.
    pub fn binding_key(&self, field_id: &str, row: usize, col: usize) -> String {
        match self.identifier() {
            Some(id) => id.to_string(),
            None => format!("{}-{}-{}", field_id, row, col),
        }
    }
}

pub(crate) fn normalize_flex(flex: Option<f64>) -> f64 {
    match flex {
        Some(f) if f.is_finite() && f > 0.0 => f,
        _ => 1.0,
    }
}

/// Cell discriminant. Decoding an unknown tag is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Label,
    Field,
    Checkbox,
    Date,
    Signature,
    Link,
}

impl CellType {
    pub const ALL: [CellType; 6] = [
        CellType::Label,
        CellType::Field,
        CellType::Checkbox,
        CellType::Date,
        CellType::Signature,
        CellType::Link,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CellType::Label => "label",
            CellType::Field => "field",
            CellType::Checkbox => "checkbox",
            CellType::Date => "date",
            CellType::Signature => "signature",
            CellType::Link => "link",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }

    /// Whether a viewer captures user input for this cell.
    pub fn is_input(self) -> bool {
        match self {
            CellType::Field | CellType::Checkbox | CellType::Date | CellType::Signature => true,
            CellType::Label | CellType::Link => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == raw)
    }

    /// CSS `text-align` / `justify-content` keyword.
    pub fn css(self) -> &'static str {
        match self {
            Alignment::Left => "start",
            Alignment::Center => "center",
            Alignment::Right => "end",
        }
    }
}
