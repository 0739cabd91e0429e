//! # Viewer submission state
//!
//! The viewer renders a schema as a fillable form. Every input writes one entry
//! into a flat [`SubmissionData`] map keyed by the cell's binding key (or the
//! field id for leaf fields). Saving always sends the whole map: create when no
//! submission exists for the organisation + owner pair, update otherwise.

use std::collections::BTreeMap;

use crate::error::SchemaError;
use crate::model::format::SubmissionRecord;
use crate::model::schema::{FieldKind, FormSchema};
use crate::model::submission::{SubmissionData, SubmissionValue};
use crate::requests::SaveSubmissionRequest;

/// What the viewer's submit button should send.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionWrite {
    Create(SaveSubmissionRequest),
    Update {
        id: String,
        request: SaveSubmissionRequest,
    },
}

impl SubmissionWrite {
    pub fn request(&self) -> &SaveSubmissionRequest {
        match self {
            SubmissionWrite::Create(request) | SubmissionWrite::Update { request, .. } => request,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionState {
    data: SubmissionData,
    record_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl SubmissionState {
    /// Starts from the persisted submission when there is one, empty otherwise.
    pub fn load(record: Option<&SubmissionRecord>) -> Result<Self, SchemaError> {
        let Some(record) = record else {
            return Ok(Self::default());
        };
        Ok(Self {
            data: record.submission()?,
            record_id: Some(record.id.clone()),
            name: record.name.clone(),
            description: record.description.clone(),
        })
    }

    pub fn data(&self) -> &SubmissionData {
        &self.data
    }

    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    /// Merges one key into the map, overwriting any previous value.
    pub fn handle_change(&mut self, key: impl Into<String>, value: impl Into<SubmissionValue>) {
        self.data.set(key, value);
    }

    pub fn submit(
        &self,
        organisation_id: &str,
        owner_id: &str,
    ) -> Result<SubmissionWrite, SchemaError> {
        let request = SaveSubmissionRequest {
            data: self.data.to_blob()?,
            owner_id: owner_id.to_string(),
            organisation_id: organisation_id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
        };
        Ok(match &self.record_id {
            Some(id) => SubmissionWrite::Update {
                id: id.clone(),
                request,
            },
            None => SubmissionWrite::Create(request),
        })
    }

    pub fn mark_saved(&mut self, record: &SubmissionRecord) {
        self.record_id = Some(record.id.clone());
    }
}

/// Binding keys claimed by more than one input, with how often each occurs.
///
/// Two inputs sharing a key silently overwrite each other's value, so the
/// builder surfaces these.
pub fn duplicate_keys(schema: &FormSchema) -> BTreeMap<String, usize> {
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    for field in &schema.fields {
        match &field.kind {
            FieldKind::Table { rows } => {
                for (r, row) in rows.iter().enumerate() {
                    for (c, cell) in row.cells().iter().enumerate() {
                        if cell.cell_type.is_input() {
                            *seen.entry(cell.binding_key(&field.id, r, c)).or_default() += 1;
                        }
                    }
                }
            }
            FieldKind::Label => {}
            FieldKind::Text | FieldKind::Number | FieldKind::Checkbox => {
                *seen.entry(field.id.clone()).or_default() += 1;
            }
        }
    }
    seen.retain(|_, count| *count > 1);
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::{Cell, CellType, Field, Row};

    fn record(data: &str) -> SubmissionRecord {
        SubmissionRecord {
            id: "sub-1".into(),
            data: data.into(),
            owner_id: "checklist-1".into(),
            organisation_id: "org-1".into(),
            name: None,
            description: None,
        }
    }

    #[test]
    fn second_change_wins() {
        let mut state = SubmissionState::default();
        state.handle_change("cell-1", "first");
        state.handle_change("cell-1", "second");
        assert_eq!(state.data().len(), 1);
        assert_eq!(state.data().text("cell-1"), "second");
    }

    #[test]
    fn fresh_submission_creates() {
        let mut state = SubmissionState::load(None).unwrap();
        state.handle_change("done", true);
        match state.submit("org-1", "checklist-1").unwrap() {
            SubmissionWrite::Create(req) => {
                assert_eq!(req.data, r#"{"done":true}"#);
                assert_eq!(req.organisation_id, "org-1");
                assert_eq!(req.owner_id, "checklist-1");
            }
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[test]
    fn edit_existing_submission_updates_with_exact_payload() {
        let mut state = SubmissionState::load(Some(&record(r#"{"cell-1":"Alice"}"#))).unwrap();
        state.handle_change("cell-1", "Bob");

        let write = state.submit("org-1", "checklist-1").unwrap();
        let SubmissionWrite::Update { id, request } = write else {
            panic!("expected update");
        };
        assert_eq!(id, "sub-1");
        assert_eq!(request.data, r#"{"cell-1":"Bob"}"#);
    }

    #[test]
    fn malformed_blob_is_an_error() {
        assert!(matches!(
            SubmissionState::load(Some(&record("not json"))),
            Err(SchemaError::Decode(_))
        ));
    }

    #[test]
    fn duplicate_keys_are_reported() {
        let mut a = Cell::new(CellType::Field);
        a.identifier = Some("name".into());
        let b = a.clone();
        let heading = Cell::new(CellType::Label);
        let schema = FormSchema {
            id: "s".into(),
            title: String::new(),
            fields: vec![
                Field::new(
                    "t",
                    FieldKind::Table {
                        rows: vec![Row(vec![heading.clone(), a]), Row(vec![heading, b])],
                    },
                ),
                Field::new("notes", FieldKind::Text),
            ],
            width: None,
        };
        let dups = duplicate_keys(&schema);
        assert_eq!(dups.len(), 1);
        assert_eq!(dups.get("name"), Some(&2));
    }
}
