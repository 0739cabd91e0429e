//! # Schema store
//!
//! [`SchemaStore`] owns the single in-memory [`FormSchema`] being edited and
//! exposes every mutation the builder needs. It is an explicitly owned value:
//! the page component holds it and hands out callbacks, so there is no ambient
//! global state and each store can be exercised in isolation.
//!
//! Mutations are synchronous and purely in-memory. Persistence only happens
//! when the caller asks for a [`SaveAction`] and sends it; the store then
//! records the acknowledged record through [`SchemaStore::mark_saved`], which
//! also resets dirty tracking.

mod builder;

pub use builder::CellTarget;

use uuid::Uuid;

use crate::error::SchemaError;
use crate::model::format::FormatRecord;
use crate::model::schema::{Field, FieldKind, FieldTag, FormSchema, Row};
use crate::requests::SaveFormatRequest;

/// Partial update merged into a field by [`SchemaStore::update_field`].
/// Only `Some` members are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldUpdate {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
    /// Ignored unless the field is a table.
    pub rows: Option<Vec<Row>>,
}

impl FieldUpdate {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }
}

/// What the top-level save button should send.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveAction {
    Create(SaveFormatRequest),
    Update { id: String, request: SaveFormatRequest },
}

impl SaveAction {
    pub fn request(&self) -> &SaveFormatRequest {
        match self {
            SaveAction::Create(request) | SaveAction::Update { request, .. } => request,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaStore {
    schema: FormSchema,
    /// Id of the persisted format record, once one exists.
    format_id: Option<String>,
    /// MD5 of the schema encoding last loaded from or saved to the backend.
    saved_md5: Option<String>,
}

impl Default for SchemaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaStore {
    pub fn new() -> Self {
        Self {
            schema: FormSchema::empty(Uuid::new_v4().to_string()),
            format_id: None,
            saved_md5: None,
        }
    }

    /// Builds a store from whatever the backend returned for the owner.
    /// No record, or a record with a blank format, starts an empty schema.
    pub fn from_record(record: Option<&FormatRecord>) -> Result<Self, SchemaError> {
        let mut store = Self::new();
        if let Some(record) = record {
            if let Some(schema) = record.schema()? {
                store.schema = schema;
            }
            store.format_id = Some(record.id.clone());
            // re-encoded, not the stored text
            store.saved_md5 = Some(compute_md5(&store.to_format()?));
        }
        Ok(store)
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn format_id(&self) -> Option<&str> {
        self.format_id.as_deref()
    }

    /// Replaces the whole schema.
    pub fn set_form(&mut self, schema: FormSchema) {
        self.schema = schema;
    }

    /// Appends a new field and returns its id. Tables start without rows.
    pub fn add_field(&mut self, tag: FieldTag) -> String {
        let id = loop {
            let candidate = format!("field-{}", Uuid::new_v4().simple());
            if self.schema.field(&candidate).is_none() {
                break candidate;
            }
        };
        self.schema
            .fields
            .push(Field::new(id.clone(), FieldKind::fresh(tag)));
        id
    }

    /// Merges `update` into the field with `id`. Unknown ids are ignored.
    pub fn update_field(&mut self, id: &str, update: FieldUpdate) {
        let Some(field) = self.schema.field_mut(id) else {
            return;
        };
        if let Some(label) = update.label {
            field.label = Some(label);
        }
        if let Some(placeholder) = update.placeholder {
            field.placeholder = Some(placeholder);
        }
        if let Some(required) = update.required {
            field.required = Some(required);
        }
        if let (Some(rows), Some(current)) = (update.rows, field.rows_mut()) {
            *current = rows;
        }
    }

    pub fn remove_field(&mut self, id: &str) {
        self.schema.fields.retain(|f| f.id != id);
    }

    pub fn update_form_width(&mut self, width: u32) {
        self.schema.width = Some(width);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.schema.title = title.into();
    }

    /// Serialized schema, exactly what a save sends.
    pub fn to_format(&self) -> Result<String, SchemaError> {
        self.schema.to_format()
    }

    /// Create when nothing is persisted yet, update otherwise. Always the whole schema.
    pub fn save_action(&self, owner_id: &str) -> Result<SaveAction, SchemaError> {
        let request = SaveFormatRequest {
            format: self.to_format()?,
            owner_id: owner_id.to_string(),
        };
        Ok(match &self.format_id {
            Some(id) => SaveAction::Update {
                id: id.clone(),
                request,
            },
            None => SaveAction::Create(request),
        })
    }

    /// Records a successful save acknowledged by the backend.
    pub fn mark_saved(&mut self, record: &FormatRecord) {
        self.format_id = Some(record.id.clone());
        self.saved_md5 = Some(compute_md5(&record.format));
    }

    /// True when the schema differs from what was last loaded or saved.
    /// A never-saved schema is dirty once it has any field.
    pub fn is_dirty(&self) -> bool {
        match (&self.saved_md5, self.to_format()) {
            (Some(saved), Ok(current)) => saved != &compute_md5(&current),
            (None, _) => !self.schema.fields.is_empty(),
            (Some(_), Err(_)) => true,
        }
    }
}

/// Hex MD5 digest used for dirty tracking.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::{Cell, CellType};
    use proptest::prelude::*;

    fn store_with(tags: &[FieldTag]) -> (SchemaStore, Vec<String>) {
        let mut store = SchemaStore::new();
        let ids = tags.iter().map(|t| store.add_field(*t)).collect();
        (store, ids)
    }

    #[test]
    fn add_table_field_starts_without_rows() {
        let (mut store, existing) = store_with(&[FieldTag::Text, FieldTag::Label]);
        let id = store.add_field(FieldTag::Table);

        assert_eq!(store.schema().fields.len(), 3);
        assert!(!existing.contains(&id));
        let field = store.schema().field(&id).unwrap();
        assert_eq!(field.kind, FieldKind::Table { rows: vec![] });
    }

    #[test]
    fn update_field_touches_only_the_label() {
        let (mut store, ids) = store_with(&[FieldTag::Text, FieldTag::Number]);
        store.update_field(
            &ids[0],
            FieldUpdate {
                placeholder: Some("first".into()),
                required: Some(true),
                ..Default::default()
            },
        );
        let before = store.schema().clone();

        store.update_field(&ids[0], FieldUpdate::label("X"));

        let after = store.schema();
        assert_eq!(after.fields[1], before.fields[1]);
        let field = &after.fields[0];
        assert_eq!(field.label.as_deref(), Some("X"));
        assert_eq!(field.placeholder.as_deref(), Some("first"));
        assert_eq!(field.required, Some(true));
        assert_eq!(field.kind, before.fields[0].kind);
    }

    #[test]
    fn update_unknown_field_is_noop() {
        let (mut store, _) = store_with(&[FieldTag::Text]);
        let before = store.schema().clone();
        store.update_field("nope", FieldUpdate::label("X"));
        assert_eq!(store.schema(), &before);
    }

    #[test]
    fn rows_update_is_ignored_for_leaf_fields() {
        let (mut store, ids) = store_with(&[FieldTag::Text]);
        store.update_field(
            &ids[0],
            FieldUpdate {
                rows: Some(vec![Row::single(Cell::new(CellType::Label))]),
                ..Default::default()
            },
        );
        assert_eq!(store.schema().fields[0].kind, FieldKind::Text);
    }

    #[test]
    fn width_hint_is_independent_of_fields() {
        let (mut store, _) = store_with(&[FieldTag::Table]);
        let fields = store.schema().fields.clone();
        store.update_form_width(720);
        assert_eq!(store.schema().width, Some(720));
        assert_eq!(store.schema().fields, fields);
    }

    #[test]
    fn first_save_creates_then_updates() {
        let (store, _) = store_with(&[FieldTag::Table]);
        let action = store.save_action("checklist-1").unwrap();
        assert!(matches!(action, SaveAction::Create(_)));
        assert_eq!(action.request().owner_id, "checklist-1");

        let mut store = store;
        store.mark_saved(&FormatRecord {
            id: "fmt-1".into(),
            format: action.request().format.clone(),
            owner_id: "checklist-1".into(),
        });
        match store.save_action("checklist-1").unwrap() {
            SaveAction::Update { id, .. } => assert_eq!(id, "fmt-1"),
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn dirty_tracking_follows_saves() {
        let mut store = SchemaStore::new();
        assert!(!store.is_dirty());
        store.add_field(FieldTag::Table);
        assert!(store.is_dirty());

        let format = store.to_format().unwrap();
        store.mark_saved(&FormatRecord {
            id: "fmt".into(),
            format,
            owner_id: "o".into(),
        });
        assert!(!store.is_dirty());

        store.update_form_width(500);
        assert!(store.is_dirty());
    }

    #[test]
    fn loaded_format_is_clean_whatever_its_layout() {
        let record = FormatRecord {
            id: "fmt-3".into(),
            format: r#"{
                "width": 640,
                "fields": [ { "type": "text", "id": "name" } ],
                "title": "Intake", "id": "s-1"
            }"#
            .into(),
            owner_id: "form-1".into(),
        };
        let mut store = SchemaStore::from_record(Some(&record)).unwrap();
        assert!(!store.is_dirty());

        store.set_title("Intake v2");
        assert!(store.is_dirty());
    }

    #[test]
    fn record_with_blank_format_starts_empty_but_keeps_id() {
        let record = FormatRecord {
            id: "fmt-9".into(),
            format: String::new(),
            owner_id: "form-1".into(),
        };
        let store = SchemaStore::from_record(Some(&record)).unwrap();
        assert!(store.schema().fields.is_empty());
        assert_eq!(store.format_id(), Some("fmt-9"));
    }

    #[test]
    fn malformed_record_is_rejected() {
        let record = FormatRecord {
            id: "fmt-9".into(),
            format: "{\"title\":".into(),
            owner_id: "form-1".into(),
        };
        assert!(matches!(
            SchemaStore::from_record(Some(&record)),
            Err(SchemaError::Decode(_))
        ));
    }

    fn tag_strategy() -> impl Strategy<Value = FieldTag> {
        prop::sample::select(FieldTag::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn remove_field_drops_exactly_one(tags in prop::collection::vec(tag_strategy(), 1..8), pick in any::<prop::sample::Index>()) {
            let (mut store, ids) = store_with(&tags);
            let target = ids[pick.index(ids.len())].clone();
            store.remove_field(&target);
            prop_assert_eq!(store.schema().fields.len(), ids.len() - 1);
            prop_assert!(store.schema().field(&target).is_none());
        }

        #[test]
        fn remove_unknown_field_is_noop(tags in prop::collection::vec(tag_strategy(), 0..8)) {
            let (mut store, _) = store_with(&tags);
            let before = store.schema().clone();
            store.remove_field("not-a-field");
            prop_assert_eq!(store.schema(), &before);
        }

        #[test]
        fn format_round_trips(
            tags in prop::collection::vec(tag_strategy(), 0..6),
            rows in 0usize..4,
            width in prop::option::of(200u32..2000),
        ) {
            let (mut store, ids) = store_with(&tags);
            if let Some(w) = width {
                store.update_form_width(w);
            }
            for id in &ids {
                for r in 0..rows {
                    store.add_row(id);
                    store.add_cell(id, r);
                }
            }
            let format = store.to_format().unwrap();
            let decoded = FormSchema::from_format(Some(&format)).unwrap().unwrap();
            prop_assert_eq!(&decoded, store.schema());
        }
    }
}
