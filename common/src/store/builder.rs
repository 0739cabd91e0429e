//! Row and cell editing for table fields.
//!
//! Every operation addresses its target by field id plus row/column index and
//! silently ignores targets that do not exist (non-table field, stale index).
//! Deletions are immediate and not undoable.

use uuid::Uuid;

use super::SchemaStore;
use crate::editor::CellEdit;
use crate::model::schema::{normalize_flex, Cell, Row};

/// The cell a cell-editor session is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellTarget {
    pub field_id: String,
    pub row: usize,
    pub col: usize,
}

/// Fresh identifier assigned to builder-created cells.
pub fn fresh_cell_identifier() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("cell-{}", &id[..8])
}

impl SchemaStore {
    fn rows_mut(&mut self, field_id: &str) -> Option<&mut Vec<Row>> {
        self.schema.field_mut(field_id)?.rows_mut()
    }

    /// Appends a row holding one default input cell.
    pub fn add_row(&mut self, field_id: &str) {
        if let Some(rows) = self.rows_mut(field_id) {
            rows.push(Row::single(Cell::default_field(fresh_cell_identifier())));
        }
    }

    /// Appends a default input cell to row `row`.
    pub fn add_cell(&mut self, field_id: &str, row: usize) {
        if let Some(target) = self.rows_mut(field_id).and_then(|rows| rows.get_mut(row)) {
            target.0.push(Cell::default_field(fresh_cell_identifier()));
        }
    }

    pub fn delete_row(&mut self, field_id: &str, row: usize) {
        if let Some(rows) = self.rows_mut(field_id) {
            if row < rows.len() {
                rows.remove(row);
            }
        }
    }

    pub fn delete_cell(&mut self, field_id: &str, row: usize, col: usize) {
        if let Some(target) = self.rows_mut(field_id).and_then(|rows| rows.get_mut(row)) {
            if col < target.0.len() {
                target.0.remove(col);
            }
        }
    }

    pub fn cell(&self, field_id: &str, row: usize, col: usize) -> Option<&Cell> {
        self.schema
            .field(field_id)?
            .rows()?
            .get(row)?
            .cells()
            .get(col)
    }

    /// Captures the target and a snapshot of the cell for the editor dialog.
    pub fn open_cell_editor(
        &self,
        field_id: &str,
        row: usize,
        col: usize,
    ) -> Option<(CellTarget, Cell)> {
        let cell = self.cell(field_id, row, col)?.clone();
        Some((
            CellTarget {
                field_id: field_id.to_string(),
                row,
                col,
            },
            cell,
        ))
    }

    /// Replaces exactly the targeted cell. A `None` background keeps the
    /// current one; sibling cells are left alone.
    pub fn save_cell(&mut self, target: &CellTarget, edit: CellEdit) {
        let Some(cell) = self
            .rows_mut(&target.field_id)
            .and_then(|rows| rows.get_mut(target.row))
            .and_then(|row| row.0.get_mut(target.col))
        else {
            return;
        };

        let bg = edit.bg.or_else(|| cell.bg.take());
        *cell = Cell {
            cell_type: edit.cell_type,
            value: Some(edit.value),
            placeholder: Some(edit.placeholder),
            bg,
            alignment: Some(edit.alignment),
            cell_flex: Some(normalize_flex(Some(edit.cell_flex))),
            identifier: edit
                .identifier
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::CellEditorState;
    use crate::model::schema::{
        Alignment, CellType, FieldTag, FormSchema, DEFAULT_CELL_BG, DEFAULT_CELL_PLACEHOLDER,
    };

    fn table_store() -> (SchemaStore, String) {
        let mut store = SchemaStore::new();
        let id = store.add_field(FieldTag::Table);
        (store, id)
    }

    #[test]
    fn add_row_appends_default_cell() {
        let (mut store, id) = table_store();
        store.add_row(&id);
        let cell = store.cell(&id, 0, 0).unwrap();
        assert_eq!(cell.cell_type, CellType::Field);
        assert_eq!(cell.value.as_deref(), Some(""));
        assert_eq!(cell.bg.as_deref(), Some(DEFAULT_CELL_BG));
        assert_eq!(cell.placeholder.as_deref(), Some(DEFAULT_CELL_PLACEHOLDER));
        assert!(cell.identifier().unwrap().starts_with("cell-"));
    }

    #[test]
    fn rows_stay_ragged() {
        let (mut store, id) = table_store();
        store.add_row(&id);
        store.add_row(&id);
        store.add_cell(&id, 1);
        store.add_cell(&id, 1);
        let rows = store.schema().field(&id).unwrap().rows().unwrap();
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[1].len(), 3);
    }

    #[test]
    fn fresh_identifiers_differ() {
        let (mut store, id) = table_store();
        store.add_row(&id);
        store.add_cell(&id, 0);
        let a = store.cell(&id, 0, 0).unwrap().identifier().unwrap().to_string();
        let b = store.cell(&id, 0, 1).unwrap().identifier().unwrap().to_string();
        assert_ne!(a, b);
    }

    #[test]
    fn deletes_by_index_and_ignores_stale_ones() {
        let (mut store, id) = table_store();
        store.add_row(&id);
        store.add_row(&id);
        store.add_cell(&id, 0);

        store.delete_cell(&id, 0, 5);
        store.delete_row(&id, 9);
        assert_eq!(store.schema().field(&id).unwrap().rows().unwrap().len(), 2);

        store.delete_cell(&id, 0, 0);
        assert_eq!(store.schema().field(&id).unwrap().rows().unwrap()[0].len(), 1);
        store.delete_row(&id, 0);
        assert_eq!(store.schema().field(&id).unwrap().rows().unwrap().len(), 1);
    }

    #[test]
    fn row_ops_ignore_leaf_fields() {
        let mut store = SchemaStore::new();
        let id = store.add_field(FieldTag::Text);
        let before = store.schema().clone();
        store.add_row(&id);
        store.add_cell(&id, 0);
        assert_eq!(store.schema(), &before);
        assert!(store.open_cell_editor(&id, 0, 0).is_none());
    }

    #[test]
    fn save_cell_replaces_only_the_target() {
        let (mut store, id) = table_store();
        store.add_row(&id);
        store.add_cell(&id, 0);
        store.add_cell(&id, 0);

        // style the siblings so any accidental write shows
        for col in [0, 2] {
            let (target, cell) = store.open_cell_editor(&id, 0, col).unwrap();
            let mut editor = CellEditorState::default();
            editor.reseed(&cell, true);
            editor.bg = Some("bg-muted".into());
            editor.alignment = Alignment::Right;
            editor.cell_flex = 3.0;
            store.save_cell(&target, editor.save());
        }
        let left = store.cell(&id, 0, 0).unwrap().clone();
        let right = store.cell(&id, 0, 2).unwrap().clone();

        let (target, cell) = store.open_cell_editor(&id, 0, 1).unwrap();
        let mut editor = CellEditorState::default();
        editor.reseed(&cell, true);
        editor.cell_type = CellType::Checkbox;
        store.save_cell(&target, editor.save());

        assert_eq!(store.cell(&id, 0, 0).unwrap(), &left);
        assert_eq!(store.cell(&id, 0, 2).unwrap(), &right);
        let edited = store.cell(&id, 0, 1).unwrap();
        assert_eq!(edited.cell_type, CellType::Checkbox);
        assert_eq!(edited.identifier(), cell.identifier());
    }

    #[test]
    fn save_without_bg_keeps_background() {
        let (mut store, id) = table_store();
        store.add_row(&id);
        let (target, _) = store.open_cell_editor(&id, 0, 0).unwrap();
        store.save_cell(
            &target,
            CellEdit {
                cell_type: CellType::Label,
                value: "Name".into(),
                placeholder: String::new(),
                alignment: Alignment::Center,
                bg: None,
                cell_flex: 0.0,
                identifier: Some("   ".into()),
            },
        );
        let cell = store.cell(&id, 0, 0).unwrap();
        assert_eq!(cell.bg.as_deref(), Some(DEFAULT_CELL_BG));
        assert_eq!(cell.cell_flex, Some(1.0));
        assert_eq!(cell.identifier, None);
    }

    #[test]
    fn build_save_reload_scenario() {
        let mut store = SchemaStore::new();
        let id = store.add_field(FieldTag::Table);
        store.add_row(&id);
        let (target, _) = store.open_cell_editor(&id, 0, 0).unwrap();
        store.save_cell(
            &target,
            CellEdit {
                cell_type: CellType::Label,
                value: "Name".into(),
                placeholder: String::new(),
                alignment: Alignment::Left,
                bg: None,
                cell_flex: 1.0,
                identifier: None,
            },
        );

        let format = store.save_action("form-1").unwrap().request().format.clone();
        let reloaded = FormSchema::from_format(Some(&format)).unwrap().unwrap();

        assert_eq!(reloaded.fields.len(), 1);
        let rows = reloaded.fields[0].rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[0].cells()[0].value.as_deref(), Some("Name"));
    }
}
