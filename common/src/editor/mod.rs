//! # Cell editor state
//!
//! Transient state behind the cell-editor dialog. The dialog edits a private
//! copy of one cell's properties; nothing reaches the schema until
//! [`CellEditorState::save`] produces a [`CellEdit`] and the builder applies it
//! with `SchemaStore::save_cell`.
//!
//! The copy is re-seeded whenever the `(type, value, open)` triple handed in by
//! the builder changes, so reopening the dialog on another cell never carries
//! over half-finished edits from the previous one.

use crate::model::schema::{normalize_flex, Alignment, Cell, CellType};

/// Which flavour of schema is being edited. Only checklists expose the
/// identifier input; both bind submissions with the same key derivation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SchemaVariant {
    #[default]
    Form,
    Checklist,
}

impl SchemaVariant {
    pub fn shows_identifier(self) -> bool {
        matches!(self, SchemaVariant::Checklist)
    }
}

/// The seven editable properties handed back on save.
#[derive(Debug, Clone, PartialEq)]
pub struct CellEdit {
    pub cell_type: CellType,
    pub value: String,
    pub placeholder: String,
    pub alignment: Alignment,
    /// `None` keeps the cell's existing background.
    pub bg: Option<String>,
    pub cell_flex: f64,
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellEditorState {
    pub cell_type: CellType,
    pub value: String,
    pub placeholder: String,
    pub alignment: Alignment,
    pub bg: Option<String>,
    pub cell_flex: f64,
    pub identifier: String,
    seeded_from: Option<(CellType, Option<String>, bool)>,
}

impl Default for CellEditorState {
    fn default() -> Self {
        Self {
            cell_type: CellType::Field,
            value: String::new(),
            placeholder: String::new(),
            alignment: Alignment::Left,
            bg: None,
            cell_flex: 1.0,
            identifier: String::new(),
            seeded_from: None,
        }
    }
}

impl CellEditorState {
    pub fn from_cell(cell: &Cell) -> Self {
        let mut state = Self::default();
        state.reseed(cell, true);
        state
    }

    /// Unconditionally copies `cell` into the local state.
    pub fn reseed(&mut self, cell: &Cell, open: bool) {
        self.cell_type = cell.cell_type;
        self.value = cell.value.clone().unwrap_or_default();
        self.placeholder = cell.placeholder.clone().unwrap_or_default();
        self.alignment = cell.alignment();
        self.bg = cell.bg.clone();
        self.cell_flex = cell.flex();
        self.identifier = cell.identifier().unwrap_or_default().to_string();
        self.seeded_from = Some((cell.cell_type, cell.value.clone(), open));
    }

    /// Re-seeds only when `(type, value, open)` differs from the last seed.
    /// Returns whether a re-seed happened.
    pub fn sync(&mut self, cell: &Cell, open: bool) -> bool {
        let key = (cell.cell_type, cell.value.clone(), open);
        if self.seeded_from.as_ref() == Some(&key) {
            return false;
        }
        self.reseed(cell, open);
        true
    }

    /// Parses the raw text of the flex input. Unparseable input keeps the
    /// previous weight; out-of-range weights are corrected when applied.
    pub fn set_flex_input(&mut self, raw: &str) {
        if let Ok(flex) = raw.trim().parse::<f64>() {
            self.cell_flex = flex;
        }
    }

    pub fn save(&self) -> CellEdit {
        let identifier = self.identifier.trim();
        CellEdit {
            cell_type: self.cell_type,
            value: self.value.clone(),
            placeholder: self.placeholder.clone(),
            alignment: self.alignment,
            bg: self.bg.clone().filter(|bg| !bg.trim().is_empty()),
            cell_flex: normalize_flex(Some(self.cell_flex)),
            identifier: (!identifier.is_empty()).then(|| identifier.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(value: &str) -> Cell {
        Cell {
            value: Some(value.into()),
            bg: Some("bg-accent".into()),
            cell_flex: Some(2.0),
            identifier: Some("lbl".into()),
            ..Cell::new(CellType::Label)
        }
    }

    #[test]
    fn seeds_every_property() {
        let state = CellEditorState::from_cell(&label("Name"));
        assert_eq!(state.cell_type, CellType::Label);
        assert_eq!(state.value, "Name");
        assert_eq!(state.bg.as_deref(), Some("bg-accent"));
        assert_eq!(state.cell_flex, 2.0);
        assert_eq!(state.identifier, "lbl");
        assert_eq!(state.alignment, Alignment::Left);
    }

    #[test]
    fn reopening_on_another_cell_drops_pending_edits() {
        let mut state = CellEditorState::from_cell(&label("Name"));
        state.value = "half typed".into();
        state.cell_flex = 9.0;

        assert!(state.sync(&label("Date of birth"), true));
        assert_eq!(state.value, "Date of birth");
        assert_eq!(state.cell_flex, 2.0);
    }

    #[test]
    fn same_props_keep_local_edits() {
        let cell = label("Name");
        let mut state = CellEditorState::from_cell(&cell);
        state.placeholder = "typing".into();
        assert!(!state.sync(&cell, true));
        assert_eq!(state.placeholder, "typing");
    }

    #[test]
    fn closing_and_reopening_reseeds() {
        let cell = label("Name");
        let mut state = CellEditorState::from_cell(&cell);
        state.value = "edit".into();
        assert!(state.sync(&cell, false));
        assert!(state.sync(&cell, true));
        assert_eq!(state.value, "Name");
    }

    #[test]
    fn flex_input_parsing() {
        let mut state = CellEditorState::default();
        state.set_flex_input("2.5");
        assert_eq!(state.cell_flex, 2.5);
        state.set_flex_input("abc");
        assert_eq!(state.cell_flex, 2.5);
        state.set_flex_input("-1");
        assert_eq!(state.save().cell_flex, 1.0);
    }

    #[test]
    fn blank_identifier_and_bg_save_as_none() {
        let mut state = CellEditorState::from_cell(&label("x"));
        state.identifier = "  ".into();
        state.bg = Some(String::new());
        let edit = state.save();
        assert_eq!(edit.identifier, None);
        assert_eq!(edit.bg, None);
    }

    #[test]
    fn only_checklists_show_identifier() {
        assert!(SchemaVariant::Checklist.shows_identifier());
        assert!(!SchemaVariant::Form.shows_identifier());
    }
}
