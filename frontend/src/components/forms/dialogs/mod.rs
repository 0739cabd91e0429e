pub mod cell_editor;
