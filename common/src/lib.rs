//! Shared model and editing state for accreditation forms and checklists.
//!
//! - [`model`]: the persisted schema, submission map and backend records.
//! - [`store`]: the owned schema store plus row/cell builder operations.
//! - [`editor`]: transient state of the cell-editor dialog.
//! - [`viewer`]: submission capture for the fill-in mode.
//! - [`requests`]: request bodies exchanged with the backend.

pub mod editor;
pub mod error;
pub mod model;
pub mod requests;
pub mod store;
pub mod viewer;
