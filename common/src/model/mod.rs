pub mod format;
pub mod policy;
pub mod schema;
pub mod submission;
