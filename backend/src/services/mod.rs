//! HTTP API of the forms backend. Each sub-module owns one `/api/...` scope.

pub mod error;
pub mod formats;
pub mod policies;
pub mod submissions;
