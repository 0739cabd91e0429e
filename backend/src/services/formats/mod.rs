//! # Format service
//!
//! Stores the JSON-encoded schema ("format") of each form or checklist. The
//! backend treats the format as an opaque string, but refuses to store one that
//! does not decode as a `FormSchema`, so every stored format can be rendered.
//! Each owner holds at most one format.
//!
//! ## Sub-modules:
//! - `get`: looks up the format of an owner.
//! - `save`: creates and replaces formats.

mod get;
mod save;

use actix_web::web::{get, post, put, scope};
use actix_web::Scope;

/// The base path for all format endpoints.
const API_PATH: &str = "/api/formats";

/// Configures and returns the Actix `Scope` for the format routes.
///
/// # Registered Routes:
///
/// *   **`POST /`**:
///     - **Handler**: `save::create`
///     - **Description**: Stores the `format` of a `SaveFormatRequest` for its
///       `ownerId` and returns the new `FormatRecord`. A format that does not
///       decode answers `400`; an owner that already has a format answers `409`.
///
/// *   **`PUT /{id}`**:
///     - **Handler**: `save::update`
///     - **Description**: Replaces a stored format wholesale. There is no
///       concurrency token, so the last write wins. Unknown ids answer `404`;
///       moving the record onto an owner that already has another format
///       answers `409`.
///
/// *   **`GET /by_owner/{owner_id}`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the `FormatRecord` of a form or checklist, or
///       `404` when none was saved yet. The client then starts an empty schema.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(save::create))
        .route("/{id}", put().to(save::update))
        .route("/by_owner/{owner_id}", get().to(get::process))
}
