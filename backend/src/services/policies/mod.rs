//! # Policy version service
//!
//! Keeps the numbered versions of each policy document and gates their status.
//! The document itself is an opaque payload owned by the embedded editor; this
//! service only stores it and enforces the draft / approval workflow described
//! by `common::model::policy::VersionStatus`.
//!
//! ## Sub-modules:
//! - `list`: all versions of one policy.
//! - `create`: opens the next numbered draft.
//! - `edit`: replaces the document of a draft.
//! - `transition`: moves a version through the approval workflow.

mod create;
mod edit;
mod list;
mod transition;

use actix_web::web::{get, post, put, scope};
use actix_web::Scope;
use common::model::policy::{PolicyVersion, VersionStatus};
use rusqlite::Row;

/// The base path for all policy-version endpoints.
const API_PATH: &str = "/api/policies";

/// Configures and returns the Actix `Scope` for the policy-version routes.
///
/// # Registered Routes:
///
/// *   **`GET /{policy_id}/versions`**:
///     - **Handler**: `list::process`
///     - **Description**: Returns every stored version of the policy as a JSON
///       array of `PolicyVersion`, newest version number first. An unknown policy
///       yields an empty array.
///
/// *   **`POST /{policy_id}/versions`**:
///     - **Handler**: `create::process`
///     - **Description**: Stores the `document` of a `CreatePolicyVersionRequest`
///       as a new `draft`, numbered one past the highest existing version.
///
/// *   **`PUT /versions/{version_id}`**:
///     - **Handler**: `edit::process`
///     - **Description**: Replaces the document of a version with the one in an
///       `UpdatePolicyVersionRequest`. Only drafts are editable; any other status
///       answers `409 Conflict` and leaves the stored document as it was.
///
/// *   **`POST /versions/{version_id}/{action}`**:
///     - **Handler**: `transition::process`
///     - **Description**: Applies `submit`, `approve`, `reject` or `revise` and
///       returns the updated version. Unknown actions answer `400`, unknown
///       versions `404`, and actions the current status forbids `409`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/{policy_id}/versions", get().to(list::process))
        .route("/{policy_id}/versions", post().to(create::process))
        .route("/versions/{version_id}", put().to(edit::process))
        .route(
            "/versions/{version_id}/{action}",
            post().to(transition::process),
        )
}

const VERSION_COLUMNS: &str = "id, policy_id, version, status, document";

fn version_from_row(row: &Row<'_>) -> rusqlite::Result<PolicyVersion> {
    let status: String = row.get(3)?;
    let status = VersionStatus::parse(&status).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            format!("unknown version status {:?}", status).into(),
        )
    })?;
    Ok(PolicyVersion {
        id: row.get(0)?,
        policy_id: row.get(1)?,
        version: row.get(2)?,
        status,
        document: row.get(4)?,
    })
}
