use actix_web::{web, HttpResponse};
use common::model::policy::PolicyAction;
use log::info;
use rusqlite::{params, OptionalExtension};

use super::{version_from_row, VERSION_COLUMNS};
use crate::services::error::ApiError;
use crate::storage::Db;

/// Handler for `POST /api/policies/versions/{version_id}/{action}`.
pub async fn process(
    path: web::Path<(String, String)>,
    db: web::Data<Db>,
) -> Result<HttpResponse, ApiError> {
    let (version_id, action) = path.into_inner();
    let action = PolicyAction::parse(&action)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown action {}", action)))?;

    let conn = db.lock().await;
    let mut version = conn
        .query_row(
            &format!(
                "SELECT {} FROM policy_versions WHERE id = ?1",
                VERSION_COLUMNS
            ),
            params![&version_id],
            version_from_row,
        )
        .optional()?
        .ok_or_else(|| ApiError::NotFound(format!("policy version {}", version_id)))?;

    let from = version.status;
    version.status = from.apply(action)?;
    conn.execute(
        "UPDATE policy_versions SET status = ?2 WHERE id = ?1",
        params![&version.id, version.status.as_str()],
    )?;
    info!(
        "Policy version {}: {} -> {}",
        version.id, from, version.status
    );
    Ok(HttpResponse::Ok().json(version))
}
