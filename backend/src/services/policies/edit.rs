use actix_web::{web, HttpResponse};
use common::requests::UpdatePolicyVersionRequest;
use log::info;
use rusqlite::{params, OptionalExtension};

use super::{version_from_row, VERSION_COLUMNS};
use crate::services::error::ApiError;
use crate::storage::Db;

/// Handler for `PUT /api/policies/versions/{version_id}`.
pub async fn process(
    version_id: web::Path<String>,
    payload: web::Json<UpdatePolicyVersionRequest>,
    db: web::Data<Db>,
) -> Result<HttpResponse, ApiError> {
    let version_id = version_id.into_inner();
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

    version.replace_document(payload.into_inner().document)?;
    conn.execute(
        "UPDATE policy_versions SET document = ?2 WHERE id = ?1",
        params![&version.id, &version.document],
    )?;
    info!(
        "Edited draft {} of policy {}",
        version.version, version.policy_id
    );
    Ok(HttpResponse::Ok().json(version))
}
