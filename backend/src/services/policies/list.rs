use actix_web::{web, HttpResponse};
use common::model::policy::PolicyVersion;
use rusqlite::params;

use super::{version_from_row, VERSION_COLUMNS};
use crate::services::error::ApiError;
use crate::storage::Db;

/// Handler for `GET /api/policies/{policy_id}/versions`.
pub async fn process(
    policy_id: web::Path<String>,
    db: web::Data<Db>,
) -> Result<HttpResponse, ApiError> {
    let conn = db.lock().await;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM policy_versions WHERE policy_id = ?1 ORDER BY version DESC",
        VERSION_COLUMNS
    ))?;
    let versions = stmt
        .query_map(params![policy_id.as_str()], version_from_row)?
        .collect::<rusqlite::Result<Vec<PolicyVersion>>>()?;
    Ok(HttpResponse::Ok().json(versions))
}
