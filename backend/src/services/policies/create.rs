use actix_web::{web, HttpResponse};
use common::model::policy::{PolicyVersion, VersionStatus};
use common::requests::CreatePolicyVersionRequest;
use log::info;
use rusqlite::params;

use crate::services::error::ApiError;
use crate::storage::Db;

/// Handler for `POST /api/policies/{policy_id}/versions`.
pub async fn process(
    policy_id: web::Path<String>,
    payload: web::Json<CreatePolicyVersionRequest>,
    db: web::Data<Db>,
) -> Result<HttpResponse, ApiError> {
    let policy_id = policy_id.into_inner();
    let conn = db.lock().await;

    let latest: u32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM policy_versions WHERE policy_id = ?1",
        params![&policy_id],
        |row| row.get(0),
    )?;
    let version = PolicyVersion {
        id: uuid::Uuid::new_v4().to_string(),
        policy_id,
        version: latest + 1,
        status: VersionStatus::Draft,
        document: payload.into_inner().document,
    };
    conn.execute(
        "INSERT INTO policy_versions (id, policy_id, version, status, document)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            &version.id,
            &version.policy_id,
            version.version,
            version.status.as_str(),
            &version.document
        ],
    )?;
    info!(
        "Created version {} of policy {}",
        version.version, version.policy_id
    );
    Ok(HttpResponse::Ok().json(version))
}
