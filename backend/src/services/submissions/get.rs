use actix_web::{web, HttpResponse};
use common::model::format::SubmissionRecord;
use rusqlite::{params, Connection, OptionalExtension};

use crate::services::error::ApiError;
use crate::storage::Db;

/// Handler for `GET /api/submissions/by_owner/{organisation_id}/{owner_id}`.
pub async fn process(
    path: web::Path<(String, String)>,
    db: web::Data<Db>,
) -> Result<HttpResponse, ApiError> {
    let (organisation_id, owner_id) = path.into_inner();
    let conn = db.lock().await;
    find(&conn, &organisation_id, &owner_id)?
        .map(|record| HttpResponse::Ok().json(record))
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "submission of {} for {}",
                organisation_id, owner_id
            ))
        })
}

pub(super) fn find(
    conn: &Connection,
    organisation_id: &str,
    owner_id: &str,
) -> rusqlite::Result<Option<SubmissionRecord>> {
    conn.query_row(
        "SELECT id, data, owner_id, organisation_id, name, description
         FROM submissions WHERE organisation_id = ?1 AND owner_id = ?2",
        params![organisation_id, owner_id],
        |row| {
            Ok(SubmissionRecord {
                id: row.get(0)?,
                data: row.get(1)?,
                owner_id: row.get(2)?,
                organisation_id: row.get(3)?,
                name: row.get(4)?,
                description: row.get(5)?,
            })
        },
    )
    .optional()
}
