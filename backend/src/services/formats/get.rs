use actix_web::{web, HttpResponse};
use common::model::format::FormatRecord;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use crate::services::error::ApiError;
use crate::storage::Db;

/// Handler for `GET /api/formats/by_owner/{owner_id}`.
pub async fn process(
    owner_id: web::Path<String>,
    db: web::Data<Db>,
) -> Result<HttpResponse, ApiError> {
    let owner_id = owner_id.into_inner();
    let conn = db.lock().await;
    match find_by_owner(&conn, &owner_id)? {
        Some(record) => {
            debug!("Loaded format {} for owner {}", record.id, owner_id);
            Ok(HttpResponse::Ok().json(record))
        }
        None => Err(ApiError::NotFound(format!("format for owner {}", owner_id))),
    }
}

pub(super) fn find_by_owner(
    conn: &Connection,
    owner_id: &str,
) -> rusqlite::Result<Option<FormatRecord>> {
    conn.query_row(
        "SELECT id, format, owner_id FROM formats WHERE owner_id = ?1",
        params![owner_id],
        |row| {
            Ok(FormatRecord {
                id: row.get(0)?,
                format: row.get(1)?,
                owner_id: row.get(2)?,
            })
        },
    )
    .optional()
}
