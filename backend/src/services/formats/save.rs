use actix_web::{web, HttpResponse};
use common::model::format::FormatRecord;
use common::model::schema::FormSchema;
use common::requests::SaveFormatRequest;
use log::info;
use rusqlite::{params, Connection};

use super::get::find_by_owner;
use crate::services::error::ApiError;
use crate::storage::Db;

/// Handler for `POST /api/formats`.
pub async fn create(
    payload: web::Json<SaveFormatRequest>,
    db: web::Data<Db>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    validate(&payload)?;

    let conn = db.lock().await;
    if find_by_owner(&conn, &payload.owner_id)?.is_some() {
        return Err(ApiError::Conflict(format!(
            "owner {} already has a format",
            payload.owner_id
        )));
    }

    let record = FormatRecord {
        id: uuid::Uuid::new_v4().to_string(),
        format: payload.format,
        owner_id: payload.owner_id,
    };
    conn.execute(
        "INSERT INTO formats (id, owner_id, format) VALUES (?1, ?2, ?3)",
        params![&record.id, &record.owner_id, &record.format],
    )?;
    info!("Created format {} for owner {}", record.id, record.owner_id);
    Ok(HttpResponse::Ok().json(record))
}

/// Handler for `PUT /api/formats/{id}`.
pub async fn update(
    id: web::Path<String>,
    payload: web::Json<SaveFormatRequest>,
    db: web::Data<Db>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let payload = payload.into_inner();
    validate(&payload)?;

    let conn = db.lock().await;
    if let Some(taken) = find_by_owner(&conn, &payload.owner_id)? {
        if taken.id != id {
            return Err(ApiError::Conflict(format!(
                "owner {} already has format {}",
                payload.owner_id, taken.id
            )));
        }
    }
    let record = FormatRecord {
        id,
        format: payload.format,
        owner_id: payload.owner_id,
    };
    if replace(&conn, &record)? == 0 {
        return Err(ApiError::NotFound(format!("format {}", record.id)));
    }
    info!("Updated format {}", record.id);
    Ok(HttpResponse::Ok().json(record))
}

fn validate(payload: &SaveFormatRequest) -> Result<(), ApiError> {
    if payload.owner_id.trim().is_empty() {
        return Err(ApiError::BadRequest("ownerId must not be empty".to_string()));
    }
    match FormSchema::from_format(Some(&payload.format))? {
        Some(_) => Ok(()),
        None => Err(ApiError::BadRequest("format must not be empty".to_string())),
    }
}

fn replace(conn: &Connection, record: &FormatRecord) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE formats SET format = ?2, owner_id = ?3 WHERE id = ?1",
        params![&record.id, &record.format, &record.owner_id],
    )
}
