use actix_web::{web, HttpResponse};
use common::model::format::SubmissionRecord;
use common::model::submission::SubmissionData;
use common::requests::SaveSubmissionRequest;
use log::info;
use rusqlite::params;

use super::get::find;
use crate::services::error::ApiError;
use crate::storage::Db;

/// Handler for `POST /api/submissions`.
pub async fn create(
    payload: web::Json<SaveSubmissionRequest>,
    db: web::Data<Db>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    validate(&payload)?;

    let conn = db.lock().await;
    if find(&conn, &payload.organisation_id, &payload.owner_id)?.is_some() {
        return Err(ApiError::Conflict(format!(
            "{} already submitted {}",
            payload.organisation_id, payload.owner_id
        )));
    }

    let record = into_record(uuid::Uuid::new_v4().to_string(), payload);
    conn.execute(
        "INSERT INTO submissions (id, owner_id, organisation_id, data, name, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            &record.id,
            &record.owner_id,
            &record.organisation_id,
            &record.data,
            &record.name,
            &record.description
        ],
    )?;
    info!(
        "Created submission {} ({} / {})",
        record.id, record.organisation_id, record.owner_id
    );
    Ok(HttpResponse::Ok().json(record))
}

/// Handler for `PUT /api/submissions/{id}`.
pub async fn update(
    id: web::Path<String>,
    payload: web::Json<SaveSubmissionRequest>,
    db: web::Data<Db>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    validate(&payload)?;

    let record = into_record(id.into_inner(), payload);
    let conn = db.lock().await;
    if let Some(taken) = find(&conn, &record.organisation_id, &record.owner_id)? {
        if taken.id != record.id {
            return Err(ApiError::Conflict(format!(
                "{} already submitted {} as {}",
                record.organisation_id, record.owner_id, taken.id
            )));
        }
    }
    let changed = conn.execute(
        "UPDATE submissions
         SET data = ?2, owner_id = ?3, organisation_id = ?4, name = ?5, description = ?6
         WHERE id = ?1",
        params![
            &record.id,
            &record.data,
            &record.owner_id,
            &record.organisation_id,
            &record.name,
            &record.description
        ],
    )?;
    if changed == 0 {
        return Err(ApiError::NotFound(format!("submission {}", record.id)));
    }
    info!("Updated submission {}", record.id);
    Ok(HttpResponse::Ok().json(record))
}

fn validate(payload: &SaveSubmissionRequest) -> Result<(), ApiError> {
    if payload.owner_id.trim().is_empty() || payload.organisation_id.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "ownerId and organisationId are required".to_string(),
        ));
    }
    SubmissionData::from_blob(&payload.data)?;
    Ok(())
}

fn into_record(id: String, payload: SaveSubmissionRequest) -> SubmissionRecord {
    SubmissionRecord {
        id,
        data: payload.data,
        owner_id: payload.owner_id,
        organisation_id: payload.organisation_id,
        name: payload.name,
        description: payload.description,
    }
}
