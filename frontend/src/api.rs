//! Thin wrappers over the backend REST endpoints.
//!
//! Every call resolves to `Result<_, String>`; the string is only logged to the
//! console, users get a static toast (see `components::forms::update`).

use common::model::format::{FormatRecord, SubmissionRecord};
use common::requests::{SaveFormatRequest, SaveSubmissionRequest};
use common::store::SaveAction;
use common::viewer::SubmissionWrite;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.ok() {
        response.json::<T>().await.map_err(|e| e.to_string())
    } else {
        Err(format!(
            "{}: {}",
            response.status(),
            response.text().await.unwrap_or_default()
        ))
    }
}

/// `None` when the backend has no record (404).
async fn read_optional<T: DeserializeOwned>(response: Response) -> Result<Option<T>, String> {
    if response.status() == 404 {
        return Ok(None);
    }
    read_json(response).await.map(Some)
}

/// Percent-encodes one path segment so ids containing `/`, `?` or `#` stay in place.
fn segment(raw: &str) -> String {
    js_sys::encode_uri_component(raw).into()
}

fn format_by_owner_path(owner_id: &str) -> String {
    format!("/api/formats/by_owner/{}", segment(owner_id))
}

fn format_path(id: &str) -> String {
    format!("/api/formats/{}", segment(id))
}

fn submission_by_owner_path(organisation_id: &str, owner_id: &str) -> String {
    format!(
        "/api/submissions/by_owner/{}/{}",
        segment(organisation_id),
        segment(owner_id)
    )
}

fn submission_path(id: &str) -> String {
    format!("/api/submissions/{}", segment(id))
}

pub async fn fetch_format(owner_id: &str) -> Result<Option<FormatRecord>, String> {
    let response = Request::get(&format_by_owner_path(owner_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_optional(response).await
}

pub async fn fetch_submission(
    organisation_id: &str,
    owner_id: &str,
) -> Result<Option<SubmissionRecord>, String> {
    let response = Request::get(&submission_by_owner_path(organisation_id, owner_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_optional(response).await
}

pub async fn save_format(action: SaveAction) -> Result<FormatRecord, String> {
    let (builder, body): (_, SaveFormatRequest) = match action {
        SaveAction::Create(request) => (Request::post("/api/formats"), request),
        SaveAction::Update { id, request } => {
            (Request::put(&format_path(&id)), request)
        }
    };
    let response = builder
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn save_submission(write: SubmissionWrite) -> Result<SubmissionRecord, String> {
    let (builder, body): (_, SaveSubmissionRequest) = match write {
        SubmissionWrite::Create(request) => (Request::post("/api/submissions"), request),
        SubmissionWrite::Update { id, request } => {
            (Request::put(&submission_path(&id)), request)
        }
    };
    let response = builder
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn plain_ids_are_unchanged() {
        assert_eq!(format_by_owner_path("checklist-1"), "/api/formats/by_owner/checklist-1");
        assert_eq!(submission_path("abc"), "/api/submissions/abc");
    }

    #[wasm_bindgen_test]
    fn reserved_characters_stay_inside_their_segment() {
        assert_eq!(format_path("a/b"), "/api/formats/a%2Fb");
        assert_eq!(
            submission_by_owner_path("org?x=1", "form#2"),
            "/api/submissions/by_owner/org%3Fx%3D1/form%232"
        );
    }
}
