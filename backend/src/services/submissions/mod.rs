//! # Submission service
//!
//! Stores the values an organisation entered into a form or checklist. Each
//! organisation + owner pair holds at most one submission, saved as a flat JSON
//! object in the `data` column and always replaced wholesale.
//!
//! ## Sub-modules:
//! - `get`: looks up the submission of an organisation for one owner.
//! - `save`: creates and replaces submissions.

mod get;
mod save;

use actix_web::web::{get, post, put, scope};
use actix_web::Scope;

/// The base path for all submission endpoints.
const API_PATH: &str = "/api/submissions";

/// Configures and returns the Actix `Scope` for the submission routes.
///
/// # Registered Routes:
///
/// *   **`POST /`**:
///     - **Handler**: `save::create`
///     - **Description**: Stores a `SaveSubmissionRequest` and returns the new
///       `SubmissionRecord`. `data` must decode as a flat map of strings and
///       booleans (`400` otherwise). A second submission for the same
///       organisation and owner answers `409`.
///
/// *   **`PUT /{id}`**:
///     - **Handler**: `save::update`
///     - **Description**: Replaces `data`, `name` and `description` of a stored
///       submission. Unknown ids answer `404`; moving it onto an organisation +
///       owner pair that already has another submission answers `409`.
///
/// *   **`GET /by_owner/{organisation_id}/{owner_id}`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the `SubmissionRecord` of the organisation for
///       that form or checklist, or `404` when nothing was submitted yet.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(save::create))
        .route("/{id}", put().to(save::update))
        .route(
            "/by_owner/{organisation_id}/{owner_id}",
            get().to(get::process),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Db;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::format::SubmissionRecord;
    use common::viewer::{SubmissionState, SubmissionWrite};

    #[actix_web::test]
    async fn viewer_round_trip() {
        let db = web::Data::new(Db::open_in_memory().unwrap());
        let app = test::init_service(App::new().app_data(db).service(configure_routes())).await;

        let mut state = SubmissionState::load(None).unwrap();
        state.handle_change("cell-1", "Alice");
        let SubmissionWrite::Create(request) = state.submit("org-1", "checklist-1").unwrap() else {
            panic!("expected create");
        };
        let req = test::TestRequest::post()
            .uri("/api/submissions")
            .set_json(request)
            .to_request();
        let created: SubmissionRecord = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get()
            .uri("/api/submissions/by_owner/org-1/checklist-1")
            .to_request();
        let fetched: SubmissionRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);

        let mut state = SubmissionState::load(Some(&fetched)).unwrap();
        state.handle_change("cell-1", "Bob");
        let SubmissionWrite::Update { id, request } = state.submit("org-1", "checklist-1").unwrap()
        else {
            panic!("expected update");
        };
        let req = test::TestRequest::put()
            .uri(&format!("/api/submissions/{}", id))
            .set_json(request)
            .to_request();
        let updated: SubmissionRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.data, r#"{"cell-1":"Bob"}"#);
    }

    #[actix_web::test]
    async fn submissions_are_scoped_by_organisation() {
        let db = web::Data::new(Db::open_in_memory().unwrap());
        let app = test::init_service(App::new().app_data(db).service(configure_routes())).await;

        let mut state = SubmissionState::default();
        state.handle_change("done", true);
        let req = test::TestRequest::post()
            .uri("/api/submissions")
            .set_json(state.submit("org-1", "form-1").unwrap().request())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/api/submissions/by_owner/org-2/form-1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn update_onto_a_taken_pair_conflicts() {
        let db = web::Data::new(Db::open_in_memory().unwrap());
        let app = test::init_service(App::new().app_data(db).service(configure_routes())).await;

        let mut created = Vec::new();
        for org in ["org-1", "org-2"] {
            let mut state = SubmissionState::default();
            state.handle_change("cell-1", org);
            let req = test::TestRequest::post()
                .uri("/api/submissions")
                .set_json(state.submit(org, "form-1").unwrap().request())
                .to_request();
            let record: SubmissionRecord = test::call_and_read_body_json(&app, req).await;
            created.push(record);
        }

        let state = SubmissionState::load(Some(&created[1])).unwrap();
        let SubmissionWrite::Update { id, request } = state.submit("org-1", "form-1").unwrap()
        else {
            panic!("expected update");
        };
        let req = test::TestRequest::put()
            .uri(&format!("/api/submissions/{}", id))
            .set_json(request)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::get()
            .uri("/api/submissions/by_owner/org-2/form-1")
            .to_request();
        let untouched: SubmissionRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(untouched, created[1]);
    }

    #[actix_web::test]
    async fn nested_data_is_rejected() {
        let db = web::Data::new(Db::open_in_memory().unwrap());
        let app = test::init_service(App::new().app_data(db).service(configure_routes())).await;

        let req = test::TestRequest::post()
            .uri("/api/submissions")
            .set_json(serde_json::json!({
                "data": "{\"a\":{\"b\":1}}",
                "ownerId": "form-1",
                "organisationId": "org-1"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
