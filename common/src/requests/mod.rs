use serde::{Deserialize, Serialize};

/// Body of `POST /api/formats` and `PUT /api/formats/{id}`.
/// The whole schema is sent on every save; there is no partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFormatRequest {
    pub format: String,
    pub owner_id: String,
}

/// Body of `POST /api/submissions` and `PUT /api/submissions/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSubmissionRequest {
    pub data: String,
    pub owner_id: String,
    pub organisation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePolicyVersionRequest {
    /// Opaque document payload produced by the embedded document editor.
    pub document: String,
}

/// Body of `PUT /api/policies/versions/{version_id}`. Only drafts accept it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePolicyVersionRequest {
    pub document: String,
}
