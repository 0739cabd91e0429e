use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::model::schema::FormSchema;
use crate::model::submission::SubmissionData;

/// A persisted schema as returned by the backend.
///
/// `format` is the opaque JSON string produced by [`FormSchema::to_format`];
/// `owner_id` is the checklist or form the schema belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatRecord {
    pub id: String,
    pub format: String,
    pub owner_id: String,
}

impl FormatRecord {
    pub fn schema(&self) -> Result<Option<FormSchema>, SchemaError> {
        FormSchema::from_format(Some(&self.format))
    }
}

/// A persisted submission for one organisation + owner pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: String,
    pub data: String,
    pub owner_id: String,
    pub organisation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SubmissionRecord {
    pub fn submission(&self) -> Result<SubmissionData, SchemaError> {
        SubmissionData::from_blob(&self.data)
    }
}
