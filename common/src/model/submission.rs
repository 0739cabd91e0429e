use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// A single captured value. Signatures are stored as data-URL text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmissionValue {
    Flag(bool),
    Text(String),
}

impl SubmissionValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SubmissionValue::Text(s) => Some(s),
            SubmissionValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            SubmissionValue::Flag(b) => *b,
            SubmissionValue::Text(s) => s == "true",
        }
    }
}

impl From<&str> for SubmissionValue {
    fn from(value: &str) -> Self {
        SubmissionValue::Text(value.to_string())
    }
}

impl From<String> for SubmissionValue {
    fn from(value: String) -> Self {
        SubmissionValue::Text(value)
    }
}

impl From<bool> for SubmissionValue {
    fn from(value: bool) -> Self {
        SubmissionValue::Flag(value)
    }
}

/// Flat identifier -> value map captured for one schema instance.
///
/// Serialized as a plain JSON object; key order is stable so the persisted
/// blob only changes when a value does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionData(pub BTreeMap<String, SubmissionValue>);

impl SubmissionData {
    /// Decodes the persisted `data` blob. Blank means an empty map.
    pub fn from_blob(blob: &str) -> Result<Self, SchemaError> {
        if blob.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(blob).map_err(|e| SchemaError::Decode(e.to_string()))
    }

    pub fn to_blob(&self) -> Result<String, SchemaError> {
        serde_json::to_string(self).map_err(|e| SchemaError::Encode(e.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<&SubmissionValue> {
        self.0.get(key)
    }

    pub fn text(&self, key: &str) -> &str {
        self.get(key).and_then(SubmissionValue::as_text).unwrap_or("")
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(SubmissionValue::as_flag)
    }

    /// Inserts or overwrites one entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<SubmissionValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_scalars_decode() {
        let data = SubmissionData::from_blob(r#"{"a":"x","b":true,"sig":"data:image/png;base64,AAA"}"#)
            .unwrap();
        assert_eq!(data.text("a"), "x");
        assert!(data.flag("b"));
        assert!(data.text("sig").starts_with("data:image/png"));
        assert_eq!(data.text("missing"), "");
    }

    #[test]
    fn blank_blob_is_empty() {
        assert!(SubmissionData::from_blob("").unwrap().is_empty());
    }

    #[test]
    fn nested_values_are_rejected() {
        assert!(SubmissionData::from_blob(r#"{"a":{"b":1}}"#).is_err());
        assert!(SubmissionData::from_blob("[1,2]").is_err());
    }

    #[test]
    fn set_overwrites() {
        let mut data = SubmissionData::default();
        data.set("k", "one");
        data.set("k", "two");
        assert_eq!(data.len(), 1);
        assert_eq!(data.to_blob().unwrap(), r#"{"k":"two"}"#);
    }
}
