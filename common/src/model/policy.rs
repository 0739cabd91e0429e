//! Status gate for policy document versions.
//!
//! A version starts as a `Draft`, is submitted for approval, and is then either
//! approved or rejected. A rejected version may be revised back into a draft.
//! Only drafts accept edits; every other status puts the document editor in
//! read-only mode.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionStatus {
    Draft,
    PendingApproval,
    Approved,
    Rejected,
}

impl VersionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VersionStatus::Draft => "draft",
            VersionStatus::PendingApproval => "pending_approval",
            VersionStatus::Approved => "approved",
            VersionStatus::Rejected => "rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        [
            VersionStatus::Draft,
            VersionStatus::PendingApproval,
            VersionStatus::Approved,
            VersionStatus::Rejected,
        ]
        .into_iter()
        .find(|s| s.as_str() == raw)
    }

    pub fn is_read_only(self) -> bool {
        !matches!(self, VersionStatus::Draft)
    }

    /// Returns the status reached by applying `action`, or an error when the
    /// action is not allowed from the current status.
    pub fn apply(self, action: PolicyAction) -> Result<VersionStatus, SchemaError> {
        use PolicyAction::*;
        use VersionStatus::*;

        match (self, action) {
            (Draft, Submit) => Ok(PendingApproval),
            (PendingApproval, Approve) => Ok(Approved),
            (PendingApproval, Reject) => Ok(Rejected),
            (Rejected, Revise) => Ok(Draft),
            (from, action) => Err(SchemaError::IllegalTransition { from, action }),
        }
    }
}

impl fmt::Display for VersionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyAction {
    Submit,
    Approve,
    Reject,
    Revise,
}

impl PolicyAction {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyAction::Submit => "submit",
            PolicyAction::Approve => "approve",
            PolicyAction::Reject => "reject",
            PolicyAction::Revise => "revise",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        [
            PolicyAction::Submit,
            PolicyAction::Approve,
            PolicyAction::Reject,
            PolicyAction::Revise,
        ]
        .into_iter()
        .find(|a| a.as_str() == raw)
    }
}

impl fmt::Display for PolicyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored version of a policy document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyVersion {
    pub id: String,
    pub policy_id: String,
    /// 1-based, increasing per policy.
    pub version: u32,
    pub status: VersionStatus,
    pub document: String,
}

impl PolicyVersion {
    /// Replaces the document of a draft. Any other status is read-only.
    pub fn replace_document(&mut self, document: String) -> Result<(), SchemaError> {
        if self.status.is_read_only() {
            return Err(SchemaError::ReadOnly(self.status));
        }
        self.document = document;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(status: VersionStatus) -> PolicyVersion {
        PolicyVersion {
            id: "v-1".into(),
            policy_id: "p-1".into(),
            version: 1,
            status,
            document: "original".into(),
        }
    }

    #[test]
    fn drafts_take_a_new_document() {
        let mut v = version(VersionStatus::Draft);
        v.replace_document("edited".into()).unwrap();
        assert_eq!(v.document, "edited");
    }

    #[test]
    fn submitted_documents_are_frozen() {
        for status in [
            VersionStatus::PendingApproval,
            VersionStatus::Approved,
            VersionStatus::Rejected,
        ] {
            let mut v = version(status);
            assert_eq!(
                v.replace_document("edited".into()),
                Err(SchemaError::ReadOnly(status))
            );
            assert_eq!(v.document, "original");
        }
    }

    #[test]
    fn happy_path() {
        let s = VersionStatus::Draft.apply(PolicyAction::Submit).unwrap();
        assert_eq!(s, VersionStatus::PendingApproval);
        assert_eq!(s.apply(PolicyAction::Approve).unwrap(), VersionStatus::Approved);
    }

    #[test]
    fn rejected_versions_can_be_revised() {
        let s = VersionStatus::PendingApproval
            .apply(PolicyAction::Reject)
            .unwrap();
        assert_eq!(s.apply(PolicyAction::Revise).unwrap(), VersionStatus::Draft);
    }

    #[test]
    fn approved_is_final() {
        for action in [
            PolicyAction::Submit,
            PolicyAction::Approve,
            PolicyAction::Reject,
            PolicyAction::Revise,
        ] {
            assert_eq!(
                VersionStatus::Approved.apply(action),
                Err(SchemaError::IllegalTransition {
                    from: VersionStatus::Approved,
                    action,
                })
            );
        }
    }

    #[test]
    fn drafts_cannot_skip_approval() {
        assert!(VersionStatus::Draft.apply(PolicyAction::Approve).is_err());
    }

    #[test]
    fn only_drafts_are_editable() {
        assert!(!VersionStatus::Draft.is_read_only());
        assert!(VersionStatus::PendingApproval.is_read_only());
        assert!(VersionStatus::Approved.is_read_only());
        assert!(VersionStatus::Rejected.is_read_only());
    }

    #[test]
    fn illegal_transition_message() {
        let err = VersionStatus::Approved
            .apply(PolicyAction::Submit)
            .unwrap_err();
        assert_eq!(err.to_string(), "cannot submit a version that is approved");
    }
}
