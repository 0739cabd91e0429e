use thiserror::Error;

use crate::model::policy::{PolicyAction, VersionStatus};

/// Errors raised while decoding, encoding or advancing shared model values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("malformed payload: {0}")]
    Decode(String),

    #[error("could not serialize payload: {0}")]
    Encode(String),

    #[error("cannot {action} a version that is {from}")]
    IllegalTransition {
        from: VersionStatus,
        action: PolicyAction,
    },

    #[error("a version that is {0} cannot be edited")]
    ReadOnly(VersionStatus),
}
