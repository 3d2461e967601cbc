//! Errors returned by council operations.
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | ValidationFailed | malformed input, nothing persisted |
//! | Unauthorized | caller is not an accepted member (or not the proposer) |
//! | NotFound | council, member, conclusion, motion or statement missing |
//! | InvalidState | lifecycle forbids the operation |
//! | Conflict | concurrent write detected that cannot be reconciled |
//! | Infrastructure | a port failed |

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Error for every council-facing operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CouncilError {
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl CouncilError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CouncilError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn unauthorized(reason: impl Into<String>) -> Self {
        CouncilError::Unauthorized(reason.into())
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CouncilError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn invalid_state(reason: impl Into<String>) -> Self {
        CouncilError::InvalidState(reason.into())
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        CouncilError::Conflict(reason.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        CouncilError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CouncilError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CouncilError::Unauthorized(_) => ErrorCode::NotAcceptedMember,
            CouncilError::NotFound { entity, .. } => match *entity {
                "Council" => ErrorCode::CouncilNotFound,
                "Member" => ErrorCode::MemberNotFound,
                "Conclusion" => ErrorCode::ConclusionNotFound,
                "Motion" => ErrorCode::MotionNotFound,
                "Statement" => ErrorCode::StatementNotFound,
                _ => ErrorCode::InternalError,
            },
            CouncilError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            CouncilError::Conflict(_) => ErrorCode::Conflict,
            CouncilError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CouncilError::NotFound { .. })
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, CouncilError::InvalidState(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, CouncilError::Unauthorized(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CouncilError::ValidationFailed { .. })
    }
}

impl From<ValidationError> for CouncilError {
    fn from(err: ValidationError) -> Self {
        CouncilError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for CouncilError {
    fn from(err: DomainError) -> Self {
        let id = err.detail("id").unwrap_or("unknown").to_string();
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::TooShort
            | ErrorCode::InvalidFormat => CouncilError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::CouncilNotFound => CouncilError::NotFound { entity: "Council", id },
            ErrorCode::MemberNotFound => CouncilError::NotFound { entity: "Member", id },
            ErrorCode::ConclusionNotFound => CouncilError::NotFound {
                entity: "Conclusion",
                id,
            },
            ErrorCode::MotionNotFound => CouncilError::NotFound { entity: "Motion", id },
            ErrorCode::StatementNotFound => CouncilError::NotFound {
                entity: "Statement",
                id,
            },
            ErrorCode::InvalidStateTransition
            | ErrorCode::CouncilNotActive
            | ErrorCode::ConclusionInactive
            | ErrorCode::MotionNotPending
            | ErrorCode::MotionAlreadyPending => CouncilError::InvalidState(err.message),
            ErrorCode::NotAcceptedMember | ErrorCode::Forbidden => {
                CouncilError::Unauthorized(err.message)
            }
            ErrorCode::Conflict => CouncilError::Conflict(err.message),
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                CouncilError::Infrastructure(err.message)
            }
        }
    }
}
