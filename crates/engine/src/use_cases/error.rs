//! Progression operation errors.

use questbound_domain::{AllocationError, DomainError};

use crate::infrastructure::ports::RepoError;

/// Result of every quest, skill and character operation that can fail.
///
/// Business-rule violations are ordinary values here; only `Repo` means
/// something went wrong below the engine.
#[derive(Debug, thiserror::Error)]
pub enum ProgressionError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Attribute allocation rejected: {0}")]
    AllocationRejected(#[from] AllocationError),

    #[error("Max level reached ({level}/{max_level})")]
    MaxLevelReached { level: u32, max_level: u32 },

    #[error("Repository error: {0}")]
    Repo(RepoError),
}

impl ProgressionError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationFailed(msg.into())
    }
}

impl From<DomainError> for ProgressionError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            DomainError::InvalidStateTransition(msg) => Self::InvalidTransition(msg),
            DomainError::MaxLevelReached { level, max_level } => {
                Self::MaxLevelReached { level, max_level }
            }
            DomainError::Validation(msg)
            | DomainError::InvalidId(msg)
            | DomainError::Constraint(msg)
            | DomainError::Parse(msg) => Self::ValidationFailed(msg),
        }
    }
}

impl From<RepoError> for ProgressionError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            other => Self::Repo(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rows_become_not_found() {
        let err: ProgressionError = RepoError::not_found("Quest", "q-1").into();
        assert!(matches!(err, ProgressionError::NotFound { entity_type: "Quest", .. }));
    }

    #[test]
    fn conflicts_stay_repository_errors() {
        let err: ProgressionError = RepoError::conflict("Quest", "q-1", 3).into();
        assert!(matches!(err, ProgressionError::Repo(RepoError::Conflict { .. })));
    }

    #[test]
    fn domain_errors_map_to_the_taxonomy() {
        let transition: ProgressionError = DomainError::invalid_transition("nope").into();
        assert!(matches!(transition, ProgressionError::InvalidTransition(_)));

        let cap: ProgressionError = DomainError::MaxLevelReached { level: 5, max_level: 5 }.into();
        assert!(matches!(cap, ProgressionError::MaxLevelReached { level: 5, max_level: 5 }));

        let invalid: ProgressionError = DomainError::validation("Name too short").into();
        assert_eq!(invalid.to_string(), "Validation failed: Name too short");
    }
}
