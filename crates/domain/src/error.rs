//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PlantillaError`] via `#[from]`.

/// Top-level error returned by services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum PlantillaError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("resource not found")]
    NotFound(#[from] NotFoundError),

    #[error("resource conflict")]
    Conflict(#[from] ConflictError),

    /// Opaque failure from a storage adapter.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated by caller input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("identifier must be between 1 and {max}, got {0}", max = crate::id::EmployeeId::MAX)]
    InvalidId(i64),
}

/// The requested record does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The record would break a uniqueness invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} already exists")]
pub struct ConflictError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_plantilla_error() {
        let err: PlantillaError = ValidationError::InvalidId(0).into();
        assert!(matches!(
            err,
            PlantillaError::Validation(ValidationError::InvalidId(0))
        ));
    }

    #[test]
    fn should_render_invalid_id_message_with_bounds() {
        assert_eq!(
            ValidationError::InvalidId(-1).to_string(),
            "identifier must be between 1 and 9007199254740991, got -1"
        );
    }

    #[test]
    fn should_render_not_found_message() {
        let err = NotFoundError {
            entity: "Employee",
            id: "7".to_string(),
        };
        assert_eq!(err.to_string(), "Employee with id 7 not found");
    }

    #[test]
    fn should_render_conflict_message() {
        let err = ConflictError {
            entity: "Employee",
            id: "1".to_string(),
        };
        assert_eq!(err.to_string(), "Employee with id 1 already exists");
    }
}
