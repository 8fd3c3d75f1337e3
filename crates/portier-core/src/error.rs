//! Domain errors

use std::time::Duration;

use portier_shared::EntityId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: EntityId },

    /// A create needed a parent row to default from and none exists.
    #[error("No {0} available to attach to")]
    DependencyMissing(&'static str),

    #[error("Query timed out after {0:?}")]
    QueryTimeout(Duration),

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<portier_security::PasswordError> for DomainError {
    fn from(e: portier_security::PasswordError) -> Self {
        match e {
            portier_security::PasswordError::EmptyPassword => {
                DomainError::ValidationError(e.to_string())
            }
            other => DomainError::PasswordHashError(other.to_string()),
        }
    }
}
