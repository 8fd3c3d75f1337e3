//! Request and response bodies

pub mod tenant;
pub mod user;
pub mod key;
pub mod copy;

pub use tenant::{CreateTenantRequest, UpdateTenantRequest};
pub use user::{CreateUserRequest, UpdateUserRequest, UserResponse};
pub use key::{CreateKeyRequest, UpdateKeyRequest};
pub use copy::{CreateCopyRequest, UpdateCopyRequest};

use validator::ValidationError;

/// Rejects empty and whitespace-only names; the domain trims before storing.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("name is required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Front door").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("  \t ").is_err());
    }

    #[test]
    fn test_whitespace_names_fail_validation() {
        let tenant: CreateTenantRequest =
            serde_json::from_value(serde_json::json!({"name": "   "})).unwrap();
        assert!(tenant.validate().is_err());

        let key: UpdateKeyRequest = serde_json::from_value(serde_json::json!({"name": " "})).unwrap();
        assert!(key.validate().is_err());

        let copy: CreateCopyRequest =
            serde_json::from_value(serde_json::json!({"name": "\n"})).unwrap();
        assert!(copy.validate().is_err());

        let ok: CreateKeyRequest = serde_json::from_value(serde_json::json!({"name": " A "})).unwrap();
        assert!(ok.validate().is_ok());
    }
}
