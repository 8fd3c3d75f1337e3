use serde::Deserialize;
use validator::Validate;

use super::not_blank;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateKeyRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

/// Keys are re-activated on every update, so a body `is_active` is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateKeyRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}
