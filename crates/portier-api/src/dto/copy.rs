use portier_shared::EntityId;
use serde::Deserialize;
use validator::Validate;

use super::not_blank;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCopyRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    /// Falls back to the first key when absent or not positive.
    pub key_id: Option<EntityId>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCopyRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}
