//! User bodies. Gender travels as `"0"` / `"1"`; the password is write-only.

use chrono::{DateTime, Utc};
use portier_core::domain::{gender_from_wire, gender_to_wire, User, UserInput};
use portier_core::DomainError;
use portier_shared::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    #[serde(default)]
    pub name: String,
    pub gender: String,
    #[serde(default)]
    pub id_number: String,
    #[serde(default)]
    pub user_image: String,
    pub tenant_id: Option<EntityId>,
}

impl CreateUserRequest {
    pub fn into_input(self) -> Result<UserInput, DomainError> {
        Ok(UserInput {
            gender: gender_from_wire(&self.gender)?,
            username: self.username,
            email: self.email,
            password: self.password,
            name: self.name,
            id_number: self.id_number,
            user_image: self.user_image,
            tenant_id: self.tenant_id,
            is_active: None,
        })
    }
}

/// Empty or absent `password` keeps the stored one.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    pub gender: String,
    #[serde(default)]
    pub id_number: String,
    #[serde(default)]
    pub user_image: String,
    pub tenant_id: Option<EntityId>,
    pub is_active: Option<bool>,
}

impl UpdateUserRequest {
    pub fn into_input(self) -> Result<UserInput, DomainError> {
        Ok(UserInput {
            gender: gender_from_wire(&self.gender)?,
            username: self.username,
            email: self.email,
            password: self.password,
            name: self.name,
            id_number: self.id_number,
            user_image: self.user_image,
            tenant_id: self.tenant_id,
            is_active: self.is_active,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    pub name: String,
    pub gender: &'static str,
    pub id_number: String,
    pub user_image: String,
    pub tenant_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            name: user.name,
            gender: gender_to_wire(user.gender),
            id_number: user.id_number,
            user_image: user.user_image,
            tenant_id: user.tenant_id,
            created_at: user.created_at,
            is_active: user.is_active,
        }
    }
}
