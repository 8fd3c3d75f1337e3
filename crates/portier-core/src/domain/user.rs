//! User domain entity

use chrono::{DateTime, Utc};
use portier_shared::EntityId;
use serde::{Deserialize, Serialize};

/// Stored user. `password` holds the Argon2 PHC string, never plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub gender: bool,
    pub id_number: String,
    pub user_image: String,
    pub tenant_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl User {
    /// Drops the stored hash before the value leaves the service layer.
    pub fn without_password(mut self) -> Self {
        self.password.clear();
        self
    }
}

/// Caller-supplied fields for create and update.
///
/// `password` is plaintext; an empty string on update means "keep the stored
/// hash". `tenant_id` of `None` (or a non-positive id) on create means "attach
/// to the first tenant".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub gender: bool,
    pub id_number: String,
    pub user_image: String,
    pub tenant_id: Option<EntityId>,
    pub is_active: Option<bool>,
}

impl UserInput {
    /// Tenant id the caller meaningfully supplied, if any.
    pub fn requested_tenant(&self) -> Option<EntityId> {
        self.tenant_id.filter(|id| *id > 0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub gender: bool,
    pub id_number: String,
    pub user_image: String,
    pub tenant_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Update model. `None` fields keep the stored column value.
#[derive(Debug, Clone, PartialEq)]
pub struct UserChanges {
    pub username: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub name: String,
    pub gender: bool,
    pub id_number: String,
    pub user_image: String,
    pub tenant_id: Option<EntityId>,
    pub is_active: Option<bool>,
}

impl UserChanges {
    pub fn echo(&self, id: EntityId) -> User {
        User {
            id,
            username: self.username.clone(),
            email: self.email.clone(),
            password: String::new(),
            name: self.name.clone(),
            gender: self.gender,
            id_number: self.id_number.clone(),
            user_image: self.user_image.clone(),
            tenant_id: self.tenant_id.unwrap_or_default(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            is_active: self.is_active.unwrap_or(true),
        }
    }
}

/// Substring filters for the user list; empty means match-all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserFilter {
    pub name: Option<String>,
    pub id_number: Option<String>,
}
