//! Key domain entity

use chrono::{DateTime, Utc};
use portier_shared::{constants::PLACEHOLDER_ACTOR_ID, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub id: EntityId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<EntityId>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewKey {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: EntityId,
    pub is_active: bool,
}

impl NewKey {
    pub fn new(name: String) -> Self {
        Self {
            name: name.trim().to_string(),
            created_at: Utc::now(),
            created_by: PLACEHOLDER_ACTOR_ID,
            is_active: true,
        }
    }
}

/// Keys are always re-activated on update.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyChanges {
    pub name: String,
    pub is_active: bool,
}

impl KeyChanges {
    pub fn new(name: String) -> Self {
        Self { name: name.trim().to_string(), is_active: true }
    }

    pub fn echo(&self, id: EntityId) -> Key {
        Key {
            id,
            name: self.name.clone(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            created_by: None,
            is_active: self.is_active,
        }
    }
}
