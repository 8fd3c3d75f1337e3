//! Copy domain entity (a physical copy of a key)

use chrono::{DateTime, Utc};
use portier_shared::{constants::PLACEHOLDER_ACTOR_ID, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyCopy {
    pub id: EntityId,
    pub name: String,
    pub key_id: EntityId,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<EntityId>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCopy {
    pub name: String,
    pub key_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub created_by: EntityId,
    pub is_active: bool,
}

impl NewCopy {
    pub fn new(name: String, key_id: EntityId) -> Self {
        Self {
            name: name.trim().to_string(),
            key_id,
            created_at: Utc::now(),
            created_by: PLACEHOLDER_ACTOR_ID,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CopyChanges {
    pub name: String,
    pub is_active: bool,
}

impl CopyChanges {
    pub fn new(name: String) -> Self {
        Self { name: name.trim().to_string(), is_active: true }
    }

    pub fn echo(&self, id: EntityId) -> KeyCopy {
        KeyCopy {
            id,
            name: self.name.clone(),
            key_id: 0,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            created_by: None,
            is_active: self.is_active,
        }
    }
}
