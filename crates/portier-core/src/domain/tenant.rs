//! Tenant domain entity

use chrono::{DateTime, Utc};
use portier_shared::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Insert model; `created_at` and `is_active` are stamped by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTenant {
    pub name: String,
    pub address: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl NewTenant {
    pub fn new(name: String, address: String, status: String) -> Self {
        Self {
            name: name.trim().to_string(),
            address: address.trim().to_string(),
            status: status.trim().to_string(),
            created_at: Utc::now(),
            is_active: true,
        }
    }
}

/// Mutable columns for an update. `is_active: None` keeps the stored flag.
#[derive(Debug, Clone, PartialEq)]
pub struct TenantChanges {
    pub name: String,
    pub address: String,
    pub status: String,
    pub is_active: Option<bool>,
}

impl TenantChanges {
    /// What the caller sent, echoed back when the row does not exist.
    pub fn echo(&self, id: EntityId) -> Tenant {
        Tenant {
            id,
            name: self.name.clone(),
            address: self.address.clone(),
            status: self.status.clone(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            is_active: self.is_active.unwrap_or(true),
        }
    }
}
