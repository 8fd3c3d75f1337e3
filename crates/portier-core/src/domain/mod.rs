//! # Portier Core - Domain Module
//! 
//! Entities persisted in the `tenants`, `users`, `keys` and `copies` tables.

pub mod tenant;
pub mod user;
pub mod key;
pub mod copy;
pub mod gender;

// Re-export all entities and their write models
pub use tenant::{Tenant, NewTenant, TenantChanges};
pub use user::{User, UserInput, NewUser, UserChanges, UserFilter};
pub use key::{Key, NewKey, KeyChanges};
pub use copy::{KeyCopy, NewCopy, CopyChanges};
pub use gender::{gender_from_wire, gender_to_wire};
