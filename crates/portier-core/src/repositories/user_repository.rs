//! User repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use portier_shared::{EntityId, Pagination};

use crate::domain::{NewUser, User, UserChanges, UserFilter};
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self, page: Pagination, filter: &UserFilter) -> Result<Vec<User>, DomainError>;
    async fn count(&self, filter: &UserFilter) -> Result<i64, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, DomainError>;
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
    /// A `None` password hash leaves the stored hash untouched.
    async fn update(&self, id: EntityId, changes: &UserChanges) -> Result<Option<User>, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
