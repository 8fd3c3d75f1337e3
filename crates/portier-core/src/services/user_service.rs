// ============================================================================
// Portier Core - User Service
// File: crates/portier-core/src/services/user_service.rs
// ============================================================================
//! User CRUD: tenant defaulting, password hashing, filtered listing

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use portier_security::PasswordService;
use portier_shared::{EntityId, Pagination};
use tracing::{debug, info, warn};

use crate::domain::{NewUser, User, UserChanges, UserFilter, UserInput};
use crate::error::DomainError;
use crate::pagination::{fetch_page, Page};
use crate::repositories::{TenantRepository, UserRepository};

pub struct UserService {
    users: Arc<dyn UserRepository>,
    tenants: Arc<dyn TenantRepository>,
    list_timeout: Duration,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tenants: Arc<dyn TenantRepository>,
        list_timeout: Duration,
    ) -> Self {
        Self { users, tenants, list_timeout }
    }

    pub async fn list(&self, page: Pagination, filter: UserFilter) -> Result<Page<User>, DomainError> {
        let page = fetch_page(
            self.list_timeout,
            page,
            self.users.list(page, &filter),
            self.users.count(&filter),
        )
        .await?;
        Ok(page.map(User::without_password))
    }

    pub async fn get(&self, id: EntityId) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .map(User::without_password)
            .ok_or(DomainError::NotFound { entity: "user", id })
    }

    /// Creates a user, attaching it to the first tenant when the caller did
    /// not name one. The tenant lookup and the insert are separate statements.
    pub async fn create(&self, input: UserInput) -> Result<User, DomainError> {
        let tenant_id = match input.requested_tenant() {
            Some(id) => id,
            None => self.first_tenant_id().await?,
        };

        let password_hash = PasswordService::hash(&input.password)?;

        let new_user = NewUser {
            username: input.username.trim().to_string(),
            email: input.email.trim().to_string(),
            password_hash,
            name: input.name,
            gender: input.gender,
            id_number: input.id_number,
            user_image: input.user_image,
            tenant_id,
            created_at: Utc::now(),
            is_active: true,
        };

        let created = self.users.create(&new_user).await?;
        info!("User created: {} (tenant {})", created.id, created.tenant_id);
        Ok(created.without_password())
    }

    /// Overwrites the mutable columns. An empty password keeps the stored
    /// hash; anything else is re-hashed. The result never carries a password.
    pub async fn update(&self, id: EntityId, input: UserInput) -> Result<User, DomainError> {
        let password_hash = if input.password.is_empty() {
            None
        } else {
            Some(PasswordService::hash(&input.password)?)
        };

        let changes = UserChanges {
            username: input.username.trim().to_string(),
            email: input.email.trim().to_string(),
            password_hash,
            name: input.name,
            gender: input.gender,
            id_number: input.id_number,
            user_image: input.user_image,
            tenant_id: input.tenant_id.filter(|t| *t > 0),
            is_active: input.is_active,
        };

        let updated = self.users.update(id, &changes).await?;
        Ok(updated
            .map(User::without_password)
            .unwrap_or_else(|| changes.echo(id)))
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.users.delete(id).await
    }

    async fn first_tenant_id(&self) -> Result<EntityId, DomainError> {
        let tenants = self.tenants.list(Pagination::first()).await?;
        match tenants.first() {
            Some(tenant) => {
                debug!("Defaulting new user to tenant {}", tenant.id);
                Ok(tenant.id)
            }
            None => {
                warn!("Cannot create user: no tenants exist");
                Err(DomainError::DependencyMissing("tenant"))
            }
        }
    }
}
