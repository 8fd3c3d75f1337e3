//! Repository traits (ports)

pub mod tenant_repository;
pub mod user_repository;
pub mod key_repository;
pub mod copy_repository;
pub mod session_store;

pub use tenant_repository::TenantRepository;
pub use user_repository::UserRepository;
pub use key_repository::KeyRepository;
pub use copy_repository::CopyRepository;
pub use session_store::SessionStore;

#[cfg(test)]
pub use tenant_repository::MockTenantRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use key_repository::MockKeyRepository;
#[cfg(test)]
pub use copy_repository::MockCopyRepository;
