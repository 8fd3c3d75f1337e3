//! Domain services (business logic)

pub mod tenant_service;
pub mod user_service;
pub mod key_service;
pub mod copy_service;

pub use tenant_service::TenantService;
pub use user_service::UserService;
pub use key_service::KeyService;
pub use copy_service::CopyService;
