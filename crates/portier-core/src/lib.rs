//! # Portier Core
//! 
//! Domain entities, services, and repository traits for the Portier service.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod pagination;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use pagination::Page;
