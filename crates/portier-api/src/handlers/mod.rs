//! HTTP handlers, one module per resource

pub mod health;
pub mod tenants;
pub mod users;
pub mod keys;
pub mod copies;
