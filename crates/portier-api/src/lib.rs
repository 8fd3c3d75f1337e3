//! # Portier API
//! 
//! HTTP handlers, extractors, DTOs, and the router.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

#[cfg(test)]
mod testing;

pub use response::ApiError;
pub use routes::build_router;
pub use state::AppState;
