//! # Portier Security
//! 
//! Password hashing for stored user credentials.

pub mod password;

pub use password::{PasswordError, PasswordService};
