//! Common types

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_OFFSET};

/// Primary key type shared by every table (Postgres `SERIAL`).
pub type EntityId = i32;

/// Limit/offset window for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Pagination {
    /// Builds a window, rejecting `limit <= 0` and `offset < 0`.
    pub fn new(limit: i64, offset: i64) -> Result<Self, PaginationError> {
        if limit <= 0 {
            return Err(PaginationError::InvalidLimit(limit));
        }
        if offset < 0 {
            return Err(PaginationError::InvalidOffset(offset));
        }
        Ok(Self { limit, offset })
    }

    /// First row only, used for parent lookups.
    pub fn first() -> Self {
        Self { limit: 1, offset: 0 }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { limit: DEFAULT_PAGE_LIMIT, offset: DEFAULT_PAGE_OFFSET }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("limit must be greater than 0, got {0}")]
    InvalidLimit(i64),
    #[error("offset must be 0 or greater, got {0}")]
    InvalidOffset(i64),
}
