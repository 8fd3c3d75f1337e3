//! Application-wide constants

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const DEFAULT_PAGE_OFFSET: i64 = 0;
pub const DEFAULT_LIST_TIMEOUT_SECS: u64 = 5;
/// Stand-in actor id recorded as `created_by` until callers carry an identity.
pub const PLACEHOLDER_ACTOR_ID: i32 = 1;
pub const GENDER_FEMALE: &str = "0";
pub const GENDER_MALE: &str = "1";
