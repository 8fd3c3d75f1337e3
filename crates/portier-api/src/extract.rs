//! Request extractors that reject with `ApiError` instead of axum's plain-text
//! rejections.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use portier_core::domain::UserFilter;
use portier_shared::constants::{DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_OFFSET};
use portier_shared::{EntityId, Pagination};
use serde::{de::DeserializeOwned, Deserialize};
use validator::Validate;

use crate::response::ApiError;

#[derive(Debug, Default, Deserialize)]
struct RawListQuery {
    limit: Option<String>,
    offset: Option<String>,
    name: Option<String>,
    id_number: Option<String>,
}

/// `?limit=&offset=` window plus the optional user filters.
///
/// Absent or empty parameters fall back to the defaults; anything that is not
/// an integer, a limit below 1, or a negative offset is a 400.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub page: Pagination,
    pub filter: UserFilter,
}

fn parse_param(name: &str, raw: Option<&str>, default: i64) -> Result<i64, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<i64>()
            .map_err(|_| ApiError::BadRequest(format!("{} must be an integer, got {:?}", name, value))),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        let limit = parse_param("limit", raw.limit.as_deref(), DEFAULT_PAGE_LIMIT)?;
        let offset = parse_param("offset", raw.offset.as_deref(), DEFAULT_PAGE_OFFSET)?;

        Ok(Self {
            page: Pagination::new(limit, offset)?,
            filter: UserFilter {
                name: non_empty(raw.name),
                id_number: non_empty(raw.id_number),
            },
        })
    }
}

/// Numeric `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub EntityId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        raw.parse::<EntityId>()
            .map(IdPath)
            .map_err(|_| ApiError::BadRequest(format!("id must be an integer, got {:?}", raw)))
    }
}

/// JSON body that has passed its `validator` rules.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param_defaults() {
        assert_eq!(parse_param("limit", None, 10).unwrap(), 10);
        assert_eq!(parse_param("limit", Some(""), 10).unwrap(), 10);
        assert_eq!(parse_param("limit", Some(" 25 "), 10).unwrap(), 25);
    }

    #[test]
    fn test_parse_param_rejects_garbage() {
        assert!(matches!(
            parse_param("offset", Some("abc"), 0),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            parse_param("limit", Some("1.5"), 10),
            Err(ApiError::BadRequest(_))
        ));
    }
}
