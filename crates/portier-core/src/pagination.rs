//! List envelope and filter helpers shared by every resource.

use std::future::Future;
use std::time::Duration;

use portier_shared::Pagination;
use serde::Serialize;

use crate::error::DomainError;

/// `{"items": [...], "totalPages": n}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: i64, limit: i64) -> Self {
        Self { items, total_pages: total_pages(total_count, limit) }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_pages: self.total_pages,
        }
    }
}

/// Ceiling division of `total_count` by `limit`; zero rows means zero pages.
pub fn total_pages(total_count: i64, limit: i64) -> i64 {
    if total_count <= 0 || limit <= 0 {
        return 0;
    }
    total_count / limit + i64::from(total_count % limit != 0)
}

/// ILIKE pattern for a substring filter. Empty or absent matches everything.
pub fn contains_pattern(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => format!("%{}%", v),
        _ => "%".to_string(),
    }
}

/// Runs the page query and the count query under one deadline and shapes the
/// result. The two reads are independent statements, so the page count can
/// lag behind concurrent writes.
pub async fn fetch_page<T, L, C>(
    deadline: Duration,
    page: Pagination,
    list: L,
    count: C,
) -> Result<Page<T>, DomainError>
where
    L: Future<Output = Result<Vec<T>, DomainError>>,
    C: Future<Output = Result<i64, DomainError>>,
{
    let work = async {
        let items = list.await?;
        let total = count.await?;
        Ok::<_, DomainError>((items, total))
    };

    let (items, total) = tokio::time::timeout(deadline, work)
        .await
        .map_err(|_| DomainError::QueryTimeout(deadline))??;

    Ok(Page::new(items, total, page.limit))
}
