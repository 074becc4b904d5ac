//! Cursor-paginated page envelope.

use serde::{Deserialize, Deserializer, Serialize};

/// One page of a cursor-paginated collection.
///
/// `next_page_path` is an opaque, server-supplied path and query string
/// (e.g. `/api/v0/equity/history/orders?limit=20&cursor=999`). It is
/// requested verbatim to fetch the following page and is `None` on the
/// last page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedResponse<T> {
    /// The items in this page; a missing or null list decodes as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<T>,
    /// Locator of the next page, absent when exhausted.
    #[serde(default)]
    pub next_page_path: Option<String>,
}

impl<T> PaginatedResponse<T> {
    /// Check if there is a page after this one.
    pub fn has_next_page(&self) -> bool {
        self.next_page_path.is_some()
    }
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_page_path: None,
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
