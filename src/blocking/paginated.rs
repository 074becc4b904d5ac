//! Blocking iterator over cursor-paginated results.

use std::collections::VecDeque;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::ClientInner;
use crate::client::paginated::{PageCursor, PageRequest, PageSource};
use crate::client::ApiResponse;
use crate::models::PaginatedResponse;
use crate::Result;

type FetchPage<T> = Box<dyn FnMut(PageRequest) -> Result<PaginatedResponse<T>> + Send>;

/// An iterator that lazily fetches pages from a paginated endpoint.
///
/// Blocking counterpart of [`PaginatedStream`](crate::client::PaginatedStream):
/// the same request sequence, with each page fetched on the calling thread
/// when the previous one is drained.
///
/// # Example
///
/// ```no_run
/// use trading212_rs::api::TransactionsQuery;
///
/// # fn example(client: trading212_rs::blocking::Trading212Client) -> trading212_rs::Result<()> {
/// for tx in client.history().transactions_iter(TransactionsQuery::new()) {
///     let tx = tx?;
///     println!("{:?} {:?}", tx.transaction_type, tx.amount);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedIter<T> {
    fetch_page: FetchPage<T>,
    current_items: VecDeque<T>,
    cursor: PageCursor,
}

impl<T> PaginatedIter<T> {
    pub(crate) fn new<F>(fetch_page: F) -> Self
    where
        F: FnMut(PageRequest) -> Result<PaginatedResponse<T>> + Send + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: VecDeque::new(),
            cursor: PageCursor::new(),
        }
    }
}

/// Build an iterator over a paginated endpoint of the blocking client.
pub(crate) fn paginate<T, Q>(inner: Arc<ClientInner>, source: PageSource<Q>) -> PaginatedIter<T>
where
    T: DeserializeOwned + 'static,
    Q: Serialize + Send + 'static,
{
    PaginatedIter::new(move |request| {
        let (path, query) = source.target(&request);
        let response = match query {
            Some(query) => inner.get_with_query(path, query)?,
            None => inner.get(path)?,
        };
        let page = ApiResponse::<PaginatedResponse<T>>::from_blocking_response(response)?;
        tracing::trace!(
            items = page.data.items.len(),
            has_next = page.data.has_next_page(),
            remaining = ?page.rate_limit.remaining,
            "fetched page"
        );
        Ok(page.data)
    })
}

impl<T> Iterator for PaginatedIter<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current_items.pop_front() {
                return Some(Ok(item));
            }

            let request = self.cursor.take()?;
            match (self.fetch_page)(request) {
                Ok(page) => {
                    self.cursor.advance(page.next_page_path);
                    self.current_items = page.items.into();
                }
                Err(e) => {
                    self.cursor.finish();
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<T> std::iter::FusedIterator for PaginatedIter<T> {}

impl<T> std::fmt::Debug for PaginatedIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedIter")
            .field("buffered", &self.current_items.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::sync::Mutex;

    type Log = Arc<Mutex<Vec<PageRequest>>>;

    fn scripted(
        pages: Vec<Result<PaginatedResponse<&'static str>>>,
    ) -> (PaginatedIter<&'static str>, Log) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let seen = log.clone();
        let mut pages = VecDeque::from(pages);
        let iter = PaginatedIter::new(move |request| {
            seen.lock().unwrap().push(request);
            pages.pop_front().expect("no more scripted pages")
        });
        (iter, log)
    }

    fn page(items: &[&'static str], next: Option<&str>) -> Result<PaginatedResponse<&'static str>> {
        Ok(PaginatedResponse {
            items: items.to_vec(),
            next_page_path: next.map(str::to_string),
        })
    }

    #[test]
    fn test_iter_walks_locators() {
        let (iter, log) = scripted(vec![
            page(&["X"], Some("/api/v0/equity/history/orders?cursor=999")),
            page(&[], Some("/api/v0/equity/history/orders?cursor=998")),
            page(&["Y"], None),
        ]);

        let items: Vec<_> = iter.map(|r| r.unwrap()).collect();
        assert_eq!(items, vec!["X", "Y"]);
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                PageRequest::First,
                PageRequest::Locator("/api/v0/equity/history/orders?cursor=999".to_string()),
                PageRequest::Locator("/api/v0/equity/history/orders?cursor=998".to_string()),
            ]
        );
    }

    #[test]
    fn test_iter_fuses_after_error() {
        let (mut iter, log) = scripted(vec![
            page(&["X"], Some("/next")),
            Err(Error::from_status(429, "Too many requests").unwrap()),
        ]);

        assert_eq!(iter.next().unwrap().unwrap(), "X");
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
        assert_eq!(log.lock().unwrap().len(), 2);
    }
}
