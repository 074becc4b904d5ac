//! Paginated stream for lazy iteration over cursor-paginated results.
//!
//! Trading 212 history endpoints return pages of the form
//! `{"items": [...], "nextPagePath": "/api/v0/...?cursor=..."}`. The first
//! page is requested with the caller's query; every following page is
//! requested at the server-supplied `nextPagePath` verbatim, with no query of
//! our own. Iteration ends when a page carries no `nextPagePath`; an empty
//! `items` list alone does not end it.
//!
//! [`PageCursor`] and [`PageSource`] hold that protocol and are shared by the
//! async [`PaginatedStream`] and the blocking
//! [`PaginatedIter`](crate::blocking::PaginatedIter).

use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::stream::FusedStream;
use futures_util::Stream;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ApiResponse, ClientInner};
use crate::models::PaginatedResponse;
use crate::Result;

/// Which page to fetch next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PageRequest {
    /// The first page, at the starting path with the initial query.
    First,
    /// A later page, at a server-supplied locator.
    Locator(String),
}

/// Cursor state machine: first page, then locators, then done.
#[derive(Debug)]
pub(crate) struct PageCursor {
    next: Option<PageRequest>,
}

impl PageCursor {
    pub(crate) fn new() -> Self {
        Self {
            next: Some(PageRequest::First),
        }
    }

    /// Take the next request. Returns `None` while a page is in flight or
    /// once the sequence is exhausted.
    pub(crate) fn take(&mut self) -> Option<PageRequest> {
        self.next.take()
    }

    /// Record the locator of the page just received.
    pub(crate) fn advance(&mut self, next_page_path: Option<String>) {
        self.next = next_page_path.map(PageRequest::Locator);
    }

    /// Stop after a failure.
    pub(crate) fn finish(&mut self) {
        self.next = None;
    }

    pub(crate) fn is_done(&self) -> bool {
        self.next.is_none()
    }
}

/// Starting path and initial query of a paginated listing.
#[derive(Debug, Clone)]
pub(crate) struct PageSource<Q> {
    path: String,
    query: Option<Q>,
}

impl<Q> PageSource<Q> {
    pub(crate) fn new(path: impl Into<String>, query: Option<Q>) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Path and query for a page request. Locators never get the initial
    /// query re-applied.
    pub(crate) fn target<'a>(&'a self, request: &'a PageRequest) -> (&'a str, Option<&'a Q>) {
        match request {
            PageRequest::First => (&self.path, self.query.as_ref()),
            PageRequest::Locator(path) => (path, None),
        }
    }
}

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

type FetchPage<T> = Box<dyn Fn(PageRequest) -> BoxFuture<'static, Result<PaginatedResponse<T>>> + Send + Sync>;

/// A stream that lazily fetches pages from a paginated endpoint.
///
/// Items are yielded one by one in server order; the next page is only
/// requested once the current one is drained. An error is yielded once and
/// ends the stream. Dropping the stream cancels any page in flight.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use trading212_rs::api::HistoryQuery;
///
/// # async fn example(client: trading212_rs::Trading212Client) -> trading212_rs::Result<()> {
/// let mut stream = client.history().orders_stream(HistoryQuery::new().limit(50));
///
/// while let Some(result) = stream.next().await {
///     let order = result?;
///     println!("{:?}", order);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    /// Function to fetch one page.
    fetch_page: FetchPage<T>,
    /// Current page of items being yielded.
    current_items: VecDeque<T>,
    /// Which page comes next, if any.
    cursor: PageCursor,
    /// Current in-flight fetch future.
    pending_fetch: Option<BoxFuture<'static, Result<PaginatedResponse<T>>>>,
}

impl<T> PaginatedStream<T>
where
    T: Send + 'static,
{
    pub(crate) fn new<F>(fetch_page: F) -> Self
    where
        F: Fn(PageRequest) -> BoxFuture<'static, Result<PaginatedResponse<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: VecDeque::new(),
            cursor: PageCursor::new(),
            pending_fetch: None,
        }
    }
}

/// Build a stream over a paginated endpoint of the async client.
pub(crate) fn paginate<T, Q>(inner: Arc<ClientInner>, source: PageSource<Q>) -> PaginatedStream<T>
where
    T: DeserializeOwned + Send + 'static,
    Q: Serialize + Send + Sync + 'static,
{
    let source = Arc::new(source);

    PaginatedStream::new(move |request| {
        let inner = inner.clone();
        let source = source.clone();

        Box::pin(async move {
            let (path, query) = source.target(&request);
            let response = match query {
                Some(query) => inner.get_with_query(path, query).await?,
                None => inner.get(path).await?,
            };
            let page = ApiResponse::<PaginatedResponse<T>>::from_response(response).await?;
            tracing::trace!(
                items = page.data.items.len(),
                has_next = page.data.has_next_page(),
                remaining = ?page.rate_limit.remaining,
                "fetched page"
            );
            Ok(page.data)
        })
    })
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            if let Some(item) = this.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(ref mut fut) = this.pending_fetch {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        this.cursor.advance(page.next_page_path);
                        this.current_items = page.items.into();
                        // An empty page with a locator keeps going
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.cursor.finish();
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            if let Some(request) = this.cursor.take() {
                this.pending_fetch = Some((this.fetch_page)(request));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> FusedStream for PaginatedStream<T> {
    fn is_terminated(&self) -> bool {
        self.current_items.is_empty() && self.pending_fetch.is_none() && self.cursor.is_done()
    }
}

impl<T> Unpin for PaginatedStream<T> {}

impl<T> std::fmt::Debug for PaginatedStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedStream")
            .field("buffered", &self.current_items.len())
            .field("cursor", &self.cursor)
            .field("in_flight", &self.pending_fetch.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use futures_util::StreamExt;
    use std::sync::Mutex;

    fn page(items: &[u32], next: Option<&str>) -> PaginatedResponse<u32> {
        PaginatedResponse {
            items: items.to_vec(),
            next_page_path: next.map(str::to_string),
        }
    }

    /// A stream over canned pages that records every request made.
    fn scripted(
        pages: Vec<Result<PaginatedResponse<u32>>>,
    ) -> (PaginatedStream<u32>, Arc<Mutex<Vec<PageRequest>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let pages = Arc::new(Mutex::new(VecDeque::from(pages)));
        let seen = log.clone();

        let stream = PaginatedStream::new(move |request| {
            seen.lock().unwrap().push(request);
            let next = pages
                .lock()
                .unwrap()
                .pop_front()
                .expect("no more scripted pages");
            Box::pin(async move { next })
        });
        (stream, log)
    }

    #[test]
    fn test_cursor_sequence() {
        let mut cursor = PageCursor::new();
        assert_eq!(cursor.take(), Some(PageRequest::First));
        assert_eq!(cursor.take(), None);

        cursor.advance(Some("/next?cursor=1".to_string()));
        assert_eq!(cursor.take(), Some(PageRequest::Locator("/next?cursor=1".to_string())));

        cursor.advance(None);
        assert!(cursor.is_done());
        assert_eq!(cursor.take(), None);
    }

    #[test]
    fn test_source_drops_query_for_locators() {
        let source = PageSource::new("/api/v0/equity/history/orders", Some(vec![("limit", 5)]));

        let (path, query) = source.target(&PageRequest::First);
        assert_eq!(path, "/api/v0/equity/history/orders");
        assert_eq!(query, Some(&vec![("limit", 5)]));

        let locator = PageRequest::Locator("/api/v0/equity/history/orders?cursor=999".to_string());
        let (path, query) = source.target(&locator);
        assert_eq!(path, "/api/v0/equity/history/orders?cursor=999");
        assert!(query.is_none());
    }

    #[tokio::test]
    async fn test_stream_flattens_pages_in_order() {
        let (stream, log) = scripted(vec![
            Ok(page(&[1, 2], Some("/p2"))),
            Ok(page(&[3], Some("/p3"))),
            Ok(page(&[4, 5], None)),
        ]);

        let items: Vec<u32> = stream.map(|r| r.unwrap()).collect().await;
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                PageRequest::First,
                PageRequest::Locator("/p2".to_string()),
                PageRequest::Locator("/p3".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_page_with_locator_continues() {
        let (stream, log) = scripted(vec![
            Ok(page(&[], Some("/p2"))),
            Ok(page(&[], Some("/p3"))),
            Ok(page(&[7], None)),
        ]);

        let items: Vec<u32> = stream.map(|r| r.unwrap()).collect().await;
        assert_eq!(items, vec![7]);
        assert_eq!(log.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_next_page_fetched_lazily() {
        let (mut stream, log) = scripted(vec![Ok(page(&[1, 2], Some("/p2"))), Ok(page(&[3], None))]);

        assert_eq!(stream.next().await.unwrap().unwrap(), 1);
        assert_eq!(stream.next().await.unwrap().unwrap(), 2);
        assert_eq!(log.lock().unwrap().len(), 1);

        assert_eq!(stream.next().await.unwrap().unwrap(), 3);
        assert_eq!(log.lock().unwrap().len(), 2);
        assert!(stream.next().await.is_none());
        assert!(stream.is_terminated());
    }

    #[tokio::test]
    async fn test_error_mid_sequence_ends_stream() {
        let (mut stream, log) = scripted(vec![
            Ok(page(&[1], Some("/p2"))),
            Err(Error::from_status(503, "maintenance").unwrap()),
        ]);

        assert_eq!(stream.next().await.unwrap().unwrap(), 1);
        let err = stream.next().await.unwrap().unwrap_err();
        assert_eq!(err.status_code(), Some(503));
        assert!(stream.next().await.is_none());
        assert_eq!(log.lock().unwrap().len(), 2);
    }
}
