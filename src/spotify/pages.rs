//! Fan-out over paginated Spotify listings.
//!
//! Spotify reports the full item count with every page. The helper here
//! fetches the first page to learn that count, then launches one task per
//! remaining page without waiting for any of them, and hands the pending
//! pages back to the caller in offset order.

use std::{error::Error, future::Future, sync::Arc};

use tokio::{sync::Semaphore, task::JoinHandle};

use crate::{
    Res,
    types::{Credential, Page},
};

use super::SpotifyClient;

/// Page size used for every paginated request.
pub const PAGE_LIMIT: u32 = 50;

/// A page request that has been launched but not necessarily finished.
pub type PendingPage<T, E> = JoinHandle<Result<Page<T>, E>>;

/// Offsets of the pages that follow the first one for a listing of `total`
/// items.
pub fn trailing_offsets(total: u32) -> impl Iterator<Item = u32> {
    (PAGE_LIMIT..total).step_by(PAGE_LIMIT as usize)
}

/// Retrieves every page of a paginated resource.
///
/// `request` is called with the credential and the page offset. The first
/// page (offset 0) is awaited to learn the total; all further pages at
/// `50, 100, ...` are spawned immediately. With `concurrency` set, at most
/// that many of the trailing requests run at the same time; `None` fires them
/// all at once.
///
/// The returned handles are in offset order and the first one is already
/// resolved, so there are always `max(1, ceil(total / 50))` of them. Pages
/// fail independently: one failing page does not cancel the others.
///
/// # Errors
///
/// Fails only if the first page fails, with that page's error.
pub async fn get_all_request_pages<T, E, F, Fut>(
    user: &Credential,
    request: F,
    concurrency: Option<usize>,
) -> Result<Vec<PendingPage<T, E>>, E>
where
    F: Fn(Credential, u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let first = request(user.clone(), 0).await?;
    let total = first.total;

    let limiter = concurrency.map(|n| Arc::new(Semaphore::new(n.max(1))));

    let mut pages: Vec<PendingPage<T, E>> = Vec::new();
    pages.push(tokio::spawn(async move { Ok::<_, E>(first) }));

    for offset in trailing_offsets(total) {
        let page = request(user.clone(), offset);
        let limiter = limiter.clone();

        pages.push(tokio::spawn(async move {
            let _permit = match limiter {
                Some(limiter) => limiter.acquire_owned().await.ok(),
                None => None,
            };
            page.await
        }));
    }

    Ok(pages)
}

/// Awaits all pages in order and concatenates their items.
///
/// Stops at the first page that failed. Use [`settle_pages`] to look at each
/// page's outcome instead.
pub async fn collect_items<T, E>(pages: Vec<PendingPage<T, E>>) -> Res<Vec<T>>
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    let mut items = Vec::new();
    for page in pages {
        match page.await? {
            Ok(page) => items.extend(page.items),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(items)
}

/// Awaits all pages in order and returns each page's outcome.
pub async fn settle_pages<T, E>(pages: Vec<PendingPage<T, E>>) -> Vec<Res<Page<T>>>
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    let mut settled = Vec::with_capacity(pages.len());
    for page in pages {
        settled.push(match page.await {
            Ok(Ok(page)) => Ok(page),
            Ok(Err(e)) => Err(e.into()),
            Err(e) => Err(e.into()),
        });
    }
    settled
}

impl SpotifyClient {
    /// [`get_all_request_pages`] with the concurrency limit from the client's
    /// configuration.
    pub async fn get_all_request_pages<T, E, F, Fut>(
        &self,
        user: &Credential,
        request: F,
    ) -> Result<Vec<PendingPage<T, E>>, E>
    where
        F: Fn(Credential, u32) -> Fut,
        Fut: Future<Output = Result<Page<T>, E>> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        get_all_request_pages(user, request, self.config.page_concurrency).await
    }
}
