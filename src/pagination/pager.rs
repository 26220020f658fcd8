//! The listing engine
//!
//! One background task per run. The task owns the loop state and the sending
//! half of a one-slot channel; it reserves the slot before every fetch, so it
//! never runs more than one page ahead of what the consumer has taken.

use super::cancel::{CancelHandle, CancelListener};
use super::fetch::{build_first_page_url, fetch_page, parse_page_token, validate_origin};
use super::types::{ListRequest, Page};
use crate::client::Client;
use crate::decode::{JsonPageDecoder, PageDecoder};
use crate::error::Result;
use futures::Stream;
use serde::de::DeserializeOwned;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use url::Url;

/// A running listing: the page sequence plus the handle that stops it
#[derive(Debug)]
pub struct Pager<T> {
    /// Pages in fetch order
    pub pages: Pages<T>,
    /// Stops the run at its next wait between pages
    pub cancel: CancelHandle,
}

impl<T> Pager<T> {
    /// Receive the next page
    pub async fn next(&mut self) -> Option<Page<T>> {
        self.pages.next().await
    }

    /// Split into the sequence and the cancel handle
    pub fn into_parts(self) -> (Pages<T>, CancelHandle) {
        (self.pages, self.cancel)
    }
}

/// Ordered sequence of pages; ends once the run terminates.
///
/// Dropping it stops the run before its next fetch.
#[derive(Debug)]
pub struct Pages<T> {
    rx: mpsc::Receiver<Page<T>>,
}

impl<T> Pages<T> {
    /// Receive the next page, or `None` when the run is over
    pub async fn next(&mut self) -> Option<Page<T>> {
        self.rx.recv().await
    }
}

impl<T> Stream for Pages<T> {
    type Item = Page<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

/// Start listing `resource` with the JSON envelope decoder.
///
/// Fails without starting anything when the page token does not parse or
/// points away from the configured base URL. Must be called from within a
/// Tokio runtime.
pub fn start_listing<T>(client: &Client, resource: &str, request: ListRequest) -> Result<Pager<T>>
where
    T: DeserializeOwned + Send + 'static,
{
    start_listing_with(client, resource, request, Arc::new(JsonPageDecoder::new()))
}

/// Start listing `resource` with a custom page decoder
pub fn start_listing_with<T>(
    client: &Client,
    resource: &str,
    request: ListRequest,
    decoder: Arc<dyn PageDecoder<T>>,
) -> Result<Pager<T>>
where
    T: Send + 'static,
{
    let first_url = match request.token() {
        Some(token) => parse_page_token(token)?,
        None => build_first_page_url(client.config(), resource, &request)?,
    };
    validate_origin(&client.config().base_url, &first_url)?;

    let cancel = CancelHandle::new();
    let (tx, rx) = mpsc::channel(1);
    let run = ListingRun {
        client: client.clone(),
        decoder,
        resource: resource.to_string(),
        max_pages: request.max_pages,
        delay: request.throttle.delay(),
        cancel: cancel.listener(),
    };

    info!("Listing {resource} from {first_url}");
    tokio::spawn(run.drive(first_url, tx));

    Ok(Pager {
        pages: Pages { rx },
        cancel,
    })
}

struct ListingRun<T> {
    client: Client,
    decoder: Arc<dyn PageDecoder<T>>,
    resource: String,
    max_pages: u64,
    delay: Option<Duration>,
    cancel: CancelListener,
}

impl<T: Send + 'static> ListingRun<T> {
    async fn drive(mut self, mut url: Url, tx: mpsc::Sender<Page<T>>) {
        let mut page_number = 1u64;

        loop {
            let permit = tokio::select! {
                biased;
                () = self.cancel.cancelled() => {
                    debug!("Listing {} cancelled", self.resource);
                    return;
                }
                permit = tx.reserve() => match permit {
                    Ok(permit) => permit,
                    Err(_) => {
                        debug!("Listing {} dropped by consumer", self.resource);
                        return;
                    }
                },
            };

            let decoded = match fetch_page(&self.client, url, self.decoder.as_ref()).await {
                Ok(decoded) => decoded,
                Err(err) => {
                    warn!(
                        "Listing {} stopped at page {page_number}: {err}",
                        self.resource
                    );
                    permit.send(Page::failed(page_number, err));
                    return;
                }
            };

            let exhausted = decoded.items.is_empty();
            let next_token = decoded.next_token.clone();
            debug!(
                "Listing {} page {page_number}: {} items",
                self.resource,
                decoded.items.len()
            );
            permit.send(Page {
                page_number,
                items: decoded.items,
                error: None,
                previous_token: decoded.previous_token,
                next_token: decoded.next_token,
            });

            if self.max_pages > 0 && page_number >= self.max_pages {
                info!("Listing {} reached {} pages", self.resource, self.max_pages);
                return;
            }
            if exhausted || next_token.is_empty() {
                info!("Listing {} done after {page_number} pages", self.resource);
                return;
            }
            page_number += 1;

            url = match self.follow(&next_token) {
                Ok(next) => next,
                Err(err) => {
                    warn!("Listing {} refused next cursor: {err}", self.resource);
                    if let Ok(permit) = tx.reserve().await {
                        permit.send(Page::failed(page_number, err));
                    }
                    return;
                }
            };

            if !self.wait().await {
                debug!("Listing {} cancelled", self.resource);
                return;
            }
        }
    }

    /// Cursors returned by the server get the same origin check as tokens
    fn follow(&self, next_token: &str) -> Result<Url> {
        let next = parse_page_token(next_token)?;
        validate_origin(&self.client.config().base_url, &next)?;
        Ok(next)
    }

    /// Wait the throttle delay; false when cancellation won the race
    async fn wait(&mut self) -> bool {
        match self.delay {
            None => !self.cancel.is_cancelled(),
            Some(delay) => tokio::select! {
                biased;
                () = self.cancel.cancelled() => false,
                () = tokio::time::sleep(delay) => true,
            },
        }
    }
}
