//! Pagination module
//!
//! Walks a cursor-paginated Shippo list endpoint on a background task and
//! hands the pages, one at a time, to the caller.
//!
//! # Overview
//!
//! [`start_listing`] validates the starting URL against the configured base
//! origin, spawns one task per run and returns a [`Pager`]: the ordered
//! [`Pages`] sequence plus a [`CancelHandle`]. Page N+1 is fetched only once
//! the consumer has taken page N. Between pages the task waits the configured
//! [`Throttle`], and that wait is where cancellation is observed.
//!
//! ```rust,ignore
//! let mut pager = client.list_addresses(ListRequest::new().max_pages(3))?;
//! while let Some(page) = pager.pages.next().await {
//!     if let Some(err) = &page.error {
//!         eprintln!("page {}: {err}", page.page_number);
//!         continue;
//!     }
//!     for address in &page.items {
//!         println!("{}", address.id);
//!     }
//! }
//! ```

mod cancel;
mod fetch;
mod pager;
mod types;

pub use cancel::CancelHandle;
pub use fetch::{build_first_page_url, validate_origin};
pub use pager::{start_listing, start_listing_with, Pager, Pages};
pub use types::{ListRequest, Page, Throttle, DEFAULT_THROTTLE};

#[cfg(test)]
mod tests;
