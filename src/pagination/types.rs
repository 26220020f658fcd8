//! Pagination types
//!
//! Request parameters, the inter-page throttle and the page record handed to
//! consumers.

use crate::error::Error;
use std::time::Duration;

/// Delay used between pages unless overridden
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(150);

/// Wire value of the legacy "no throttle" sentinel
const NO_THROTTLE_MS: i64 = -1;

/// Delay inserted between successive page fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Throttle {
    /// Wait [`DEFAULT_THROTTLE`]
    #[default]
    Default,
    /// Fetch the next page as soon as the consumer took the previous one
    Disabled,
    /// Wait a caller-chosen duration. A zero duration means [`Throttle::Default`].
    Custom(Duration),
}

impl Throttle {
    /// Map a millisecond count: `-1` disables the throttle, zero or any other
    /// negative value selects the default, positive values are used as given.
    pub fn from_millis(ms: i64) -> Self {
        match ms {
            NO_THROTTLE_MS => Self::Disabled,
            ms if ms <= 0 => Self::Default,
            ms => Self::Custom(Duration::from_millis(ms as u64)),
        }
    }

    /// The delay to wait, or `None` when disabled
    pub fn delay(self) -> Option<Duration> {
        match self {
            Self::Default => Some(DEFAULT_THROTTLE),
            Self::Disabled => None,
            Self::Custom(d) if d.is_zero() => Some(DEFAULT_THROTTLE),
            Self::Custom(d) => Some(d),
        }
    }
}

/// Parameters of one listing run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequest {
    /// Stop after this many pages; 0 means no ceiling
    pub max_pages: u64,
    /// Items per page; 0 leaves the server default
    pub limit_per_page: u64,
    /// First page to request, 1-based (0 is treated as 1)
    pub page_number: u64,
    /// `next` URL returned by an earlier listing. Takes precedence over
    /// `page_number` and `limit_per_page`.
    pub page_token: Option<String>,
    /// Delay between pages
    pub throttle: Throttle,
}

impl ListRequest {
    /// A request for every page, starting at page 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page ceiling
    #[must_use]
    pub fn max_pages(mut self, max_pages: u64) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit_per_page = limit;
        self
    }

    /// Set the first page to request
    #[must_use]
    pub fn page(mut self, page_number: u64) -> Self {
        self.page_number = page_number;
        self
    }

    /// Resume from a `next` URL
    #[must_use]
    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }

    /// Set the throttle
    #[must_use]
    pub fn throttle(mut self, throttle: Throttle) -> Self {
        self.throttle = throttle;
        self
    }

    /// First page number with the 1-based normalization applied
    pub fn start_page(&self) -> u64 {
        self.page_number.max(1)
    }

    /// The page token, if one is set and not blank
    pub fn token(&self) -> Option<&str> {
        self.page_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// One page of a listing run.
///
/// When `error` is set the fetch failed, `items` is empty and this is the
/// last page of the run.
#[derive(Debug)]
pub struct Page<T> {
    /// Ordinal of the page within the run, starting at 1
    pub page_number: u64,
    /// Objects on the page
    pub items: Vec<T>,
    /// Why the page could not be fetched
    pub error: Option<Error>,
    /// Cursor of the previous page, empty when none
    pub previous_token: String,
    /// Cursor to resume from, empty when there are no more pages
    pub next_token: String,
}

impl<T> Page<T> {
    pub(crate) fn failed(page_number: u64, error: Error) -> Self {
        Self {
            page_number,
            items: Vec::new(),
            error: Some(error),
            previous_token: String::new(),
            next_token: String::new(),
        }
    }

    /// True when the page carries an error
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// True when the server reported no further page
    pub fn is_last(&self) -> bool {
        self.next_token.is_empty()
    }

    /// The items, or the error that replaced them
    pub fn into_result(self) -> crate::Result<Vec<T>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.items),
        }
    }
}
