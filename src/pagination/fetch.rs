//! Page fetching and cursor validation

use super::types::ListRequest;
use crate::client::Client;
use crate::config::ClientConfig;
use crate::decode::{DecodedPage, PageDecoder};
use crate::error::{Error, Result};
use crate::http::TransportRequest;
use tracing::debug;
use url::Url;

/// Build the URL of the first page: `{base}/{resource}/?page=<n>&limit=<l>`.
///
/// `limit` is left out when zero.
pub fn build_first_page_url(
    config: &ClientConfig,
    resource: &str,
    request: &ListRequest,
) -> Result<Url> {
    let mut url = config.endpoint(&[resource])?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("page", &request.start_page().to_string());
        if request.limit_per_page > 0 {
            query.append_pair("limit", &request.limit_per_page.to_string());
        }
    }
    Ok(url)
}

/// Parse a page token into an absolute URL
pub(crate) fn parse_page_token(token: &str) -> Result<Url> {
    Url::parse(token).map_err(|source| Error::InvalidPageToken {
        token: token.to_string(),
        source,
    })
}

/// Check that `candidate` is on the same scheme and host (including any
/// explicit port) as `base`.
///
/// Every mismatching component is reported in one
/// [`Error::UntrustedPageToken`].
pub fn validate_origin(base: &Url, candidate: &Url) -> Result<()> {
    let mut mismatches = Vec::new();

    let (got, want) = (authority(candidate), authority(base));
    if got != want {
        mismatches.push(format!("host mismatch: got '{got}', want '{want}'"));
    }
    if candidate.scheme() != base.scheme() {
        mismatches.push(format!(
            "scheme mismatch: got '{}', want '{}'",
            candidate.scheme(),
            base.scheme()
        ));
    }

    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(Error::UntrustedPageToken { mismatches })
    }
}

fn authority(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

/// Fetch one page and decode it
pub(crate) async fn fetch_page<T>(
    client: &Client,
    url: Url,
    decoder: &dyn PageDecoder<T>,
) -> Result<DecodedPage<T>> {
    debug!("Fetching page {url}");
    let response = client.execute(TransportRequest::get(url)).await?;
    decoder.decode(&response.body)
}
