//! Client for the NASA Image and Video Library search API
//! (`https://images-api.nasa.gov/search`).
//!
//! The pipeline is: [`SearchParams`] → [`build_query`] → [`search`] →
//! [`normalize`] into [`ResultItem`]s.

mod error;
pub mod models;
mod normalize;
mod params;
mod query;

pub use error::FetchError;
pub use models::SearchResponse;
pub use normalize::{
    normalize, normalize_links, normalize_records, parse_date_created, NormalizeMode, ResultItem,
};
pub use params::{Center, MediaType, SearchParams, YEAR_MAX, YEAR_MIN};
pub use query::{build_query, search_url, QueryOptions};

use std::num::NonZeroU32;
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_SEARCH_URL: &str = "https://images-api.nasa.gov/search";

static NASA_RATE_LIMIT_AMOUNT_CELL: OnceLock<governor::Quota> = OnceLock::new();
pub fn nasa_rate_limit_amount() -> &'static governor::Quota {
    NASA_RATE_LIMIT_AMOUNT_CELL.get_or_init(|| {
        governor::Quota::with_period(Duration::from_millis(250))
            .unwrap_or_else(|| governor::Quota::per_second(NonZeroU32::MIN))
    })
}

type RateLimiter = governor::RateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

static NASA_RATE_LIMITER_CELL: OnceLock<RateLimiter> = OnceLock::new();
pub fn nasa_rate_limiter() -> &'static RateLimiter {
    NASA_RATE_LIMITER_CELL.get_or_init(|| governor::RateLimiter::direct(*nasa_rate_limit_amount()))
}

pub fn build_client(timeout: Duration) -> Result<reqwest::Client, FetchError> {
    Ok(reqwest::Client::builder()
        .user_agent(concat!("avail-search/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()?)
}

pub fn parse_search_response(text: &str) -> Result<SearchResponse, FetchError> {
    serde_json::from_str(text).map_err(|source| FetchError::Deserialize {
        source,
        body: text.to_string(),
    })
}

/// Issues a single GET against `base_url` for `params`.
pub async fn search(
    client: &reqwest::Client,
    base_url: &str,
    params: &SearchParams,
    options: QueryOptions,
) -> Result<SearchResponse, FetchError> {
    let url = search_url(base_url, params, options)?;
    tracing::info!("Fetching search results: {}", url);
    nasa_rate_limiter().until_ready().await;

    let response = client.get(url).send().await?;
    let status = response.status();
    let response_text = response.text().await?;

    if !status.is_success() {
        tracing::error!(
            "Search request failed with status {}. Response: {:?}",
            status,
            response_text
        );
        return Err(FetchError::Status {
            status,
            body: response_text,
        });
    }

    match parse_search_response(&response_text) {
        Ok(parsed) => {
            tracing::info!(
                "Fetched {} items (total hits: {:?})",
                parsed.collection.items.len(),
                parsed.total_hits()
            );
            Ok(parsed)
        }
        Err(e) => {
            tracing::error!(
                "Could not deserialize search response. Response: {:?}",
                response_text
            );
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers a single request with `status_line` and `body`, returning the
    /// search URL to hit.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{addr}/search")
    }

    #[test]
    fn test_parse_search_response_with_metadata() {
        let response = parse_search_response(
            r#"{"collection":{"version":"1.0","items":[{"links":[{"href":"a.jpg"}]}],"metadata":{"total_hits":1}}}"#,
        )
        .unwrap();
        assert_eq!(response.total_hits(), Some(1));
        assert_eq!(normalize_links(&response), vec!["a.jpg"]);
    }

    #[test]
    fn test_parse_search_response_malformed() {
        let result = parse_search_response(r#"{"reason":"Invalid year range"}"#);
        match result {
            Err(FetchError::Deserialize { body, .. }) => {
                assert!(body.contains("Invalid year range"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_search_response_not_json() {
        assert!(parse_search_response("<html>502</html>").is_err());
    }

    #[tokio::test]
    async fn test_search_invalid_url_fails_before_request() {
        let client = build_client(Duration::from_secs(1)).unwrap();
        let result = search(
            &client,
            "::nope::",
            &SearchParams::default(),
            QueryOptions::default(),
        )
        .await;
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_search_connection_refused() {
        let client = build_client(Duration::from_secs(2)).unwrap();
        let result = search(
            &client,
            "http://127.0.0.1:9/search",
            &SearchParams::default(),
            QueryOptions::default(),
        )
        .await;
        assert!(matches!(result, Err(FetchError::Request(_))));
    }

    #[tokio::test]
    async fn test_search_success() {
        let base_url = serve_once(
            "200 OK",
            r#"{"collection":{"items":[{"links":[{"href":"a.jpg"}]},{"links":[{"href":"b.jpg"}]}],"metadata":{"total_hits":42}}}"#,
        )
        .await;
        let client = build_client(Duration::from_secs(5)).unwrap();
        let response = search(
            &client,
            &base_url,
            &SearchParams::default(),
            QueryOptions::default(),
        )
        .await
        .unwrap();
        assert_eq!(response.total_hits(), Some(42));
        assert_eq!(response.collection.items.len(), 2);
        assert_eq!(normalize_links(&response), vec!["a.jpg", "b.jpg"]);
    }

    #[tokio::test]
    async fn test_search_error_status_keeps_body() {
        let base_url = serve_once("400 Bad Request", r#"{"reason":"Invalid year range"}"#).await;
        let client = build_client(Duration::from_secs(5)).unwrap();
        let result = search(
            &client,
            &base_url,
            &SearchParams::default(),
            QueryOptions::default(),
        )
        .await;
        match result {
            Err(FetchError::Status { status, body }) => {
                assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
                assert_eq!(body, r#"{"reason":"Invalid year range"}"#);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
