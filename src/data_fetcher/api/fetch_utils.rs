//! HTTP fetching with response caching and stale-on-error fallback

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::data_fetcher::cache::ResponseCache;
use crate::error::{AppError, FetchCause};

/// Per-call knobs for [`fetch_with_cache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Overrides the client's default request timeout
    pub timeout: Option<Duration>,
    /// Skip the fresh-cache check and always hit the network
    pub force_refresh: bool,
}

impl FetchOptions {
    pub fn force_refresh() -> Self {
        Self {
            force_refresh: true,
            ..Self::default()
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Self::default()
        }
    }
}

/// Fetch a JSON document through the response cache.
///
/// This function:
/// - Returns a fresh cached value without touching the network
/// - Otherwise issues a GET bounded by the timeout; a timed-out request is dropped
/// - Caches and returns successfully parsed responses
/// - On any failure falls back to the cached value regardless of age
/// - Fails with [`AppError::Fetch`] only when no cached value exists
#[instrument(skip(client, cache, options, default_timeout))]
pub async fn fetch_with_cache(
    client: &Client,
    cache: &ResponseCache,
    url: &str,
    cache_key: &str,
    options: FetchOptions,
    default_timeout: Duration,
) -> Result<Value, AppError> {
    if !options.force_refresh
        && let Some(cached) = cache.get_fresh(cache_key).await
    {
        debug!("Using cached response for key: {cache_key}");
        return Ok(cached);
    }

    let timeout = options.timeout.unwrap_or(default_timeout);
    match fetch_json(client, url, timeout).await {
        Ok(value) => {
            cache.store(cache_key, value.clone()).await;
            Ok(value)
        }
        Err(cause) => match cache.get_any(cache_key).await {
            Some(stale) => {
                warn!(
                    "Fetch failed for {} ({}), serving stale cache entry aged {:?}",
                    cache_key,
                    cause,
                    stale.stored_at.elapsed()
                );
                Ok(stale.value)
            }
            None => {
                error!("Fetch failed for {} with no cached fallback: {}", cache_key, cause);
                Err(AppError::fetch(cause, url, cache_key))
            }
        },
    }
}

/// Issues a single GET and parses the body as JSON.
async fn fetch_json(client: &Client, url: &str, timeout: Duration) -> Result<Value, FetchCause> {
    info!("Fetching data from URL: {url}");

    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(FetchCause::from_request_error)?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        return Err(FetchCause::Status {
            status: status.as_u16(),
            reason: reason.to_string(),
        });
    }

    let response_text = response.text().await.map_err(|e| {
        if e.is_timeout() {
            FetchCause::Timeout
        } else {
            FetchCause::Body(e.to_string())
        }
    })?;

    debug!("Response length: {} bytes", response_text.len());

    let value = serde_json::from_str::<Value>(&response_text)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_second_call_within_ttl_uses_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/baseball/mlb/news"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"articles": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let cache = ResponseCache::new(Duration::from_secs(300));
        let url = format!("{}/baseball/mlb/news", server.uri());

        for _ in 0..2 {
            let value = fetch_with_cache(
                &client,
                &cache,
                &url,
                "mlb-news",
                FetchOptions::default(),
                TIMEOUT,
            )
            .await
            .unwrap();
            assert_eq!(value, json!({"articles": []}));
        }
    }

    #[tokio::test]
    async fn test_force_refresh_bypasses_fresh_entry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fresh": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let cache = ResponseCache::new(Duration::from_secs(300));
        cache.store("key", json!({"fresh": false})).await;

        let value = fetch_with_cache(
            &client,
            &cache,
            &server.uri(),
            "key",
            FetchOptions::force_refresh(),
            TIMEOUT,
        )
        .await
        .unwrap();

        assert_eq!(value, json!({"fresh": true}));
        assert_eq!(cache.get_fresh("key").await, Some(json!({"fresh": true})));
    }

    #[tokio::test]
    async fn test_invalid_json_without_cache_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let cache = ResponseCache::new(Duration::from_secs(300));

        let err = fetch_with_cache(
            &client,
            &cache,
            &server.uri(),
            "key",
            FetchOptions::default(),
            TIMEOUT,
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            AppError::Fetch {
                cause: FetchCause::Parse(_),
                ..
            }
        ));
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_http_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let cache = ResponseCache::new(Duration::from_secs(300));

        let err = fetch_with_cache(
            &client,
            &cache,
            &server.uri(),
            "key",
            FetchOptions::default(),
            TIMEOUT,
        )
        .await
        .unwrap_err();

        match err {
            AppError::Fetch {
                cause: FetchCause::Status { status, .. },
                url,
                cache_key,
            } => {
                assert_eq!(status, 503);
                assert_eq!(url, server.uri());
                assert_eq!(cache_key, "key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_timeout_falls_back_to_stale_entry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"late": true}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let cache = ResponseCache::new(Duration::ZERO);
        cache.store("key", json!({"stale": true})).await;

        let value = fetch_with_cache(
            &client,
            &cache,
            &server.uri(),
            "key",
            FetchOptions::with_timeout(Duration::from_millis(100)),
            TIMEOUT,
        )
        .await
        .unwrap();

        assert_eq!(value, json!({"stale": true}));
    }
}
