/*
[INPUT]:  HTTP configuration (base URL, timeouts, token, pacing, error mode)
[OUTPUT]: Configured Firi client with the shared request gateway
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use crate::http::{FiriError, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Base URL for the Firi production API
const DEFAULT_BASE_URL: &str = "https://api.firi.com";

/// Header carrying the API access token on every request
const ACCESS_KEY_HEADER: &str = "miraiex-access-key";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Minimum spacing between consecutive requests, measured from the end
    /// of the previous dispatch. Zero disables client-side pacing.
    pub rate_limit: Duration,
    /// When true (default), server and transport failures are returned as
    /// `Err`. When false, they come back as `Ok({"error": ..., "status": ...})`.
    pub raise_on_error: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
            rate_limit: Duration::from_secs(1),
            raise_on_error: true,
        }
    }
}

/// Main HTTP client for the Firi API.
///
/// One instance owns one connection pool and one rate-limit clock. Dispatches
/// through the same instance are serialized; independent instances share
/// nothing. Dropping the client (or calling [`FiriClient::close`]) releases
/// the underlying pool.
pub struct FiriClient {
    http_client: Client,
    base_url: Url,
    rate_limit: Duration,
    raise_on_error: bool,
    /// End time of the previous dispatch. Held across send+decode, which
    /// also serializes dispatch within one client instance.
    last_dispatch: Mutex<Option<Instant>>,
}

impl FiriClient {
    /// Default `count` used by paginated history endpoints when the caller
    /// does not supply one.
    pub const DEFAULT_COUNT: i64 = 500;

    /// Advisory soft maximum for `count`. Larger values are still sent but
    /// produce a warning, as the API may reject them.
    pub const MAX_COUNT: i64 = 10_000;

    /// Create a new client for the production API with default configuration
    pub fn new(token: &str) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(token: &str, config: ClientConfig) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(FiriError::Config(
                "API token must not be empty".to_string(),
            ));
        }
        let header_value = HeaderValue::from_str(token).map_err(|_| {
            FiriError::Config("API token contains characters not valid in a header".to_string())
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_KEY_HEADER, header_value);

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .default_headers(headers)
            .build()
            .map_err(|err| FiriError::Config(format!("failed to build HTTP client: {err}")))?;

        let base_url = Url::parse(config.base_url.trim_end_matches('/'))?;

        Ok(Self {
            http_client,
            base_url,
            rate_limit: config.rate_limit,
            raise_on_error: config.raise_on_error,
            last_dispatch: Mutex::new(None),
        })
    }

    /// Base URL this client dispatches against
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Release the underlying connection pool.
    ///
    /// Consuming `self` makes reuse of a closed client a compile error;
    /// dropping the client at end of scope is equivalent.
    pub fn close(self) {}

    // --- Request gateway -------------------------------------------------

    /// Build a request for an endpoint path relative to the base URL
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a GET request to the given endpoint
    pub async fn get(&self, endpoint: &str) -> Result<Value> {
        let builder = self.request(Method::GET, endpoint)?;
        self.send(builder).await
    }

    /// Send a GET request with query parameters. `None` and empty values are
    /// dropped before serialization rather than sent as empty strings.
    pub async fn get_with_query(
        &self,
        endpoint: &str,
        query: &[(&str, Option<String>)],
    ) -> Result<Value> {
        let pairs: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (*key, v))
            })
            .collect();
        let mut builder = self.request(Method::GET, endpoint)?;
        if !pairs.is_empty() {
            builder = builder.query(&pairs);
        }
        self.send(builder).await
    }

    /// Send a DELETE request to the given endpoint
    pub async fn delete(&self, endpoint: &str) -> Result<Value> {
        let builder = self.request(Method::DELETE, endpoint)?;
        self.send(builder).await
    }

    /// Send a POST request with a JSON body to the given endpoint
    pub async fn post(&self, endpoint: &str, body: &Value) -> Result<Value> {
        let builder = self.request(Method::POST, endpoint)?.json(body);
        self.send(builder).await
    }

    /// Dispatch one request through the gateway: pace, send, classify.
    ///
    /// All endpoint methods funnel through here. The rate-limit clock lock is
    /// held for the whole round trip, so one client never has two requests in
    /// flight and the spacing is measured from the end of the previous call.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Value> {
        let mut last = self.last_dispatch.lock().await;
        if !self.rate_limit.is_zero()
            && let Some(previous) = *last
        {
            let elapsed = previous.elapsed();
            if elapsed < self.rate_limit {
                tokio::time::sleep(self.rate_limit - elapsed).await;
            }
        }
        let outcome = self.dispatch(builder).await;
        *last = Some(Instant::now());
        drop(last);

        match outcome {
            Ok(value) => Ok(value),
            Err(err) if !self.raise_on_error && err.is_suppressible() => {
                warn!(error = %err, "request failed; returning structured error value");
                Ok(err.to_error_value())
            }
            Err(err) => Err(err),
        }
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<Value> {
        let response = builder.send().await.map_err(FiriError::Transport)?;
        let status = response.status();
        debug!(status = status.as_u16(), "received response");
        let body = response.text().await.map_err(FiriError::Transport)?;

        if status.as_u16() >= 400 {
            let payload: Option<Value> = serde_json::from_str(&body).ok();
            let message = payload
                .as_ref()
                .and_then(|p| p.get("message").or_else(|| p.get("error")))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| {
                    if body.trim().is_empty() {
                        status.to_string()
                    } else {
                        body.trim().to_string()
                    }
                });
            return Err(FiriError::Api {
                status: status.as_u16(),
                message,
                payload,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|source| FiriError::Decode {
            status: status.as_u16(),
            source,
        })
    }

    // --- Shared parameter policy -----------------------------------------

    /// Apply the `count` defaulting/validation policy shared by the
    /// paginated history endpoints.
    pub(crate) fn effective_count(count: Option<i64>) -> Result<i64> {
        match count {
            None => Ok(Self::DEFAULT_COUNT),
            Some(c) if c < 1 => Err(FiriError::Validation(format!(
                "count must be a positive integer, got {c}"
            ))),
            Some(c) => {
                if c > Self::MAX_COUNT {
                    warn!(
                        count = c,
                        max = Self::MAX_COUNT,
                        "requested count exceeds the advisory maximum; the API may reject it"
                    );
                }
                Ok(c)
            }
        }
    }

    /// Validate a required path parameter before interpolating it into an
    /// endpoint path.
    pub(crate) fn path_segment(name: &str, value: &str) -> Result<String> {
        let value = value.trim();
        if value.is_empty() {
            return Err(FiriError::Validation(format!("{name} must not be empty")));
        }
        if value.contains(['/', '?', '#']) {
            return Err(FiriError::Validation(format!(
                "{name} must not contain '/', '?' or '#'"
            )));
        }
        Ok(value.to_string())
    }
}

impl fmt::Debug for FiriClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The access token lives in the pool's default headers; never print it.
        f.debug_struct("FiriClient")
            .field("base_url", &self.base_url.as_str())
            .field("rate_limit", &self.rate_limit)
            .field("raise_on_error", &self.raise_on_error)
            .field("token", &"***")
            .finish()
    }
}
