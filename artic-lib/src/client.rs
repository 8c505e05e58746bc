//! Main ArticClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::api::DEFAULT_BASE_URL;
use crate::api::Page;
use crate::api::artworks_url;
use crate::api::parse_artworks_body;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::ArtworkRow;
use crate::rate_limit::ConcurrencyLimiter;

/// Client for the artworks listing endpoint.
///
/// This client is cheap to clone (uses `Arc` internally) and every clone
/// shares the same HTTP connection pool and concurrency budget.
///
/// # Example
///
/// ```ignore
/// use artic_lib::ArticClient;
///
/// let client = ArticClient::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
///
/// let page = client.fetch_artworks(1).await?;
/// ```
#[derive(Clone)]
pub struct ArticClient {
    inner: Arc<ArticClientInner>,
}

struct ArticClientInner {
    base_url: String,
    http_client: Client,
    timeout: Option<Duration>,
    limiter: ConcurrencyLimiter,
}

impl ArticClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> ArticClientBuilder {
        ArticClientBuilder::new()
    }

    /// Fetches one page of artworks.
    ///
    /// `page` is 1-based. Non-success statuses become [`ApiError::Http`] and
    /// an unparseable body becomes [`ApiError::Parse`]; a parseable body
    /// with a missing or malformed `data` member is an empty page.
    pub async fn fetch_artworks(&self, page: u32) -> Result<Page<ArtworkRow>, Error> {
        if page == 0 {
            return Err(Error::InvalidPage(page));
        }

        let url = artworks_url(&self.inner.base_url, page)?;

        let _permit = self.inner.limiter.acquire().await;
        log::debug!("GET {}", url);

        let mut request = self
            .inner
            .http_client
            .get(url)
            .header(ACCEPT, "application/json");

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http(status.as_u16(), body).into());
        }

        let text = response.text().await.map_err(|e| self.send_error(e))?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|e| ApiError::parse_with_body(e.to_string(), text.as_str()))?;

        let result = parse_artworks_body(&body);
        log::debug!(
            "page {} returned {} records (total {:?})",
            page,
            result.len(),
            result.total_count()
        );
        Ok(result)
    }

    fn send_error(&self, error: reqwest::Error) -> ApiError {
        match self.inner.timeout {
            Some(timeout) if error.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::Network(error),
        }
    }
}

/// Builder for constructing an [`ArticClient`].
///
/// # Example
///
/// ```ignore
/// let client = ArticClient::builder()
///     .base_url("https://api.artic.edu/api/v1")
///     .max_concurrent_requests(4)
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub struct ArticClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    max_concurrent_requests: usize,
    http_client: Option<Client>,
}

impl ArticClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            user_agent: None,
            max_concurrent_requests: 8,
            http_client: None,
        }
    }

    /// Sets the API base URL.
    ///
    /// Defaults to `https://api.artic.edu/api/v1`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the maximum number of requests in flight at once.
    ///
    /// Defaults to 8.
    pub fn max_concurrent_requests(mut self, limit: usize) -> Self {
        self.max_concurrent_requests = limit;
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created. `connect_timeout` and
    /// `user_agent` only apply to the default client.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`ArticClient`].
    pub fn build(self) -> Result<ArticClient, Error> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                builder.build().map_err(ApiError::Network)?
            }
        };

        Ok(ArticClient {
            inner: Arc::new(ArticClientInner {
                base_url: self.base_url,
                http_client,
                timeout: self.timeout,
                limiter: ConcurrencyLimiter::new(self.max_concurrent_requests),
            }),
        })
    }
}

impl Default for ArticClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
