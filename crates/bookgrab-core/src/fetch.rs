//! HTTP client shared by page fetches and file downloads.

use crate::config::GrabConfig;

/// User-Agent sent when the config does not set one.
pub const DEFAULT_USER_AGENT: &str = concat!("bookgrab/", env!("CARGO_PKG_VERSION"));

/// Error loading a catalog page. Always fatal to the owning catalog entry.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, TLS, redirect or timeout failure before a response arrived.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// Response had a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    /// Response started but the body could not be read or decoded.
    #[error("reading body of {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Thin wrapper around a pooled `reqwest::Client`. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Builds a client with the configured User-Agent and optional request timeout.
    pub fn new(cfg: &GrabConfig) -> Result<Self, reqwest::Error> {
        let user_agent = cfg.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = cfg.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    /// GETs `url` and returns the body as text. Non-2xx statuses are errors.
    pub async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url, "fetching catalog page");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}
