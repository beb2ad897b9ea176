// crates/folio-core/src/stats/transport.rs
// HTTP seam for the profile fetch, plus the native reqwest implementation

#[cfg(not(target_arch = "wasm32"))]
use crate::cancel::until_cancelled;
#[cfg(not(target_arch = "wasm32"))]
use crate::error::FolioError;
use crate::error::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Media type requested from the profile service
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Unauthenticated GET against the profile service.
///
/// Implementations send `Accept: application/vnd.github+json`, return the
/// body of a 2xx response, map any other status to [`FolioError::Http`] and
/// return [`FolioError::Cancelled`] once `token` fires. Futures are not
/// required to be `Send` so browser fetches can implement this.
#[async_trait(?Send)]
pub trait ProfileTransport {
    async fn get_text(&self, url: &Url, token: &CancellationToken) -> Result<String>;
}

// ============================================================================
// Native transport
// ============================================================================

/// reqwest-backed transport for native builds. Dropping the in-flight
/// request future on cancellation aborts the connection.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestTransport {
    pub fn new() -> Self {
        // The profile service rejects requests without a User-Agent
        let client = reqwest::Client::builder()
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl ProfileTransport for ReqwestTransport {
    async fn get_text(&self, url: &Url, token: &CancellationToken) -> Result<String> {
        let request = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
            .send();
        let response = until_cancelled(token, request).await??;

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(until_cancelled(token, response.text()).await??)
    }
}
