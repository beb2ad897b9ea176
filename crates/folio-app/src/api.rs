// crates/folio-app/src/api.rs
// Browser transport for the profile service

use async_trait::async_trait;
use folio_core::cancel::until_cancelled;
use folio_core::stats::{GITHUB_ACCEPT, ProfileTransport};
use folio_core::{FolioError, Result};
use gloo_net::http::Request;
use tokio_util::sync::CancellationToken;
use url::Url;
use web_sys::AbortController;

/// `fetch` with an `AbortController` tied to the request future. The
/// controller aborts when the future is dropped or the token fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

struct AbortOnDrop(AbortController);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        // No-op once the response body has been read
        self.0.abort();
    }
}

fn transport_error(e: gloo_net::Error) -> FolioError {
    FolioError::Transport(e.to_string())
}

#[async_trait(?Send)]
impl ProfileTransport for GlooTransport {
    async fn get_text(&self, url: &Url, token: &CancellationToken) -> Result<String> {
        let controller = AbortController::new()
            .map_err(|e| FolioError::Transport(format!("AbortController unavailable: {:?}", e)))?;
        let signal = controller.signal();
        let _abort = AbortOnDrop(controller);

        let request = Request::get(url.as_str())
            .header("Accept", GITHUB_ACCEPT)
            .abort_signal(Some(&signal))
            .send();
        let resp = until_cancelled(token, request).await?.map_err(transport_error)?;

        if !resp.ok() {
            return Err(FolioError::Http {
                status: resp.status(),
                url: url.to_string(),
            });
        }

        until_cancelled(token, resp.text()).await?.map_err(transport_error)
    }
}
