// crates/folio-core/src/stats/fetcher.rs
// Two-step profile fetch with teardown-aware state transitions

use super::aggregate::summarize;
use super::transport::ProfileTransport;
use crate::config::{GitHubConfig, MAX_PER_PAGE};
use crate::error::{FolioError, Result};
use folio_types::{GitHubRepo, GitHubUser, ProfileStats};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

/// Lifecycle of the stats card
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StatsState {
    #[default]
    Idle,
    Loading,
    Ready(ProfileStats),
    Unavailable,
}

impl StatsState {
    pub fn is_loading(&self) -> bool {
        matches!(self, StatsState::Loading)
    }

    pub fn stats(&self) -> Option<&ProfileStats> {
        match self {
            StatsState::Ready(stats) => Some(stats),
            _ => None,
        }
    }
}

/// Fetches a profile and its owned repositories through a [`ProfileTransport`]
pub struct StatsFetcher<T> {
    transport: T,
    config: GitHubConfig,
}

impl<T: ProfileTransport> StatsFetcher<T> {
    pub fn new(transport: T, config: GitHubConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }

    /// `{api_base}/users/{handle}`
    pub fn profile_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.config.api_base)?;
        url.path_segments_mut()
            .map_err(|_| FolioError::InvalidUrl(self.config.api_base.clone()))?
            .pop_if_empty()
            .extend(["users", self.config.handle.as_str()]);
        Ok(url)
    }

    /// The repositories URL reported by the profile, limited to one page of
    /// owned repositories
    pub fn repos_url(&self, reported: &str) -> Result<Url> {
        let mut url = Url::parse(reported)?;
        url.query_pairs_mut()
            .append_pair("per_page", &self.config.per_page.min(MAX_PER_PAGE).to_string())
            .append_pair("type", "owner");
        Ok(url)
    }

    /// Fetch the profile, then its repositories, and aggregate.
    ///
    /// Returns [`FolioError::Cancelled`] if `token` fires at any point,
    /// including after a response has already arrived.
    pub async fn fetch(&self, token: &CancellationToken) -> Result<ProfileStats> {
        let profile_url = self.profile_url()?;
        debug!(url = %profile_url, "Fetching profile");
        let body = self.transport.get_text(&profile_url, token).await?;
        ensure_live(token)?;
        let user: GitHubUser = serde_json::from_str(&body)?;

        let repos_url = self.repos_url(&user.repos_url)?;
        debug!(url = %repos_url, "Fetching owned repositories");
        let body = self.transport.get_text(&repos_url, token).await?;
        ensure_live(token)?;
        let repos: Vec<GitHubRepo> = serde_json::from_str(&body)?;

        summarize(&user, &repos)
    }

    /// Run one fetch, reporting `Loading` and then exactly one of `Ready` or
    /// `Unavailable`. Nothing is reported once `token` is cancelled.
    pub async fn run<F>(&self, token: &CancellationToken, mut on_state: F)
    where
        F: FnMut(StatsState),
    {
        if token.is_cancelled() {
            return;
        }
        on_state(StatsState::Loading);

        let outcome = self.fetch(token).await;
        if token.is_cancelled() {
            debug!(handle = %self.config.handle, "Stats fetch torn down");
            return;
        }

        match outcome {
            Ok(stats) => {
                debug!(
                    login = %stats.login,
                    total_stars = stats.total_stars,
                    top_language = %stats.top_language,
                    "Profile stats ready"
                );
                on_state(StatsState::Ready(stats));
            }
            Err(e) if e.is_cancelled() => {
                debug!("Stats fetch cancelled by transport");
            }
            Err(e) => {
                warn!(handle = %self.config.handle, error = %e, "Profile stats unavailable");
                on_state(StatsState::Unavailable);
            }
        }
    }
}

fn ensure_live(token: &CancellationToken) -> Result<()> {
    if token.is_cancelled() {
        Err(FolioError::Cancelled)
    } else {
        Ok(())
    }
}
