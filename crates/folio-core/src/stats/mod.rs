// crates/folio-core/src/stats/mod.rs
// GitHub profile statistics: transport seam, aggregation, fetch state machine

mod aggregate;
mod fetcher;
mod transport;

pub use aggregate::{since_year, summarize, top_language, total_stars};
pub use fetcher::{StatsFetcher, StatsState};
#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestTransport;
pub use transport::{GITHUB_ACCEPT, ProfileTransport};
