// crates/folio-core/src/lib.rs
// Folio - carousel engine, profile stats and motion loops for the portfolio site

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cancel;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod motion;
pub mod scroll_spy;
pub mod stats;
pub mod typewriter;

pub use config::FolioConfig;
pub use error::{FolioError, Result};
