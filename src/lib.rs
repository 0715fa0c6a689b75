//! Fetch a Localize project and export its translations as one file per
//! language.
//!
//! # Architecture
//!
//! - `client`: project fetch over HTTP with bounded retries
//! - `selector`: `only`/`except` language selection
//! - `format`: `[min,max]text|...` value rendering
//! - `export`: per-language file writer (JSON or PHP)
//! - `clean`: removal of stale language directories
//! - `localize`: the `Localize` handle tying them together

pub mod clean;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod localize;
pub mod project;
pub mod retry;
pub mod selector;

pub use config::Config;
pub use error::{LocalizeError, Result};
pub use localize::Localize;
