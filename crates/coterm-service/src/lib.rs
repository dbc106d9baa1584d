//! Co-occurring Term Service
//!
//! Answers "which terms co-occur most strongly with this one" over the
//! store built by `coterm-loader`.
//!
//! # Overview
//!
//! - **Startup**: [`CoTermService::start`] loads both partitions. If the
//!   load fails the error is logged and the service serves an empty store,
//!   so every query returns an empty list rather than failing.
//! - **Queries**: results come back ranked by similarity, capped by a limit
//!   that may be a number, `ALL`, or absent (the configured default).
//! - **Reloading**: [`ReloadWorker`] rebuilds the store on a schedule and
//!   swaps it in whole. A failed reload keeps the current store.
//!
//! # Configuration
//!
//! ```toml
//! default_limit = 50
//! reload_interval_minutes = 1440
//!
//! [loader]
//! manual_source = "data/coterms.manual.tsv.gz"
//! all_source = "data/coterms.all.tsv.gz"
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use coterm_domain::Partition;
//! use coterm_service::{CoTermQuery, CoTermService, ServiceConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = CoTermService::start(ServiceConfig::default())?;
//!
//! let query = CoTermQuery::new("GO:0003824", Partition::All)
//!     .with_limit("ALL")
//!     .with_similarity_threshold(10.0);
//! for term in service.find_co_terms(&query)? {
//!     println!("{}\t{:.2}", term.compared_term_id, term.similarity_percent);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod metrics;
mod service;
mod worker;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use metrics::ReloadMetrics;
pub use service::{find_co_terms, load_or_empty, CoTermQuery, CoTermResult, CoTermService};
pub use worker::ReloadWorker;
