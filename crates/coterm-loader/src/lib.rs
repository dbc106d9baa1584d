//! Co-occurring Term Loader
//!
//! Reads the two co-occurring term sources (manual and all) and builds an
//! immutable [`CoTermStore`](coterm_store::CoTermStore).
//!
//! # Overview
//!
//! Each source is a tab-delimited text file, optionally gzip-compressed,
//! laid out as described in [`schema`]. The loader:
//! - skips the configured number of header lines
//! - parses each row, grouping rows by target term
//! - scores every row into its target's association set
//! - skips and logs malformed rows, up to a configurable limit
//!
//! Loading is all or nothing. A missing or unreadable source, or too many
//! malformed rows, fails the whole load with a [`LoaderError`]; choosing a
//! fallback is left to the caller.
//!
//! # Configuration
//!
//! ```toml
//! manual_source = "data/coterms.manual.tsv.gz"
//! all_source = "data/coterms.all.tsv.gz"
//! header_lines = 1
//! skip_limit = 0
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod loader;
mod report;
pub mod schema;
mod source;

pub use config::LoaderConfig;
pub use error::LoaderError;
pub use loader::{CoTermLoader, LoadResult};
pub use report::{LoadReport, SourceReport};
pub use source::open_source;
