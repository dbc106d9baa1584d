//! Co-occurring Term Domain Layer
//!
//! This crate holds the arithmetic and ranking rules for co-occurring term
//! statistics. It performs no I/O; loading, storage and query composition live
//! in the other workspace crates.
//!
//! ## Key Concepts
//!
//! - **Target term**: the ontology term whose associations are requested
//! - **Compared term**: a candidate term scored against the target
//! - **Similarity percent**: Jaccard overlap of the annotated gene-product sets
//! - **Probability ratio**: observed co-annotation rate over the rate expected by chance
//! - **Partition**: curated-only (`MANUAL`) or all-source (`ALL`) statistics
//!
//! ## Example
//!
//! ```
//! use coterm_domain::{CoOccurrenceRecord, TermAssociationSet};
//!
//! # fn main() -> Result<(), coterm_domain::DomainError> {
//! let mut set = TermAssociationSet::new("GO:0000001", 24, 8)?;
//! set.add(CoOccurrenceRecord::new("GO:0000001", "GO:0000002", 8, 4)?)?;
//! set.add(CoOccurrenceRecord::new("GO:0000001", "GO:0000003", 2, 2)?)?;
//!
//! let best = set.top_n(1);
//! assert_eq!(best[0].compared_term_id(), "GO:0000002");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod association;
pub mod error;
pub mod limit;
pub mod partition;
pub mod record;
pub mod statistics;
pub mod traits;

// Re-exports for convenience
pub use association::TermAssociationSet;
pub use error::DomainError;
pub use limit::{workout_limit, LimitResolver, UNLIMITED};
pub use partition::Partition;
pub use record::{AssociationStat, CoOccurrenceRecord};
pub use traits::CoTermRepository;
