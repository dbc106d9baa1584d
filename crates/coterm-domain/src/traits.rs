//! Trait definitions for external interactions
//!
//! Storage implementations live in other crates (coterm-store).

use crate::{Partition, TermAssociationSet};

/// Read access to loaded co-occurring term statistics
pub trait CoTermRepository {
    /// Look up the association set for a target term
    ///
    /// Returns `None` when the partition holds no data for the term.
    fn find(&self, term_id: &str, partition: Partition) -> Option<&TermAssociationSet>;
}
