//! Per-target aggregation of association statistics

use crate::record::{AssociationStat, CoOccurrenceRecord};
use crate::DomainError;

/// All association statistics for one target term, kept in rank order
///
/// The set is filled once during loading and only read afterwards. Entries
/// are ordered by descending similarity, ties by compared term id.
#[derive(Debug, Clone, PartialEq)]
pub struct TermAssociationSet {
    target_term_id: String,
    total_count: u64,
    selected_count: u64,
    ranked: Vec<AssociationStat>,
}

impl TermAssociationSet {
    /// Create an empty set for a target term
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the target id is blank or either count is zero.
    pub fn new(
        target_term_id: impl Into<String>,
        total_count: u64,
        selected_count: u64,
    ) -> Result<Self, DomainError> {
        let target_term_id = target_term_id.into();
        if target_term_id.trim().is_empty() {
            return Err(DomainError::invalid("target term id cannot be empty"));
        }
        if total_count == 0 {
            return Err(DomainError::invalid("total count must be greater than zero"));
        }
        if selected_count == 0 {
            return Err(DomainError::invalid("selected count must be greater than zero"));
        }

        Ok(Self {
            target_term_id,
            total_count,
            selected_count,
            ranked: Vec::new(),
        })
    }

    /// Score a record and insert it at its rank
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the record belongs to another target term,
    /// or if its counts are inconsistent with this set's selected count.
    pub fn add(&mut self, record: CoOccurrenceRecord) -> Result<(), DomainError> {
        if record.target_term_id() != self.target_term_id {
            return Err(DomainError::invalid(format!(
                "record for {} cannot be added to the set for {}",
                record.target_term_id(),
                self.target_term_id
            )));
        }

        let stat = AssociationStat::compute(record, self.selected_count, self.total_count)?;
        let position = self
            .ranked
            .partition_point(|existing| existing.rank_cmp(&stat).is_le());
        self.ranked.insert(position, stat);
        Ok(())
    }

    /// Iterate the entries from most to least similar
    ///
    /// Each call starts a new traversal over the current contents.
    pub fn ranked_by_similarity(&self) -> impl Iterator<Item = &AssociationStat> + '_ {
        self.ranked.iter()
    }

    /// The `n` most similar entries (all of them if `n` exceeds the size)
    pub fn top_n(&self, n: usize) -> &[AssociationStat] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// The target term id
    pub fn target_term_id(&self) -> &str {
        &self.target_term_id
    }

    /// Gene products in the data set
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Gene products annotated with the target term
    pub fn selected_count(&self) -> u64 {
        self.selected_count
    }

    /// Number of compared terms
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Whether no compared terms were added
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
