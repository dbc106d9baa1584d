//! Co-occurrence records and the statistics derived from them

use crate::statistics::{probability_ratio, similarity_percent};
use crate::DomainError;
use serde::Serialize;
use std::cmp::Ordering;

/// One raw co-occurrence row: how often a compared term annotates the same
/// gene products as the target term
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoOccurrenceRecord {
    target_term_id: String,
    compared_term_id: String,
    compared_count: u64,
    together_count: u64,
}

impl CoOccurrenceRecord {
    /// Create a new record
    ///
    /// # Errors
    /// Returns `InvalidArgument` if either id is blank or if `together_count`
    /// exceeds `compared_count`.
    pub fn new(
        target_term_id: impl Into<String>,
        compared_term_id: impl Into<String>,
        compared_count: u64,
        together_count: u64,
    ) -> Result<Self, DomainError> {
        let target_term_id = target_term_id.into();
        let compared_term_id = compared_term_id.into();

        if target_term_id.trim().is_empty() {
            return Err(DomainError::invalid("target term id cannot be empty"));
        }
        if compared_term_id.trim().is_empty() {
            return Err(DomainError::invalid("compared term id cannot be empty"));
        }
        if together_count > compared_count {
            return Err(DomainError::invalid(format!(
                "together count {} exceeds compared count {} for {} -> {}",
                together_count, compared_count, target_term_id, compared_term_id
            )));
        }

        Ok(Self {
            target_term_id,
            compared_term_id,
            compared_count,
            together_count,
        })
    }

    /// The term the statistics are computed for
    pub fn target_term_id(&self) -> &str {
        &self.target_term_id
    }

    /// The co-occurring term
    pub fn compared_term_id(&self) -> &str {
        &self.compared_term_id
    }

    /// Gene products annotated with the compared term
    pub fn compared_count(&self) -> u64 {
        self.compared_count
    }

    /// Gene products annotated with both terms
    pub fn together_count(&self) -> u64 {
        self.together_count
    }
}

/// A record together with its computed association scores
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationStat {
    #[serde(flatten)]
    record: CoOccurrenceRecord,
    similarity_percent: f64,
    probability_ratio: f64,
}

impl AssociationStat {
    /// Score a record against the target term's counts
    pub fn compute(
        record: CoOccurrenceRecord,
        selected_count: u64,
        total_count: u64,
    ) -> Result<Self, DomainError> {
        let similarity_percent =
            similarity_percent(record.together_count, record.compared_count, selected_count)?;
        let probability_ratio = probability_ratio(
            record.together_count,
            record.compared_count,
            selected_count,
            total_count,
        )?;

        Ok(Self {
            record,
            similarity_percent,
            probability_ratio,
        })
    }

    /// The underlying record
    pub fn record(&self) -> &CoOccurrenceRecord {
        &self.record
    }

    /// Shortcut for `record().compared_term_id()`
    pub fn compared_term_id(&self) -> &str {
        self.record.compared_term_id()
    }

    /// Jaccard similarity as a percentage
    pub fn similarity_percent(&self) -> f64 {
        self.similarity_percent
    }

    /// Lift over chance
    pub fn probability_ratio(&self) -> f64 {
        self.probability_ratio
    }

    /// Rank order: higher similarity first, then compared term id ascending
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .similarity_percent
            .total_cmp(&self.similarity_percent)
            .then_with(|| self.compared_term_id().cmp(other.compared_term_id()))
    }
}
