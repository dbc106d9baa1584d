//! Co-occurring Term Storage Layer
//!
//! Holds loaded association statistics in memory and serves read-only lookups.
//!
//! # Architecture
//!
//! - [`CoTermStore`]: two partitions (`MANUAL`, `ALL`), each mapping a target
//!   term id to its [`TermAssociationSet`]. Immutable once built.
//! - [`SharedCoTermStore`]: the handle request threads read through. A reload
//!   publishes a complete new store with one pointer swap.
//!
//! # Examples
//!
//! ```
//! use coterm_domain::{CoTermRepository, Partition};
//! use coterm_store::CoTermStore;
//!
//! let store = CoTermStore::empty();
//! assert!(store.find("GO:0000001", Partition::Manual).is_none());
//! ```

#![warn(missing_docs)]

mod shared;

pub use shared::SharedCoTermStore;

use coterm_domain::{CoTermRepository, Partition, TermAssociationSet};
use std::collections::HashMap;

/// Target term id to its association set
pub type PartitionMap = HashMap<String, TermAssociationSet>;

/// In-memory, read-only co-occurring term statistics
///
/// There are no mutation methods; a reload builds a new store.
#[derive(Debug, Clone, Default)]
pub struct CoTermStore {
    manual: PartitionMap,
    all: PartitionMap,
}

impl CoTermStore {
    /// Create a store from the two loaded partitions
    pub fn new(manual: PartitionMap, all: PartitionMap) -> Self {
        Self { manual, all }
    }

    /// A store with both partitions empty
    ///
    /// Served when loading fails so queries answer "no data".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up the association set for a target term
    pub fn get(&self, term_id: &str, partition: Partition) -> Option<&TermAssociationSet> {
        self.partition(partition).get(term_id)
    }

    /// Number of target terms held in a partition
    pub fn partition_len(&self, partition: Partition) -> usize {
        self.partition(partition).len()
    }

    /// Whether both partitions are empty
    pub fn is_empty(&self) -> bool {
        self.manual.is_empty() && self.all.is_empty()
    }

    /// Target term ids held in a partition, in no particular order
    pub fn term_ids(&self, partition: Partition) -> impl Iterator<Item = &str> + '_ {
        self.partition(partition).keys().map(String::as_str)
    }

    fn partition(&self, partition: Partition) -> &PartitionMap {
        match partition {
            Partition::Manual => &self.manual,
            Partition::All => &self.all,
        }
    }
}

impl CoTermRepository for CoTermStore {
    fn find(&self, term_id: &str, partition: Partition) -> Option<&TermAssociationSet> {
        self.get(term_id, partition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coterm_domain::CoOccurrenceRecord;

    fn set_for(target: &str) -> TermAssociationSet {
        let mut set = TermAssociationSet::new(target, 24, 8).unwrap();
        set.add(CoOccurrenceRecord::new(target, "GO:0000099", 8, 4).unwrap())
            .unwrap();
        set
    }

    fn map_of(targets: &[&str]) -> PartitionMap {
        targets
            .iter()
            .map(|t| (t.to_string(), set_for(t)))
            .collect()
    }

    #[test]
    fn test_empty_store() {
        let store = CoTermStore::empty();
        assert!(store.is_empty());
        assert!(store.get("GO:0000001", Partition::Manual).is_none());
        assert!(store.get("GO:0000001", Partition::All).is_none());
        assert_eq!(store.partition_len(Partition::All), 0);
    }

    #[test]
    fn test_partitions_are_independent() {
        let store = CoTermStore::new(
            map_of(&["GO:0000001"]),
            map_of(&["GO:0000001", "GO:0000002"]),
        );

        assert!(store.get("GO:0000001", Partition::Manual).is_some());
        assert!(store.get("GO:0000002", Partition::Manual).is_none());
        assert!(store.get("GO:0000002", Partition::All).is_some());
        assert_eq!(store.partition_len(Partition::Manual), 1);
        assert_eq!(store.partition_len(Partition::All), 2);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_repository_find_matches_get() {
        let store = CoTermStore::new(map_of(&["GO:0000001"]), PartitionMap::new());
        let found = store.find("GO:0000001", Partition::Manual).unwrap();
        assert_eq!(found.target_term_id(), "GO:0000001");
        assert!(store.find("GO:0000001", Partition::All).is_none());
    }

    #[test]
    fn test_term_ids() {
        let store = CoTermStore::new(PartitionMap::new(), map_of(&["GO:0000001", "GO:0000002"]));
        let mut ids: Vec<_> = store.term_ids(Partition::All).collect();
        ids.sort();
        assert_eq!(ids, vec!["GO:0000001", "GO:0000002"]);
    }
}
