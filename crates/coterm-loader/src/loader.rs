//! Builds a [`CoTermStore`] from the manual and all sources

use crate::report::{LoadReport, SourceReport};
use crate::schema::{parse_row, ParsedRow};
use crate::source::open_source;
use crate::{LoaderConfig, LoaderError};
use coterm_domain::{Partition, TermAssociationSet};
use coterm_store::{CoTermStore, PartitionMap};
use std::collections::hash_map::Entry;
use std::io::BufRead;
use tracing::{debug, info, warn};

/// A freshly built store and what it took to build it
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// The loaded statistics
    pub store: CoTermStore,
    /// Per-source line and row counts
    pub report: LoadReport,
}

/// Reads both co-occurring term sources into a new store
///
/// The load is all or nothing: if either source cannot be read, or has more
/// malformed rows than the skip limit allows, no store is returned.
///
/// # Examples
///
/// ```no_run
/// use coterm_loader::{CoTermLoader, LoaderConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let loader = CoTermLoader::new(LoaderConfig::with_sources(
///     "data/coterms.manual.tsv.gz",
///     "data/coterms.all.tsv.gz",
/// ));
/// let loaded = loader.load()?;
/// println!("{}", loaded.report.summary());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CoTermLoader {
    config: LoaderConfig,
}

impl CoTermLoader {
    /// Create a loader for the configured sources
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// The loader's configuration
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Read both sources from their configured locations
    pub fn load(&self) -> Result<LoadResult, LoaderError> {
        self.config.validate()?;
        info!("Loading co-occurring terms from sources");

        let manual = self.open(Partition::Manual)?;
        let all = self.open(Partition::All)?;
        self.load_from_readers(manual, all)
    }

    /// Read both sources from already opened readers
    pub fn load_from_readers<M: BufRead, A: BufRead>(
        &self,
        manual: M,
        all: A,
    ) -> Result<LoadResult, LoaderError> {
        let mut report = LoadReport::default();

        let (manual, manual_report) = self.load_partition(manual, Partition::Manual)?;
        *report.source_mut(Partition::Manual) = manual_report;

        let (all, all_report) = self.load_partition(all, Partition::All)?;
        *report.source_mut(Partition::All) = all_report;

        Ok(LoadResult {
            store: CoTermStore::new(manual, all),
            report,
        })
    }

    /// Read one source into a partition map
    pub fn load_partition<R: BufRead>(
        &self,
        reader: R,
        partition: Partition,
    ) -> Result<(PartitionMap, SourceReport), LoaderError> {
        let mut sets = PartitionMap::new();
        let mut report = SourceReport::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoaderError::Io {
                source_name: partition.to_string(),
                source,
            })?;
            report.lines_read += 1;

            if index < self.config.header_lines || line.trim_end_matches('\r').is_empty() {
                continue;
            }

            match parse_row(&line).and_then(|row| ingest(&mut sets, row)) {
                Ok(()) => report.rows_loaded += 1,
                Err(reason) => {
                    report.rows_skipped += 1;
                    warn!(
                        "Skipping malformed row at {} source line {}: {}",
                        partition,
                        index + 1,
                        reason
                    );
                    if report.rows_skipped > self.config.skip_limit {
                        return Err(LoaderError::SkipLimitExceeded {
                            source_name: partition.to_string(),
                            skipped: report.rows_skipped,
                            limit: self.config.skip_limit,
                        });
                    }
                }
            }
        }

        report.terms_loaded = sets.len();
        info!(
            "Loaded {} lines from {} source ({} rows skipped)",
            report.lines_read, partition, report.rows_skipped
        );
        info!("Number of terms loaded for {} is {}", partition, report.terms_loaded);

        Ok((sets, report))
    }

    fn open(&self, partition: Partition) -> Result<Box<dyn BufRead + Send>, LoaderError> {
        let path = self.config.source_for(partition);
        debug!("Opening {} source at {}", partition, path.display());
        open_source(path).map_err(|source| LoaderError::Io {
            source_name: partition.to_string(),
            source,
        })
    }
}

/// Add a parsed row to the set for its target, creating the set on first sight
fn ingest(sets: &mut PartitionMap, row: ParsedRow) -> Result<(), String> {
    let ParsedRow {
        record,
        selected_count,
        total_count,
    } = row;

    match sets.entry(record.target_term_id().to_string()) {
        Entry::Occupied(mut entry) => {
            let set = entry.get_mut();
            if set.selected_count() != selected_count || set.total_count() != total_count {
                return Err(format!(
                    "counts {}/{} disagree with {}/{} seen earlier for {}",
                    selected_count,
                    total_count,
                    set.selected_count(),
                    set.total_count(),
                    set.target_term_id()
                ));
            }
            set.add(record).map_err(|e| e.to_string())
        }
        Entry::Vacant(entry) => {
            let mut set = TermAssociationSet::new(entry.key().as_str(), total_count, selected_count)
                .map_err(|e| e.to_string())?;
            set.add(record).map_err(|e| e.to_string())?;
            entry.insert(set);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "TARGET\tCOMPARED\tTOGETHER\tCOMPARED_COUNT\tSELECTED\tTOTAL\n";

    fn loader(skip_limit: usize) -> CoTermLoader {
        CoTermLoader::new(LoaderConfig {
            skip_limit,
            ..LoaderConfig::with_sources("unused", "unused")
        })
    }

    fn source(rows: &str) -> Cursor<String> {
        Cursor::new(format!("{}{}", HEADER, rows))
    }

    #[test]
    fn test_groups_rows_by_target() {
        let rows = "GO:0000001\tGO:A\t4\t8\t8\t24\n\
                    GO:0000002\tGO:A\t1\t8\t3\t24\n\
                    GO:0000001\tGO:B\t2\t2\t8\t24\n";
        let (sets, report) = loader(0).load_partition(source(rows), Partition::All).unwrap();

        assert_eq!(sets.len(), 2);
        assert_eq!(sets["GO:0000001"].len(), 2);
        assert_eq!(sets["GO:0000002"].len(), 1);
        assert_eq!(report.lines_read, 4);
        assert_eq!(report.rows_loaded, 3);
        assert_eq!(report.rows_skipped, 0);
        assert_eq!(report.terms_loaded, 2);
    }

    #[test]
    fn test_header_lines_are_skipped() {
        let config = LoaderConfig {
            header_lines: 2,
            ..LoaderConfig::with_sources("unused", "unused")
        };
        let input = Cursor::new("header one\nheader two\nGO:0000001\tGO:A\t4\t8\t8\t24\n");
        let (sets, _) = CoTermLoader::new(config)
            .load_partition(input, Partition::Manual)
            .unwrap();
        assert_eq!(sets.len(), 1);
    }

    #[test]
    fn test_no_header_lines() {
        let config = LoaderConfig {
            header_lines: 0,
            ..LoaderConfig::with_sources("unused", "unused")
        };
        let input = Cursor::new("GO:0000001\tGO:A\t4\t8\t8\t24\n");
        let (sets, report) = CoTermLoader::new(config)
            .load_partition(input, Partition::Manual)
            .unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(report.rows_loaded, 1);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let rows = "\nGO:0000001\tGO:A\t4\t8\t8\t24\n\r\n\n";
        let (_, report) = loader(0).load_partition(source(rows), Partition::All).unwrap();
        assert_eq!(report.rows_loaded, 1);
        assert_eq!(report.rows_skipped, 0);
    }

    #[test]
    fn test_whitespace_only_line_is_malformed() {
        let rows = "GO:0000001\tGO:A\t4\t8\t8\t24\n\t\t\n   \n";
        let (sets, report) = loader(2).load_partition(source(rows), Partition::All).unwrap();
        assert_eq!(sets["GO:0000001"].len(), 1);
        assert_eq!(report.rows_loaded, 1);
        assert_eq!(report.rows_skipped, 2);

        let strict = loader(0).load_partition(source(rows), Partition::All);
        assert!(matches!(strict, Err(LoaderError::SkipLimitExceeded { .. })));
    }

    #[test]
    fn test_extreme_counts_load_without_overflow() {
        let rows = "GO:0000001\tGO:A\t0\t18446744073709551615\t1\t18446744073709551615\n";
        let (sets, report) = loader(0).load_partition(source(rows), Partition::All).unwrap();
        assert_eq!(report.rows_loaded, 1);

        let stat = sets["GO:0000001"].ranked_by_similarity().next().unwrap();
        assert_eq!(stat.similarity_percent(), 0.0);
        assert!(stat.probability_ratio().is_finite());
    }

    #[test]
    fn test_malformed_rows_within_skip_limit() {
        let rows = "GO:0000001\tGO:A\t4\t8\t8\t24\n\
                    GO:0000001\tGO:B\tNaN\t2\t8\t24\n\
                    GO:0000001\tGO:C\n\
                    GO:0000001\tGO:D\t1\t2\t8\t24\n";
        let (sets, report) = loader(2).load_partition(source(rows), Partition::All).unwrap();

        assert_eq!(sets["GO:0000001"].len(), 2);
        assert_eq!(report.rows_skipped, 2);
        assert_eq!(report.rows_loaded, 2);
    }

    #[test]
    fn test_malformed_rows_exceed_skip_limit() {
        let rows = "GO:0000001\tGO:A\t4\t8\t8\t24\n\
                    GO:0000001\tGO:B\tNaN\t2\t8\t24\n";
        let result = loader(0).load_partition(source(rows), Partition::Manual);

        match result {
            Err(LoaderError::SkipLimitExceeded {
                source_name,
                skipped,
                limit,
            }) => {
                assert_eq!(source_name, "MANUAL");
                assert_eq!(skipped, 1);
                assert_eq!(limit, 0);
            }
            other => panic!("expected skip limit error, got {:?}", other),
        }
    }

    #[test]
    fn test_disagreeing_group_counts_are_malformed() {
        let rows = "GO:0000001\tGO:A\t4\t8\t8\t24\n\
                    GO:0000001\tGO:B\t2\t2\t9\t24\n";
        let (sets, report) = loader(1).load_partition(source(rows), Partition::All).unwrap();
        assert_eq!(sets["GO:0000001"].len(), 1);
        assert_eq!(report.rows_skipped, 1);
    }

    #[test]
    fn test_load_from_readers_fills_both_partitions() {
        let manual = source("GO:0000001\tGO:A\t4\t8\t8\t24\n");
        let all = source("GO:0000001\tGO:A\t6\t10\t12\t40\nGO:0000003\tGO:B\t1\t1\t1\t40\n");

        let loaded = loader(0).load_from_readers(manual, all).unwrap();

        assert_eq!(loaded.store.partition_len(Partition::Manual), 1);
        assert_eq!(loaded.store.partition_len(Partition::All), 2);
        assert_eq!(loaded.report.manual.rows_loaded, 1);
        assert_eq!(loaded.report.all.rows_loaded, 2);
    }

    #[test]
    fn test_failure_in_second_source_yields_no_store() {
        let manual = source("GO:0000001\tGO:A\t4\t8\t8\t24\n");
        let all = source("GO:0000001\tbroken\n");

        assert!(loader(0).load_from_readers(manual, all).is_err());
    }
}
