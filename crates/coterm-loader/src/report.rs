//! Load statistics, reported after every successful load

use coterm_domain::Partition;
use serde::Serialize;

/// What happened while reading one source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    /// Lines read, headers and blank lines included
    pub lines_read: usize,

    /// Rows added to an association set
    pub rows_loaded: usize,

    /// Malformed rows skipped
    pub rows_skipped: usize,

    /// Distinct target terms
    pub terms_loaded: usize,
}

/// Reports for both sources of one load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Manual source
    pub manual: SourceReport,

    /// All source
    pub all: SourceReport,
}

impl LoadReport {
    /// The report for one partition
    pub fn source(&self, partition: Partition) -> &SourceReport {
        match partition {
            Partition::Manual => &self.manual,
            Partition::All => &self.all,
        }
    }

    pub(crate) fn source_mut(&mut self, partition: Partition) -> &mut SourceReport {
        match partition {
            Partition::Manual => &mut self.manual,
            Partition::All => &mut self.all,
        }
    }

    /// Rows loaded across both sources
    pub fn total_rows_loaded(&self) -> usize {
        self.manual.rows_loaded + self.all.rows_loaded
    }

    /// Rows skipped across both sources
    pub fn total_rows_skipped(&self) -> usize {
        self.manual.rows_skipped + self.all.rows_skipped
    }

    /// Human-readable summary
    pub fn summary(&self) -> String {
        let mut out = String::from("Co-occurring term load:\n");
        for partition in Partition::BOTH {
            let report = self.source(partition);
            out.push_str(&format!(
                "  {:<6} {} terms, {} rows loaded, {} rows skipped ({} lines read)\n",
                partition.as_str(),
                report.terms_loaded,
                report.rows_loaded,
                report.rows_skipped,
                report.lines_read
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let report = LoadReport {
            manual: SourceReport {
                lines_read: 4,
                rows_loaded: 3,
                rows_skipped: 0,
                terms_loaded: 1,
            },
            all: SourceReport {
                lines_read: 10,
                rows_loaded: 7,
                rows_skipped: 2,
                terms_loaded: 3,
            },
        };

        assert_eq!(report.total_rows_loaded(), 10);
        assert_eq!(report.total_rows_skipped(), 2);
        assert_eq!(report.source(Partition::All).terms_loaded, 3);
    }

    #[test]
    fn test_summary_mentions_both_partitions() {
        let summary = LoadReport::default().summary();
        assert!(summary.contains("MANUAL"));
        assert!(summary.contains("ALL"));
    }
}
