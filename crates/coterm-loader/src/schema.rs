//! Source row schema, version 1
//!
//! Each non-header line is one co-occurrence, six tab-separated columns:
//!
//! | # | column | type |
//! |---|---|---|
//! | 0 | target term id | non-empty string |
//! | 1 | compared term id | non-empty string |
//! | 2 | together count | integer >= 0 |
//! | 3 | compared count | integer >= 0 |
//! | 4 | selected count | integer > 0 |
//! | 5 | total count | integer > 0 |
//!
//! Selected and total counts repeat on every row for the same target; the
//! loader checks they agree.

use coterm_domain::CoOccurrenceRecord;

/// Schema version understood by [`parse_row`]
pub const SCHEMA_VERSION: u32 = 1;

/// Number of columns in a version 1 row
pub const COLUMN_COUNT: usize = 6;

const COLUMN_TARGET: usize = 0;
const COLUMN_COMPARED_TERM: usize = 1;
const COLUMN_TOGETHER: usize = 2;
const COLUMN_COMPARED: usize = 3;
const COLUMN_SELECTED: usize = 4;
const COLUMN_TOTAL: usize = 5;

/// A parsed row: the record plus its target's group counts
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    /// The co-occurrence itself
    pub record: CoOccurrenceRecord,
    /// Gene products annotated with the target term
    pub selected_count: u64,
    /// Gene products in the data set
    pub total_count: u64,
}

/// Parse one source line
///
/// Returns a description of the problem for malformed rows.
pub fn parse_row(line: &str) -> Result<ParsedRow, String> {
    let columns: Vec<&str> = line.trim_end().split('\t').collect();
    if columns.len() != COLUMN_COUNT {
        return Err(format!(
            "expected {} columns, found {}",
            COLUMN_COUNT,
            columns.len()
        ));
    }

    let together = parse_count(&columns, COLUMN_TOGETHER, "together")?;
    let compared = parse_count(&columns, COLUMN_COMPARED, "compared")?;
    let selected_count = parse_count(&columns, COLUMN_SELECTED, "selected")?;
    let total_count = parse_count(&columns, COLUMN_TOTAL, "total")?;

    if selected_count == 0 {
        return Err("selected count must be greater than zero".to_string());
    }
    if total_count == 0 {
        return Err("total count must be greater than zero".to_string());
    }
    if selected_count > total_count || compared > total_count {
        return Err(format!(
            "term counts ({} selected, {} compared) exceed total count {}",
            selected_count, compared, total_count
        ));
    }
    if together > selected_count {
        return Err(format!(
            "together count {} exceeds selected count {}",
            together, selected_count
        ));
    }

    let record = CoOccurrenceRecord::new(
        columns[COLUMN_TARGET].trim(),
        columns[COLUMN_COMPARED_TERM].trim(),
        compared,
        together,
    )
    .map_err(|e| e.to_string())?;

    Ok(ParsedRow {
        record,
        selected_count,
        total_count,
    })
}

fn parse_count(columns: &[&str], index: usize, name: &str) -> Result<u64, String> {
    let raw = columns[index].trim();
    raw.parse::<u64>()
        .map_err(|_| format!("{} count '{}' is not a non-negative integer", name, raw))
}
