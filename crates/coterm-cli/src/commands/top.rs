//! Top command implementation.

use crate::cli::TopArgs;
use crate::error::Result;
use crate::output::Formatter;
use coterm_service::{CoTermQuery, CoTermService};
use std::io::Write;

/// Execute the top command.
pub fn execute_top(
    args: TopArgs,
    service: &CoTermService,
    formatter: &Formatter,
    out: &mut impl Write,
) -> Result<()> {
    let query = CoTermQuery {
        term_id: args.term,
        partition: args.source.into(),
        limit: args.limit,
        similarity_threshold: args.similarity_threshold,
    };

    let terms = service.find_co_terms(&query)?;
    writeln!(out, "{}", formatter.format_co_terms(&query.term_id, &terms)?)?;

    Ok(())
}
