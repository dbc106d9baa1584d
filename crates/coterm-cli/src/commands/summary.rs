//! Summary command implementation.

use crate::error::Result;
use crate::output::Formatter;
use coterm_service::CoTermService;
use std::io::Write;

/// Execute the summary command.
pub fn execute_summary(
    service: &CoTermService,
    formatter: &Formatter,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "{}", formatter.format_report(service.load_report())?)?;
    Ok(())
}
