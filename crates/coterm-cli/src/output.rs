//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use coterm_domain::statistics::round_to_hundredths;
use coterm_domain::Partition;
use coterm_loader::LoadReport;
use coterm_service::CoTermResult;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the co-occurring terms of `target`.
    pub fn format_co_terms(&self, target: &str, terms: &[CoTermResult]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_co_terms_json(terms),
            OutputFormat::Table => Ok(self.format_co_terms_table(target, terms)),
            OutputFormat::Quiet => Ok(self.format_co_terms_quiet(terms)),
        }
    }

    fn format_co_terms_json(&self, terms: &[CoTermResult]) -> Result<String> {
        let json_terms: Vec<serde_json::Value> = terms
            .iter()
            .map(|t| {
                serde_json::json!({
                    "target_term_id": t.target_term_id,
                    "compared_term_id": t.compared_term_id,
                    "similarity_percent": round_to_hundredths(t.similarity_percent),
                    "probability_ratio": round_to_hundredths(t.probability_ratio),
                    "together_count": t.together_count,
                    "compared_count": t.compared_count
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_terms)?)
    }

    fn format_co_terms_table(&self, target: &str, terms: &[CoTermResult]) -> String {
        if terms.is_empty() {
            return self.warning(&format!("No co-occurring terms found for {}.", target));
        }

        let mut builder = Builder::default();
        builder.push_record(["Rank", "Term", "Similarity %", "Ratio", "Together", "Compared"]);

        for (rank, term) in terms.iter().enumerate() {
            builder.push_record([
                (rank + 1).to_string(),
                term.compared_term_id.clone(),
                format!("{:.2}", term.similarity_percent),
                format!("{:.2}", term.probability_ratio),
                term.together_count.to_string(),
                term.compared_count.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", self.colorize(target, "cyan"), table)
    }

    fn format_co_terms_quiet(&self, terms: &[CoTermResult]) -> String {
        let ids: Vec<&str> = terms.iter().map(|t| t.compared_term_id.as_str()).collect();
        ids.join("\n")
    }

    /// Format a load report; `None` means the load failed.
    pub fn format_report(&self, report: Option<&LoadReport>) -> Result<String> {
        match (self.format, report) {
            (OutputFormat::Json, report) => Ok(serde_json::to_string_pretty(&report)?),
            (_, None) => Ok(self.error("No data loaded; queries return empty results.")),
            (OutputFormat::Quiet, Some(report)) => Ok(report.total_rows_loaded().to_string()),
            (OutputFormat::Table, Some(report)) => Ok(self.format_report_table(report)),
        }
    }

    fn format_report_table(&self, report: &LoadReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Source", "Terms", "Rows loaded", "Rows skipped", "Lines read"]);

        for partition in Partition::BOTH {
            let source = report.source(partition);
            builder.push_record([
                partition.to_string(),
                source.terms_loaded.to_string(),
                source.rows_loaded.to_string(),
                source.rows_skipped.to_string(),
                source.lines_read.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
