//! Counters kept by the reload worker

use coterm_loader::LoadReport;

/// Outcome counts for scheduled reloads
#[derive(Debug, Clone, Default)]
pub struct ReloadMetrics {
    /// Reloads that replaced the store
    pub successful_reloads: usize,

    /// Reloads that failed and left the store unchanged
    pub failed_reloads: usize,

    /// Report from the most recent successful reload
    pub last_report: Option<LoadReport>,
}

impl ReloadMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reload that replaced the store
    pub fn record_success(&mut self, report: LoadReport) {
        self.successful_reloads += 1;
        self.last_report = Some(report);
    }

    /// Record a failed reload
    pub fn record_failure(&mut self) {
        self.failed_reloads += 1;
    }

    /// Total reload attempts
    pub fn attempts(&self) -> usize {
        self.successful_reloads + self.failed_reloads
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Reload Metrics Summary".to_string(),
            "======================".to_string(),
            format!("Attempts: {}", self.attempts()),
            format!("Successful: {}", self.successful_reloads),
            format!("Failed: {}", self.failed_reloads),
        ];
        if let Some(report) = &self.last_report {
            lines.push(format!("Last load: {}", report.summary()));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut metrics = ReloadMetrics::new();
        metrics.record_success(LoadReport::default());
        metrics.record_failure();
        metrics.record_failure();

        assert_eq!(metrics.successful_reloads, 1);
        assert_eq!(metrics.failed_reloads, 2);
        assert_eq!(metrics.attempts(), 3);
        assert!(metrics.last_report.is_some());
    }

    #[test]
    fn test_summary() {
        let mut metrics = ReloadMetrics::new();
        metrics.record_failure();

        let summary = metrics.summary();
        assert!(summary.contains("Attempts: 1"));
        assert!(summary.contains("Failed: 1"));
        assert!(!summary.contains("Last load"));
    }
}
