//! Conformance report generation.
//!
//! Infrastructure for the conformance runner: collects per-check results,
//! aggregates category statistics, and saves a machine-readable JSON report.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Check result status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    Passed,
    Failed,
    Skipped,
    Pending,
}

impl CheckStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            CheckStatus::Passed => "✓",
            CheckStatus::Failed => "✗",
            CheckStatus::Skipped => "○",
            CheckStatus::Pending => "◐",
        }
    }
}

/// A single conformance check result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Check ID (e.g., "V2D-001").
    pub id: String,
    /// Check name.
    pub name: String,
    /// Check category.
    pub category: String,
    /// Check status.
    pub status: CheckStatus,
    /// Execution duration.
    pub duration: Duration,
    /// Error message if failed, or skip reason.
    pub error_message: Option<String>,
}

impl CheckResult {
    pub fn new(id: &str, name: &str, category: &str) -> Self {
        CheckResult {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            status: CheckStatus::Pending,
            duration: Duration::ZERO,
            error_message: None,
        }
    }

    pub fn pass(mut self, duration: Duration) -> Self {
        self.status = CheckStatus::Passed;
        self.duration = duration;
        self
    }

    pub fn fail(mut self, duration: Duration, error: &str) -> Self {
        self.status = CheckStatus::Failed;
        self.duration = duration;
        self.error_message = Some(error.to_string());
        self
    }

    pub fn skip(mut self, reason: &str) -> Self {
        self.status = CheckStatus::Skipped;
        self.error_message = Some(reason.to_string());
        self
    }
}

/// Category summary statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryStats {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub pending: u32,
    pub total_duration: Duration,
}

impl CategoryStats {
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.passed as f64 / self.total as f64) * 100.0
    }

    pub fn add_result(&mut self, result: &CheckResult) {
        self.total += 1;
        self.total_duration += result.duration;
        match result.status {
            CheckStatus::Passed => self.passed += 1,
            CheckStatus::Failed => self.failed += 1,
            CheckStatus::Skipped => self.skipped += 1,
            CheckStatus::Pending => self.pending += 1,
        }
    }
}

/// Full conformance report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Timestamp when the report was generated (Unix seconds).
    pub timestamp: u64,
    /// All check results.
    pub results: Vec<CheckResult>,
}

impl ConformanceReport {
    pub fn new(title: &str) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        ConformanceReport {
            title: title.to_string(),
            timestamp,
            results: Vec::new(),
        }
    }

    /// Add a check result.
    pub fn add_result(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Get overall stats.
    pub fn overall_stats(&self) -> CategoryStats {
        let mut stats = CategoryStats::default();
        for result in &self.results {
            stats.add_result(result);
        }
        stats
    }

    /// Get stats by category.
    pub fn stats_by_category(&self) -> HashMap<String, CategoryStats> {
        let mut map: HashMap<String, CategoryStats> = HashMap::new();
        for result in &self.results {
            map.entry(result.category.clone())
                .or_default()
                .add_result(result);
        }
        map
    }

    /// Check if all checks passed.
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.status == CheckStatus::Passed)
    }

    /// Console summary, one line per category plus totals.
    pub fn summary_text(&self) -> String {
        let stats = self.overall_stats();
        let mut categories: Vec<_> = self.stats_by_category().into_iter().collect();
        categories.sort_by(|a, b| a.0.cmp(&b.0));

        let mut out = String::new();
        for (name, cat) in categories {
            out.push_str(&format!(
                "{:<14} {:>3}/{:<3} passed ({:.1}%)\n",
                name,
                cat.passed,
                cat.total,
                cat.pass_rate()
            ));
        }
        out.push_str(&format!(
            "total: {}  passed: {}  failed: {}  skipped: {}  ({:.2}s)\n",
            stats.total,
            stats.passed,
            stats.failed,
            stats.skipped,
            stats.total_duration.as_secs_f64()
        ));
        out
    }

    /// Save report as JSON.
    pub fn save_json(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        fs::write(path, json)
    }
}

/// Report builder with fluent API.
pub struct ReportBuilder {
    report: ConformanceReport,
}

impl ReportBuilder {
    pub fn new(title: &str) -> Self {
        ReportBuilder {
            report: ConformanceReport::new(title),
        }
    }

    pub fn add_check(mut self, result: CheckResult) -> Self {
        self.report.add_result(result);
        self
    }

    pub fn build(self) -> ConformanceReport {
        self.report
    }
}
