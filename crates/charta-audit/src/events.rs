use serde::Serialize;
use tracing::info;

use crate::report::ValidationReport;
use crate::scoring::AuditGrade;
use crate::violation::Severity;

/// A structured audit event for one validated chart.
///
/// Logged via `tracing`, so whichever subscriber the host installs (plain
/// text for the CLI, JSON for log shipping) receives the rule counts
/// alongside the score.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub visits: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub score: u32,
    pub grade: AuditGrade,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(action: impl Into<String>, report: &ValidationReport) -> Self {
        Self {
            action: action.into(),
            visits: report.visit_count,
            critical: report.count(Severity::Critical),
            high: report.count(Severity::High),
            medium: report.count(Severity::Medium),
            low: report.count(Severity::Low),
            score: report.score.value,
            grade: report.score.grade,
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = %self.action,
            audit.visits = self.visits,
            audit.critical = self.critical,
            audit.high = self.high,
            audit.medium = self.medium,
            audit.low = self.low,
            audit.score = self.score,
            audit.grade = %self.grade,
            audit.details = %details,
            "audit event"
        );
    }
}
