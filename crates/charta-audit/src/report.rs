use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::AuditError;
use crate::scoring::Score;
use crate::violation::{RuleId, Severity, Violation};

/// Outcome of auditing one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    pub visit_count: usize,
    /// In visit order, then in the order rules run.
    pub violations: Vec<Violation>,
    pub score: Score,
}

impl ValidationReport {
    pub fn count(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }

    pub fn has_rule(&self, rule: RuleId) -> bool {
        self.violations.iter().any(|v| v.rule == rule)
    }

    /// CRITICAL or HIGH findings: the ones a generated chart must never have.
    pub fn blocking(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity <= Severity::High)
    }

    pub fn to_json(&self) -> Result<String, AuditError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
