use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::AuditError;
use crate::violation::{RuleCategory, Severity, Violation};

/// Deductions per severity and the grade bands. Any CRITICAL violation
/// fails the chart outright.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ScoringPolicy {
    pub high_weight: u32,
    pub medium_weight: u32,
    pub low_weight: u32,
    pub pass_threshold: u32,
    pub warning_threshold: u32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            high_weight: 15,
            medium_weight: 5,
            low_weight: 0,
            pass_threshold: 90,
            warning_threshold: 70,
        }
    }
}

impl ScoringPolicy {
    pub fn validate(&self) -> Result<(), AuditError> {
        if self.pass_threshold > 100 {
            return Err(AuditError::InvalidPolicy(format!(
                "pass threshold {} above 100",
                self.pass_threshold
            )));
        }
        if self.warning_threshold > self.pass_threshold {
            return Err(AuditError::InvalidPolicy(format!(
                "warning threshold {} above pass threshold {}",
                self.warning_threshold, self.pass_threshold
            )));
        }
        Ok(())
    }

    fn weight(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Critical => 100,
            Severity::High => self.high_weight,
            Severity::Medium => self.medium_weight,
            Severity::Low => self.low_weight,
        }
    }

    fn grade(&self, score: u32) -> AuditGrade {
        if score >= self.pass_threshold {
            AuditGrade::Pass
        } else if score >= self.warning_threshold {
            AuditGrade::Warning
        } else {
            AuditGrade::Fail
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum AuditGrade {
    Pass,
    Warning,
    Fail,
}

impl fmt::Display for AuditGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AuditGrade::Pass => "PASS",
            AuditGrade::Warning => "WARNING",
            AuditGrade::Fail => "FAIL",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScore {
    pub violations: u32,
    pub deducted: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Score {
    /// 0..=100.
    pub value: u32,
    pub grade: AuditGrade,
    pub breakdown: BTreeMap<RuleCategory, CategoryScore>,
}

pub fn score(violations: &[Violation], policy: &ScoringPolicy) -> Score {
    let mut breakdown: BTreeMap<RuleCategory, CategoryScore> = BTreeMap::new();
    let mut deducted: u32 = 0;
    for violation in violations {
        let weight = policy.weight(violation.severity);
        let entry = breakdown.entry(violation.rule.category()).or_default();
        entry.violations += 1;
        entry.deducted = entry.deducted.saturating_add(weight);
        deducted = deducted.saturating_add(weight);
    }

    let critical = violations
        .iter()
        .any(|violation| violation.severity == Severity::Critical);
    if critical {
        return Score {
            value: 0,
            grade: AuditGrade::Fail,
            breakdown,
        };
    }

    let value = 100u32.saturating_sub(deducted);
    Score {
        value,
        grade: policy.grade(value),
        breakdown,
    }
}
