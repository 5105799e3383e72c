//! charta-audit
//!
//! Cross-visit invariant validator. Audits a `ChartDocument` (generated or
//! parsed from a real note), reports each broken rule with its location,
//! and scores the chart.

pub mod error;
pub mod events;
pub mod report;
mod rules;
pub mod scoring;
pub mod validator;
pub mod violation;

pub use crate::error::AuditError;
pub use crate::report::ValidationReport;
pub use crate::scoring::{AuditGrade, ScoringPolicy};
pub use crate::validator::Validator;
pub use crate::violation::{RuleCategory, RuleId, Section, Severity, Violation};
