use charta_core::models::document::ChartDocument;
use charta_core::models::visit::VisitType;
use charta_core::policy::ChartPolicy;
use charta_ladders::{GradingModel, LadderError, global};

use crate::events::AuditEvent;
use crate::report::ValidationReport;
use crate::rules::{self, RuleContext};
use crate::scoring::{ScoringPolicy, score};
use crate::violation::{RuleId, Section, Violation};

/// Cross-visit invariant validator. Works only from what a document shows,
/// so generated and parsed charts are held to the same rules.
pub struct Validator<'m> {
    model: &'m GradingModel,
    policy: ChartPolicy,
    scoring: ScoringPolicy,
}

impl Validator<'static> {
    pub fn installed(policy: ChartPolicy, scoring: ScoringPolicy) -> Result<Self, LadderError> {
        Ok(Self::new(global::model()?, policy, scoring))
    }
}

impl<'m> Validator<'m> {
    pub fn new(model: &'m GradingModel, policy: ChartPolicy, scoring: ScoringPolicy) -> Self {
        Self {
            model,
            policy,
            scoring,
        }
    }

    /// Audit a chart. Never fails: every problem becomes a violation.
    pub fn validate(&self, document: &ChartDocument) -> ValidationReport {
        let ctx = RuleContext {
            model: self.model,
            policy: &self.policy,
        };
        let visits = &document.visits;
        let baseline = visits
            .iter()
            .position(|v| v.visit_type == VisitType::InitialEvaluation)
            .unwrap_or(0);

        let mut violations = Vec::new();
        let mut evaluations = 0usize;
        for (position, record) in visits.iter().enumerate() {
            if record.visit_type == VisitType::InitialEvaluation {
                evaluations += 1;
                if evaluations > 1 {
                    violations.push(Violation::new(
                        RuleId::DuplicateInitialEvaluation,
                        Some(record.index),
                        Section::Header,
                        "visit_type",
                        "chart has more than one initial evaluation",
                    ));
                }
            }

            rules::visit::check(&ctx, &document.medical_history, record, &mut violations);

            if position > 0 {
                let previous = &visits[position - 1];
                rules::progression::check_pair(&ctx, previous, record, &mut violations);
                rules::narrative::check_pair(&ctx, previous, record, &mut violations);
            }
            if position != baseline && record.visit_type == VisitType::Treatment {
                rules::progression::check_baseline(&visits[baseline], record, &mut violations);
            }
        }

        let score = score(&violations, &self.scoring);
        let report = ValidationReport {
            visit_count: visits.len(),
            violations,
            score,
        };

        let mut event = AuditEvent::new("chart_validated", &report);
        if let Ok(details) = serde_json::to_value(&report.score.breakdown) {
            event = event.with_details(details);
        }
        event.emit();

        report
    }
}
