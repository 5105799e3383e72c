use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How much a violation costs the chart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        };
        f.write_str(s)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RuleCategory {
    Sequence,
    Monotonicity,
    Consistency,
    Completeness,
    Narrative,
    Safety,
    Vocabulary,
}

/// Note section a finding points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Section {
    Header,
    Subjective,
    Objective,
    Assessment,
    Plan,
}

/// Every check the validator runs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RuleId {
    MissingDiagnosis,
    MissingAcupoints,
    MissingPain,
    MissingGoals,
    UnexpectedGoals,
    MissingTonguePulse,
    UnreadableLabel,
    LabelNotAllowed,
    TendernessBelowFloor,
    ContraindicatedStimulation,
    GoalPainAboveBaseline,
    DuplicateInitialEvaluation,
    IndexOrder,
    DateOrder,
    PainIncreased,
    TendernessIncreased,
    TightnessIncreased,
    SpasmIncreased,
    FrequencyIncreased,
    AdlIncreased,
    SymptomIncreased,
    RomDecreased,
    StrengthDecreased,
    AcupointContinuity,
    TonguePulseChanged,
    NarrativeContradiction,
    UnsupportedAssessment,
    UnrecognizedAssessment,
    ReasonContradiction,
    UnsupportedReason,
    UnrecognizedReason,
    SubjectiveMismatch,
}

impl RuleId {
    pub fn severity(&self) -> Severity {
        match self {
            RuleId::ContraindicatedStimulation
            | RuleId::NarrativeContradiction
            | RuleId::ReasonContradiction => Severity::Critical,

            RuleId::MissingDiagnosis
            | RuleId::MissingAcupoints
            | RuleId::MissingPain
            | RuleId::MissingGoals
            | RuleId::IndexOrder
            | RuleId::PainIncreased
            | RuleId::TendernessIncreased
            | RuleId::TightnessIncreased
            | RuleId::SpasmIncreased
            | RuleId::RomDecreased
            | RuleId::StrengthDecreased
            | RuleId::TonguePulseChanged
            | RuleId::UnsupportedAssessment
            | RuleId::UnsupportedReason
            | RuleId::SubjectiveMismatch => Severity::High,

            RuleId::UnexpectedGoals
            | RuleId::MissingTonguePulse
            | RuleId::UnreadableLabel
            | RuleId::TendernessBelowFloor
            | RuleId::GoalPainAboveBaseline
            | RuleId::DuplicateInitialEvaluation
            | RuleId::DateOrder
            | RuleId::FrequencyIncreased
            | RuleId::AdlIncreased
            | RuleId::SymptomIncreased
            | RuleId::AcupointContinuity => Severity::Medium,

            RuleId::LabelNotAllowed
            | RuleId::UnrecognizedAssessment
            | RuleId::UnrecognizedReason => Severity::Low,
        }
    }

    pub fn category(&self) -> RuleCategory {
        match self {
            RuleId::DuplicateInitialEvaluation | RuleId::IndexOrder | RuleId::DateOrder => {
                RuleCategory::Sequence
            }
            RuleId::PainIncreased
            | RuleId::TendernessIncreased
            | RuleId::TightnessIncreased
            | RuleId::SpasmIncreased
            | RuleId::FrequencyIncreased
            | RuleId::AdlIncreased
            | RuleId::SymptomIncreased
            | RuleId::RomDecreased
            | RuleId::StrengthDecreased => RuleCategory::Monotonicity,
            RuleId::TendernessBelowFloor
            | RuleId::GoalPainAboveBaseline
            | RuleId::AcupointContinuity
            | RuleId::TonguePulseChanged => RuleCategory::Consistency,
            RuleId::MissingDiagnosis
            | RuleId::MissingAcupoints
            | RuleId::MissingPain
            | RuleId::MissingGoals
            | RuleId::UnexpectedGoals
            | RuleId::MissingTonguePulse => RuleCategory::Completeness,
            RuleId::NarrativeContradiction
            | RuleId::UnsupportedAssessment
            | RuleId::UnrecognizedAssessment
            | RuleId::ReasonContradiction
            | RuleId::UnsupportedReason
            | RuleId::UnrecognizedReason
            | RuleId::SubjectiveMismatch => RuleCategory::Narrative,
            RuleId::ContraindicatedStimulation => RuleCategory::Safety,
            RuleId::UnreadableLabel | RuleId::LabelNotAllowed => RuleCategory::Vocabulary,
        }
    }
}

/// One broken rule, located as precisely as the document allows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Violation {
    pub rule: RuleId,
    pub severity: Severity,
    /// `None` for chart-level findings.
    pub visit_index: Option<u32>,
    pub section: Section,
    pub field: String,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl Violation {
    pub fn new(
        rule: RuleId,
        visit_index: Option<u32>,
        section: Section,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule,
            severity: rule.severity(),
            visit_index,
            section,
            field: field.into(),
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }
}
