//! Rule implementations. Each module appends violations to a shared list in
//! visit order so reports are stable across runs.

pub(crate) mod narrative;
pub(crate) mod progression;
pub(crate) mod visit;

use charta_core::models::document::VisitRecord;
use charta_core::models::visit::Side;
use charta_core::policy::ChartPolicy;
use charta_ladders::{Dimension, GradingModel};

use crate::violation::{RuleId, Section};

pub(crate) const EPSILON: f64 = 1e-9;

/// What every rule reads from.
pub(crate) struct RuleContext<'a> {
    pub model: &'a GradingModel,
    pub policy: &'a ChartPolicy,
}

/// A ladder-graded label on a visit note.
pub(crate) struct GradedField<'r> {
    pub dimension: Dimension,
    pub field: &'static str,
    pub section: Section,
    /// Rule raised when the grade gets worse between visits.
    pub worsened: RuleId,
    pub label: Option<&'r str>,
}

pub(crate) fn graded_fields(record: &VisitRecord) -> [GradedField<'_>; 6] {
    [
        graded(
            Dimension::Pain,
            "pain",
            Section::Subjective,
            RuleId::PainIncreased,
            &record.pain,
        ),
        graded(
            Dimension::PainFrequency,
            "frequency",
            Section::Subjective,
            RuleId::FrequencyIncreased,
            &record.frequency,
        ),
        graded(
            Dimension::AdlSeverity,
            "severity",
            Section::Subjective,
            RuleId::AdlIncreased,
            &record.severity,
        ),
        graded(
            Dimension::Tightness,
            "tightness",
            Section::Objective,
            RuleId::TightnessIncreased,
            &record.tightness,
        ),
        graded(
            Dimension::Tenderness,
            "tenderness",
            Section::Objective,
            RuleId::TendernessIncreased,
            &record.tenderness,
        ),
        graded(
            Dimension::Spasm,
            "spasm",
            Section::Objective,
            RuleId::SpasmIncreased,
            &record.spasm,
        ),
    ]
}

fn graded<'r>(
    dimension: Dimension,
    field: &'static str,
    section: Section,
    worsened: RuleId,
    label: &'r Option<String>,
) -> GradedField<'r> {
    GradedField {
        dimension,
        field,
        section,
        worsened,
        label: present(label),
    }
}

/// A written value, or `None` when absent or blank.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub(crate) fn rom_field(movement: &str, side: Side, part: &str) -> String {
    let side = match side {
        Side::Left => "left",
        Side::Right => "right",
        Side::Midline => "midline",
    };
    format!("rom.{movement}.{side}.{part}")
}
