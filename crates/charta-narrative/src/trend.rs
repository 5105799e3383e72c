use charta_core::models::narrative::{
    AssessmentCategory, MeasuredDirection, NarrativeDescriptor, NarrativeDimension, ReasonPhrase,
    Trend, TrendSummary,
};
use charta_core::policy::MaterialityThresholds;
use charta_ladders::{Dimension, GradingModel};

use crate::measure::Measurements;

const EPSILON: f64 = 1e-9;

/// Classify a signed improvement (positive = better) against a threshold.
pub fn classify(improvement: f64, threshold: f64) -> Trend {
    if improvement >= threshold - EPSILON {
        Trend::Improved
    } else if improvement <= -threshold + EPSILON {
        Trend::Worsened
    } else {
        Trend::Stable
    }
}

/// Build the narrative descriptor for `current` given the visit before it.
/// Dimensions unreadable on either side count as stable.
pub fn derive(
    model: &GradingModel,
    previous: &Measurements,
    current: &Measurements,
    thresholds: &MaterialityThresholds,
) -> NarrativeDescriptor {
    let ladder = |dimension: Dimension, before: Option<f64>, after: Option<f64>, threshold: f64| {
        match (before, after) {
            (Some(before), Some(after)) => {
                classify(model.improvement(dimension, before, after), threshold)
            }
            _ => Trend::Stable,
        }
    };

    let mut trend = TrendSummary::stable();
    trend.pain = ladder(Dimension::Pain, previous.pain, current.pain, thresholds.pain);
    trend.frequency = ladder(
        Dimension::PainFrequency,
        previous.frequency,
        current.frequency,
        thresholds.grade,
    );
    trend.adl = ladder(
        Dimension::AdlSeverity,
        previous.adl,
        current.adl,
        thresholds.grade,
    );
    trend.tightness = ladder(
        Dimension::Tightness,
        previous.tightness,
        current.tightness,
        thresholds.grade,
    );
    trend.tenderness = ladder(
        Dimension::Tenderness,
        previous.tenderness,
        current.tenderness,
        thresholds.grade,
    );
    trend.spasm = ladder(
        Dimension::Spasm,
        previous.spasm,
        current.spasm,
        thresholds.grade,
    );
    if let (Some(before), Some(after)) = (previous.symptom, current.symptom) {
        trend.symptom = classify(before - after, thresholds.symptom_percent);
    }
    if let Some(delta) = current.mean_rom_delta(previous, |row| row.degrees) {
        trend.rom = classify(delta, thresholds.rom_degrees);
    }
    if let Some(delta) = current.mean_rom_delta(previous, |row| row.strength) {
        trend.strength = classify(delta, thresholds.strength);
    }

    let direction = direction_of(&trend);
    let legal_reasons = ReasonPhrase::ALL
        .into_iter()
        .filter(|reason| trend.get(reason.dimension()) == Trend::Improved)
        .collect();
    let legal_assessments = legal_assessments(&trend, direction);

    NarrativeDescriptor {
        trend,
        direction,
        legal_reasons,
        legal_assessments,
    }
}

fn direction_of(trend: &TrendSummary) -> MeasuredDirection {
    let improved = !trend.with(Trend::Improved).is_empty();
    let worsened = !trend.with(Trend::Worsened).is_empty();
    match (improved, worsened) {
        (true, false) => MeasuredDirection::Improving,
        (false, false) => MeasuredDirection::Unchanged,
        (true, true) => MeasuredDirection::Mixed,
        (false, true) => MeasuredDirection::Worsening,
    }
}

fn legal_assessments(trend: &TrendSummary, direction: MeasuredDirection) -> Vec<AssessmentCategory> {
    match direction {
        MeasuredDirection::Improving => {
            let broad = trend.get(NarrativeDimension::Pain) == Trend::Improved
                || trend.with(Trend::Improved).len() >= 2;
            if broad {
                vec![
                    AssessmentCategory::Improvement,
                    AssessmentCategory::SlightImprovement,
                ]
            } else {
                vec![AssessmentCategory::SlightImprovement]
            }
        }
        MeasuredDirection::Unchanged | MeasuredDirection::Mixed => {
            vec![AssessmentCategory::SimilarSymptoms]
        }
        MeasuredDirection::Worsening => vec![AssessmentCategory::Exacerbation],
    }
}
