use charta_core::models::document::VisitRecord;
use charta_core::models::narrative::AssessmentCategory;
use charta_core::models::visit::VisitType;
use charta_narrative::{
    Measurements, classify_assessment, classify_reason, derive, is_contradiction,
    reason_contradicts,
};

use super::RuleContext;
use crate::violation::{RuleId, Section, Violation};

/// Re-derive what change language the numbers allow and hold the written
/// narrative to it.
pub(crate) fn check_pair(
    ctx: &RuleContext<'_>,
    previous: &VisitRecord,
    current: &VisitRecord,
    out: &mut Vec<Violation>,
) {
    if current.visit_type != VisitType::Treatment {
        return;
    }
    let Some(written) = &current.narrative else {
        return;
    };
    let index = Some(current.index);

    let before = Measurements::from_record(ctx.model, previous);
    let after = Measurements::from_record(ctx.model, current);
    let descriptor = derive(ctx.model, &before, &after, &ctx.policy.materiality);
    let measured = format!("{:?}", descriptor.direction).to_ascii_lowercase();

    let mut stated_assessment = None;
    if let Some(text) = written.assessment.as_deref().map(str::trim)
        && !text.is_empty()
    {
        stated_assessment = classify_assessment(text);
        match stated_assessment {
            Some(stated) if is_contradiction(stated, &descriptor) => out.push(
                Violation::new(
                    RuleId::NarrativeContradiction,
                    index,
                    Section::Assessment,
                    "assessment",
                    "assessment contradicts the measured findings",
                )
                .with_expected(format!("language consistent with a {measured} picture"))
                .with_actual(text),
            ),
            Some(stated) if !descriptor.legal_assessments.contains(&stated) => {
                let allowed: Vec<&str> = descriptor
                    .legal_assessments
                    .iter()
                    .map(|category| category.assessment_text())
                    .collect();
                out.push(
                    Violation::new(
                        RuleId::UnsupportedAssessment,
                        index,
                        Section::Assessment,
                        "assessment",
                        "assessment is stronger or weaker than the measured change supports",
                    )
                    .with_expected(allowed.join(" | "))
                    .with_actual(text),
                );
            }
            Some(_) => {}
            None => out.push(
                Violation::new(
                    RuleId::UnrecognizedAssessment,
                    index,
                    Section::Assessment,
                    "assessment",
                    "assessment wording is not recognized",
                )
                .with_actual(text),
            ),
        }
    }

    if let Some(text) = written.subjective.as_deref().map(str::trim)
        && !text.is_empty()
        && let Some(said) = classify_assessment(text)
    {
        if is_contradiction(said, &descriptor) {
            out.push(
                Violation::new(
                    RuleId::NarrativeContradiction,
                    index,
                    Section::Subjective,
                    "subjective",
                    "subjective report contradicts the measured findings",
                )
                .with_expected(format!("language consistent with a {measured} picture"))
                .with_actual(text),
            );
        } else if let Some(stated) = stated_assessment
            && leaning(said) != leaning(stated)
        {
            out.push(
                Violation::new(
                    RuleId::SubjectiveMismatch,
                    index,
                    Section::Subjective,
                    "subjective",
                    "subjective report and assessment describe different changes",
                )
                .with_expected(stated.subjective_text())
                .with_actual(text),
            );
        }
    }

    for (position, text) in written.reasons.iter().enumerate() {
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        let field = format!("reasons[{position}]");
        match classify_reason(text) {
            Some(reason) if reason_contradicts(reason, &descriptor) => out.push(
                Violation::new(
                    RuleId::ReasonContradiction,
                    index,
                    Section::Assessment,
                    field,
                    format!("{} got worse, not better", reason.dimension().name()),
                )
                .with_expected(format!("no claim of improved {}", reason.dimension().name()))
                .with_actual(text),
            ),
            Some(reason) if !descriptor.legal_reasons.contains(&reason) => out.push(
                Violation::new(
                    RuleId::UnsupportedReason,
                    index,
                    Section::Assessment,
                    field,
                    format!(
                        "{} did not change enough to be reported",
                        reason.dimension().name()
                    ),
                )
                .with_actual(text),
            ),
            Some(_) => {}
            None => out.push(
                Violation::new(
                    RuleId::UnrecognizedReason,
                    index,
                    Section::Assessment,
                    field,
                    "reason phrase is not in the catalogue",
                )
                .with_actual(text),
            ),
        }
    }
}

/// Better, the same, or worse. Slight improvement leans the same way as
/// improvement.
fn leaning(category: AssessmentCategory) -> i8 {
    match category {
        AssessmentCategory::Improvement | AssessmentCategory::SlightImprovement => 1,
        AssessmentCategory::SimilarSymptoms => 0,
        AssessmentCategory::Exacerbation => -1,
    }
}
