use charta_core::models::narrative::{
    AssessmentCategory, MeasuredDirection, NarrativeDescriptor, ReasonPhrase, Trend,
};

/// Does the stated assessment point the opposite way from the numbers?
/// Claiming improvement while findings worsen (or while pain worsens in a
/// mixed picture), or claiming exacerbation while everything improved.
pub fn is_contradiction(stated: AssessmentCategory, descriptor: &NarrativeDescriptor) -> bool {
    if stated.claims_improvement() {
        return match descriptor.direction {
            MeasuredDirection::Worsening => true,
            MeasuredDirection::Mixed => descriptor.trend.pain == Trend::Worsened,
            MeasuredDirection::Improving | MeasuredDirection::Unchanged => false,
        };
    }
    stated == AssessmentCategory::Exacerbation
        && descriptor.direction == MeasuredDirection::Improving
}

/// A reason phrase claims its dimension improved; this checks whether it
/// actually got worse.
pub fn reason_contradicts(reason: ReasonPhrase, descriptor: &NarrativeDescriptor) -> bool {
    descriptor.trend.get(reason.dimension()) == Trend::Worsened
}
