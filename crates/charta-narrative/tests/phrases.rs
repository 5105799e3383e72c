use charta_core::models::narrative::{AssessmentCategory, ReasonPhrase};
use charta_narrative::{classify_assessment, classify_reason};

#[test]
fn canonical_assessment_text_round_trips() {
    for category in AssessmentCategory::ALL {
        assert_eq!(classify_assessment(category.assessment_text()), Some(category));
        assert_eq!(classify_assessment(category.subjective_text()), Some(category));
    }
}

#[test]
fn free_text_assessments_are_classified() {
    assert_eq!(
        classify_assessment("Pt states she is feeling better overall."),
        Some(AssessmentCategory::Improvement)
    );
    assert_eq!(
        classify_assessment("Patient presents with slight improvement."),
        Some(AssessmentCategory::SlightImprovement)
    );
    assert_eq!(
        classify_assessment("Pain got worse after lifting boxes"),
        Some(AssessmentCategory::Exacerbation)
    );
    assert_eq!(
        classify_assessment("No change since last visit"),
        Some(AssessmentCategory::SimilarSymptoms)
    );
    assert_eq!(classify_assessment("Tolerated treatment well"), None);
}

#[test]
fn reasons_map_back_to_the_catalogue() {
    for reason in ReasonPhrase::ALL {
        assert_eq!(classify_reason(reason.text()), Some(reason));
    }
    assert_eq!(
        classify_reason("Less tenderness noted at GB34"),
        Some(ReasonPhrase::DecreasedTenderness)
    );
    assert_eq!(
        classify_reason("improved mobility in the joint"),
        Some(ReasonPhrase::IncreasedRangeOfMotion)
    );
    assert_eq!(classify_reason("weather was nice"), None);
}

#[test]
fn negated_improvement_is_never_an_improvement_claim() {
    for text in [
        "Patient reports no improvement since last visit",
        "Symptoms are not better",
        "Pain hasn't improved much",
        "Presents without improvement of symptoms",
        "Patient has not really improved",
    ] {
        assert_eq!(
            classify_assessment(text),
            Some(AssessmentCategory::SimilarSymptoms),
            "{text}"
        );
    }
    assert_eq!(
        classify_assessment("No worse than last week"),
        Some(AssessmentCategory::SimilarSymptoms)
    );
}

#[test]
fn negation_stays_inside_its_clause() {
    assert_eq!(
        classify_assessment("No new complaints, feeling better overall"),
        Some(AssessmentCategory::Improvement)
    );
    assert_eq!(
        classify_assessment("Not sleeping well but pain is slightly better"),
        Some(AssessmentCategory::SlightImprovement)
    );
    assert_eq!(
        classify_assessment("Feeling better, no flare-ups this week"),
        Some(AssessmentCategory::Improvement)
    );
}

#[test]
fn worsening_reasons_are_not_improvement_reasons() {
    for text in [
        "increased tenderness on palpation",
        "more muscle spasms today",
        "no decrease in pain intensity",
        "decreased range of motion",
        "tightness is worse",
        "strength not improved",
    ] {
        assert_eq!(classify_reason(text), None, "{text}");
    }
    assert_eq!(classify_reason("spasms have not increased"), None);
    assert_eq!(
        classify_reason("pain is less intense"),
        Some(ReasonPhrase::DecreasedPainIntensity)
    );
    assert_eq!(
        classify_reason("tightness reduced, no worse after exercise"),
        Some(ReasonPhrase::ReducedTightness)
    );
}
