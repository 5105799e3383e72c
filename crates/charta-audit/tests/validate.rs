use charta_audit::{AuditGrade, RuleId, ScoringPolicy, Section, Severity, Validator};
use charta_core::models::context::{
    BodyPart, ClinicalContext, Laterality, MedicalHistoryFlag, Severity as Intensity,
};
use charta_core::models::document::{ChartDocument, RomRecord, VisitRecord, WrittenNarrative};
use charta_core::models::goals::{GoalTargets, TreatmentGoals};
use charta_core::models::visit::{Side, VisitType};
use charta_core::policy::ChartPolicy;
use charta_generator::{GenerationOptions, Generator};
use charta_ladders::{GradingModel, LabelVocabulary};

fn standard() -> GradingModel {
    GradingModel::new(&LabelVocabulary::standard()).expect("standard vocabulary is valid")
}

fn knee_chart(model: &GradingModel) -> ChartDocument {
    let context = ClinicalContext::new(
        BodyPart::Knee,
        Laterality::Bilateral,
        Intensity::ModerateToSevere,
        8.0,
    );
    Generator::new(model, ChartPolicy::default())
        .generate(&context, &GenerationOptions::new(12).with_seed(42))
        .unwrap()
        .to_document(&context)
}

fn goals() -> TreatmentGoals {
    let targets = |weeks, pain: &str| GoalTargets {
        weeks,
        pain: pain.to_string(),
        tightness: "moderate".to_string(),
        tenderness: "+2".to_string(),
        spasm: "+1".to_string(),
        strength: "4+/5".to_string(),
    };
    TreatmentGoals {
        short_term: targets(4, "5"),
        long_term: targets(8, "3"),
    }
}

/// A complete, clean visit note.
fn note(index: u32, visit_type: VisitType, pain: &str) -> VisitRecord {
    VisitRecord {
        index,
        visit_type,
        date: None,
        diagnosis: vec!["M25.561 Pain in right knee".to_string()],
        pain: Some(pain.to_string()),
        severity: Some("moderate".to_string()),
        tightness: Some("moderate".to_string()),
        tenderness: Some("+3".to_string()),
        spasm: Some("+2".to_string()),
        frequency: Some("Frequent (symptoms occur between 51% and 75% of the time)".to_string()),
        symptom_scale: Some("70%-80%".to_string()),
        rom: vec![RomRecord {
            movement: "Flexion".to_string(),
            side: Side::Right,
            degrees: Some(90.0),
            strength: Some("4-/5".to_string()),
        }],
        tongue: Some("thin white coat".to_string()),
        pulse: Some("wiry".to_string()),
        acupoints: ["ST35", "ST36", "SP9", "GB34"].map(String::from).to_vec(),
        electrical_stimulation: true,
        goals: (visit_type == VisitType::InitialEvaluation).then(goals),
        narrative: None,
    }
}

fn said(assessment: &str, reasons: &[&str]) -> Option<WrittenNarrative> {
    Some(WrittenNarrative {
        subjective: None,
        assessment: Some(assessment.to_string()),
        reasons: reasons.iter().map(|r| r.to_string()).collect(),
    })
}

fn validator(model: &GradingModel) -> Validator<'_> {
    Validator::new(model, ChartPolicy::default(), ScoringPolicy::default())
}

#[test]
fn generated_knee_chart_is_clean() {
    let model = standard();
    let document = knee_chart(&model);
    let report = validator(&model).validate(&document);

    assert_eq!(report.visit_count, 12);
    assert!(report.violations.is_empty(), "{:#?}", report.violations);
    assert_eq!(report.score.value, 100);
    assert_eq!(report.score.grade, AuditGrade::Pass);
}

#[test]
fn validation_is_idempotent() {
    let model = standard();
    let mut document = knee_chart(&model);
    document.visits[6].pain = Some("9".to_string());
    let validator = validator(&model);
    assert_eq!(validator.validate(&document), validator.validate(&document));
}

#[test]
fn raised_tenderness_is_caught_on_that_visit() {
    let model = standard();
    let mut document = knee_chart(&model);
    let clean = validator(&model).validate(&document);

    document.visits[4].tenderness = Some("+4".to_string());
    let report = validator(&model).validate(&document);

    let finding = report
        .violations
        .iter()
        .find(|v| v.rule == RuleId::TendernessIncreased)
        .expect("tenderness increase reported");
    assert_eq!(finding.visit_index, Some(5));
    assert_eq!(finding.field, "tenderness");
    assert_eq!(finding.section, Section::Objective);
    assert!(finding.severity <= Severity::High);
    assert!(report.score.value < clean.score.value);
}

#[test]
fn exacerbation_claimed_over_improving_numbers_is_critical() {
    let model = standard();
    let mut treatment = note(2, VisitType::Treatment, "6");
    treatment.narrative = said("Patient presents with exacerbation of symptoms.", &[]);
    let document = ChartDocument {
        medical_history: Vec::new(),
        visits: vec![note(1, VisitType::InitialEvaluation, "8"), treatment],
    };

    let report = validator(&model).validate(&document);
    assert!(report.has_rule(RuleId::NarrativeContradiction));
    assert_eq!(report.count(Severity::Critical), 1);
    assert_eq!(report.score.value, 0);
    assert_eq!(report.score.grade, AuditGrade::Fail);
}

#[test]
fn improvement_claimed_over_worsening_pain_is_critical() {
    let model = standard();
    let mut treatment = note(2, VisitType::Treatment, "9");
    treatment.narrative = said(
        "presents with improvement of symptoms",
        &["decreased pain intensity"],
    );
    let document = ChartDocument {
        medical_history: Vec::new(),
        visits: vec![note(1, VisitType::InitialEvaluation, "8"), treatment],
    };

    let report = validator(&model).validate(&document);
    assert!(report.has_rule(RuleId::PainIncreased));
    assert!(report.has_rule(RuleId::NarrativeContradiction));
    assert!(report.has_rule(RuleId::ReasonContradiction));
    assert_eq!(report.score.grade, AuditGrade::Fail);
}

#[test]
fn reasons_need_a_material_change() {
    let model = standard();
    let mut treatment = note(2, VisitType::Treatment, "8");
    treatment.narrative = said(
        "presents with similar symptoms",
        &["decreased pain intensity", "the weather was nice"],
    );
    let document = ChartDocument {
        medical_history: Vec::new(),
        visits: vec![note(1, VisitType::InitialEvaluation, "8"), treatment],
    };

    let report = validator(&model).validate(&document);
    let rules: Vec<RuleId> = report.violations.iter().map(|v| v.rule).collect();
    assert_eq!(
        rules,
        vec![RuleId::UnsupportedReason, RuleId::UnrecognizedReason]
    );
    assert_eq!(report.violations[0].field, "reasons[0]");
    assert_eq!(report.score.value, 85);
    assert_eq!(report.score.grade, AuditGrade::Warning);
}

#[test]
fn missing_sections_are_reported() {
    let model = standard();
    let mut evaluation = note(1, VisitType::InitialEvaluation, "8");
    evaluation.goals = None;
    evaluation.diagnosis.clear();
    evaluation.pulse = None;
    let mut treatment = note(2, VisitType::Treatment, "7");
    treatment.pain = None;
    treatment.goals = Some(goals());

    let document = ChartDocument {
        medical_history: Vec::new(),
        visits: vec![evaluation, treatment],
    };
    let report = validator(&model).validate(&document);

    for rule in [
        RuleId::MissingGoals,
        RuleId::MissingDiagnosis,
        RuleId::MissingTonguePulse,
        RuleId::MissingPain,
        RuleId::UnexpectedGoals,
    ] {
        assert!(report.has_rule(rule), "expected {rule:?}");
    }
    let pulse = report
        .violations
        .iter()
        .find(|v| v.rule == RuleId::MissingTonguePulse)
        .unwrap();
    assert_eq!(pulse.field, "pulse");
    assert_eq!(pulse.visit_index, Some(1));
}

#[test]
fn stimulation_with_a_pacemaker_fails_the_chart() {
    let model = standard();
    let document = ChartDocument {
        medical_history: vec![MedicalHistoryFlag::Pacemaker],
        visits: vec![note(1, VisitType::InitialEvaluation, "8")],
    };
    let report = validator(&model).validate(&document);
    assert!(report.has_rule(RuleId::ContraindicatedStimulation));
    assert_eq!(report.score.grade, AuditGrade::Fail);

    let mut quiet = document.clone();
    quiet.visits[0].electrical_stimulation = false;
    let report = validator(&model).validate(&quiet);
    assert!(report.violations.is_empty(), "{:#?}", report.violations);
}

#[test]
fn vocabulary_findings() {
    let model = standard();
    let mut evaluation = note(1, VisitType::InitialEvaluation, "8/10");
    evaluation.tightness = Some("very tight".to_string());
    let document = ChartDocument {
        medical_history: Vec::new(),
        visits: vec![evaluation],
    };
    let report = validator(&model).validate(&document);

    let unreadable = report
        .violations
        .iter()
        .find(|v| v.rule == RuleId::UnreadableLabel)
        .unwrap();
    assert_eq!(unreadable.field, "tightness");
    assert_eq!(unreadable.severity, Severity::Medium);

    let off_template = report
        .violations
        .iter()
        .find(|v| v.rule == RuleId::LabelNotAllowed)
        .unwrap();
    assert_eq!(off_template.field, "pain");
    assert_eq!(off_template.severity, Severity::Low);
    assert_eq!(report.score.value, 95);
}

#[test]
fn out_of_range_grades_are_unreadable() {
    let model = standard();
    let mut evaluation = note(1, VisitType::InitialEvaluation, "8");
    evaluation.tenderness = Some("+0".to_string());
    evaluation.rom[0].strength = Some("10/5".to_string());
    let document = ChartDocument {
        medical_history: Vec::new(),
        visits: vec![evaluation],
    };
    let report = validator(&model).validate(&document);

    let unreadable: Vec<_> = report
        .violations
        .iter()
        .filter(|v| v.rule == RuleId::UnreadableLabel)
        .collect();
    assert_eq!(unreadable.len(), 2);
    assert!(unreadable.iter().all(|v| v.severity == Severity::Medium));
    assert!(unreadable.iter().any(|v| v.field == "tenderness"));
    assert!(unreadable.iter().any(|v| v.field.contains("strength")));
}

#[test]
fn tenderness_lighter_than_pain_allows() {
    let model = standard();
    let mut evaluation = note(1, VisitType::InitialEvaluation, "8");
    evaluation.tenderness = Some("+1".to_string());
    let document = ChartDocument {
        medical_history: Vec::new(),
        visits: vec![evaluation],
    };
    let report = validator(&model).validate(&document);
    let finding = report
        .violations
        .iter()
        .find(|v| v.rule == RuleId::TendernessBelowFloor)
        .unwrap();
    assert_eq!(finding.expected.as_deref(), Some("at least +2"));
}

#[test]
fn sequence_and_continuity_findings() {
    let model = standard();
    let mut evaluation = note(3, VisitType::InitialEvaluation, "8");
    evaluation.date = Some(jiff::civil::date(2026, 3, 4));
    let mut treatment = note(2, VisitType::Treatment, "8");
    treatment.tongue = Some("red with yellow coat".to_string());
    treatment.acupoints = ["LI4", "LR3", "SP6", "ST36"].map(String::from).to_vec();
    treatment.rom[0].degrees = Some(80.0);
    treatment.rom[0].strength = Some("3+/5".to_string());
    treatment.date = Some(jiff::civil::date(2026, 3, 1));

    let document = ChartDocument {
        medical_history: Vec::new(),
        visits: vec![evaluation, treatment],
    };
    let report = validator(&model).validate(&document);
    for rule in [
        RuleId::IndexOrder,
        RuleId::DateOrder,
        RuleId::TonguePulseChanged,
        RuleId::AcupointContinuity,
        RuleId::RomDecreased,
        RuleId::StrengthDecreased,
    ] {
        assert!(report.has_rule(rule), "expected {rule:?}");
    }
    let rom = report
        .violations
        .iter()
        .find(|v| v.rule == RuleId::RomDecreased)
        .unwrap();
    assert_eq!(rom.field, "rom.flexion.right.degrees");
}

#[test]
fn second_initial_evaluation_is_flagged() {
    let model = standard();
    let document = ChartDocument {
        medical_history: Vec::new(),
        visits: vec![
            note(1, VisitType::InitialEvaluation, "8"),
            note(2, VisitType::InitialEvaluation, "8"),
        ],
    };
    let report = validator(&model).validate(&document);
    let duplicate = report
        .violations
        .iter()
        .find(|v| v.rule == RuleId::DuplicateInitialEvaluation)
        .unwrap();
    assert_eq!(duplicate.visit_index, Some(2));
}

#[test]
fn empty_document_scores_clean() {
    let model = standard();
    let report = validator(&model).validate(&ChartDocument::default());
    assert_eq!(report.visit_count, 0);
    assert!(report.violations.is_empty());
    assert_eq!(report.score.grade, AuditGrade::Pass);
}

#[test]
fn honest_report_of_worsening_is_not_a_contradiction() {
    let model = standard();
    let mut document = knee_chart(&model);
    let visit = &mut document.visits[4];
    visit.pain = Some("9".to_string());
    visit.tenderness = Some("+4".to_string());
    visit.narrative = said(
        "Patient reports no improvement since the last treatment",
        &["increased tenderness on palpation"],
    );

    let report = validator(&model).validate(&document);
    assert!(report.has_rule(RuleId::PainIncreased));
    assert!(!report.has_rule(RuleId::NarrativeContradiction), "{:#?}", report.violations);
    assert!(!report.has_rule(RuleId::ReasonContradiction), "{:#?}", report.violations);
    assert_eq!(report.count(Severity::Critical), 0);
    assert!(report.score.value > 0);
}

#[test]
fn subjective_must_agree_with_the_assessment() {
    let model = standard();
    let mut treatment = note(2, VisitType::Treatment, "6");
    treatment.narrative = Some(WrittenNarrative {
        subjective: Some("Patient reports feeling better since the last treatment".to_string()),
        assessment: Some("presents with similar symptoms".to_string()),
        reasons: Vec::new(),
    });
    let document = ChartDocument {
        medical_history: Vec::new(),
        visits: vec![note(1, VisitType::InitialEvaluation, "8"), treatment],
    };

    let report = validator(&model).validate(&document);
    let mismatch = report
        .violations
        .iter()
        .find(|v| v.rule == RuleId::SubjectiveMismatch)
        .expect("mismatch reported");
    assert_eq!(mismatch.field, "subjective");
    assert_eq!(mismatch.section, Section::Subjective);
    assert_eq!(mismatch.severity, Severity::High);
    assert!(!report.has_rule(RuleId::NarrativeContradiction));
}

#[test]
fn subjective_claiming_relief_over_worse_pain_is_critical() {
    let model = standard();
    let mut treatment = note(2, VisitType::Treatment, "9");
    treatment.narrative = Some(WrittenNarrative {
        subjective: Some("Patient is feeling much better".to_string()),
        assessment: None,
        reasons: Vec::new(),
    });
    let document = ChartDocument {
        medical_history: Vec::new(),
        visits: vec![note(1, VisitType::InitialEvaluation, "8"), treatment],
    };

    let report = validator(&model).validate(&document);
    let finding = report
        .violations
        .iter()
        .find(|v| v.rule == RuleId::NarrativeContradiction)
        .expect("contradiction reported");
    assert_eq!(finding.field, "subjective");
    assert_eq!(finding.severity, Severity::Critical);
    assert_eq!(report.score.grade, AuditGrade::Fail);
}
