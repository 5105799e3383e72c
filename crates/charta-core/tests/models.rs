use charta_core::error::CoreError;
use charta_core::models::context::{
    BodyPart, Chronicity, ClinicalContext, InsuranceCategory, Laterality, MedicalHistoryFlag,
    Severity, electrical_stimulation_contraindicated,
};
use charta_core::models::document::{ChartDocument, VisitRecord};
use charta_core::models::narrative::{NarrativeDimension, Trend, TrendSummary};
use charta_core::models::visit::{
    Side, VisitType, acupoint_overlap, normalize_point, parse_symptom_scale, symptom_scale_label,
};

fn points(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

#[test]
fn body_parts_parse_loosely() {
    assert_eq!("knee".parse::<BodyPart>().unwrap(), BodyPart::Knee);
    assert_eq!("LOWER_BACK".parse::<BodyPart>().unwrap(), BodyPart::LowerBack);
    assert_eq!("mid-back".parse::<BodyPart>().unwrap(), BodyPart::MidBack);
    assert!(!BodyPart::Neck.is_paired());
    assert!(BodyPart::Elbow.is_paired());

    let err = "tail".parse::<BodyPart>().unwrap_err();
    assert!(matches!(err, CoreError::UnknownValue { kind: "body part", .. }));
}

#[test]
fn laterality_chronicity_and_severity_parse() {
    assert_eq!("both".parse::<Laterality>().unwrap(), Laterality::Bilateral);
    assert_eq!("L".parse::<Laterality>().unwrap(), Laterality::Left);
    assert_eq!("sub-acute".parse::<Chronicity>().unwrap(), Chronicity::Subacute);
    assert_eq!(
        "moderate_to_severe".parse::<Severity>().unwrap(),
        Severity::ModerateToSevere
    );
    assert!("sideways".parse::<Laterality>().is_err());
}

#[test]
fn severity_steps_saturate() {
    for severity in Severity::ALL {
        assert_eq!(Severity::from_step(severity.step()), severity);
    }
    assert_eq!(Severity::from_step(0), Severity::Mild);
    assert_eq!(Severity::from_step(9), Severity::Severe);
    assert!(Severity::Mild < Severity::Severe);
}

#[test]
fn goal_horizons_follow_the_payer() {
    assert_eq!(InsuranceCategory::Medicare.goal_horizon_weeks(), (4, 12));
    assert_eq!(InsuranceCategory::WorkersComp.goal_horizon_weeks(), (6, 12));
    assert_eq!(InsuranceCategory::Commercial.goal_horizon_weeks(), (4, 8));
}

#[test]
fn stimulation_contraindications() {
    assert!(!electrical_stimulation_contraindicated(&[MedicalHistoryFlag::Diabetes]));
    assert!(electrical_stimulation_contraindicated(&[
        MedicalHistoryFlag::Diabetes,
        MedicalHistoryFlag::Pregnancy,
    ]));

    let context = ClinicalContext::new(BodyPart::Hip, Laterality::Left, Severity::Mild, 4.0)
        .with_history(MedicalHistoryFlag::Pacemaker)
        .with_history(MedicalHistoryFlag::Pacemaker);
    assert_eq!(context.medical_history, vec![MedicalHistoryFlag::Pacemaker]);
}

#[test]
fn symptom_bands() {
    assert_eq!(symptom_scale_label(100), "90%-100%");
    assert_eq!(symptom_scale_label(70), "60%-70%");
    assert_eq!(symptom_scale_label(65), "60%-70%");
    assert_eq!(symptom_scale_label(0), "0%");
    assert_eq!(parse_symptom_scale("60%-70%"), Some(70));
    assert_eq!(parse_symptom_scale("about 40%"), Some(40));
    assert_eq!(parse_symptom_scale("most days"), None);
}

#[test]
fn acupoints_compare_by_normalized_name() {
    assert_eq!(normalize_point(" gb-34 "), "GB34");
    assert_eq!(
        acupoint_overlap(&points(&["GB34", "ST36"]), &points(&["gb 34", "st-36"])),
        1.0
    );
    assert_eq!(
        acupoint_overlap(&points(&["GB34", "ST36", "SP6", "LI4"]), &points(&["GB34", "ST36"])),
        0.5
    );
    assert_eq!(acupoint_overlap(&[], &[]), 1.0);
}

#[test]
fn trend_summary_lists_dimensions_by_trend() {
    let mut summary = TrendSummary::stable();
    summary.set(NarrativeDimension::Pain, Trend::Improved);
    summary.set(NarrativeDimension::Rom, Trend::Improved);
    summary.set(NarrativeDimension::Spasm, Trend::Worsened);

    assert_eq!(
        summary.with(Trend::Improved),
        vec![NarrativeDimension::Pain, NarrativeDimension::Rom]
    );
    assert_eq!(summary.get(NarrativeDimension::Spasm), Trend::Worsened);
    assert_eq!(summary.with(Trend::Stable).len(), 6);
}

#[test]
fn sparse_document_json_fills_defaults() {
    let json = r#"{
        "visits": [
            { "index": 1, "visit_type": "initial_evaluation", "pain": "8",
              "rom": [{ "movement": "Flexion", "side": "right", "degrees": 95 }] },
            { "index": 2, "visit_type": "treatment", "date": "2026-03-02" }
        ]
    }"#;
    let document = ChartDocument::from_json(json).unwrap();

    assert!(document.medical_history.is_empty());
    let first: &VisitRecord = &document.visits[0];
    assert_eq!(first.visit_type, VisitType::InitialEvaluation);
    assert_eq!(first.rom[0].side, Side::Right);
    assert_eq!(first.rom[0].strength, None);
    assert!(first.acupoints.is_empty());
    assert!(!first.electrical_stimulation);
    assert_eq!(
        document.visits[1].date,
        Some(jiff::civil::date(2026, 3, 2))
    );

    let again = ChartDocument::from_json(&document.to_json().unwrap()).unwrap();
    assert_eq!(again, document);
}

#[test]
fn malformed_document_is_a_serialization_error() {
    let err = ChartDocument::from_json("{ \"visits\": 3 }").unwrap_err();
    assert!(matches!(err, CoreError::Serialization(_)));
}
