use charta_core::models::context::{BodyPart, Chronicity, Laterality, Severity};
use charta_stress::commands::{self, CaseArgs};

// The grading model is process-wide, so the whole command flow runs in one test.
#[test]
fn init_generate_and_audit_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");

    assert!(commands::install(&config_path).is_err());
    commands::init_config(&config_path, false).unwrap();
    assert!(commands::init_config(&config_path, false).is_err());
    commands::init_config(&config_path, true).unwrap();

    let config = commands::install(&config_path).unwrap();
    let output = commands::generate(
        &config,
        &CaseArgs {
            body_part: BodyPart::Hip,
            laterality: Laterality::Bilateral,
            pain: 7.0,
            severity: Severity::Moderate,
            chronicity: Chronicity::Subacute,
            visits: 10,
            seed: Some(7),
            start_date: Some(jiff::civil::date(2026, 2, 2)),
        },
    )
    .unwrap();
    assert_eq!(output.seed, 7);
    assert_eq!(output.document.visits.len(), 10);

    let chart_path = dir.path().join("chart.json");
    std::fs::write(&chart_path, serde_json::to_string(&output.document).unwrap()).unwrap();
    let (report, passed) = commands::audit(&config, &chart_path).unwrap();
    assert!(passed);
    let report: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(report["score"]["value"], serde_json::json!(100));

    let mut tampered = output.document.clone();
    tampered
        .medical_history
        .push(charta_core::models::context::MedicalHistoryFlag::Pacemaker);
    std::fs::write(&chart_path, serde_json::to_string(&tampered).unwrap()).unwrap();
    let (_, passed) = commands::audit(&config, &chart_path).unwrap();
    assert!(!passed);
}
