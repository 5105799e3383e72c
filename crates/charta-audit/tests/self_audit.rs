use charta_audit::{ScoringPolicy, Validator};
use charta_core::models::context::{BodyPart, ClinicalContext, Laterality, Severity};
use charta_core::policy::ChartPolicy;
use charta_generator::{GenerationOptions, Generator};
use charta_ladders::{GradingModel, LabelVocabulary};

const SUPPORTED: [BodyPart; 7] = [
    BodyPart::Knee,
    BodyPart::Shoulder,
    BodyPart::Elbow,
    BodyPart::Hip,
    BodyPart::Neck,
    BodyPart::MidBack,
    BodyPart::LowerBack,
];

#[test]
fn generated_charts_never_violate_the_validator() {
    let model = GradingModel::new(&LabelVocabulary::standard()).unwrap();
    let generator = Generator::new(&model, ChartPolicy::default());
    let validator = Validator::new(&model, ChartPolicy::default(), ScoringPolicy::default());

    for body_part in SUPPORTED {
        for laterality in [Laterality::Left, Laterality::Bilateral] {
            for (step, severity) in Severity::ALL.into_iter().enumerate() {
                for seed in 0..8u64 {
                    let pain = 3.0 + step as f64 * 1.5;
                    let context = ClinicalContext::new(body_part, laterality, severity, pain);
                    let chart = generator
                        .generate(
                            &context,
                            &GenerationOptions::new(16)
                                .with_seed(seed)
                                .with_first_visit_date(jiff::civil::date(2026, 4, 1)),
                        )
                        .unwrap();
                    let report = validator.validate(&chart.to_document(&context));
                    assert!(
                        report.violations.is_empty(),
                        "{body_part} {laterality:?} {severity} seed {seed}: {:#?}",
                        report.violations
                    );
                }
            }
        }
    }
}

#[test]
fn continued_charts_stay_clean_across_the_seam() {
    let model = GradingModel::new(&LabelVocabulary::standard()).unwrap();
    let generator = Generator::new(&model, ChartPolicy::default());
    let validator = Validator::new(&model, ChartPolicy::default(), ScoringPolicy::default());
    let context = ClinicalContext::new(
        BodyPart::Shoulder,
        Laterality::Right,
        Severity::Severe,
        9.0,
    );

    let head = generator
        .generate(&context, &GenerationOptions::new(5).with_seed(21))
        .unwrap();
    let anchor = head.states.last().unwrap().clone();
    let tail = generator
        .generate(
            &context,
            &GenerationOptions::new(8).with_seed(22).continuing_from(anchor),
        )
        .unwrap();

    let mut states = head.states.clone();
    states.extend(tail.states);
    let document = charta_core::models::document::ChartDocument::from_states(&context, &states);
    let report = validator.validate(&document);
    assert!(report.violations.is_empty(), "{:#?}", report.violations);
}
