use std::cmp::Ordering;

use proptest::prelude::*;

use charta_core::models::context::{BodyPart, ClinicalContext, Laterality, Severity};
use charta_core::models::narrative::Trend;
use charta_core::models::visit::acupoint_overlap;
use charta_core::policy::ChartPolicy;
use charta_generator::{GenerationOptions, Generator};
use charta_ladders::proportionality::tenderness_floor;
use charta_ladders::{Dimension, GradingModel, LabelVocabulary};

const SUPPORTED: [BodyPart; 7] = [
    BodyPart::Knee,
    BodyPart::Shoulder,
    BodyPart::Elbow,
    BodyPart::Hip,
    BodyPart::Neck,
    BodyPart::MidBack,
    BodyPart::LowerBack,
];

const LATERALITIES: [Laterality; 4] = [
    Laterality::Left,
    Laterality::Right,
    Laterality::Bilateral,
    Laterality::Unspecified,
];

fn context(body: usize, side: usize, severity: usize, pain: f64) -> ClinicalContext {
    ClinicalContext::new(
        SUPPORTED[body],
        LATERALITIES[side],
        Severity::ALL[severity],
        pain,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    /// Graded findings never get worse from one visit to the next.
    #[test]
    fn grades_never_worsen(
        seed in any::<u64>(),
        body in 0..SUPPORTED.len(),
        side in 0..LATERALITIES.len(),
        severity in 0..Severity::ALL.len(),
        pain in 0.0..=10.0f64,
        visits in 2u32..24,
    ) {
        let model = GradingModel::new(&LabelVocabulary::standard()).unwrap();
        let generator = Generator::new(&model, ChartPolicy::default());
        let chart = generator
            .generate(
                &context(body, side, severity, pain),
                &GenerationOptions::new(visits).with_seed(seed),
            )
            .unwrap();
        prop_assert_eq!(chart.states.len(), visits as usize);

        for pair in chart.states.windows(2) {
            let (prev, cur) = (&pair[0], &pair[1]);
            prop_assert!(cur.progress >= prev.progress);
            prop_assert!(cur.symptom_percent <= prev.symptom_percent);
            prop_assert_ne!(
                model.compare(Dimension::Pain, &cur.pain_label, &prev.pain_label),
                Some(Ordering::Greater)
            );
            for (dimension, before, after) in [
                (Dimension::AdlSeverity, &prev.severity, &cur.severity),
                (Dimension::Tightness, &prev.tightness, &cur.tightness),
                (Dimension::Tenderness, &prev.tenderness, &cur.tenderness),
                (Dimension::Spasm, &prev.spasm, &cur.spasm),
                (Dimension::PainFrequency, &prev.frequency, &cur.frequency),
            ] {
                prop_assert_ne!(
                    model.compare_values(dimension, after.value, before.value),
                    Ordering::Greater,
                    "{} worsened at visit {}", dimension, cur.index
                );
            }
            prop_assert_eq!(prev.rom.len(), cur.rom.len());
            for (before, after) in prev.rom.iter().zip(&cur.rom) {
                prop_assert!(after.degrees >= before.degrees);
                prop_assert!(after.degrees <= after.normal_degrees);
                prop_assert!(after.strength.value >= before.strength.value);
            }
            let room = prev.rom.iter().any(|row| row.degrees + 1.0 <= row.normal_degrees);
            let repeated = prev.rom.iter().zip(&cur.rom).all(|(before, after)| {
                before.degrees == after.degrees && before.strength.label == after.strength.label
            });
            prop_assert!(!(room && repeated), "ROM block repeated at visit {}", cur.index);
            prop_assert_eq!(&cur.tongue, &prev.tongue);
            prop_assert_eq!(&cur.pulse, &prev.pulse);
            prop_assert!(acupoint_overlap(&prev.acupoints, &cur.acupoints) >= 0.5 - 1e-9);
        }
    }

    /// Every generated reason names a dimension that measurably improved,
    /// and the assessment is one the measured direction supports.
    #[test]
    fn narrative_matches_the_numbers(
        seed in any::<u64>(),
        body in 0..SUPPORTED.len(),
        severity in 0..Severity::ALL.len(),
        pain in 2.0..=10.0f64,
    ) {
        let model = GradingModel::new(&LabelVocabulary::standard()).unwrap();
        let generator = Generator::new(&model, ChartPolicy::default());
        let chart = generator
            .generate(
                &context(body, 2, severity, pain),
                &GenerationOptions::new(12).with_seed(seed),
            )
            .unwrap();

        prop_assert!(chart.states[0].statement.is_none());
        for state in &chart.states[1..] {
            let statement = state.statement.as_ref().unwrap();
            prop_assert!(state.narrative.legal_assessments.contains(&statement.assessment));
            prop_assert!(statement.reasons.len() <= 2);
            for reason in &statement.reasons {
                prop_assert_eq!(state.trend.get(reason.dimension()), Trend::Improved);
            }
        }
    }

    /// Tenderness stays at or above what the charted pain implies.
    #[test]
    fn tenderness_respects_the_pain_floor(
        seed in any::<u64>(),
        body in 0..SUPPORTED.len(),
        pain in 0.0..=10.0f64,
    ) {
        let model = GradingModel::new(&LabelVocabulary::standard()).unwrap();
        let generator = Generator::new(&model, ChartPolicy::default());
        let chart = generator
            .generate(
                &context(body, 0, 0, pain),
                &GenerationOptions::new(10).with_seed(seed),
            )
            .unwrap();
        for state in &chart.states {
            let pain = model.value_of(Dimension::Pain, &state.pain_label).unwrap();
            if let Some(floor) = tenderness_floor(pain) {
                prop_assert!(state.tenderness.value >= floor - 1e-9);
            }
        }
    }
}
