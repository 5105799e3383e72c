use crate::{Dimension, Ladder, Rung};

const LEVELS: [(&str, &str, f64); 4] = [
    ("intermittent", "Intermittent (symptoms occur less than 25% of the time)", 1.0),
    ("occasional", "Occasional (symptoms occur between 26% and 50% of the time)", 2.0),
    ("frequent", "Frequent (symptoms occur between 51% and 75% of the time)", 3.0),
    ("constant", "Constant (symptoms occur between 76% and 100% of the time)", 4.0),
];

/// How much of the day the pain is present.
pub struct PainFrequency;

impl Ladder for PainFrequency {
    fn dimension(&self) -> Dimension {
        Dimension::PainFrequency
    }

    fn name(&self) -> &str {
        "pain frequency"
    }

    fn rungs(&self) -> &[Rung] {
        static RUNGS: std::sync::LazyLock<Vec<Rung>> = std::sync::LazyLock::new(|| {
            LEVELS
                .iter()
                .map(|(_, label, value)| Rung {
                    label: label.to_string(),
                    value: *value,
                })
                .collect()
        });
        &RUNGS
    }

    fn parse(&self, label: &str) -> Option<f64> {
        let lower = label.to_ascii_lowercase();
        LEVELS
            .iter()
            .find(|(keyword, _, _)| lower.contains(keyword))
            .map(|(_, _, value)| *value)
    }
}
