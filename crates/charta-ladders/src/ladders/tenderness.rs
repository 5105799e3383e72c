use crate::{Dimension, Ladder, Rung};

/// Tenderness on palpation, +1 (mild) to +4 (withdraws from touch).
pub struct Tenderness;

impl Ladder for Tenderness {
    fn dimension(&self) -> Dimension {
        Dimension::Tenderness
    }

    fn name(&self) -> &str {
        "tenderness"
    }

    fn rungs(&self) -> &[Rung] {
        static RUNGS: std::sync::LazyLock<Vec<Rung>> =
            std::sync::LazyLock::new(|| super::plus_rungs(1, 4));
        &RUNGS
    }

    fn parse(&self, label: &str) -> Option<f64> {
        super::parse_plus_grade(label, 1, 4)
    }
}
