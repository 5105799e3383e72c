use crate::{Dimension, Ladder, Rung};

/// Spasm frequency grade, +0 (none) to +4 (more than ten spontaneous spasms
/// per hour).
pub struct Spasm;

impl Ladder for Spasm {
    fn dimension(&self) -> Dimension {
        Dimension::Spasm
    }

    fn name(&self) -> &str {
        "spasm"
    }

    fn rungs(&self) -> &[Rung] {
        static RUNGS: std::sync::LazyLock<Vec<Rung>> =
            std::sync::LazyLock::new(|| super::plus_rungs(0, 4));
        &RUNGS
    }

    fn parse(&self, label: &str) -> Option<f64> {
        super::parse_plus_grade(label, 0, 4)
    }
}
