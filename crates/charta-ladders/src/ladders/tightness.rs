use crate::{Dimension, Ladder, Rung};

/// Palpated muscle tightness, mild (1) to severe (5).
pub struct Tightness;

impl Ladder for Tightness {
    fn dimension(&self) -> Dimension {
        Dimension::Tightness
    }

    fn name(&self) -> &str {
        "tightness"
    }

    fn rungs(&self) -> &[Rung] {
        static RUNGS: std::sync::LazyLock<Vec<Rung>> =
            std::sync::LazyLock::new(super::severity_rungs);
        &RUNGS
    }

    fn parse(&self, label: &str) -> Option<f64> {
        super::parse_severity_phrase(label)
    }
}
