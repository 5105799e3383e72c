use crate::{Dimension, Ladder, Rung};

/// Difficulty with activities of daily living. Same wording as tightness,
/// but derived from pain rather than palpated.
pub struct AdlSeverity;

impl Ladder for AdlSeverity {
    fn dimension(&self) -> Dimension {
        Dimension::AdlSeverity
    }

    fn name(&self) -> &str {
        "ADL severity"
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
