use crate::{Dimension, Ladder, Rung};

/// Pain grid: whole numbers 0-10 and "worst-best" ranges such as "8-7",
/// which sit at their midpoint.
pub struct PainGrid;

impl Ladder for PainGrid {
    fn dimension(&self) -> Dimension {
        Dimension::Pain
    }

    fn name(&self) -> &str {
        "pain"
    }

    fn rungs(&self) -> &[Rung] {
        static RUNGS: std::sync::LazyLock<Vec<Rung>> = std::sync::LazyLock::new(|| {
            let mut rungs: Vec<Rung> = (0..=10)
                .map(|n| Rung {
                    label: n.to_string(),
                    value: f64::from(n),
                })
                .collect();
            rungs.extend((2..=10).map(|worst| Rung {
                label: format!("{worst}-{}", worst - 1),
                value: f64::from(worst) - 0.5,
            }));
            rungs.sort_by(|a, b| a.value.total_cmp(&b.value));
            rungs
        });
        &RUNGS
    }

    fn parse(&self, label: &str) -> Option<f64> {
        let body = label.trim();
        let body = body.strip_suffix("/10").unwrap_or(body).trim();
        let values = body
            .split('-')
            .map(|part| part.trim().parse::<f64>().ok())
            .collect::<Option<Vec<_>>>()?;

        if values.iter().any(|v| !(0.0..=10.0).contains(v)) {
            return None;
        }
        match values.as_slice() {
            [single] => Some(*single),
            [worst, best] => Some((worst + best) / 2.0),
            _ => None,
        }
    }
}
