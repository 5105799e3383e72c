use crate::{Dimension, Ladder, Rung};

/// One `+` or `-` modifier on the 0-5 muscle strength scale.
pub const MODIFIER_STEP: f64 = 1.0 / 3.0;

/// Manual muscle testing grade, "0/5" to "5/5" with `+`/`-` modifiers.
pub struct Strength;

impl Ladder for Strength {
    fn dimension(&self) -> Dimension {
        Dimension::Strength
    }

    fn name(&self) -> &str {
        "strength"
    }

    fn rungs(&self) -> &[Rung] {
        static RUNGS: std::sync::LazyLock<Vec<Rung>> = std::sync::LazyLock::new(|| {
            let mut rungs = Vec::new();
            for grade in 0..=5u8 {
                let base = f64::from(grade);
                if grade > 0 {
                    rungs.push(Rung {
                        label: format!("{grade}-/5"),
                        value: base - MODIFIER_STEP,
                    });
                }
                rungs.push(Rung {
                    label: format!("{grade}/5"),
                    value: base,
                });
                if grade < 5 {
                    rungs.push(Rung {
                        label: format!("{grade}+/5"),
                        value: base + MODIFIER_STEP,
                    });
                }
            }
            rungs
        });
        &RUNGS
    }

    fn parse(&self, label: &str) -> Option<f64> {
        let slash = label.find("/5")?;
        let head = label[..slash].trim_end();
        let (head, modifier) = match head.chars().last()? {
            '+' => (&head[..head.len() - 1], MODIFIER_STEP),
            '-' => (&head[..head.len() - 1], -MODIFIER_STEP),
            _ => (head, 0.0),
        };
        let mut digits = head.chars().rev();
        let grade = digits.next()?.to_digit(10)?;
        // "10/5" is not a grade.
        if digits.next().is_some_and(|c| c.is_ascii_digit()) || grade > 5 {
            return None;
        }
        let value = f64::from(grade) + modifier;
        (0.0..=5.0).contains(&value).then_some(value)
    }

    fn higher_is_better(&self) -> bool {
        true
    }
}
