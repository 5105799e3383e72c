use std::cmp::Ordering;

use charta_core::models::grade::Grade;

use crate::error::LadderError;
use crate::vocabulary::LabelVocabulary;
use crate::{Dimension, Ladder, ladder_for};

const EPSILON: f64 = 1e-9;

/// One dimension's allow-list, resolved onto its ladder scale.
#[derive(Debug, Clone)]
struct ResolvedLadder {
    higher_is_better: bool,
    /// Allowed labels with their values, ascending by value.
    labels: Vec<(String, f64)>,
}

impl ResolvedLadder {
    fn build(
        dimension: Dimension,
        ladder: &dyn Ladder,
        vocabulary: &LabelVocabulary,
    ) -> Result<Self, LadderError> {
        let allowed = vocabulary
            .get(dimension)
            .ok_or(LadderError::MissingDimension(dimension))?;
        if allowed.is_empty() {
            return Err(LadderError::EmptyDimension(dimension));
        }

        let mut labels = Vec::with_capacity(allowed.len());
        for label in allowed {
            let value = ladder
                .parse(label)
                .ok_or_else(|| LadderError::UnparseableLabel {
                    dimension,
                    label: label.clone(),
                })?;
            if !labels.iter().any(|(existing, _): &(String, f64)| existing == label) {
                labels.push((label.clone(), value));
            }
        }
        labels.sort_by(|a, b| a.1.total_cmp(&b.1));

        Ok(Self {
            higher_is_better: ladder.higher_is_better(),
            labels,
        })
    }

    /// Maps a value onto "badness": larger is always clinically worse.
    fn badness(&self, value: f64) -> f64 {
        if self.higher_is_better { -value } else { value }
    }

    fn grade(&self, position: usize) -> Grade {
        let (label, value) = &self.labels[position];
        Grade {
            label: label.clone(),
            value: *value,
            rank: position as u32,
        }
    }

    /// Nearest label among positions accepted by `keep`; ties go to the
    /// clinically better label.
    fn nearest(&self, value: f64, keep: impl Fn(f64) -> bool) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (position, (_, candidate)) in self.labels.iter().enumerate() {
            if !keep(*candidate) {
                continue;
            }
            let distance = (candidate - value).abs();
            let better = match best {
                None => true,
                Some((current, current_distance)) => {
                    if distance < current_distance - EPSILON {
                        true
                    } else if (distance - current_distance).abs() <= EPSILON {
                        self.badness(*candidate) < self.badness(self.labels[current].1)
                    } else {
                        false
                    }
                }
            };
            if better {
                best = Some((position, distance));
            }
        }
        best.map(|(position, _)| position)
    }
}

/// The injected vocabulary resolved against every ladder. Read-only once
/// built; shared by reference between generator and validator.
#[derive(Debug, Clone)]
pub struct GradingModel {
    ladders: Vec<ResolvedLadder>,
}

impl GradingModel {
    /// Fails if any dimension is missing, empty, or holds a label its ladder
    /// cannot read.
    pub fn new(vocabulary: &LabelVocabulary) -> Result<Self, LadderError> {
        let ladders = Dimension::ALL
            .into_iter()
            .map(|dimension| {
                let ladder = ladder_for(dimension);
                ResolvedLadder::build(dimension, ladder.as_ref(), vocabulary)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { ladders })
    }

    fn ladder(&self, dimension: Dimension) -> &ResolvedLadder {
        &self.ladders[dimension.index()]
    }

    /// Snap a continuous value to the closest legal label.
    pub fn snap(&self, dimension: Dimension, value: f64) -> Grade {
        let ladder = self.ladder(dimension);
        let position = ladder.nearest(value, |_| true).unwrap_or(0);
        ladder.grade(position)
    }

    /// Snap among labels whose values lie in `[low, high]`. Falls back to
    /// [`GradingModel::snap`] when no allowed label lies in the range.
    pub fn snap_between(&self, dimension: Dimension, value: f64, low: f64, high: f64) -> Grade {
        let ladder = self.ladder(dimension);
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        match ladder.nearest(value, |v| v >= low - EPSILON && v <= high + EPSILON) {
            Some(position) => ladder.grade(position),
            None => self.snap(dimension, value),
        }
    }

    /// Value of a written label: exact allow-list match first, then the
    /// ladder's own parser.
    pub fn value_of(&self, dimension: Dimension, label: &str) -> Option<f64> {
        let trimmed = label.trim();
        self.ladder(dimension)
            .labels
            .iter()
            .find(|(allowed, _)| allowed.eq_ignore_ascii_case(trimmed))
            .map(|(_, value)| *value)
            .or_else(|| ladder_for(dimension).parse(trimmed))
    }

    pub fn is_allowed(&self, dimension: Dimension, label: &str) -> bool {
        let trimmed = label.trim();
        self.ladder(dimension)
            .labels
            .iter()
            .any(|(allowed, _)| allowed.eq_ignore_ascii_case(trimmed))
    }

    pub fn higher_is_better(&self, dimension: Dimension) -> bool {
        self.ladder(dimension).higher_is_better
    }

    /// The allowed labels, ascending by value.
    pub fn labels(&self, dimension: Dimension) -> impl Iterator<Item = &str> {
        self.ladder(dimension).labels.iter().map(|(l, _)| l.as_str())
    }

    /// Severity order of two values: `Greater` means `a` is worse than `b`.
    pub fn compare_values(&self, dimension: Dimension, a: f64, b: f64) -> Ordering {
        let ladder = self.ladder(dimension);
        let (a, b) = (ladder.badness(a), ladder.badness(b));
        if (a - b).abs() <= EPSILON {
            Ordering::Equal
        } else if a > b {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }

    /// Severity order of two written labels; `None` if either is unreadable.
    pub fn compare(&self, dimension: Dimension, a: &str, b: &str) -> Option<Ordering> {
        let a = self.value_of(dimension, a)?;
        let b = self.value_of(dimension, b)?;
        Some(self.compare_values(dimension, a, b))
    }

    /// Did `current` get worse than `previous`? `None` if either is unreadable.
    pub fn worsened(&self, dimension: Dimension, previous: &str, current: &str) -> Option<bool> {
        self.compare(dimension, current, previous)
            .map(|order| order == Ordering::Greater)
    }

    /// Signed improvement from `previous` to `current`: positive is better.
    pub fn improvement(&self, dimension: Dimension, previous: f64, current: f64) -> f64 {
        let ladder = self.ladder(dimension);
        ladder.badness(previous) - ladder.badness(current)
    }

    /// The best and worst values the allow-list can express.
    pub fn best_and_worst(&self, dimension: Dimension) -> (f64, f64) {
        let ladder = self.ladder(dimension);
        let first = ladder.labels.first().map(|(_, v)| *v).unwrap_or(0.0);
        let last = ladder.labels.last().map(|(_, v)| *v).unwrap_or(0.0);
        if ladder.higher_is_better {
            (last, first)
        } else {
            (first, last)
        }
    }
}
