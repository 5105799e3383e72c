//! charta-ladders
//!
//! Grading ladders: the fixed ordinal scales a visit note is written in
//! (pain grid, tightness, tenderness, spasm, strength, ADL severity, pain
//! frequency). Pure data plus the snapping and ordering rules both the
//! generator and the validator use.

pub mod error;
pub mod global;
pub mod grading;
pub mod ladders;
pub mod proportionality;
pub mod vocabulary;

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use crate::error::LadderError;
pub use crate::grading::GradingModel;
pub use crate::vocabulary::LabelVocabulary;

/// A measurable dimension with its own grading ladder.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Dimension {
    Pain,
    Tightness,
    Tenderness,
    Spasm,
    Strength,
    AdlSeverity,
    PainFrequency,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::Pain,
        Dimension::Tightness,
        Dimension::Tenderness,
        Dimension::Spasm,
        Dimension::Strength,
        Dimension::AdlSeverity,
        Dimension::PainFrequency,
    ];

    pub(crate) fn index(&self) -> usize {
        match self {
            Dimension::Pain => 0,
            Dimension::Tightness => 1,
            Dimension::Tenderness => 2,
            Dimension::Spasm => 3,
            Dimension::Strength => 4,
            Dimension::AdlSeverity => 5,
            Dimension::PainFrequency => 6,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ladder_for(*self).name())
    }
}

/// One canonical step of a ladder.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rung {
    pub label: String,
    pub value: f64,
}

/// Trait implemented by each grading ladder.
pub trait Ladder: Send + Sync {
    fn dimension(&self) -> Dimension;

    /// Human-readable name (e.g., "tenderness").
    fn name(&self) -> &str;

    /// Canonical rungs, ordered by ascending value.
    fn rungs(&self) -> &[Rung];

    /// Position of an arbitrary written label on this ladder's scale.
    fn parse(&self, label: &str) -> Option<f64>;

    /// Strength is the only ladder where a higher value is the better one.
    fn higher_is_better(&self) -> bool {
        false
    }

    /// Lowest and highest value the ladder can express.
    fn bounds(&self) -> (f64, f64) {
        let rungs = self.rungs();
        let min = rungs.iter().map(|r| r.value).fold(f64::INFINITY, f64::min);
        let max = rungs.iter().map(|r| r.value).fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }
}

/// Return every ladder, in `Dimension::ALL` order.
pub fn all_ladders() -> Vec<Box<dyn Ladder>> {
    Dimension::ALL.into_iter().map(ladder_for).collect()
}

/// Look up the ladder for a dimension.
pub fn ladder_for(dimension: Dimension) -> Box<dyn Ladder> {
    match dimension {
        Dimension::Pain => Box::new(ladders::pain::PainGrid),
        Dimension::Tightness => Box::new(ladders::tightness::Tightness),
        Dimension::Tenderness => Box::new(ladders::tenderness::Tenderness),
        Dimension::Spasm => Box::new(ladders::spasm::Spasm),
        Dimension::Strength => Box::new(ladders::strength::Strength),
        Dimension::AdlSeverity => Box::new(ladders::adl::AdlSeverity),
        Dimension::PainFrequency => Box::new(ladders::frequency::PainFrequency),
    }
}
