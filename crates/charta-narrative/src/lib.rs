//! charta-narrative
//!
//! The narrative consistency chain. Which change language a visit may use is
//! derived from the measured deltas against the previous visit, never chosen
//! independently, so "improvement" cannot be written next to unchanged
//! numbers. The validator re-derives the same descriptor from a written note.

pub mod consistency;
pub mod measure;
pub mod phrases;
pub mod trend;

pub use crate::consistency::{is_contradiction, reason_contradicts};
pub use crate::measure::Measurements;
pub use crate::phrases::{classify_assessment, classify_reason};
pub use crate::trend::derive;
