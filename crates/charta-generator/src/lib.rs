//! charta-generator
//!
//! Seeded longitudinal visit-sequence generator. Produces an Initial
//! Evaluation followed by Treatment visits (or continues an existing chart)
//! whose every grade is snapped to the injected vocabulary and whose trends
//! only move toward recovery. The macro trend is a pure function of course
//! progress; the seed drives only micro-variation.

pub mod clinical;
pub mod error;
pub mod generator;
pub mod jitter;
pub mod progress;
pub mod trajectory;

pub use crate::error::GenerateError;
pub use crate::generator::{GeneratedChart, GenerationOptions, Generator};
