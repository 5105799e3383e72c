//! Per-region clinical tables: movement catalog, treatment points, tongue
//! and pulse by pattern, diagnosis codes.

pub mod diagnosis;
pub mod movements;
pub mod patterns;
pub mod points;

pub use diagnosis::diagnosis;
pub use movements::{Movement, baseline_limitation, movements};
pub use patterns::{general_condition, tongue_and_pulse};
pub use points::{local_points, pattern_points};
