use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Minimum deltas before a change is narratively reportable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct MaterialityThresholds {
    /// Pain points (0-10 scale).
    pub pain: f64,
    /// Steps on the tightness, tenderness, spasm, frequency and ADL ladders.
    pub grade: f64,
    /// Mean degrees across matched ROM rows.
    pub rom_degrees: f64,
    /// Mean strength value across matched ROM rows (one `+`/`-` step is 1/3).
    pub strength: f64,
    /// Symptom-scale percentage points.
    pub symptom_percent: f64,
}

impl Default for MaterialityThresholds {
    fn default() -> Self {
        Self {
            pain: 0.5,
            grade: 0.5,
            rom_degrees: 3.0,
            strength: 0.3,
            symptom_percent: 5.0,
        }
    }
}

/// Policy shared by the generator and the validator, so what one promises
/// and the other checks come from the same numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ChartPolicy {
    /// Minimum share of treatment points carried between consecutive visits.
    pub min_acupoint_overlap: f64,
    pub materiality: MaterialityThresholds,
}

impl Default for ChartPolicy {
    fn default() -> Self {
        Self {
            min_acupoint_overlap: 0.5,
            materiality: MaterialityThresholds::default(),
        }
    }
}
