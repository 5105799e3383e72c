use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A label snapped onto a grading ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Grade {
    /// Template-legal label, always a member of the injected allow-list.
    pub label: String,
    /// Position of the label on the ladder's numeric scale.
    pub value: f64,
    /// Index of the label among the allowed labels ordered by ascending value.
    pub rank: u32,
}
