use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Target labels for one goal horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GoalTargets {
    pub weeks: u8,
    pub pain: String,
    pub tightness: String,
    pub tenderness: String,
    pub spasm: String,
    pub strength: String,
}

/// Goals written into the Initial Evaluation plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentGoals {
    pub short_term: GoalTargets,
    pub long_term: GoalTargets,
}
