use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::goals::TreatmentGoals;
use super::grade::Grade;
use super::narrative::{NarrativeDescriptor, NarrativeStatement, TrendSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VisitType {
    InitialEvaluation,
    Treatment,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Side {
    Left,
    Right,
    Midline,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Midline => Side::Midline,
        }
    }
}

/// One range-of-motion row: a joint movement on one side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RomEntry {
    pub movement: String,
    pub side: Side,
    pub degrees: f64,
    pub normal_degrees: f64,
    pub strength: Grade,
}

/// One generated visit. Final once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisitState {
    pub index: u32,
    pub visit_type: VisitType,
    pub date: Option<jiff::civil::Date>,
    pub progress: f64,
    pub pain: f64,
    pub pain_label: String,
    /// ADL severity band, derived from pain.
    pub severity: Grade,
    pub tightness: Grade,
    pub tenderness: Grade,
    pub spasm: Grade,
    pub frequency: Grade,
    pub symptom_percent: u8,
    pub rom: Vec<RomEntry>,
    pub tongue: String,
    pub pulse: String,
    pub general_condition: String,
    pub acupoints: Vec<String>,
    pub electrical_stimulation: bool,
    pub diagnosis: Vec<String>,
    pub goals: Option<TreatmentGoals>,
    pub trend: TrendSummary,
    pub narrative: NarrativeDescriptor,
    pub statement: Option<NarrativeStatement>,
}

/// Render a symptom percentage as the 10-point band written in notes,
/// e.g. 70 -> "60%-70%".
pub fn symptom_scale_label(percent: u8) -> String {
    let upper = (u32::from(percent.min(100)).div_ceil(10) * 10) as u8;
    if upper == 0 {
        return "0%".to_string();
    }
    format!("{}%-{}%", upper - 10, upper)
}

/// Upper bound of a written symptom band ("60%-70%" -> 70).
pub fn parse_symptom_scale(label: &str) -> Option<u8> {
    label
        .split(|c: char| !c.is_ascii_digit())
        .filter_map(|part| part.parse::<u8>().ok())
        .filter(|value| *value <= 100)
        .max()
}

/// Fraction of treatment points shared by two consecutive visits,
/// measured against the larger of the two sets.
pub fn acupoint_overlap(previous: &[String], current: &[String]) -> f64 {
    let prev: BTreeSet<String> = previous.iter().map(|p| normalize_point(p)).collect();
    let cur: BTreeSet<String> = current.iter().map(|p| normalize_point(p)).collect();
    let denominator = prev.len().max(cur.len());
    if denominator == 0 {
        return 1.0;
    }
    prev.intersection(&cur).count() as f64 / denominator as f64
}

/// Point names compare without case, whitespace or hyphens ("GB-34" is "gb34").
pub fn normalize_point(point: &str) -> String {
    point
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>()
        .to_ascii_uppercase()
}
