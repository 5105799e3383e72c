use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::context::{ClinicalContext, MedicalHistoryFlag};
use super::goals::TreatmentGoals;
use super::visit::{Side, VisitState, VisitType, symptom_scale_label};
use crate::error::CoreError;

/// A chart as written: what the validator audits. Generated charts and
/// parsed real-world documents both land in this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartDocument {
    #[serde(default)]
    pub medical_history: Vec<MedicalHistoryFlag>,
    #[serde(default)]
    pub visits: Vec<VisitRecord>,
}

impl ChartDocument {
    pub fn from_states(context: &ClinicalContext, states: &[VisitState]) -> Self {
        Self {
            medical_history: context.medical_history.clone(),
            visits: states.iter().map(VisitRecord::from).collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One visit note. Every label is optional because real notes omit things;
/// absence is reported by the validator, not rejected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisitRecord {
    pub index: u32,
    pub visit_type: VisitType,
    #[serde(default)]
    pub date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub diagnosis: Vec<String>,
    #[serde(default)]
    pub pain: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub tightness: Option<String>,
    #[serde(default)]
    pub tenderness: Option<String>,
    #[serde(default)]
    pub spasm: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub symptom_scale: Option<String>,
    #[serde(default)]
    pub rom: Vec<RomRecord>,
    #[serde(default)]
    pub tongue: Option<String>,
    #[serde(default)]
    pub pulse: Option<String>,
    #[serde(default)]
    pub acupoints: Vec<String>,
    #[serde(default)]
    pub electrical_stimulation: bool,
    #[serde(default)]
    pub goals: Option<TreatmentGoals>,
    #[serde(default)]
    pub narrative: Option<WrittenNarrative>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RomRecord {
    pub movement: String,
    pub side: Side,
    #[serde(default)]
    pub degrees: Option<f64>,
    #[serde(default)]
    pub strength: Option<String>,
}

/// The change language a note actually contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WrittenNarrative {
    /// How the patient describes the change since the last treatment.
    #[serde(default)]
    pub subjective: Option<String>,
    #[serde(default)]
    pub assessment: Option<String>,
    #[serde(default)]
    pub reasons: Vec<String>,
}

impl From<&VisitState> for VisitRecord {
    fn from(state: &VisitState) -> Self {
        let narrative = state.statement.as_ref().map(|statement| WrittenNarrative {
            subjective: Some(statement.assessment.subjective_text().to_string()),
            assessment: Some(statement.assessment.assessment_text().to_string()),
            reasons: statement
                .reasons
                .iter()
                .map(|reason| reason.text().to_string())
                .collect(),
        });

        Self {
            index: state.index,
            visit_type: state.visit_type,
            date: state.date,
            diagnosis: state.diagnosis.clone(),
            pain: Some(state.pain_label.clone()),
            severity: Some(state.severity.label.clone()),
            tightness: Some(state.tightness.label.clone()),
            tenderness: Some(state.tenderness.label.clone()),
            spasm: Some(state.spasm.label.clone()),
            frequency: Some(state.frequency.label.clone()),
            symptom_scale: Some(symptom_scale_label(state.symptom_percent)),
            rom: state
                .rom
                .iter()
                .map(|entry| RomRecord {
                    movement: entry.movement.clone(),
                    side: entry.side,
                    degrees: Some(entry.degrees),
                    strength: Some(entry.strength.label.clone()),
                })
                .collect(),
            tongue: Some(state.tongue.clone()),
            pulse: Some(state.pulse.clone()),
            acupoints: state.acupoints.clone(),
            electrical_stimulation: state.electrical_stimulation,
            goals: state.goals.clone(),
            narrative,
        }
    }
}
