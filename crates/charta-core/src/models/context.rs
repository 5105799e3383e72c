use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Body region a case is charted for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum BodyPart {
    Knee,
    Shoulder,
    Elbow,
    Wrist,
    Hip,
    Ankle,
    Neck,
    MidBack,
    LowerBack,
    Foot,
    Hand,
    Head,
}

impl BodyPart {
    pub const ALL: [BodyPart; 12] = [
        BodyPart::Knee,
        BodyPart::Shoulder,
        BodyPart::Elbow,
        BodyPart::Wrist,
        BodyPart::Hip,
        BodyPart::Ankle,
        BodyPart::Neck,
        BodyPart::MidBack,
        BodyPart::LowerBack,
        BodyPart::Foot,
        BodyPart::Hand,
        BodyPart::Head,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BodyPart::Knee => "knee",
            BodyPart::Shoulder => "shoulder",
            BodyPart::Elbow => "elbow",
            BodyPart::Wrist => "wrist",
            BodyPart::Hip => "hip",
            BodyPart::Ankle => "ankle",
            BodyPart::Neck => "neck",
            BodyPart::MidBack => "mid back",
            BodyPart::LowerBack => "lower back",
            BodyPart::Foot => "foot",
            BodyPart::Hand => "hand",
            BodyPart::Head => "head",
        }
    }

    /// Paired limbs carry a left and a right side; spinal regions are midline.
    pub fn is_paired(&self) -> bool {
        !matches!(
            self,
            BodyPart::Neck | BodyPart::MidBack | BodyPart::LowerBack | BodyPart::Head
        )
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BodyPart {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        BodyPart::ALL
            .into_iter()
            .find(|part| part.name() == normalized)
            .ok_or_else(|| CoreError::unknown("body part", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Laterality {
    Left,
    Right,
    Bilateral,
    Unspecified,
}

impl FromStr for Laterality {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Laterality::Left),
            "right" | "r" => Ok(Laterality::Right),
            "bilateral" | "both" => Ok(Laterality::Bilateral),
            "unspecified" | "" => Ok(Laterality::Unspecified),
            _ => Err(CoreError::unknown("laterality", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InsuranceCategory {
    Commercial,
    Medicare,
    Medicaid,
    WorkersComp,
    NoFault,
    SelfPay,
}

impl InsuranceCategory {
    /// Goal horizons in weeks: `(short_term, long_term)`.
    pub fn goal_horizon_weeks(&self) -> (u8, u8) {
        match self {
            InsuranceCategory::Medicare | InsuranceCategory::Medicaid => (4, 12),
            InsuranceCategory::WorkersComp | InsuranceCategory::NoFault => (6, 12),
            InsuranceCategory::Commercial | InsuranceCategory::SelfPay => (4, 8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Chronicity {
    Acute,
    Subacute,
    Chronic,
}

impl FromStr for Chronicity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "acute" => Ok(Chronicity::Acute),
            "subacute" | "sub-acute" => Ok(Chronicity::Subacute),
            "chronic" => Ok(Chronicity::Chronic),
            _ => Err(CoreError::unknown("chronicity", s)),
        }
    }
}

/// Five-band clinical severity, shared by the case severity and the ADL band.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Severity {
    #[serde(rename = "mild")]
    Mild,
    #[serde(rename = "mild to moderate")]
    MildToModerate,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "moderate to severe")]
    ModerateToSevere,
    #[serde(rename = "severe")]
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Mild,
        Severity::MildToModerate,
        Severity::Moderate,
        Severity::ModerateToSevere,
        Severity::Severe,
    ];

    /// 1 (mild) ..= 5 (severe).
    pub fn step(&self) -> u8 {
        match self {
            Severity::Mild => 1,
            Severity::MildToModerate => 2,
            Severity::Moderate => 3,
            Severity::ModerateToSevere => 4,
            Severity::Severe => 5,
        }
    }

    /// Saturates at the ends of the scale.
    pub fn from_step(step: u8) -> Self {
        match step {
            0 | 1 => Severity::Mild,
            2 => Severity::MildToModerate,
            3 => Severity::Moderate,
            4 => Severity::ModerateToSevere,
            _ => Severity::Severe,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::MildToModerate => "mild to moderate",
            Severity::Moderate => "moderate",
            Severity::ModerateToSevere => "moderate to severe",
            Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        Severity::ALL
            .into_iter()
            .find(|sev| sev.label() == normalized)
            .ok_or_else(|| CoreError::unknown("severity", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Female,
    Male,
    Unspecified,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Demographics {
    pub age: u8,
    pub sex: Sex,
}

impl Default for Demographics {
    fn default() -> Self {
        Self {
            age: 45,
            sex: Sex::Unspecified,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MedicalHistoryFlag {
    Pacemaker,
    MetalImplant,
    Pregnancy,
    BleedingDisorder,
    Diabetes,
}

impl MedicalHistoryFlag {
    pub fn contraindicates_electrical_stimulation(&self) -> bool {
        matches!(self, MedicalHistoryFlag::Pacemaker | MedicalHistoryFlag::Pregnancy)
    }
}

/// Whether any flag in `history` rules out electrical stimulation.
pub fn electrical_stimulation_contraindicated(history: &[MedicalHistoryFlag]) -> bool {
    history
        .iter()
        .any(MedicalHistoryFlag::contraindicates_electrical_stimulation)
}

/// Everything the engine knows about a case. Built once, never mutated by the
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalContext {
    pub body_part: BodyPart,
    pub laterality: Laterality,
    pub insurance: InsuranceCategory,
    pub chronicity: Chronicity,
    pub severity: Severity,
    pub local_pattern: String,
    pub systemic_pattern: String,
    pub baseline_pain: f64,
    #[serde(default)]
    pub demographics: Demographics,
    #[serde(default)]
    pub medical_history: Vec<MedicalHistoryFlag>,
    /// Template label for the IE pain frequency; derived from severity when absent.
    #[serde(default)]
    pub pain_frequency: Option<String>,
    /// IE symptom scale in percent; 100 when absent.
    #[serde(default)]
    pub symptom_percentage: Option<u8>,
}

impl ClinicalContext {
    pub fn new(
        body_part: BodyPart,
        laterality: Laterality,
        severity: Severity,
        baseline_pain: f64,
    ) -> Self {
        Self {
            body_part,
            laterality,
            insurance: InsuranceCategory::Commercial,
            chronicity: Chronicity::Chronic,
            severity,
            local_pattern: "Qi Stagnation and Blood Stasis".to_string(),
            systemic_pattern: "Liver Qi Stagnation".to_string(),
            baseline_pain,
            demographics: Demographics::default(),
            medical_history: Vec::new(),
            pain_frequency: None,
            symptom_percentage: None,
        }
    }

    pub fn with_insurance(mut self, insurance: InsuranceCategory) -> Self {
        self.insurance = insurance;
        self
    }

    pub fn with_chronicity(mut self, chronicity: Chronicity) -> Self {
        self.chronicity = chronicity;
        self
    }

    pub fn with_patterns(
        mut self,
        local_pattern: impl Into<String>,
        systemic_pattern: impl Into<String>,
    ) -> Self {
        self.local_pattern = local_pattern.into();
        self.systemic_pattern = systemic_pattern.into();
        self
    }

    pub fn with_history(mut self, flag: MedicalHistoryFlag) -> Self {
        if !self.medical_history.contains(&flag) {
            self.medical_history.push(flag);
        }
        self
    }

    pub fn with_demographics(mut self, demographics: Demographics) -> Self {
        self.demographics = demographics;
        self
    }

    pub fn with_pain_frequency(mut self, label: impl Into<String>) -> Self {
        self.pain_frequency = Some(label.into());
        self
    }

    pub fn with_symptom_percentage(mut self, percent: u8) -> Self {
        self.symptom_percentage = Some(percent.min(100));
        self
    }
}
