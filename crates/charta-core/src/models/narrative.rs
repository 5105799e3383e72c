use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    Improved,
    Stable,
    Worsened,
}

/// The dimensions a narrative can talk about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NarrativeDimension {
    Pain,
    Frequency,
    Adl,
    Symptom,
    Tightness,
    Tenderness,
    Spasm,
    Rom,
    Strength,
}

impl NarrativeDimension {
    pub const ALL: [NarrativeDimension; 9] = [
        NarrativeDimension::Pain,
        NarrativeDimension::Frequency,
        NarrativeDimension::Adl,
        NarrativeDimension::Symptom,
        NarrativeDimension::Tightness,
        NarrativeDimension::Tenderness,
        NarrativeDimension::Spasm,
        NarrativeDimension::Rom,
        NarrativeDimension::Strength,
    ];

    /// Findings the examiner measures, as opposed to what the patient reports.
    pub fn is_objective(&self) -> bool {
        matches!(
            self,
            NarrativeDimension::Tightness
                | NarrativeDimension::Tenderness
                | NarrativeDimension::Spasm
                | NarrativeDimension::Rom
                | NarrativeDimension::Strength
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            NarrativeDimension::Pain => "pain",
            NarrativeDimension::Frequency => "pain frequency",
            NarrativeDimension::Adl => "ADL",
            NarrativeDimension::Symptom => "symptom scale",
            NarrativeDimension::Tightness => "tightness",
            NarrativeDimension::Tenderness => "tenderness",
            NarrativeDimension::Spasm => "spasm",
            NarrativeDimension::Rom => "range of motion",
            NarrativeDimension::Strength => "strength",
        }
    }
}

/// Per-dimension trend between two consecutive visits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendSummary {
    pub pain: Trend,
    pub frequency: Trend,
    pub adl: Trend,
    pub symptom: Trend,
    pub tightness: Trend,
    pub tenderness: Trend,
    pub spasm: Trend,
    pub rom: Trend,
    pub strength: Trend,
}

impl TrendSummary {
    pub fn stable() -> Self {
        Self {
            pain: Trend::Stable,
            frequency: Trend::Stable,
            adl: Trend::Stable,
            symptom: Trend::Stable,
            tightness: Trend::Stable,
            tenderness: Trend::Stable,
            spasm: Trend::Stable,
            rom: Trend::Stable,
            strength: Trend::Stable,
        }
    }

    pub fn get(&self, dimension: NarrativeDimension) -> Trend {
        match dimension {
            NarrativeDimension::Pain => self.pain,
            NarrativeDimension::Frequency => self.frequency,
            NarrativeDimension::Adl => self.adl,
            NarrativeDimension::Symptom => self.symptom,
            NarrativeDimension::Tightness => self.tightness,
            NarrativeDimension::Tenderness => self.tenderness,
            NarrativeDimension::Spasm => self.spasm,
            NarrativeDimension::Rom => self.rom,
            NarrativeDimension::Strength => self.strength,
        }
    }

    pub fn set(&mut self, dimension: NarrativeDimension, trend: Trend) {
        let slot = match dimension {
            NarrativeDimension::Pain => &mut self.pain,
            NarrativeDimension::Frequency => &mut self.frequency,
            NarrativeDimension::Adl => &mut self.adl,
            NarrativeDimension::Symptom => &mut self.symptom,
            NarrativeDimension::Tightness => &mut self.tightness,
            NarrativeDimension::Tenderness => &mut self.tenderness,
            NarrativeDimension::Spasm => &mut self.spasm,
            NarrativeDimension::Rom => &mut self.rom,
            NarrativeDimension::Strength => &mut self.strength,
        };
        *slot = trend;
    }

    pub fn with(&self, trend: Trend) -> Vec<NarrativeDimension> {
        NarrativeDimension::ALL
            .into_iter()
            .filter(|d| self.get(*d) == trend)
            .collect()
    }
}

/// Net direction across all dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MeasuredDirection {
    Improving,
    Unchanged,
    Mixed,
    Worsening,
}

/// High-level assessment language. The subjective and assessment sentences
/// of a visit are both rendered from one category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentCategory {
    Improvement,
    SlightImprovement,
    SimilarSymptoms,
    Exacerbation,
}

impl AssessmentCategory {
    pub const ALL: [AssessmentCategory; 4] = [
        AssessmentCategory::Improvement,
        AssessmentCategory::SlightImprovement,
        AssessmentCategory::SimilarSymptoms,
        AssessmentCategory::Exacerbation,
    ];

    pub fn assessment_text(&self) -> &'static str {
        match self {
            AssessmentCategory::Improvement => "presents with improvement of symptoms",
            AssessmentCategory::SlightImprovement => "presents with slight improvement of symptoms",
            AssessmentCategory::SimilarSymptoms => "presents with similar symptoms",
            AssessmentCategory::Exacerbation => "presents with exacerbation of symptoms",
        }
    }

    pub fn subjective_text(&self) -> &'static str {
        match self {
            AssessmentCategory::Improvement => "Patient reports feeling better since the last treatment",
            AssessmentCategory::SlightImprovement => {
                "Patient reports feeling slightly better since the last treatment"
            }
            AssessmentCategory::SimilarSymptoms => {
                "Patient reports symptoms about the same as the last treatment"
            }
            AssessmentCategory::Exacerbation => {
                "Patient reports symptoms flared up since the last treatment"
            }
        }
    }

    pub fn claims_improvement(&self) -> bool {
        matches!(
            self,
            AssessmentCategory::Improvement | AssessmentCategory::SlightImprovement
        )
    }
}

/// A "reason" phrase tied to exactly one dimension improving.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReasonPhrase {
    DecreasedPainIntensity,
    LessFrequentPain,
    EasierDailyActivities,
    LongerActivityTolerance,
    ReducedSymptoms,
    ReducedTightness,
    DecreasedTenderness,
    FewerSpasms,
    IncreasedRangeOfMotion,
    ImprovedStrength,
}

impl ReasonPhrase {
    pub const ALL: [ReasonPhrase; 10] = [
        ReasonPhrase::DecreasedPainIntensity,
        ReasonPhrase::LessFrequentPain,
        ReasonPhrase::EasierDailyActivities,
        ReasonPhrase::LongerActivityTolerance,
        ReasonPhrase::ReducedSymptoms,
        ReasonPhrase::ReducedTightness,
        ReasonPhrase::DecreasedTenderness,
        ReasonPhrase::FewerSpasms,
        ReasonPhrase::IncreasedRangeOfMotion,
        ReasonPhrase::ImprovedStrength,
    ];

    pub fn dimension(&self) -> NarrativeDimension {
        match self {
            ReasonPhrase::DecreasedPainIntensity => NarrativeDimension::Pain,
            ReasonPhrase::LessFrequentPain => NarrativeDimension::Frequency,
            ReasonPhrase::EasierDailyActivities | ReasonPhrase::LongerActivityTolerance => {
                NarrativeDimension::Adl
            }
            ReasonPhrase::ReducedSymptoms => NarrativeDimension::Symptom,
            ReasonPhrase::ReducedTightness => NarrativeDimension::Tightness,
            ReasonPhrase::DecreasedTenderness => NarrativeDimension::Tenderness,
            ReasonPhrase::FewerSpasms => NarrativeDimension::Spasm,
            ReasonPhrase::IncreasedRangeOfMotion => NarrativeDimension::Rom,
            ReasonPhrase::ImprovedStrength => NarrativeDimension::Strength,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            ReasonPhrase::DecreasedPainIntensity => "decreased pain intensity",
            ReasonPhrase::LessFrequentPain => "pain episodes are less frequent",
            ReasonPhrase::EasierDailyActivities => {
                "able to perform daily activities with less difficulty"
            }
            ReasonPhrase::LongerActivityTolerance => "can stand and walk for longer periods",
            ReasonPhrase::ReducedSymptoms => "overall symptoms reduced",
            ReasonPhrase::ReducedTightness => "reduced muscle tightness",
            ReasonPhrase::DecreasedTenderness => "decreased tenderness on palpation",
            ReasonPhrase::FewerSpasms => "fewer muscle spasms",
            ReasonPhrase::IncreasedRangeOfMotion => "increased range of motion",
            ReasonPhrase::ImprovedStrength => "improved muscle strength",
        }
    }
}

/// What language is legal for a visit, derived from measured deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NarrativeDescriptor {
    pub trend: TrendSummary,
    pub direction: MeasuredDirection,
    pub legal_reasons: Vec<ReasonPhrase>,
    pub legal_assessments: Vec<AssessmentCategory>,
}

impl NarrativeDescriptor {
    /// Descriptor for a visit with no predecessor.
    pub fn baseline() -> Self {
        Self {
            trend: TrendSummary::stable(),
            direction: MeasuredDirection::Unchanged,
            legal_reasons: Vec::new(),
            legal_assessments: Vec::new(),
        }
    }
}

/// The language actually chosen for a generated visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NarrativeStatement {
    pub assessment: AssessmentCategory,
    pub reasons: Vec<ReasonPhrase>,
}
