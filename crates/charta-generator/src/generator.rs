use jiff::Span;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use charta_core::models::context::{
    ClinicalContext, Laterality, electrical_stimulation_contraindicated,
};
use charta_core::models::document::{ChartDocument, VisitRecord};
use charta_core::models::goals::{GoalTargets, TreatmentGoals};
use charta_core::models::grade::Grade;
use charta_core::models::narrative::{
    AssessmentCategory, NarrativeDescriptor, NarrativeStatement, TrendSummary,
};
use charta_core::models::visit::{RomEntry, Side, VisitState, VisitType, normalize_point};
use charta_core::policy::ChartPolicy;
use charta_ladders::ladders::strength::MODIFIER_STEP;
use charta_ladders::proportionality::{severity_from_pain, tenderness_floor};
use charta_ladders::{Dimension, GradingModel, global};
use charta_narrative::{Measurements, derive};

use crate::clinical::{self, Movement};
use crate::error::GenerateError;
use crate::jitter::Jitter;
use crate::progress::progress;
use crate::trajectory::{
    FREQUENCY_DROP, ROM_JITTER_DEGREES, SIDE_OFFSET_STEPS, SPASM_DROP, TENDERNESS_DROP,
    TIGHTNESS_DROP, baseline_frequency, baseline_spasm, baseline_strength, baseline_tenderness,
    decayed, long_term_pain_target, pain_at, recovered_degrees, short_term_pain_target,
    strength_gain, symptom_band,
};

const DEFAULT_VISIT_COUNT: u32 = 12;
const DEFAULT_CADENCE_DAYS: u32 = 3;
const LOCAL_POINT_COUNT: usize = 6;
const PATTERN_POINT_COUNT: usize = 2;
/// Upper bound on points swapped between two visits, below the policy cap.
const MAX_ROTATION: usize = 2;
const MAX_REASONS: usize = 2;
/// Keeps date offsets inside the range `jiff::Span` accepts.
const MAX_DATE_OFFSET_DAYS: i64 = 3_000_000;

/// How many visits to generate and from where.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct GenerationOptions {
    /// Visits in the planned course. A fresh chart counts its IE.
    pub target_visit_count: u32,
    /// 1-based index of the first generated visit.
    pub start_visit_index: u32,
    /// Minted from entropy when absent and returned with the chart.
    pub seed: Option<u64>,
    /// Continue an existing chart from this visit instead of writing an IE.
    pub initial_state: Option<VisitState>,
    pub first_visit_date: Option<Date>,
    pub cadence_days: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            target_visit_count: DEFAULT_VISIT_COUNT,
            start_visit_index: 1,
            seed: None,
            initial_state: None,
            first_visit_date: None,
            cadence_days: DEFAULT_CADENCE_DAYS,
        }
    }
}

impl GenerationOptions {
    pub fn new(target_visit_count: u32) -> Self {
        Self {
            target_visit_count,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_start_index(mut self, start_visit_index: u32) -> Self {
        self.start_visit_index = start_visit_index;
        self
    }

    /// Continue after `state`; generation starts at the following index.
    pub fn continuing_from(mut self, state: VisitState) -> Self {
        self.start_visit_index = state.index.saturating_add(1);
        self.initial_state = Some(state);
        self
    }

    pub fn with_first_visit_date(mut self, date: Date) -> Self {
        self.first_visit_date = Some(date);
        self
    }

    pub fn with_cadence_days(mut self, cadence_days: u32) -> Self {
        self.cadence_days = cadence_days;
        self
    }
}

/// A generated sequence and the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeneratedChart {
    pub seed: u64,
    pub states: Vec<VisitState>,
}

impl GeneratedChart {
    pub fn to_document(&self, context: &ClinicalContext) -> ChartDocument {
        ChartDocument::from_states(context, &self.states)
    }
}

/// Seeded visit-sequence generator over an injected grading model.
pub struct Generator<'m> {
    model: &'m GradingModel,
    policy: ChartPolicy,
}

impl Generator<'static> {
    /// Generator over the process-wide model installed with
    /// [`charta_ladders::global::install`].
    pub fn installed(policy: ChartPolicy) -> Result<Self, GenerateError> {
        Ok(Self::new(global::model()?, policy))
    }
}

impl<'m> Generator<'m> {
    pub fn new(model: &'m GradingModel, policy: ChartPolicy) -> Self {
        Self { model, policy }
    }

    pub fn policy(&self) -> &ChartPolicy {
        &self.policy
    }

    /// Generate the full sequence. Only contract violations fail; once the
    /// inputs validate, every visit is produced.
    pub fn generate(
        &self,
        context: &ClinicalContext,
        options: &GenerationOptions,
    ) -> Result<GeneratedChart, GenerateError> {
        let catalog = clinical::movements(context.body_part)
            .ok_or(GenerateError::UnsupportedBodyPart(context.body_part))?;
        let last_index = validate(context, options)?;

        let seed = options.seed.unwrap_or_else(rand::random);
        let mut jitter = Jitter::new(seed);
        let start = options.start_visit_index;
        let total = options.target_visit_count;

        let mut states = Vec::with_capacity(total as usize);
        let (anchor, first_treatment, window_start, window_total) = match &options.initial_state {
            Some(state) => (state.clone(), start, start - 1, total.saturating_add(1)),
            None => {
                let date = visit_date(options, 0);
                let ie = self.initial_evaluation(context, catalog, start, date, &mut jitter)?;
                states.push(ie.clone());
                (ie, start + 1, start, total)
            }
        };

        let mut previous = anchor.clone();
        for index in first_treatment..=last_index {
            let local = progress(index, window_start, window_total);
            let date = visit_date(options, index - start);
            let state = self.treatment(context, &anchor, &previous, index, local, date, &mut jitter);
            previous = state.clone();
            states.push(state);
        }

        tracing::debug!(
            seed,
            body_part = %context.body_part,
            laterality = ?context.laterality,
            visits = states.len(),
            continuation = options.initial_state.is_some(),
            "generated visit sequence"
        );

        Ok(GeneratedChart { seed, states })
    }

    fn initial_evaluation(
        &self,
        context: &ClinicalContext,
        catalog: &[Movement],
        index: u32,
        date: Option<Date>,
        jitter: &mut Jitter,
    ) -> Result<VisitState, GenerateError> {
        let step = context.severity.step();
        let pain = context.baseline_pain;
        let pain_grade = self.model.snap(Dimension::Pain, pain);
        let severity = self.model.snap(Dimension::AdlSeverity, severity_from_pain(pain));
        let tightness = self.model.snap(Dimension::Tightness, f64::from(step));

        let tenderness_target = baseline_tenderness(step);
        let tenderness = match tenderness_floor(pain_grade.value) {
            Some(floor) => {
                let (_, worst) = self.model.best_and_worst(Dimension::Tenderness);
                self.model.snap_between(
                    Dimension::Tenderness,
                    tenderness_target.max(floor),
                    floor,
                    worst,
                )
            }
            None => self.model.snap(Dimension::Tenderness, tenderness_target),
        };

        let spasm = self.model.snap(Dimension::Spasm, baseline_spasm(step));
        let frequency = match &context.pain_frequency {
            Some(label) => {
                let value = self
                    .model
                    .value_of(Dimension::PainFrequency, label)
                    .ok_or_else(|| {
                        GenerateError::InvalidContext(format!("unreadable pain frequency {label:?}"))
                    })?;
                self.model.snap(Dimension::PainFrequency, value)
            }
            None => self
                .model
                .snap(Dimension::PainFrequency, baseline_frequency(step)),
        };
        let symptom_percent = symptom_band(
            context
                .symptom_percentage
                .map(f64::from)
                .unwrap_or(100.0),
        );

        let mut rom = Vec::new();
        let sides = chart_sides(context, jitter);
        for movement in catalog {
            for &(side, offset) in &sides {
                let side_step = step.saturating_add(offset).min(5);
                let limitation = clinical::baseline_limitation(side_step);
                let wobble = f64::from(jitter.tri()) * ROM_JITTER_DEGREES;
                let degrees = (movement.normal_degrees * (1.0 - limitation) + wobble)
                    .round()
                    .clamp(0.0, movement.normal_degrees);
                rom.push(RomEntry {
                    movement: movement.name.to_string(),
                    side,
                    degrees,
                    normal_degrees: movement.normal_degrees,
                    strength: self
                        .model
                        .snap(Dimension::Strength, baseline_strength(side_step)),
                });
            }
        }

        let (tongue, pulse) = clinical::tongue_and_pulse(&context.systemic_pattern);
        let goals = self.goals(context, &pain_grade, &tightness, &tenderness, &spasm, &rom);

        Ok(VisitState {
            index,
            visit_type: VisitType::InitialEvaluation,
            date,
            progress: 0.0,
            pain,
            pain_label: pain_grade.label,
            general_condition: clinical::general_condition(severity.value).to_string(),
            severity,
            tightness,
            tenderness,
            spasm,
            frequency,
            symptom_percent,
            rom,
            tongue: tongue.to_string(),
            pulse: pulse.to_string(),
            acupoints: self.select_points(context, jitter),
            electrical_stimulation: !electrical_stimulation_contraindicated(
                &context.medical_history,
            ),
            diagnosis: clinical::diagnosis(
                context.body_part,
                context.laterality,
                &context.local_pattern,
                &context.systemic_pattern,
            ),
            goals: Some(goals),
            trend: TrendSummary::stable(),
            narrative: NarrativeDescriptor::baseline(),
            statement: None,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn treatment(
        &self,
        context: &ClinicalContext,
        anchor: &VisitState,
        previous: &VisitState,
        index: u32,
        local_progress: f64,
        date: Option<Date>,
        jitter: &mut Jitter,
    ) -> VisitState {
        let p = local_progress;
        let anchor_progress = anchor.progress.clamp(0.0, 1.0);
        let recorded_progress =
            (anchor_progress + (1.0 - anchor_progress) * p).max(previous.progress);

        let anchor_pain = self.label_value(Dimension::Pain, &anchor.pain_label, anchor.pain);
        let previous_pain = self.label_value(Dimension::Pain, &previous.pain_label, previous.pain);
        let target = short_term_pain_target(anchor.pain, context.chronicity);
        let pain = pain_at(anchor.pain, target, p).min(previous.pain);
        let pain_grade = self.toward_best(Dimension::Pain, pain, previous_pain);

        let severity = self.toward_best(
            Dimension::AdlSeverity,
            severity_from_pain(pain),
            previous.severity.value,
        );
        let tightness = self.decay(
            Dimension::Tightness,
            &anchor.tightness,
            &previous.tightness,
            TIGHTNESS_DROP,
            p,
        );
        let tenderness = self.tenderness(anchor, previous, &pain_grade, p);
        let spasm = self.decay(Dimension::Spasm, &anchor.spasm, &previous.spasm, SPASM_DROP, p);
        let frequency = self.decay(
            Dimension::PainFrequency,
            &anchor.frequency,
            &previous.frequency,
            FREQUENCY_DROP,
            p,
        );

        let remaining = if anchor_pain > 0.0 {
            pain_grade.value / anchor_pain
        } else {
            1.0
        };
        let symptom_percent = symptom_band(f64::from(anchor.symptom_percent) * remaining)
            .min(previous.symptom_percent);

        let mut rom: Vec<RomEntry> = anchor
            .rom
            .iter()
            .map(|row| {
                let before = previous
                    .rom
                    .iter()
                    .find(|r| r.movement == row.movement && r.side == row.side)
                    .unwrap_or(row);
                let wobble = f64::from(jitter.tri()) * ROM_JITTER_DEGREES;
                let degrees = (recovered_degrees(row.degrees, row.normal_degrees, p) + wobble)
                    .round()
                    .min(row.normal_degrees)
                    .max(before.degrees);
                let (best_strength, _) = self.model.best_and_worst(Dimension::Strength);
                let strength = self.model.snap_between(
                    Dimension::Strength,
                    row.strength.value + strength_gain(p),
                    before.strength.value,
                    best_strength,
                );
                RomEntry {
                    movement: row.movement.clone(),
                    side: row.side,
                    degrees,
                    normal_degrees: row.normal_degrees,
                    strength,
                }
            })
            .collect();
        if same_rom_block(&rom, &previous.rom) {
            nudge_rom(&mut rom, jitter);
        }

        let mut state = VisitState {
            index,
            visit_type: VisitType::Treatment,
            date,
            progress: recorded_progress,
            pain,
            pain_label: pain_grade.label,
            general_condition: clinical::general_condition(severity.value).to_string(),
            severity,
            tightness,
            tenderness,
            spasm,
            frequency,
            symptom_percent,
            rom,
            tongue: anchor.tongue.clone(),
            pulse: anchor.pulse.clone(),
            acupoints: self.rotate_points(context, &previous.acupoints, jitter),
            electrical_stimulation: !electrical_stimulation_contraindicated(
                &context.medical_history,
            ),
            diagnosis: anchor.diagnosis.clone(),
            goals: None,
            trend: TrendSummary::stable(),
            narrative: NarrativeDescriptor::baseline(),
            statement: None,
        };

        let before = Measurements::from_record(self.model, &VisitRecord::from(previous));
        let after = Measurements::from_record(self.model, &VisitRecord::from(&state));
        let descriptor = derive(self.model, &before, &after, &self.policy.materiality);
        state.statement = Some(compose(&descriptor, jitter));
        state.trend = descriptor.trend.clone();
        state.narrative = descriptor;
        state
    }

    fn label_value(&self, dimension: Dimension, label: &str, fallback: f64) -> f64 {
        self.model.value_of(dimension, label).unwrap_or(fallback)
    }

    /// Snap `value` among labels no worse than `previous`.
    fn toward_best(&self, dimension: Dimension, value: f64, previous: f64) -> Grade {
        let (best, _) = self.model.best_and_worst(dimension);
        self.model.snap_between(dimension, value, best, previous)
    }

    fn decay(
        &self,
        dimension: Dimension,
        anchor: &Grade,
        previous: &Grade,
        max_drop: f64,
        progress: f64,
    ) -> Grade {
        let (best, _) = self.model.best_and_worst(dimension);
        let value = decayed(anchor.value, max_drop, best, progress);
        self.toward_best(dimension, value, previous.value)
    }

    /// Tenderness decays like the other grades but stays at or above the
    /// floor the current pain implies.
    fn tenderness(
        &self,
        anchor: &VisitState,
        previous: &VisitState,
        pain: &Grade,
        progress: f64,
    ) -> Grade {
        let Some(floor) = tenderness_floor(pain.value) else {
            return self.decay(
                Dimension::Tenderness,
                &anchor.tenderness,
                &previous.tenderness,
                TENDERNESS_DROP,
                progress,
            );
        };
        let (best, _) = self.model.best_and_worst(Dimension::Tenderness);
        let value = decayed(anchor.tenderness.value, TENDERNESS_DROP, best, progress).max(floor);
        let low = floor.min(previous.tenderness.value);
        self.model
            .snap_between(Dimension::Tenderness, value, low, previous.tenderness.value)
    }

    fn goals(
        &self,
        context: &ClinicalContext,
        pain: &Grade,
        tightness: &Grade,
        tenderness: &Grade,
        spasm: &Grade,
        rom: &[RomEntry],
    ) -> TreatmentGoals {
        let (short_weeks, long_weeks) = context.insurance.goal_horizon_weeks();

        let short_pain = self.toward_best(
            Dimension::Pain,
            short_term_pain_target(context.baseline_pain, context.chronicity),
            pain.value,
        );
        let long_pain = self.toward_best(
            Dimension::Pain,
            long_term_pain_target(context.baseline_pain, context.chronicity),
            short_pain.value,
        );

        let lowered = |dimension: Dimension, grade: &Grade, steps: f64| {
            self.toward_best(dimension, grade.value - steps, grade.value)
        };

        let weakest = rom
            .iter()
            .map(|row| row.strength.value)
            .reduce(f64::min)
            .unwrap_or(4.0);
        let (best_strength, _) = self.model.best_and_worst(Dimension::Strength);
        let stronger = |steps: f64| {
            self.model.snap_between(
                Dimension::Strength,
                weakest + steps * MODIFIER_STEP,
                weakest,
                best_strength,
            )
        };

        TreatmentGoals {
            short_term: GoalTargets {
                weeks: short_weeks,
                pain: short_pain.label,
                tightness: lowered(Dimension::Tightness, tightness, 1.0).label,
                tenderness: lowered(Dimension::Tenderness, tenderness, 1.0).label,
                spasm: lowered(Dimension::Spasm, spasm, 1.0).label,
                strength: stronger(2.0).label,
            },
            long_term: GoalTargets {
                weeks: long_weeks,
                pain: long_pain.label,
                tightness: lowered(Dimension::Tightness, tightness, 2.0).label,
                tenderness: lowered(Dimension::Tenderness, tenderness, 2.0).label,
                spasm: lowered(Dimension::Spasm, spasm, 2.0).label,
                strength: stronger(4.0).label,
            },
        }
    }

    fn select_points(&self, context: &ClinicalContext, jitter: &mut Jitter) -> Vec<String> {
        let local = clinical::local_points(context.body_part);
        let mut points: Vec<String> = jitter
            .sample(local, LOCAL_POINT_COUNT.min(local.len()))
            .into_iter()
            .map(String::from)
            .collect();

        let distal: Vec<&str> =
            clinical::pattern_points(&context.local_pattern, &context.systemic_pattern)
                .into_iter()
                .filter(|p| !contains_point(&points, p))
                .collect();
        points.extend(
            jitter
                .sample(&distal, PATTERN_POINT_COUNT.min(distal.len()))
                .into_iter()
                .map(String::from),
        );
        points
    }

    /// Swap a few points while keeping the configured share of the previous
    /// visit's set.
    fn rotate_points(
        &self,
        context: &ClinicalContext,
        previous: &[String],
        jitter: &mut Jitter,
    ) -> Vec<String> {
        if previous.is_empty() {
            return self.select_points(context, jitter);
        }

        let min_overlap = self.policy.min_acupoint_overlap.clamp(0.0, 1.0);
        let allowed = (previous.len() as f64 * (1.0 - min_overlap) + 1e-9).floor() as usize;

        let mut pool: Vec<&str> = Vec::new();
        let candidates = clinical::local_points(context.body_part)
            .iter()
            .copied()
            .chain(clinical::pattern_points(
                &context.local_pattern,
                &context.systemic_pattern,
            ));
        for point in candidates {
            if !contains_point(previous, point) && !pool.contains(&point) {
                pool.push(point);
            }
        }

        let swaps = jitter.up_to(allowed.min(MAX_ROTATION).min(pool.len()));
        let mut points = previous.to_vec();
        if swaps == 0 {
            return points;
        }
        let mut positions: Vec<usize> = (0..points.len()).collect();
        jitter.shuffle(&mut positions);
        let incoming = jitter.sample(&pool, swaps);
        for (position, point) in positions.into_iter().zip(incoming) {
            points[position] = point.to_string();
        }
        points
    }
}

fn validate(context: &ClinicalContext, options: &GenerationOptions) -> Result<u32, GenerateError> {
    if options.target_visit_count == 0 {
        return Err(GenerateError::InvalidOptions(
            "target visit count must be at least 1".into(),
        ));
    }
    if options.start_visit_index == 0 {
        return Err(GenerateError::InvalidOptions(
            "visit indices start at 1".into(),
        ));
    }
    let last_index = options
        .start_visit_index
        .checked_add(options.target_visit_count)
        .map(|end| end - 1)
        .ok_or_else(|| GenerateError::InvalidOptions("visit index overflows".into()))?;
    if let Some(state) = &options.initial_state
        && state.index >= options.start_visit_index
    {
        return Err(GenerateError::InvalidOptions(format!(
            "initial state index {} must precede start index {}",
            state.index, options.start_visit_index
        )));
    }
    if !context.baseline_pain.is_finite() || !(0.0..=10.0).contains(&context.baseline_pain) {
        return Err(GenerateError::InvalidContext(format!(
            "baseline pain {} outside 0-10",
            context.baseline_pain
        )));
    }
    if let Some(percent) = context.symptom_percentage
        && percent > 100
    {
        return Err(GenerateError::InvalidContext(format!(
            "symptom percentage {percent} above 100"
        )));
    }
    Ok(last_index)
}

/// Sides charted for the region. On bilateral charts one seeded side
/// trails the other.
fn chart_sides(context: &ClinicalContext, jitter: &mut Jitter) -> Vec<(Side, u8)> {
    if !context.body_part.is_paired() {
        return vec![(Side::Midline, 0)];
    }
    match context.laterality {
        Laterality::Left => vec![(Side::Left, 0)],
        Laterality::Right | Laterality::Unspecified => vec![(Side::Right, 0)],
        Laterality::Bilateral => {
            let trailing = if jitter.coin() { Side::Left } else { Side::Right };
            [Side::Left, Side::Right]
                .into_iter()
                .map(|side| {
                    let offset = if side == trailing { SIDE_OFFSET_STEPS } else { 0 };
                    (side, offset)
                })
                .collect()
        }
    }
}

/// Whether two ROM blocks would render identically.
fn same_rom_block(current: &[RomEntry], previous: &[RomEntry]) -> bool {
    current.len() == previous.len()
        && current.iter().zip(previous).all(|(a, b)| {
            a.movement == b.movement
                && a.side == b.side
                && a.degrees == b.degrees
                && a.strength.label == b.strength.label
        })
}

/// Raise one seeded row by one or two degrees, staying at or below normal.
/// A block with every row at normal is left as is.
fn nudge_rom(rom: &mut [RomEntry], jitter: &mut Jitter) {
    let open: Vec<usize> = rom
        .iter()
        .enumerate()
        .filter(|(_, row)| row.degrees + 1.0 <= row.normal_degrees)
        .map(|(position, _)| position)
        .collect();
    if let Some(&position) = jitter.sample(&open, 1).first() {
        let row = &mut rom[position];
        let step = 1.0 + jitter.up_to(1) as f64;
        row.degrees = (row.degrees + step).min(row.normal_degrees);
    }
}

/// Pick the strongest supported assessment and up to two supported reasons.
fn compose(descriptor: &NarrativeDescriptor, jitter: &mut Jitter) -> NarrativeStatement {
    let assessment = descriptor
        .legal_assessments
        .first()
        .copied()
        .unwrap_or(AssessmentCategory::SimilarSymptoms);
    let count = MAX_REASONS.min(descriptor.legal_reasons.len());
    let mut reasons = jitter.sample(&descriptor.legal_reasons, count);
    reasons.sort();
    NarrativeStatement {
        assessment,
        reasons,
    }
}

fn visit_date(options: &GenerationOptions, offset: u32) -> Option<Date> {
    let first = options.first_visit_date?;
    let days = i64::from(offset)
        .saturating_mul(i64::from(options.cadence_days))
        .min(MAX_DATE_OFFSET_DAYS);
    Some(first.saturating_add(Span::new().days(days)))
}

fn contains_point(points: &[String], candidate: &str) -> bool {
    let candidate = normalize_point(candidate);
    points.iter().any(|p| normalize_point(p) == candidate)
}
