//! Macro trend: continuous targets as pure functions of the anchor visit
//! and course progress. Nothing here touches the random source.

use charta_core::models::context::Chronicity;
use charta_ladders::ladders::strength::MODIFIER_STEP;

use crate::progress::ease;

/// Severity steps the trailing side of a bilateral chart sits behind the
/// leading side.
pub const SIDE_OFFSET_STEPS: u8 = 1;

/// Share of the missing range recovered by the end of the course.
pub const ROM_RECOVERY: f64 = 0.6;

/// Degrees per jitter step.
pub const ROM_JITTER_DEGREES: f64 = 2.0;

/// Maximum drops over a full course, in ladder steps.
pub const FREQUENCY_DROP: f64 = 1.0;
pub const TIGHTNESS_DROP: f64 = 1.5;
pub const TENDERNESS_DROP: f64 = 2.0;
pub const SPASM_DROP: f64 = 2.0;

/// Pain-free patients are rarely charted; the short-term target never
/// drops below this unless the baseline already does.
const MIN_PAIN_TARGET: f64 = 1.0;

pub fn pain_reduction(chronicity: Chronicity) -> f64 {
    match chronicity {
        Chronicity::Acute => 0.5,
        Chronicity::Subacute => 0.4,
        Chronicity::Chronic => 0.3,
    }
}

pub fn short_term_pain_target(baseline: f64, chronicity: Chronicity) -> f64 {
    let target = baseline * (1.0 - pain_reduction(chronicity));
    target.max(MIN_PAIN_TARGET).min(baseline)
}

pub fn long_term_pain_target(baseline: f64, chronicity: Chronicity) -> f64 {
    let short = short_term_pain_target(baseline, chronicity);
    (short * (1.0 - pain_reduction(chronicity))).min(short).max(0.0)
}

/// Pain on the way from `baseline` to `target`.
pub fn pain_at(baseline: f64, target: f64, progress: f64) -> f64 {
    baseline - (baseline - target) * ease(progress)
}

/// A lower-is-better grade decayed from its anchor value, not past `best`.
pub fn decayed(anchor: f64, max_drop: f64, best: f64, progress: f64) -> f64 {
    (anchor - max_drop * ease(progress)).max(best)
}

/// ROM degrees recovered toward normal.
pub fn recovered_degrees(anchor: f64, normal: f64, progress: f64) -> f64 {
    anchor + (normal - anchor).max(0.0) * ROM_RECOVERY * ease(progress)
}

/// Strength modifier steps gained: one past 45% of the course, two past 70%.
pub fn strength_gain(progress: f64) -> f64 {
    let steps = if progress >= 0.70 {
        2.0
    } else if progress >= 0.45 {
        1.0
    } else {
        0.0
    };
    steps * MODIFIER_STEP
}

/// Baseline strength for a severity step: mild 4+/5 down to severe 3/5,
/// one modifier per step.
pub fn baseline_strength(step: u8) -> f64 {
    4.0 + (2.0 - f64::from(step)) * MODIFIER_STEP
}

pub fn baseline_tenderness(step: u8) -> f64 {
    match step {
        0 | 1 => 1.0,
        2 | 3 => 2.0,
        4 => 3.0,
        _ => 4.0,
    }
}

pub fn baseline_spasm(step: u8) -> f64 {
    match step {
        0..=2 => 1.0,
        3 => 2.0,
        _ => 3.0,
    }
}

pub fn baseline_frequency(step: u8) -> f64 {
    match step {
        0 | 1 => 1.0,
        2 => 2.0,
        3 | 4 => 3.0,
        _ => 4.0,
    }
}

/// Round a percentage up to the 10-point band it is written in.
pub fn symptom_band(percent: f64) -> u8 {
    let clamped = percent.clamp(0.0, 100.0);
    ((clamped / 10.0 - 1e-9).ceil().max(0.0) * 10.0) as u8
}
