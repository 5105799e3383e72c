//! Bulk self-audit: generate a chart for every supported body part,
//! laterality and seed, validate it, and collect any chart the validator
//! blocks.

use charta_audit::{RuleId, Validator};
use charta_core::models::context::{BodyPart, Chronicity, ClinicalContext, Laterality, Severity};
use charta_generator::clinical::movements;
use charta_generator::{GenerateError, GenerationOptions, Generator};
use jiff::civil::Date;
use rayon::prelude::*;
use serde::Serialize;

const CHRONICITIES: [Chronicity; 3] = [Chronicity::Acute, Chronicity::Subacute, Chronicity::Chronic];

/// One generated case in the sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepCase {
    pub body_part: BodyPart,
    pub laterality: Laterality,
    pub seed: u64,
}

impl SweepCase {
    /// Severity, pain and chronicity cycle with the seed so every band is hit.
    pub fn context(&self) -> ClinicalContext {
        let severity = Severity::ALL[(self.seed % Severity::ALL.len() as u64) as usize];
        let pain = 3.0 + (self.seed % 8) as f64;
        let chronicity = CHRONICITIES[(self.seed % CHRONICITIES.len() as u64) as usize];
        ClinicalContext::new(self.body_part, self.laterality, severity, pain)
            .with_chronicity(chronicity)
    }
}

/// Every case for `seeds` seeds. Spinal regions chart once, midline.
pub fn cases(seeds: u64) -> Vec<SweepCase> {
    let mut cases = Vec::new();
    for body_part in BodyPart::ALL {
        if movements(body_part).is_none() {
            continue;
        }
        let lateralities: &[Laterality] = if body_part.is_paired() {
            &[Laterality::Left, Laterality::Right, Laterality::Bilateral]
        } else {
            &[Laterality::Unspecified]
        };
        for &laterality in lateralities {
            for seed in 0..seeds {
                cases.push(SweepCase {
                    body_part,
                    laterality,
                    seed,
                });
            }
        }
    }
    cases
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepFailure {
    #[serde(flatten)]
    pub case: SweepCase,
    pub score: u32,
    pub rules: Vec<RuleId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepSummary {
    pub charts: usize,
    pub visits_per_chart: u32,
    pub lowest_score: u32,
    pub failures: Vec<SweepFailure>,
}

impl SweepSummary {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Generate and validate every case in parallel.
pub fn run(
    generator: &Generator<'_>,
    validator: &Validator<'_>,
    cases: &[SweepCase],
    visits: u32,
    first_visit_date: Date,
) -> Result<SweepSummary, GenerateError> {
    let options = GenerationOptions::new(visits).with_first_visit_date(first_visit_date);

    let outcomes = cases
        .par_iter()
        .map(|case| {
            let context = case.context();
            let chart = generator.generate(&context, &options.clone().with_seed(case.seed))?;
            let report = validator.validate(&chart.to_document(&context));
            let rules: Vec<RuleId> = report.blocking().map(|v| v.rule).collect();
            Ok((case, report.score.value, rules))
        })
        .collect::<Result<Vec<_>, GenerateError>>()?;

    let lowest_score = outcomes
        .iter()
        .map(|(_, score, _)| *score)
        .min()
        .unwrap_or(100);
    let failures: Vec<SweepFailure> = outcomes
        .into_iter()
        .filter(|(_, _, rules)| !rules.is_empty())
        .map(|(case, score, rules)| SweepFailure {
            case: case.clone(),
            score,
            rules,
        })
        .collect();

    tracing::info!(
        charts = cases.len(),
        visits,
        lowest_score,
        failures = failures.len(),
        "sweep finished"
    );

    Ok(SweepSummary {
        charts: cases.len(),
        visits_per_chart: visits,
        lowest_score,
        failures,
    })
}
