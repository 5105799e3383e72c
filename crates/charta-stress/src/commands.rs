use std::path::Path;

use charta_audit::{AuditGrade, Validator};
use charta_core::models::context::{BodyPart, Chronicity, ClinicalContext, Laterality, Severity};
use charta_core::models::document::ChartDocument;
use charta_generator::{GenerationOptions, Generator};
use charta_ladders::{GradingModel, global};
use jiff::civil::Date;
use serde::Serialize;

use crate::config::{ChartaConfig, load_config, save_config};
use crate::sweep::{self, SweepSummary};

/// Write the standard config. Refuses to overwrite unless `force`.
pub fn init_config(path: &Path, force: bool) -> eyre::Result<()> {
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "config already exists at {} (pass --force to overwrite)",
            path.display()
        ));
    }
    save_config(path, &ChartaConfig::standard())
}

/// Load the config and install its vocabulary as the process-wide model.
pub fn install(path: &Path) -> eyre::Result<ChartaConfig> {
    let config = load_config(path)?;
    let model = GradingModel::new(&config.vocabulary)?;
    global::install(model)?;
    tracing::debug!(path = %path.display(), "grading model installed");
    Ok(config)
}

/// Case description for `generate`.
#[derive(Debug, Clone)]
pub struct CaseArgs {
    pub body_part: BodyPart,
    pub laterality: Laterality,
    pub pain: f64,
    pub severity: Severity,
    pub chronicity: Chronicity,
    pub visits: u32,
    pub seed: Option<u64>,
    pub start_date: Option<Date>,
}

#[derive(Debug, Serialize)]
pub struct GeneratedOutput {
    pub seed: u64,
    pub context: ClinicalContext,
    pub document: ChartDocument,
}

pub fn generate(config: &ChartaConfig, args: &CaseArgs) -> eyre::Result<GeneratedOutput> {
    let context = ClinicalContext::new(args.body_part, args.laterality, args.severity, args.pain)
        .with_chronicity(args.chronicity);

    let mut options = GenerationOptions::new(args.visits);
    if let Some(seed) = args.seed {
        options = options.with_seed(seed);
    }
    if let Some(date) = args.start_date {
        options = options.with_first_visit_date(date);
    }

    let chart = Generator::installed(config.policy)?.generate(&context, &options)?;
    tracing::info!(
        body_part = %context.body_part,
        visits = chart.states.len(),
        seed = chart.seed,
        "chart generated"
    );
    Ok(GeneratedOutput {
        seed: chart.seed,
        document: chart.to_document(&context),
        context,
    })
}

/// Validate a chart document on disk. Returns the report JSON and whether the
/// chart passed.
pub fn audit(config: &ChartaConfig, document: &Path) -> eyre::Result<(String, bool)> {
    let contents = std::fs::read_to_string(document)
        .map_err(|e| eyre::eyre!("failed to read chart at {}: {e}", document.display()))?;
    let document: ChartDocument = serde_json::from_str(&contents)?;

    let report = Validator::installed(config.policy, config.scoring)?.validate(&document);
    Ok((report.to_json()?, report.score.grade != AuditGrade::Fail))
}

pub fn sweep(
    config: &ChartaConfig,
    seeds: u64,
    visits: u32,
    first_visit_date: Date,
) -> eyre::Result<SweepSummary> {
    let generator = Generator::installed(config.policy)?;
    let validator = Validator::installed(config.policy, config.scoring)?;
    let cases = sweep::cases(seeds);
    Ok(sweep::run(
        &generator,
        &validator,
        &cases,
        visits,
        first_visit_date,
    )?)
}
