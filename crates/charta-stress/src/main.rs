use std::path::PathBuf;
use std::process::ExitCode;

use charta_core::models::context::{BodyPart, Chronicity, Laterality, Severity};
use charta_stress::commands::{self, CaseArgs};
use charta_stress::config::default_config_path;
use clap::{Parser, Subcommand};
use jiff::civil::Date;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "charta")]
#[command(about = "Generate and audit longitudinal visit charts")]
struct Cli {
    /// Config file (default: <config dir>/charta/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the standard vocabulary and policy to the config file
    InitConfig {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Generate one chart and print it as JSON
    Generate {
        #[arg(long)]
        body_part: BodyPart,

        #[arg(long, default_value = "right")]
        laterality: Laterality,

        /// Evaluation pain, 0-10
        #[arg(long)]
        pain: f64,

        #[arg(long, default_value = "moderate")]
        severity: Severity,

        #[arg(long, default_value = "chronic")]
        chronicity: Chronicity,

        /// Visits in the course, evaluation included
        #[arg(long, default_value = "12")]
        visits: u32,

        #[arg(long)]
        seed: Option<u64>,

        /// Date of the first visit (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<Date>,
    },

    /// Validate a chart document and print the report
    Audit {
        /// Chart document JSON
        document: PathBuf,
    },

    /// Generate and validate every body part, laterality and seed
    Sweep {
        #[arg(long, default_value = "50")]
        seeds: u64,

        #[arg(long, default_value = "16")]
        visits: u32,

        #[arg(long, default_value = "2026-01-05")]
        start_date: Date,
    },
}

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let logs = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.json {
        logs.json().init();
    } else {
        logs.init();
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };

    match cli.command {
        Commands::InitConfig { force } => {
            commands::init_config(&config_path, force)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Generate {
            body_part,
            laterality,
            pain,
            severity,
            chronicity,
            visits,
            seed,
            start_date,
        } => {
            let config = commands::install(&config_path)?;
            let output = commands::generate(
                &config,
                &CaseArgs {
                    body_part,
                    laterality,
                    pain,
                    severity,
                    chronicity,
                    visits,
                    seed,
                    start_date,
                },
            )?;
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Audit { document } => {
            let config = commands::install(&config_path)?;
            let (report, passed) = commands::audit(&config, &document)?;
            println!("{report}");
            Ok(if passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Sweep {
            seeds,
            visits,
            start_date,
        } => {
            let config = commands::install(&config_path)?;
            let summary = commands::sweep(&config, seeds, visits, start_date)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(if summary.passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
