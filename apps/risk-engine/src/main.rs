//! GRC Risk Engine Binary
//!
//! Rescores inventory snapshots from the command line.
//!
//! # Usage
//!
//! ```bash
//! grc-risk-engine recalculate --snapshot ./data/snapshot.json
//! grc-risk-engine check
//! grc-risk-engine score-asset --confidentiality high --criticality critical
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (overrides `observability.logging.level`)
//! - Any `${VAR}` referenced from the config file; `.env` is loaded first

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use grc_risk_engine::application::dto::RecalculateRequestDto;
use grc_risk_engine::application::use_cases::{DetectStaleScoresUseCase, RecalculateAllUseCase};
use grc_risk_engine::cli::{Cli, Command};
use grc_risk_engine::config::{self, Config, DEFAULT_CONFIG_PATH};
use grc_risk_engine::domain::inventory::Asset;
use grc_risk_engine::domain::risk_aggregation::RiskAggregationService;
use grc_risk_engine::error::{EngineError, ErrorCode};
use grc_risk_engine::infrastructure::persistence::JsonFileInventoryRepository;
use grc_risk_engine::observability::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(code = %err.code(), error = %err, "Command failed");
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, EngineError> {
    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.observability.logging)?;
    config.recalculation.configure_thread_pool()?;

    let engine = RiskAggregationService::new(config.scoring.clone())?;
    let parallelism = config.recalculation.parallelism();

    match cli.command {
        Command::Recalculate {
            snapshot,
            output,
            dry_run,
        } => {
            let repo = Arc::new(snapshot_repository(&config, snapshot, output));
            tracing::info!(
                input = %repo.input_path().display(),
                output = %repo.output_path().display(),
                "Starting recalculation"
            );

            let report = RecalculateAllUseCase::new(repo, engine)
                .with_parallelism(parallelism)
                .with_top_risks(config.report.top_risks)
                .execute(RecalculateRequestDto { dry_run })
                .await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { snapshot } => {
            let repo = Arc::new(snapshot_repository(&config, snapshot, None));
            let report = DetectStaleScoresUseCase::new(repo, engine)
                .with_parallelism(parallelism)
                .execute()
                .await?;
            println!("{}", serde_json::to_string_pretty(&report)?);

            if report.has_drift() {
                let err = EngineError::stale_scores(report.stale.len());
                tracing::warn!(code = %err.code(), "{}", err.message());
                return Ok(ExitCode::from(ErrorCode::StaleScores.exit_code()));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::ScoreAsset {
            confidentiality,
            integrity,
            availability,
            criticality,
        } => {
            let mut asset = Asset::new("cli");
            asset.confidentiality_impact = confidentiality;
            asset.integrity_impact = integrity;
            asset.availability_impact = availability;
            asset.criticality = criticality;
            println!("{}", engine.compute_asset_risk_score(Some(&asset)));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load the named config file, or `config.yaml` when present, or defaults.
fn load_config(path: Option<&str>) -> Result<Config, EngineError> {
    if path.is_none() && !Path::new(DEFAULT_CONFIG_PATH).exists() {
        return Ok(Config::default());
    }
    Ok(config::load_config(path)?)
}

/// Build the JSON repository from config, letting CLI paths win.
fn snapshot_repository(
    config: &Config,
    snapshot: Option<PathBuf>,
    output: Option<PathBuf>,
) -> JsonFileInventoryRepository {
    let persistence = &config.persistence;
    let input = snapshot.unwrap_or_else(|| PathBuf::from(&persistence.snapshot_path));
    let output = output
        .or_else(|| persistence.output_path.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| input.clone());

    JsonFileInventoryRepository::new(input)
        .with_output(output)
        .with_pretty(persistence.pretty)
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
