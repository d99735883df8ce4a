use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use nf_mcdm::adapters::{FileMatrixLoader, SampleMatrixLoader};
use nf_mcdm::application::{RunDecisionCommand, RunDecisionHandler};
use nf_mcdm::config::{AppConfig, ConfigError};
use nf_mcdm::ports::MatrixLoader;

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("nf-mcdm: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Decision run failed");
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let loader: Arc<dyn MatrixLoader> = match &config.data.path {
        Some(path) => {
            info!(path = %path.display(), "Loading decision matrix");
            Arc::new(FileMatrixLoader::new(path))
        }
        None => {
            info!(
                criteria = config.data.sample_criteria,
                alternatives = config.data.sample_alternatives,
                seed = config.data.sample_seed,
                "No data file configured, using sample matrix"
            );
            Arc::new(SampleMatrixLoader::new(
                config.data.sample_criteria,
                config.data.sample_alternatives,
                config.data.sample_seed,
            ))
        }
    };

    let command = RunDecisionCommand {
        measures: config.decision.registry()?,
        cost: config.decision.cost_indices()?,
    };
    let result = RunDecisionHandler::new(loader).handle(command)?;

    println!(
        "{} criteria x {} alternatives",
        result.criteria, result.alternatives
    );
    for outcome in &result.outcomes {
        println!(
            "{}: rank {:?}, best alternative {}",
            outcome.measure, outcome.rank, outcome.best_alternative
        );
    }

    Ok(())
}
