//! Runtime settings for the `nf-mcdm` binary.
//!
//! Values come from `NF_MCDM__<SECTION>__<KEY>` environment variables,
//! optionally seeded from a `.env` file. Nothing is required: an empty
//! environment scores a seeded sample matrix with all nine measures.
//!
//! ```no_run
//! use nf_mcdm::config::AppConfig;
//!
//! let config = AppConfig::load().expect("configuration");
//! config.validate().expect("valid configuration");
//! ```

mod data;
mod decision;
mod error;

pub use data::DataConfig;
pub use decision::DecisionConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration (all nine measures over a seeded sample matrix).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Measures, component and cost criteria
    #[serde(default)]
    pub decision: DecisionConfig,

    /// Data file or sample generator settings
    #[serde(default)]
    pub data: DataConfig,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Reads `.env` (if any) and the `NF_MCDM` environment.
    ///
    /// Keys nest on `__`: `NF_MCDM__DECISION__COST=0,2` sets `decision.cost`,
    /// `NF_MCDM__DATA__PATH=matrix.csv` sets `data.path`.
    ///
    /// # Errors
    /// `ConfigError::LoadError` when a value has the wrong type, e.g. a
    /// non-numeric `NF_MCDM__DATA__SAMPLE_SEED`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("NF_MCDM")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks what deserialization cannot: measure names, the component
    /// range, cost index syntax and non-zero sample dimensions.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.decision.validate()?;
        self.data.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            decision: DecisionConfig::default(),
            data: DataConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info,nf_mcdm=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::measures::Measure;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "NF_MCDM__DECISION__MEASURES",
        "NF_MCDM__DECISION__COMPONENT",
        "NF_MCDM__DECISION__COST",
        "NF_MCDM__DATA__PATH",
        "NF_MCDM__DATA__SAMPLE_ALTERNATIVES",
        "NF_MCDM__DATA__SAMPLE_CRITERIA",
        "NF_MCDM__DATA__SAMPLE_SEED",
        "NF_MCDM__LOG_LEVEL",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.log_level, "info,nf_mcdm=debug");
        assert_eq!(config.data.sample_criteria, 5);
        assert_eq!(config.data.sample_alternatives, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("NF_MCDM__DECISION__MEASURES", "Similarity2,Similarity5");
        env::set_var("NF_MCDM__DECISION__COST", "0,2");
        env::set_var("NF_MCDM__DATA__PATH", "data/matrix.csv");
        env::set_var("NF_MCDM__DATA__SAMPLE_SEED", "11");
        env::set_var("NF_MCDM__LOG_LEVEL", "warn");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.decision.registry().unwrap().measures(),
            &[Measure::Similarity2, Measure::Similarity5]
        );
        assert_eq!(config.decision.cost_indices().unwrap(), vec![0, 2]);
        assert_eq!(config.data.path, Some(PathBuf::from("data/matrix.csv")));
        assert_eq!(config.data.sample_seed, 11);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_component_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("NF_MCDM__DECISION__COMPONENT", "3");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.decision.component, Some(3));
        assert_eq!(
            config.decision.registry().unwrap().measures(),
            &[Measure::Similarity4]
        );
    }

    #[test]
    fn test_validate_rejects_unknown_measure() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("NF_MCDM__DECISION__MEASURES", "Similarity10");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnknownMeasure(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_sample_size() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("NF_MCDM__DATA__SAMPLE_CRITERIA", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_matches_empty_environment() {
        let config = AppConfig::default();
        assert!(config.decision.component.is_none());
        assert!(config.data.path.is_none());
        assert_eq!(config.log_level, default_log_level());
    }
}
