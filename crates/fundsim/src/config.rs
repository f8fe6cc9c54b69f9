//! Analysis configuration loaded from YAML
//!
//! ```yaml
//! num_trials: 100000
//! years: 40
//! annual_contribution: 5500
//! thresholds: [1000000, 2000000, 3000000]
//! volatility_fit:
//!   slope: 2.0
//!   intercept: -4.0
//! funds:
//!   - name: Conservative
//!     mean_return: 6.0
//!   - name: Aggressive
//!     mean_return: 10.0
//!     std_return: 16.0
//! ```

use std::path::{Path, PathBuf};

use color_eyre::eyre::{WrapErr, eyre};
use fundsim_core::{FundParameters, TrialConfig, VolatilityFit};
use serde::{Deserialize, Serialize};

/// File name looked up in the data directory when no config is given
pub const DEFAULT_CONFIG_FILE: &str = "analysis.yaml";

/// One fund in the analysis. Volatility comes from `volatility_fit` when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundEntry {
    pub name: String,
    pub mean_return: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std_return: Option<f64>,
}

/// Everything needed to run a fund comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub num_trials: usize,
    pub years: usize,
    pub annual_contribution: f64,
    pub starting_principal: f64,
    /// Goal amounts, in currency units
    pub thresholds: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility_fit: Option<VolatilityFit>,
    pub funds: Vec<FundEntry>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            num_trials: 100_000,
            years: 40,
            annual_contribution: 5_500.0,
            starting_principal: 0.0,
            thresholds: vec![1_000_000.0, 2_000_000.0, 3_000_000.0],
            seed: None,
            volatility_fit: Some(VolatilityFit::new(2.0, -4.0)),
            funds: vec![
                FundEntry {
                    name: "Conservative".to_string(),
                    mean_return: 6.0,
                    std_return: None,
                },
                FundEntry {
                    name: "Balanced".to_string(),
                    mean_return: 8.0,
                    std_return: None,
                },
                FundEntry {
                    name: "Aggressive".to_string(),
                    mean_return: 10.0,
                    std_return: None,
                },
            ],
        }
    }
}

impl AnalysisConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml(&content)
            .wrap_err_with(|| format!("failed to parse config {}", path.display()))
    }

    /// Load the explicit path, else the file in `data_dir` if present, else defaults
    pub fn resolve(path: Option<&Path>, data_dir: &Path) -> color_eyre::Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = data_dir.join(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            tracing::info!("Loading config from {}", default_path.display());
            Self::load(&default_path)
        } else {
            tracing::info!("No config file found, using built-in defaults");
            Ok(Self::default())
        }
    }

    pub fn trial_config(&self) -> TrialConfig {
        TrialConfig {
            num_trials: self.num_trials,
            seed: self.seed,
        }
    }

    /// Resolve every fund entry into simulation parameters
    pub fn fund_parameters(&self) -> color_eyre::Result<Vec<FundParameters>> {
        self.funds
            .iter()
            .map(|entry| {
                let std_return = match (entry.std_return, self.volatility_fit) {
                    (Some(std), _) => std,
                    (None, Some(fit)) => fit.std_for_mean(entry.mean_return),
                    (None, None) => {
                        return Err(eyre!(
                            "fund '{}' has no std_return and no volatility_fit is configured",
                            entry.name
                        ));
                    }
                };

                Ok(FundParameters::new(
                    entry.mean_return,
                    std_return,
                    self.years,
                    self.annual_contribution,
                )
                .named(entry.name.clone())
                .with_starting_principal(self.starting_principal))
            })
            .collect()
    }
}

/// Default data directory (`~/.fundsim/`)
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fundsim")
}
