use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use tracing::info;

use crate::category::CategoryMapping;
use crate::db::DEFAULT_DATABASE;
use crate::util::read_json;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BootstrapOptions {
    pub alpha: f64,
    pub n_bootstrap: usize,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            n_bootstrap: 1000,
        }
    }
}

/// Settings shared by analysis drivers, read from a JSON file where every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub database: PathBuf,
    pub alpha: f64,
    pub n_bootstrap: usize,
    pub seed: Option<u64>,
    pub category_mapping: Option<BTreeMap<String, String>>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let bootstrap = BootstrapOptions::default();
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            alpha: bootstrap.alpha,
            n_bootstrap: bootstrap.n_bootstrap,
            seed: None,
            category_mapping: None,
        }
    }
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = read_json(path)?;
        config.validate()?;

        info!(
            path = %path.display(),
            database = %config.database.display(),
            alpha = config.alpha,
            n_bootstrap = config.n_bootstrap,
            seeded = config.seed.is_some(),
            "loaded analysis config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            bail!("alpha must lie strictly between 0 and 1, got {}", self.alpha);
        }
        if self.n_bootstrap == 0 {
            bail!("n_bootstrap must be at least 1");
        }
        Ok(())
    }

    pub fn bootstrap_options(&self) -> BootstrapOptions {
        BootstrapOptions {
            alpha: self.alpha,
            n_bootstrap: self.n_bootstrap,
        }
    }

    pub fn category_mapping(&self) -> CategoryMapping {
        match &self.category_mapping {
            Some(entries) => CategoryMapping::new(entries.clone()),
            None => CategoryMapping::default(),
        }
    }

    /// Seeded generator when `seed` is set, otherwise one drawn from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
