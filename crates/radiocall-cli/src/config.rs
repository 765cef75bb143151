//! Batch configuration from environment.

use std::env;
use std::path::PathBuf;

use crate::selector::{DifficultyDistribution, DistributionError};

#[derive(Debug, Clone)]
pub struct Config {
    /// Generation attempts per run
    pub count: usize,
    /// Generate and count without writing records
    pub dry_run: bool,
    /// JSON-lines output file
    pub output: PathBuf,
    /// Fixed seed for reproducible runs
    pub seed: Option<u64>,
    /// Reference data file, built-in catalog when unset
    pub reference: Option<PathBuf>,
    pub distribution: DifficultyDistribution,
}

impl Config {
    pub fn from_env() -> Result<Self, DistributionError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DistributionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let distribution = match lookup("RADIOCALL_DISTRIBUTION") {
            Some(raw) => raw.parse()?,
            None => DifficultyDistribution::default(),
        };

        Ok(Self {
            count: lookup("RADIOCALL_COUNT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(500),
            dry_run: lookup("RADIOCALL_DRY_RUN")
                .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            output: lookup("RADIOCALL_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("radiocalls.jsonl")),
            seed: lookup("RADIOCALL_SEED").and_then(|s| s.parse().ok()),
            reference: lookup("RADIOCALL_REFERENCE").map(PathBuf::from),
            distribution,
        })
    }
}
