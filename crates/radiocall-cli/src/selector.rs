//! Weighted difficulty selection for batch runs.

use rand::Rng;
use radiocall_core::Difficulty;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
    #[error("expected four comma-separated percentages, got '{0}'")]
    Malformed(String),

    #[error("difficulty percentages sum to {0}, expected 100")]
    BadSum(u32),
}

/// Percentage of generated radiocalls per difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyDistribution {
    /// Indexed like [`Difficulty::ALL`]
    weights: [u32; 4],
}

impl DifficultyDistribution {
    /// Percentages for super_easy, easy, medium and hard. Must sum to 100.
    pub fn new(weights: [u32; 4]) -> Result<Self, DistributionError> {
        let sum: u32 = weights.iter().sum();
        if sum != 100 {
            return Err(DistributionError::BadSum(sum));
        }
        Ok(Self { weights })
    }

    pub fn percentage(&self, difficulty: Difficulty) -> u32 {
        Difficulty::ALL
            .iter()
            .position(|d| *d == difficulty)
            .map(|idx| self.weights[idx])
            .unwrap_or(0)
    }

    /// Roll 1..=100 and walk the cumulative percentages.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Difficulty {
        let roll = rng.random_range(1..=100u32);
        let mut cumulative = 0;
        for (difficulty, weight) in Difficulty::ALL.into_iter().zip(self.weights) {
            cumulative += weight;
            if roll <= cumulative {
                return difficulty;
            }
        }
        Difficulty::Easy
    }
}

impl Default for DifficultyDistribution {
    fn default() -> Self {
        Self {
            weights: [20, 30, 35, 15],
        }
    }
}

impl fmt::Display for DifficultyDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [se, e, m, h] = self.weights;
        write!(f, "{},{},{},{}", se, e, m, h)
    }
}

impl FromStr for DifficultyDistribution {
    type Err = DistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| DistributionError::Malformed(s.to_string()))?;
        let weights: [u32; 4] = parts
            .try_into()
            .map_err(|_| DistributionError::Malformed(s.to_string()))?;
        Self::new(weights)
    }
}
