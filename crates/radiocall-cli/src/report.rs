//! End-of-run summary.

use radiocall_core::{Difficulty, RadiocallBundle};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub attempts: usize,
    pub created: usize,
    pub discarded: usize,
    pub by_difficulty: BTreeMap<Difficulty, usize>,
    /// Keyed by category label
    pub by_category: BTreeMap<&'static str, usize>,
}

impl RunSummary {
    pub fn record_created(&mut self, bundle: &RadiocallBundle) {
        self.attempts += 1;
        self.created += 1;
        *self
            .by_difficulty
            .entry(bundle.radiocall.difficulty)
            .or_default() += 1;
        *self
            .by_category
            .entry(bundle.radiocall.category.as_str())
            .or_default() += 1;
    }

    pub fn record_discarded(&mut self) {
        self.attempts += 1;
        self.discarded += 1;
    }

    pub fn count(&self, difficulty: Difficulty) -> usize {
        self.by_difficulty.get(&difficulty).copied().unwrap_or(0)
    }

    /// Share of created radiocalls at `difficulty`, in percent.
    pub fn percentage(&self, difficulty: Difficulty) -> f64 {
        if self.created == 0 {
            return 0.0;
        }
        self.count(difficulty) as f64 * 100.0 / self.created as f64
    }

    pub fn log(&self) {
        tracing::info!(
            attempts = self.attempts,
            created = self.created,
            discarded = self.discarded,
            "generation complete"
        );
        for difficulty in Difficulty::ALL {
            tracing::info!(
                %difficulty,
                count = self.count(difficulty),
                percent = self.percentage(difficulty),
                "by difficulty"
            );
        }
        for (category, count) in &self.by_category {
            tracing::info!(category, count, "by category");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceData;
    use radiocall_core::Subcategory;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_counts_and_percentages() {
        let generator = ReferenceData::builtin().into_generator().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut summary = RunSummary::default();

        for _ in 0..3 {
            let bundle = generator
                .generate_with_subcategory(&mut rng, Difficulty::Easy, Subcategory::Taxi)
                .unwrap();
            summary.record_created(&bundle);
        }
        let bundle = generator
            .generate_with_subcategory(&mut rng, Difficulty::Hard, Subcategory::LandingClearance)
            .unwrap();
        summary.record_created(&bundle);
        summary.record_discarded();

        assert_eq!(summary.attempts, 5);
        assert_eq!(summary.created, 4);
        assert_eq!(summary.discarded, 1);
        assert_eq!(summary.count(Difficulty::Easy), 3);
        assert_eq!(summary.percentage(Difficulty::Hard), 25.0);
        assert_eq!(summary.by_category.get("ground"), Some(&3));
        assert_eq!(summary.by_category.get("landing"), Some(&1));
    }

    #[test]
    fn test_empty_summary_percentage() {
        assert_eq!(RunSummary::default().percentage(Difficulty::Medium), 0.0);
    }
}
