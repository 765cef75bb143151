//! The generation loop shared by the binary and its tests.

use rand::Rng;
use radiocall_core::RadiocallGenerator;

use crate::report::RunSummary;
use crate::selector::DifficultyDistribution;
use crate::store::{persist_bundle, RecordSink, StoreError};

/// Attempts between progress log lines.
pub const PROGRESS_EVERY: usize = 50;

/// Run `attempts` generation attempts and store every bundle produced.
///
/// Discarded scenarios are counted, not retried.
pub fn generate_batch<R, S>(
    generator: &RadiocallGenerator,
    distribution: &DifficultyDistribution,
    attempts: usize,
    rng: &mut R,
    sink: &mut S,
) -> Result<RunSummary, StoreError>
where
    R: Rng,
    S: RecordSink + ?Sized,
{
    let mut summary = RunSummary::default();

    for attempt in 1..=attempts {
        let difficulty = distribution.select(rng);
        match generator.generate(rng, difficulty) {
            Some(bundle) => {
                persist_bundle(sink, &bundle)?;
                summary.record_created(&bundle);
            }
            None => {
                tracing::debug!(attempt, %difficulty, "scenario discarded");
                summary.record_discarded();
            }
        }

        if attempt % PROGRESS_EVERY == 0 {
            tracing::info!(
                attempt,
                total = attempts,
                created = summary.created,
                "progress"
            );
        }
    }

    Ok(summary)
}
