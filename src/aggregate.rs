//! Final dataset assembly: title dedup and seeded downsampling.

use crate::models::Record;
use itertools::Itertools;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use tracing::{info, instrument};

/// The finalized record set and what was removed on the way.
#[derive(Debug, Clone)]
pub struct Aggregate {
    pub records: Vec<Record>,
    pub duplicates_dropped: usize,
    pub sampled_out: usize,
}

/// Keep the first record for each distinct title, preserving input order.
pub fn dedup_by_title(records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .unique_by(|r| r.title.clone())
        .collect()
}

/// Draw `max` records without replacement using an RNG seeded with `seed`.
///
/// The result is in draw order. Inputs no larger than `max` come back
/// unchanged. The same seed and input always produce the same output.
pub fn sample(records: Vec<Record>, max: usize, seed: u64) -> Vec<Record> {
    if records.len() <= max {
        return records;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let picked = index::sample(&mut rng, records.len(), max);

    let mut slots: Vec<Option<Record>> = records.into_iter().map(Some).collect();
    picked
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect()
}

/// Deduplicate by title, then cap to `max_records` if one is set.
#[instrument(level = "info", skip(records), fields(input = records.len()))]
pub fn aggregate(records: Vec<Record>, max_records: Option<usize>, seed: u64) -> Aggregate {
    let input = records.len();
    let deduped = dedup_by_title(records);
    let duplicates_dropped = input - deduped.len();

    let unique = deduped.len();
    let records = match max_records {
        Some(max) => sample(deduped, max, seed),
        None => deduped,
    };
    let sampled_out = unique - records.len();

    info!(
        duplicates_dropped,
        sampled_out,
        output = records.len(),
        "Aggregated records"
    );
    Aggregate {
        records,
        duplicates_dropped,
        sampled_out,
    }
}
