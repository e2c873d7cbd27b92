use std::time::Instant;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use crate::{
    combi::{join_step, prune_step},
    config::SearchOptions,
    error::GspResult,
    sequences::count::count_support,
    types::{FrequentPatterns, ItemId, Pattern, Transaction},
};

/// Level-wise GSP search over encoded transactions.
///
/// `num_items` is the vocabulary size (item ids are `0..num_items`) and
/// `max_size` the length of the longest transaction. Level `k` is counted
/// only if level `k - 1` had frequent patterns and `k` does not exceed the
/// length limit. A trailing empty level is dropped, so every returned level
/// is non-empty.
pub fn generate_frequent_sequences(
    transactions: &[Transaction],
    num_items: usize,
    max_size: usize,
    options: &SearchOptions,
) -> GspResult<FrequentPatterns> {
    let min_support = options.min_support.resolve(transactions.len())?;
    let length_limit = options.length_limit(max_size)?;
    let pool = build_pool(options.num_threads)?;
    // a timeout past the end of representable time means no deadline
    let deadline = options
        .timeout
        .and_then(|timeout| Instant::now().checked_add(timeout));

    info!(
        transactions = transactions.len(),
        items = num_items,
        min_support,
        length_limit,
        "searching for frequent sequences"
    );

    let mut levels: FrequentPatterns = Vec::with_capacity(length_limit);
    let mut candidates: Vec<Pattern> = (0..num_items).map(|item: ItemId| vec![item]).collect();
    let mut size = 1;

    loop {
        let frequent =
            pool.install(|| count_support(&candidates, transactions, min_support, deadline))?;
        debug!(
            size,
            candidates = candidates.len(),
            frequent = frequent.len(),
            "counted level"
        );

        let exhausted = frequent.is_empty() || size + 1 > length_limit;
        levels.push(frequent);
        if exhausted {
            break;
        }

        size += 1;
        let prev = &levels[size - 2];
        let prev_patterns: Vec<Pattern> = prev.keys().cloned().collect();
        candidates = join_step(&prev_patterns);
        if options.prune {
            let joined = candidates.len();
            candidates = prune_step(candidates, prev);
            debug!(size, pruned = joined - candidates.len(), "pruned candidates");
        }
    }

    if levels.last().map_or(false, |level| level.is_empty()) {
        levels.pop();
    }

    info!(levels = levels.len(), "search finished");

    Ok(levels)
}

fn build_pool(num_threads: Option<usize>) -> GspResult<ThreadPool> {
    let mut builder = ThreadPoolBuilder::new();
    if let Some(num_threads) = num_threads {
        builder = builder.num_threads(num_threads);
    }
    Ok(builder.build()?)
}
