use std::any::Any;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use rayon::prelude::*;
use tracing::warn;

use crate::{
    error::{CandidateFailure, GspError, GspResult},
    subsequence::is_subsequence,
    types::SupportCount,
};

enum Outcome {
    Counted(SupportCount),
    Panicked(String),
    Expired,
}

/// Support of every candidate over `transactions`, keeping those with at
/// least `min_support` supporting transactions.
///
/// Candidates are counted in parallel on the current rayon pool (run it
/// inside `ThreadPool::install` to choose the pool). Every candidate is
/// attempted before failures are reported: a panicking count yields
/// `GspError::Counting` naming each failed candidate, and candidates left
/// uncounted once `deadline` passes yield `GspError::DeadlineExceeded`.
pub fn count_support<I>(
    candidates: &[Vec<I>],
    transactions: &[Vec<I>],
    min_support: SupportCount,
    deadline: Option<Instant>,
) -> GspResult<HashMap<Vec<I>, SupportCount>>
where
    I: Eq + Hash + Clone + Debug + Sync,
{
    let outcomes: Vec<Outcome> = candidates
        .par_iter()
        .map(|candidate| {
            if deadline.map_or(false, |deadline| Instant::now() >= deadline) {
                return Outcome::Expired;
            }
            match panic::catch_unwind(AssertUnwindSafe(|| support_of(candidate, transactions))) {
                Ok(count) => Outcome::Counted(count),
                Err(payload) => Outcome::Panicked(panic_message(payload.as_ref())),
            }
        })
        .collect();

    let mut frequent = HashMap::with_capacity(candidates.len());
    let mut failures = vec![];
    let mut pending = 0;

    for (candidate, outcome) in candidates.iter().zip(outcomes) {
        match outcome {
            Outcome::Counted(count) if count >= min_support => {
                frequent.insert(candidate.to_owned(), count);
            }
            Outcome::Counted(_) => {}
            Outcome::Panicked(message) => {
                warn!(?candidate, %message, "support counting failed");
                failures.push(CandidateFailure {
                    candidate: format!("{:?}", candidate),
                    message,
                });
            }
            Outcome::Expired => pending += 1,
        }
    }

    if !failures.is_empty() {
        return Err(GspError::Counting {
            failures,
            total: candidates.len(),
        });
    }
    if pending > 0 {
        return Err(GspError::DeadlineExceeded { pending });
    }

    Ok(frequent)
}

/// Number of transactions containing `candidate` as a subsequence.
pub fn support_of<I: PartialEq>(candidate: &[I], transactions: &[Vec<I>]) -> SupportCount {
    transactions
        .iter()
        .filter(|transaction| is_subsequence(candidate, transaction.as_slice()))
        .count()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
