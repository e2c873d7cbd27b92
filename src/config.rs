use std::time::Duration;

use crate::error::{GspError, GspResult};
use crate::types::SupportCount;

/// Minimum number of supporting transactions, absolute or relative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    Count(SupportCount),
    /// Share of all transactions, in (0, 1].
    Fraction(f64),
}

impl MinSupport {
    /// Resolve to an absolute count for a collection of `num_transactions`.
    pub fn resolve(self, num_transactions: usize) -> GspResult<SupportCount> {
        match self {
            MinSupport::Count(0) => Err(GspError::InvalidMinSupport(0)),
            MinSupport::Count(count) => Ok(count),
            MinSupport::Fraction(fraction) if fraction > 0.0 && fraction <= 1.0 => {
                let exact = fraction * num_transactions as f64;
                // 0.07 * 100 is 7.000000000000001; snap products within rounding error
                let nearest = exact.round();
                let count = if (exact - nearest).abs() <= exact * 4.0 * f64::EPSILON {
                    nearest
                } else {
                    exact.ceil()
                };
                Ok((count as SupportCount).max(1))
            }
            MinSupport::Fraction(fraction) => Err(GspError::InvalidSupportFraction(fraction)),
        }
    }
}

/// Knobs for a single search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    pub min_support: MinSupport,
    /// Cap on pattern length; the longest transaction is always a cap.
    pub max_len: Option<usize>,
    /// Worker count; `None` uses one worker per available CPU.
    pub num_threads: Option<usize>,
    /// Drop joined candidates that have an infrequent subsequence before counting.
    pub prune: bool,
    pub timeout: Option<Duration>,
}

impl SearchOptions {
    pub fn new(min_support: MinSupport) -> Self {
        Self {
            min_support,
            max_len: None,
            num_threads: None,
            prune: true,
            timeout: None,
        }
    }

    pub fn count(min_support: SupportCount) -> Self {
        Self::new(MinSupport::Count(min_support))
    }

    pub fn fraction(min_support: f64) -> Self {
        Self::new(MinSupport::Fraction(min_support))
    }

    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    pub fn prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Longest pattern worth generating given the longest transaction.
    pub(crate) fn length_limit(&self, max_size: usize) -> GspResult<usize> {
        match self.max_len {
            Some(0) => Err(GspError::InvalidMaxLen(0)),
            Some(cap) => Ok(cap.min(max_size)),
            None => Ok(max_size),
        }
    }
}
