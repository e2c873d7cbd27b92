//! Error types

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GspError {
    #[error("minimum support must be a positive integer, got {0}")]
    InvalidMinSupport(usize),

    #[error("minimum support fraction must be in (0, 1], got {0}")]
    InvalidSupportFraction(f64),

    #[error("maximum pattern length must be at least 1, got {0}")]
    InvalidMaxLen(usize),

    #[error("cannot mine an empty transaction collection")]
    EmptyTransactions,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("support counting failed for {} of {total} candidates", .failures.len())]
    Counting {
        failures: Vec<CandidateFailure>,
        total: usize,
    },

    #[error("deadline exceeded with {pending} candidates left uncounted")]
    DeadlineExceeded { pending: usize },
}

/// A candidate whose support could not be computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFailure {
    /// `Debug` rendering of the candidate pattern.
    pub candidate: String,
    pub message: String,
}

impl fmt::Display for CandidateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.candidate, self.message)
    }
}

pub type GspResult<T> = Result<T, GspError>;
