//! Frequent sequential pattern mining with the GSP algorithm.
//!
//! ```
//! use gsp::Gsp;
//!
//! let gsp = Gsp::new(vec![vec![1, 2, 3], vec![1, 3], vec![1, 2], vec![2, 3], vec![1]]).unwrap();
//! let levels = gsp.search(2).unwrap();
//!
//! assert_eq!(levels[0][&vec![1]], 4);
//! assert_eq!(levels[1][&vec![1, 3]], 2);
//! ```

pub mod combi;
pub mod config;
pub mod error;
pub mod miner;
pub mod sequences;
pub mod subsequence;
pub mod types;
#[cfg(feature = "python")]
mod wrapper;

pub use config::{MinSupport, SearchOptions};
pub use error::{CandidateFailure, GspError, GspResult};
pub use miner::Gsp;
pub use subsequence::is_subsequence;
pub use types::{FrequencyMap, SupportCount};

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::PyDict;
#[cfg(feature = "python")]
use pyo3::wrap_pyfunction;

#[cfg(feature = "python")]
#[pymodule]
fn gsp(_: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(search, m)?)?;
    Ok(())
}

/// Frequent sequential patterns, one dict of pattern tuple to support per length.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_support, max_len=None)")]
fn search(
    py: Python,
    transactions: Vec<Vec<String>>,
    min_support: usize,
    max_len: Option<usize>,
) -> PyResult<Vec<Py<PyDict>>> {
    let mut options = SearchOptions::count(min_support);
    options.max_len = max_len;

    let levels = py.allow_threads(|| Gsp::new(transactions)?.search_with(&options))?;

    Ok(wrapper::convert_frequency_maps(py, levels))
}
