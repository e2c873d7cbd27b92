use crate::error::GspError;
use crate::types::FrequencyMap;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{IntoPyDict, PyDict, PyTuple};

pub fn convert_frequency_maps(py: Python, levels: Vec<FrequencyMap<String>>) -> Vec<Py<PyDict>> {
    levels
        .into_iter()
        .map(|level| {
            level
                .into_iter()
                .map(|(pattern, count)| {
                    let key: Py<PyTuple> = PyTuple::new(py, pattern).into();
                    (key, count)
                })
                .collect::<Vec<(Py<PyTuple>, usize)>>()
                .into_py_dict(py)
                .into()
        })
        .collect()
}

impl From<GspError> for PyErr {
    fn from(err: GspError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
