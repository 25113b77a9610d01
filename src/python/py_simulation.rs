//! Simulation bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::core::SimulationConfig;
use crate::simulation::{self, ScoreStatistics};

use super::value_error;

/// Python wrapper for ScoreStatistics.
#[pyclass(name = "ScoreStatistics")]
#[derive(Clone)]
pub struct PyScoreStatistics(pub ScoreStatistics);

#[pymethods]
impl PyScoreStatistics {
    #[getter]
    fn count(&self) -> u64 {
        self.0.count
    }

    #[getter]
    fn mean(&self) -> f64 {
        self.0.mean
    }

    #[getter]
    fn variance(&self) -> f64 {
        self.0.variance
    }

    #[getter]
    fn std_dev(&self) -> f64 {
        self.0.std_dev
    }

    #[getter]
    fn min(&self) -> u32 {
        self.0.min
    }

    #[getter]
    fn max(&self) -> u32 {
        self.0.max
    }

    #[getter]
    fn median(&self) -> u32 {
        self.0.median
    }

    /// Share of trials won by the given round.
    fn win_probability_by(&self, round: u32) -> f64 {
        self.0.win_probability_by(round)
    }

    /// Score counts indexed by round, as a numpy array.
    fn histogram<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u64>> {
        PyArray1::from_slice_bound(py, &self.0.histogram)
    }

    fn __repr__(&self) -> String {
        format!(
            "ScoreStatistics(count={}, mean={:.3}, std_dev={:.3})",
            self.0.count, self.0.mean, self.0.std_dev
        )
    }
}

/// Run a simulation and return card scores as a numpy uint32 array.
///
/// The GIL is released while trials run.
#[pyfunction]
#[pyo3(signature = (iterations = 10000, max_num = 75, seed = 42, parallel = false))]
pub fn simulate(
    py: Python<'_>,
    iterations: usize,
    max_num: u32,
    seed: u64,
    parallel: bool,
) -> PyResult<Bound<'_, PyArray1<u32>>> {
    let config = SimulationConfig::new()
        .with_iterations(iterations)
        .with_max_num(max_num)
        .with_seed(seed)
        .with_parallel(parallel);

    let result = py
        .allow_threads(|| simulation::simulate(config).map_err(|e| e.to_string()))
        .map_err(value_error)?;

    Ok(PyArray1::from_vec_bound(py, result.scores))
}

/// Summarize a list of card scores. Returns None for an empty list.
#[pyfunction]
#[pyo3(signature = (scores, max_num = 75))]
pub fn statistics(scores: Vec<u32>, max_num: u32) -> Option<PyScoreStatistics> {
    ScoreStatistics::from_scores(&scores, max_num).map(PyScoreStatistics)
}
