//! Python bindings for the Bingo simulator.
//!
//! # Quick Start
//!
//! ```python
//! import bingo_sim
//!
//! card = bingo_sim.generate_card(max_num=75, seed=42)
//! print(card)
//! print(card.score())
//!
//! # numpy uint32 array of card scores
//! scores = bingo_sim.simulate(iterations=10000, seed=42, parallel=True)
//! stats = bingo_sim.statistics(scores.tolist())
//! print(stats.mean, stats.std_dev)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

mod py_engine;
mod py_simulation;

pub use py_engine::*;
pub use py_simulation::*;

/// Map an engine or simulation error to `ValueError`.
pub(crate) fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// bingo_sim: Monte Carlo estimation of Bingo card scores.
#[pymodule]
fn bingo_sim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Engine
    m.add_class::<PyCard>()?;
    m.add_function(wrap_pyfunction!(generate_card, m)?)?;
    m.add_function(wrap_pyfunction!(score_card, m)?)?;

    // Simulation
    m.add_class::<PyScoreStatistics>()?;
    m.add_function(wrap_pyfunction!(simulate, m)?)?;
    m.add_function(wrap_pyfunction!(statistics, m)?)?;

    Ok(())
}
