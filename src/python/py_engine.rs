//! Card and scoring bindings for Python.

use pyo3::prelude::*;

use crate::card::{generate_card_seeded, Card};
use crate::scoring::ScoreEvaluator;

use super::value_error;

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Build a card from 24 distinct positive call rounds.
    #[new]
    fn new(values: Vec<u32>) -> PyResult<Self> {
        Card::from_values(&values).map(Self).map_err(value_error)
    }

    /// Call rounds in card-position order.
    #[getter]
    fn values(&self) -> Vec<u32> {
        self.0.values().to_vec()
    }

    /// Round at which the card first completes a line.
    fn score(&self) -> u32 {
        self.0.score()
    }

    /// (line name, line score) for all 12 lines.
    fn line_scores(&self) -> Vec<(String, u32)> {
        ScoreEvaluator::new()
            .breakdown(&self.0)
            .line_scores
            .into_iter()
            .map(|ls| (ls.line.to_string(), ls.score))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!("Card(values={:?})", self.0.values())
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Draw a random card.
#[pyfunction]
#[pyo3(signature = (max_num = 75, seed = 42))]
pub fn generate_card(max_num: u32, seed: u64) -> PyResult<PyCard> {
    generate_card_seeded(max_num, seed)
        .map(PyCard)
        .map_err(value_error)
}

/// Score raw card values.
#[pyfunction]
pub fn score_card(values: Vec<u32>) -> PyResult<u32> {
    crate::scoring::score_card(&values).map_err(value_error)
}
