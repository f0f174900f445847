use crate::error::PolicyError;
use crate::policy::{Policy, single_row_policy};
use crate::types::{ActionIndex, BlackjackState};
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use rand::rng;

impl From<PolicyError> for PyErr {
    fn from(err: PolicyError) -> PyErr {
        match err {
            PolicyError::KeyNotFound => PyKeyError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

#[pymodule]
fn mc_policy(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(select_max_index, m)?)?;
    m.add_function(wrap_pyfunction!(default_blackjack_policy, m)?)?;
    m.add_function(wrap_pyfunction!(epsilon_action, m)?)
}

#[pyfunction]
fn select_max_index(values: Vec<f64>) -> PyResult<ActionIndex> {
    Ok(crate::argmax::select_max_index(&values, &mut rng())?)
}

#[pyfunction]
fn default_blackjack_policy(state: BlackjackState) -> ActionIndex {
    crate::blackjack::default_blackjack_policy(&state)
}

/// One epsilon-soft decision over a single row of action values.
#[pyfunction]
fn epsilon_action(values: Vec<f64>, epsilon: f64) -> PyResult<ActionIndex> {
    let policy = single_row_policy(values, epsilon)?;
    Ok(policy.decide(&(), &mut rng())?)
}
