use crate::error::{PolicyError, Result};
use crate::types::{ActionIndex, QValue};
use rand::Rng;

/// Every index attaining the maximum of `values`, in ascending order.
///
/// Equality is exact. Empty input and NaN entries are rejected.
pub fn max_indices(values: &[QValue]) -> Result<Vec<ActionIndex>> {
    if values.is_empty() {
        return Err(PolicyError::invalid_argument("cannot take argmax of empty values"));
    }
    let mut max_value = f64::NEG_INFINITY;
    let mut candidates = Vec::with_capacity(values.len());
    for (i, &value) in values.iter().enumerate() {
        if value.is_nan() {
            return Err(PolicyError::invalid_argument(format!("NaN action value at index {}", i)));
        }
        if value > max_value {
            max_value = value;
            candidates.clear();
            candidates.push(i);
        } else if value == max_value {
            candidates.push(i);
        }
    }
    Ok(candidates)
}

/// Argmax that picks uniformly among tied maxima.
///
/// Always consumes exactly one draw from `rng`, even when the maximum is
/// unique, so seeded runs stay aligned regardless of ties.
pub fn select_max_index<R: Rng + ?Sized>(values: &[QValue], rng: &mut R) -> Result<ActionIndex> {
    let candidates = max_indices(values)?;
    Ok(candidates[rng.random_range(0..candidates.len())])
}
