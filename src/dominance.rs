//! Dominance predicate and value normalization.
//!
//! Everything inside the ranking core compares *normalized* values: a raw
//! objective value is mapped so that "lower is better" holds on every axis,
//! regardless of its configured [`Direction`]. Missing values normalize to
//! `+inf`, keeping comparisons total.

use crate::error::RankError;
use crate::record::{Direction, Record};

/// Maps a raw objective value to the internal "lower is better" convention.
///
/// - Absent value → `+inf` (worst possible)
/// - [`Direction::Maximize`] → negated
/// - [`Direction::Minimize`] → unchanged
///
/// Pure and total; there are no failure modes.
pub fn normalize_value(value: Option<f64>, direction: Direction) -> f64 {
    let value = value.unwrap_or(f64::INFINITY);
    match direction {
        Direction::Maximize => -value,
        Direction::Minimize => value,
    }
}

/// Whether `a` Pareto-dominates `b` under the given per-axis directions.
///
/// A non-complete record never dominates and is always dominated by any
/// complete record. For two complete records this is weak Pareto dominance
/// on normalized values: at least as good on every axis, strictly better on
/// at least one. Records with identical normalized vectors are mutually
/// non-dominating.
///
/// # Errors
///
/// Returns [`RankError::ObjectiveCountMismatch`] if the two records carry
/// different numbers of values, and [`RankError::DirectionCountMismatch`] if
/// the value count differs from `directions.len()`.
pub fn dominates<R: Record>(a: &R, b: &R, directions: &[Direction]) -> Result<bool, RankError> {
    if !a.state().is_complete() {
        return Ok(false);
    }
    if !b.state().is_complete() {
        return Ok(true);
    }

    let values_a = a.values();
    let values_b = b.values();

    if values_a.len() != values_b.len() {
        return Err(RankError::ObjectiveCountMismatch {
            left: values_a.len(),
            right: values_b.len(),
        });
    }
    if values_a.len() != directions.len() {
        return Err(RankError::DirectionCountMismatch {
            values: values_a.len(),
            directions: directions.len(),
        });
    }

    let normalized_a: Vec<f64> = values_a
        .iter()
        .zip(directions)
        .map(|(&v, &d)| normalize_value(v, d))
        .collect();
    let normalized_b: Vec<f64> = values_b
        .iter()
        .zip(directions)
        .map(|(&v, &d)| normalize_value(v, d))
        .collect();

    // Equal vectors are incomparable, not dominated.
    if normalized_a == normalized_b {
        return Ok(false);
    }

    Ok(normalized_a
        .iter()
        .zip(&normalized_b)
        .all(|(va, vb)| va <= vb))
}
