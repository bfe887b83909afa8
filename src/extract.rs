//! Record-level Pareto front extraction.
//!
//! A convenience layer over the array-level engine: filters records to the
//! completed (and optionally feasible) subset, extracts the non-dominated
//! ones, and hands them back in arrival order. Two objectives get a
//! log-linear sorted sweep; any other objective count falls back to the
//! quadratic pairwise check.

use crate::dominance::{dominates, normalize_value};
use crate::error::RankError;
use crate::record::{Direction, Record};

/// Filters records to those satisfying all of their constraints.
///
/// A record with no penalty attribute counts as feasible; otherwise every
/// penalty entry must be `<= 0`.
pub fn feasible_records<R: Record>(records: &[R]) -> Vec<&R> {
    records.iter().filter(|r| r.is_feasible()).collect()
}

/// Returns the records on the Pareto front, in arrival order.
///
/// Only [`Complete`](crate::RecordState::Complete) records are considered;
/// with `consider_constraints` the set is further restricted to feasible
/// records. The input is never mutated and the result borrows from it.
///
/// # Complexity
///
/// O(n log n) for exactly two objectives, O(n²) otherwise.
///
/// # Errors
///
/// Returns [`RankError::DirectionCountMismatch`] if any considered record's
/// value count differs from `directions.len()`.
pub fn pareto_front_records<'a, R: Record>(
    records: &'a [R],
    directions: &[Direction],
    consider_constraints: bool,
) -> Result<Vec<&'a R>, RankError> {
    let mut filtered: Vec<&R> = records
        .iter()
        .filter(|r| r.state().is_complete())
        .collect();
    if consider_constraints {
        filtered.retain(|r| r.is_feasible());
    }

    for record in &filtered {
        if record.values().len() != directions.len() {
            return Err(RankError::DirectionCountMismatch {
                values: record.values().len(),
                directions: directions.len(),
            });
        }
    }

    let mut front = if directions.len() == 2 {
        bi_objective_front(filtered, directions)? // Log-linear in record count.
    } else {
        pairwise_front(&filtered, directions)? // Quadratic in record count.
    };

    front.sort_by_key(|r| r.arrival_index());
    Ok(front)
}

/// Sorted sweep for exactly two objectives.
///
/// After sorting by normalized value tuple, a record can only be dominated
/// by the most recently accepted one, so a single pass with a "last
/// accepted" cursor extracts the whole front.
fn bi_objective_front<'a, R: Record>(
    mut records: Vec<&'a R>,
    directions: &[Direction],
) -> Result<Vec<&'a R>, RankError> {
    if records.is_empty() {
        return Ok(records);
    }

    records.sort_by(|a, b| {
        let ka = normalized_pair(*a, directions);
        let kb = normalized_pair(*b, directions);
        ka.0.total_cmp(&kb.0).then(ka.1.total_cmp(&kb.1))
    });

    let mut last_nondominated = records[0];
    let mut front = vec![records[0]];
    for &record in &records[1..] {
        if dominates(last_nondominated, record, directions)? {
            continue;
        }
        front.push(record);
        last_nondominated = record;
    }
    Ok(front)
}

fn normalized_pair<R: Record>(record: &R, directions: &[Direction]) -> (f64, f64) {
    let values = record.values();
    (
        normalize_value(values[0], directions[0]),
        normalize_value(values[1], directions[1]),
    )
}

/// Naive pairwise check for any objective count.
fn pairwise_front<'a, R: Record>(
    records: &[&'a R],
    directions: &[Direction],
) -> Result<Vec<&'a R>, RankError> {
    let mut front = Vec::new();
    for &candidate in records {
        let mut dominated = false;
        for &other in records {
            if dominates(other, candidate, directions)? {
                dominated = true;
                break;
            }
        }
        if !dominated {
            front.push(candidate);
        }
    }
    Ok(front)
}
