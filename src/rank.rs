//! Non-domination ranking with constraint-aware orchestration.
//!
//! [`nondomination_rank`] stratifies normalized objective vectors into
//! integer dominance layers (0 = Pareto front), peeling successive fronts
//! with [`crate::front::pareto_front_mask`] until an optional `n_below`
//! budget is satisfied. [`constrained_rank`] layers the constrained-NSGA-II
//! precedence on top: feasible vectors first, then infeasible vectors
//! ordered by penalty value, then vectors with unknown feasibility.
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*
//! - Deb (2000), *An Efficient Constraint Handling Method for Genetic
//!   Algorithms*

use std::cmp::Ordering;

use crate::error::RankError;
use crate::front::pareto_front_mask;

/// Lexicographic total order on objective vectors.
///
/// `total_cmp` keeps the order total even for `inf` (missing values
/// normalize to `+inf` before they reach this point).
fn lex_cmp(a: &[f64], b: &[f64]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match x.total_cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Sorts vectors lexicographically, drops exact duplicates, and returns the
/// unique rows together with the inverse map from original position to
/// unique-row index.
///
/// Exact duplicates trivially share a rank, so all layer computation runs
/// on the unique set and results are broadcast back through the inverse map.
fn unique_lexsorted(loss_values: &[Vec<f64>]) -> (Vec<Vec<f64>>, Vec<usize>) {
    let n = loss_values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| lex_cmp(&loss_values[i], &loss_values[j]));

    let mut unique: Vec<Vec<f64>> = Vec::new();
    let mut inverse = vec![0usize; n];
    for &i in &order {
        let is_new = unique
            .last()
            .map_or(true, |u| lex_cmp(u, &loss_values[i]) != Ordering::Equal);
        if is_new {
            unique.push(loss_values[i].clone());
        }
        inverse[i] = unique.len() - 1;
    }
    (unique, inverse)
}

/// Dense rank of each value among the distinct sorted values.
///
/// Equal values share a rank and no rank index is skipped.
fn dense_rank(values: &[f64]) -> Vec<usize> {
    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup_by(|a, b| a.total_cmp(b) == Ordering::Equal);

    values
        .iter()
        .map(|v| sorted.partition_point(|s| s.total_cmp(v) == Ordering::Less))
        .collect()
}

/// Assigns a non-domination rank to every objective vector.
///
/// Each vector's rank is the index of the dominance layer it belongs to
/// after repeatedly removing successive Pareto fronts; rank 0 is the front
/// itself. All values are treated as minimized — normalize first if some
/// axes are maximized (see [`crate::normalize_value`]).
///
/// `n_below` is the minimum number of vectors that must receive a resolved
/// layer before the loop may stop; everything still unresolved then shares
/// the next (worst) rank. `None` ranks everything, `Some(0)` assigns rank 0
/// across the board (the caller wants no discrimination). In one dimension
/// domination is a total order and the rank is simply the dense rank of the
/// value.
///
/// # Complexity
///
/// O(n log n) per layer for two objectives, O(n²) per layer otherwise.
///
/// # Errors
///
/// Returns [`RankError::ObjectiveCountMismatch`] if the rows have
/// inconsistent lengths.
///
/// # Examples
///
/// ```
/// use pareto_rank::nondomination_rank;
///
/// let loss_values = vec![
///     vec![1.0, 5.0],
///     vec![3.0, 3.0],
///     vec![5.0, 1.0],
///     vec![4.0, 4.0], // dominated by (3, 3)
/// ];
/// let ranks = nondomination_rank(&loss_values, None).unwrap();
/// assert_eq!(ranks, vec![0, 0, 0, 1]);
/// ```
pub fn nondomination_rank(
    loss_values: &[Vec<f64>],
    n_below: Option<usize>,
) -> Result<Vec<usize>, RankError> {
    let n = loss_values.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let n_objectives = loss_values[0].len();
    for row in loss_values {
        if row.len() != n_objectives {
            return Err(RankError::ObjectiveCountMismatch {
                left: n_objectives,
                right: row.len(),
            });
        }
    }

    if n_below == Some(0) {
        return Ok(vec![0; n]);
    }
    let n_below = n_below.unwrap_or(n).min(n);

    if n_objectives == 1 {
        // One dimension is a total order; no layering loop needed.
        let column: Vec<f64> = loss_values.iter().map(|row| row[0]).collect();
        return Ok(dense_rank(&column));
    }

    let (mut unique, inverse) = unique_lexsorted(loss_values);
    let n_unique = unique.len();
    let mut unique_ranks = vec![0usize; n_unique];
    let mut live: Vec<usize> = (0..n_unique).collect();
    let mut rank = 0usize;

    while !live.is_empty() && n_unique - live.len() < n_below {
        let on_front = pareto_front_mask(&unique);
        let mut next_unique = Vec::with_capacity(unique.len());
        let mut next_live = Vec::with_capacity(live.len());
        for (pos, &is_front) in on_front.iter().enumerate() {
            if is_front {
                unique_ranks[live[pos]] = rank;
            } else {
                next_live.push(live[pos]);
                next_unique.push(std::mem::take(&mut unique[pos]));
            }
        }
        unique = next_unique;
        live = next_live;
        rank += 1;
    }

    // Whatever the budget left unresolved collapses into the worst rank.
    for &idx in &live {
        unique_ranks[idx] = rank;
    }

    Ok(inverse.iter().map(|&u| unique_ranks[u]).collect())
}

/// Assigns constraint-aware non-domination ranks.
///
/// With no `penalty` this is exactly [`nondomination_rank`]. Otherwise
/// vectors are partitioned by feasibility and ranked in three phases, each
/// offset past the previous phase's worst rank:
///
/// 1. **Feasible** (`penalty <= 0`): unconstrained non-domination rank.
/// 2. **Infeasible** (`penalty > 0`): dense rank of the penalty value,
///    ascending — closer to feasibility is better, objective values never
///    differentiate infeasible vectors.
/// 3. **Unknown feasibility** (`penalty` is NaN): unconstrained
///    non-domination rank over whatever budget the first two phases left.
///
/// Every feasible vector therefore ranks strictly better than every
/// infeasible or unknown one. The `n_below` budget is consumed phase by
/// phase and applies within phases, not to the partitioning itself;
/// `Some(0)` is treated like `None` here.
///
/// # Errors
///
/// Returns [`RankError::PenaltyLengthMismatch`] if `penalty` and
/// `loss_values` differ in length, and propagates shape errors from the
/// per-phase ranking.
///
/// # Examples
///
/// ```
/// use pareto_rank::constrained_rank;
///
/// let loss_values = vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![0.0, 0.0]];
/// // The third vector dominates on objectives but violates a constraint.
/// let penalty = [0.0, -1.0, 3.0];
/// let ranks = constrained_rank(&loss_values, Some(&penalty), None).unwrap();
/// assert_eq!(ranks, vec![0, 1, 2]);
/// ```
pub fn constrained_rank(
    loss_values: &[Vec<f64>],
    penalty: Option<&[f64]>,
    n_below: Option<usize>,
) -> Result<Vec<usize>, RankError> {
    let Some(penalty) = penalty else {
        return nondomination_rank(loss_values, n_below);
    };

    if penalty.len() != loss_values.len() {
        return Err(RankError::PenaltyLengthMismatch {
            penalties: penalty.len(),
            values: loss_values.len(),
        });
    }

    let n = loss_values.len();
    let mut ranks = vec![0usize; n];
    // Phase subtraction may drive the budget negative; i64 keeps that
    // explicit and a non-positive leftover means "no discrimination".
    let mut budget = match n_below {
        None | Some(0) => n as i64,
        Some(k) => k as i64,
    };

    let mut feasible = Vec::new();
    let mut infeasible = Vec::new();
    let mut unknown = Vec::new();
    for (i, &p) in penalty.iter().enumerate() {
        if p.is_nan() {
            unknown.push(i);
        } else if p <= 0.0 {
            feasible.push(i);
        } else {
            infeasible.push(i);
        }
    }

    // Phase 1: feasible vectors by unconstrained non-domination.
    let feasible_ranks = rank_with_budget(&gather(loss_values, &feasible), budget)?;
    let mut next_offset = 0usize;
    for (&i, &r) in feasible.iter().zip(&feasible_ranks) {
        ranks[i] = r;
        next_offset = next_offset.max(r + 1);
    }
    budget -= feasible.len() as i64;

    // Phase 2: infeasible vectors by penalty value alone.
    if !infeasible.is_empty() {
        let penalties: Vec<f64> = infeasible.iter().map(|&i| penalty[i]).collect();
        let penalty_ranks = dense_rank(&penalties);
        let mut max_assigned = 0usize;
        for (&i, &r) in infeasible.iter().zip(&penalty_ranks) {
            ranks[i] = next_offset + r;
            max_assigned = max_assigned.max(next_offset + r);
        }
        next_offset = max_assigned + 1;
        budget -= infeasible.len() as i64;
    }

    // Phase 3: unknown-feasibility vectors, lowest priority.
    let unknown_ranks = rank_with_budget(&gather(loss_values, &unknown), budget)?;
    for (&i, &r) in unknown.iter().zip(&unknown_ranks) {
        ranks[i] = next_offset + r;
    }

    Ok(ranks)
}

fn gather(loss_values: &[Vec<f64>], indices: &[usize]) -> Vec<Vec<f64>> {
    indices.iter().map(|&i| loss_values[i].clone()).collect()
}

fn rank_with_budget(loss_values: &[Vec<f64>], budget: i64) -> Result<Vec<usize>, RankError> {
    nondomination_rank(loss_values, Some(budget.max(0) as usize))
}
