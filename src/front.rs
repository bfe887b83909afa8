//! Pareto front detection over normalized objective vectors.
//!
//! All functions here operate on *deduplicated, lexicographically sorted*
//! vectors of normalized ("lower is better") values. Lexicographic order
//! guarantees that no later vector can dominate an earlier one, which both
//! the 2-objective sweep and the general peel rely on. The ranking layer in
//! [`crate::rank`] prepares its inputs accordingly before calling in.

/// Front-detection strategy, selected by objective count.
///
/// One dimension is a total order, so the front is the set of minima. Two
/// dimensions admit a log-linear sorted sweep because domination reduces to
/// a running-minimum check on the second axis. Three or more dimensions have
/// no such shortcut without a nontrivial multi-dimensional structure, so the
/// general strategy accepts quadratic worst-case behavior per layer — a
/// known complexity limitation, not a defect.
///
/// # Examples
///
/// ```
/// use pareto_rank::FrontStrategy;
///
/// assert_eq!(FrontStrategy::for_objective_count(1), FrontStrategy::SingleObjective);
/// assert_eq!(FrontStrategy::for_objective_count(2), FrontStrategy::BiObjective);
/// assert_eq!(FrontStrategy::for_objective_count(5), FrontStrategy::MultiObjective);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontStrategy {
    /// One objective: on the front iff equal to the minimum value.
    ///
    /// # Complexity
    /// O(n)
    SingleObjective,

    /// Two objectives: single left-to-right sweep tracking the running
    /// minimum of the second axis.
    ///
    /// # Complexity
    /// O(n) given sorted input
    BiObjective,

    /// Three or more objectives: repeatedly take the first live vector as a
    /// front member and discard everything it dominates.
    ///
    /// # Complexity
    /// O(n²) worst case
    MultiObjective,
}

impl FrontStrategy {
    /// Selects the strategy for the given number of objectives.
    pub fn for_objective_count(n_objectives: usize) -> Self {
        match n_objectives {
            1 => FrontStrategy::SingleObjective,
            2 => FrontStrategy::BiObjective,
            _ => FrontStrategy::MultiObjective,
        }
    }

    /// Marks which of the given vectors are on the current Pareto front.
    ///
    /// The input must be deduplicated and lexicographically sorted; see the
    /// module documentation.
    pub fn mask(&self, unique_lexsorted: &[Vec<f64>]) -> Vec<bool> {
        match self {
            FrontStrategy::SingleObjective => single_objective_mask(unique_lexsorted),
            FrontStrategy::BiObjective => bi_objective_mask(unique_lexsorted),
            FrontStrategy::MultiObjective => multi_objective_mask(unique_lexsorted),
        }
    }
}

/// Per-vector membership in the current Pareto front.
///
/// Dispatches on the vectors' dimensionality; the input must be
/// deduplicated and lexicographically sorted.
pub fn pareto_front_mask(unique_lexsorted: &[Vec<f64>]) -> Vec<bool> {
    if unique_lexsorted.is_empty() {
        return Vec::new();
    }
    let n_objectives = unique_lexsorted[0].len();
    debug_assert!(
        unique_lexsorted.iter().all(|v| v.len() == n_objectives),
        "all vectors must have the same number of objectives"
    );
    FrontStrategy::for_objective_count(n_objectives).mask(unique_lexsorted)
}

fn single_objective_mask(values: &[Vec<f64>]) -> Vec<bool> {
    if values.is_empty() {
        return Vec::new();
    }
    // Sorted input puts the minimum at position 0; ties with it share the front.
    let min = values[0][0];
    values.iter().map(|v| v[0] == min).collect()
}

fn bi_objective_mask(values: &[Vec<f64>]) -> Vec<bool> {
    let n = values.len();
    let mut on_front = vec![false; n];
    if n == 0 {
        return on_front;
    }

    // Lexicographic order fixes axis 0 ascending, so a vector is dominated
    // exactly when some earlier vector has an axis-1 value no larger than
    // its own. Only strict improvements over the running minimum survive,
    // which also keeps just the first representative of any axis-1 tie.
    on_front[0] = true;
    let mut min_value1 = values[0][1];
    for i in 1..n {
        let value1 = values[i][1];
        if value1 < min_value1 {
            min_value1 = value1;
            on_front[i] = true;
        }
    }
    on_front
}

fn multi_objective_mask(values: &[Vec<f64>]) -> Vec<bool> {
    let n = values.len();
    let mut on_front = vec![false; n];
    let mut live: Vec<usize> = (0..n).collect();

    while !live.is_empty() {
        // Lexicographic order guarantees no later vector dominates an
        // earlier one, so the first live vector is always on the front.
        let best = live[0];
        on_front[best] = true;

        // A vector survives only if it beats the front member on some axis;
        // the front member itself never does, so the live set shrinks.
        live.retain(|&i| {
            values[i]
                .iter()
                .zip(&values[best])
                .any(|(v, b)| v < b)
        });
    }

    on_front
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_dispatch() {
        assert_eq!(
            FrontStrategy::for_objective_count(1),
            FrontStrategy::SingleObjective
        );
        assert_eq!(
            FrontStrategy::for_objective_count(2),
            FrontStrategy::BiObjective
        );
        assert_eq!(
            FrontStrategy::for_objective_count(3),
            FrontStrategy::MultiObjective
        );
        assert_eq!(
            FrontStrategy::for_objective_count(7),
            FrontStrategy::MultiObjective
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(pareto_front_mask(&[]).is_empty());
    }

    #[test]
    fn test_single_objective_front_is_minimum() {
        // Deduplicated sorted input: only the minimum is on the front.
        let values = vec![vec![1.0], vec![2.0], vec![5.0]];
        assert_eq!(pareto_front_mask(&values), vec![true, false, false]);
    }

    #[test]
    fn test_single_vector_is_on_front() {
        assert_eq!(pareto_front_mask(&[vec![3.0, 4.0]]), vec![true]);
    }

    #[test]
    fn test_bi_objective_sweep() {
        // Lexicographically sorted. (2, 3) and (3, 2) are dominated by (2, 2).
        let values = vec![
            vec![1.0, 4.0],
            vec![2.0, 2.0],
            vec![2.0, 3.0],
            vec![3.0, 2.0],
            vec![4.0, 1.0],
        ];
        assert_eq!(
            pareto_front_mask(&values),
            vec![true, true, false, false, true]
        );
    }

    #[test]
    fn test_bi_objective_axis1_tie_keeps_first() {
        // (2, 2) matches but does not improve the running minimum set by
        // (1, 2), so only the lexicographically-first representative stays.
        let values = vec![vec![1.0, 2.0], vec![2.0, 2.0], vec![3.0, 1.0]];
        assert_eq!(pareto_front_mask(&values), vec![true, false, true]);
    }

    #[test]
    fn test_bi_objective_strictly_descending_chain() {
        let values = vec![vec![1.0, 3.0], vec![2.0, 2.0], vec![3.0, 1.0]];
        assert_eq!(pareto_front_mask(&values), vec![true, true, true]);
    }

    #[test]
    fn test_multi_objective_all_incomparable() {
        let values = vec![
            vec![1.0, 5.0, 3.0],
            vec![3.0, 1.0, 5.0],
            vec![4.0, 4.0, 4.0],
            vec![5.0, 3.0, 1.0],
        ];
        assert_eq!(
            pareto_front_mask(&values),
            vec![true, true, true, true]
        );
    }

    #[test]
    fn test_multi_objective_dominated_chain() {
        let values = vec![
            vec![1.0, 1.0, 1.0],
            vec![2.0, 2.0, 2.0],
            vec![3.0, 3.0, 3.0],
        ];
        assert_eq!(pareto_front_mask(&values), vec![true, false, false]);
    }

    #[test]
    fn test_multi_objective_mixed() {
        let values = vec![
            vec![1.0, 5.0, 5.0],
            vec![2.0, 2.0, 6.0],
            vec![2.0, 3.0, 7.0], // dominated by (2, 2, 6)
            vec![6.0, 6.0, 6.0], // dominated by (2, 2, 6)
        ];
        assert_eq!(
            pareto_front_mask(&values),
            vec![true, true, false, false]
        );
    }
}
