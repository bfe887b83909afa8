//! Record and direction abstractions consumed by the ranking core.
//!
//! The central trait — [`Record`] — defines the contract between the generic
//! ranking engine and whatever evaluation representation the surrounding
//! search process uses. The core reads records, it never stores or mutates
//! them.

/// Completion state of an evaluation record.
///
/// Only [`Complete`](RecordState::Complete) records participate in dominance
/// comparisons: a non-complete record is always dominated by any complete
/// record and never dominates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordState {
    /// Queued, not yet evaluated.
    Pending,
    /// Evaluation in progress.
    Running,
    /// Evaluation finished with a full objective vector.
    Complete,
    /// Evaluation aborted with an error.
    Failed,
    /// Evaluation stopped early by the search process.
    Pruned,
}

impl RecordState {
    /// Whether this state allows the record to take part in dominance.
    pub fn is_complete(self) -> bool {
        matches!(self, RecordState::Complete)
    }
}

/// Optimization direction for one objective axis.
///
/// Supplied externally, one per axis, fixed for the whole comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Lower values are better.
    Minimize,
    /// Higher values are better.
    Maximize,
}

/// A multi-objective evaluation record.
///
/// Implement this on whatever candidate representation the surrounding
/// search loop produces. The ranking core only reads through this trait.
///
/// # Implementing
///
/// ```
/// use pareto_rank::{Record, RecordState};
///
/// struct Candidate {
///     index: usize,
///     state: RecordState,
///     values: Vec<Option<f64>>,
///     penalties: Option<Vec<f64>>,
/// }
///
/// impl Record for Candidate {
///     fn state(&self) -> RecordState {
///         self.state
///     }
///     fn values(&self) -> &[Option<f64>] {
///         &self.values
///     }
///     fn constraint_penalties(&self) -> Option<&[f64]> {
///         self.penalties.as_deref()
///     }
///     fn arrival_index(&self) -> usize {
///         self.index
///     }
/// }
/// ```
pub trait Record {
    /// Completion state of this record.
    fn state(&self) -> RecordState;

    /// Objective values, one optional entry per axis.
    ///
    /// An absent entry is treated as worst-possible during comparison.
    /// The length must equal the configured direction count whenever the
    /// record is compared.
    fn values(&self) -> &[Option<f64>];

    /// Constraint-violation penalties, one per constraint, if any were
    /// attached to this record.
    fn constraint_penalties(&self) -> Option<&[f64]>;

    /// Stable index used only to restore original ordering after sorting.
    fn arrival_index(&self) -> usize;

    /// Whether this record satisfies all of its constraints.
    ///
    /// A record with no penalty attribute is feasible by definition;
    /// otherwise every penalty entry must be `<= 0`.
    fn is_feasible(&self) -> bool {
        self.constraint_penalties()
            .map_or(true, |penalties| penalties.iter().all(|&p| p <= 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRecord {
        penalties: Option<Vec<f64>>,
    }

    impl Record for TestRecord {
        fn state(&self) -> RecordState {
            RecordState::Complete
        }
        fn values(&self) -> &[Option<f64>] {
            &[]
        }
        fn constraint_penalties(&self) -> Option<&[f64]> {
            self.penalties.as_deref()
        }
        fn arrival_index(&self) -> usize {
            0
        }
    }

    #[test]
    fn test_no_penalties_is_feasible() {
        let r = TestRecord { penalties: None };
        assert!(r.is_feasible());
    }

    #[test]
    fn test_nonpositive_penalties_are_feasible() {
        let r = TestRecord {
            penalties: Some(vec![0.0, -1.5, -0.1]),
        };
        assert!(r.is_feasible());
    }

    #[test]
    fn test_any_positive_penalty_is_infeasible() {
        let r = TestRecord {
            penalties: Some(vec![-1.0, 0.0, 0.3]),
        };
        assert!(!r.is_feasible());
    }

    #[test]
    fn test_state_completeness() {
        assert!(RecordState::Complete.is_complete());
        assert!(!RecordState::Pending.is_complete());
        assert!(!RecordState::Running.is_complete());
        assert!(!RecordState::Failed.is_complete());
        assert!(!RecordState::Pruned.is_complete());
    }
}
