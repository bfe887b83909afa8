//! Error types for dominance comparisons and ranking.
//!
//! Every variant here is a caller contract violation (mismatched shapes),
//! never a transient fault, so nothing in this crate retries or recovers
//! internally — errors surface synchronously at the offending call.

use thiserror::Error;

/// Errors raised by dominance comparisons and ranking operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankError {
    /// Two compared vectors carry different numbers of objective values.
    #[error("records with different numbers of objectives cannot be compared: {left} vs {right}")]
    ObjectiveCountMismatch {
        /// Objective count of the left-hand side.
        left: usize,
        /// Objective count of the right-hand side.
        right: usize,
    },

    /// A record's value count differs from the configured direction count.
    #[error("the number of values ({values}) and the number of objective directions ({directions}) are mismatched")]
    DirectionCountMismatch {
        /// Number of objective values on the record.
        values: usize,
        /// Number of configured directions.
        directions: usize,
    },

    /// The penalty array length differs from the number of value rows.
    #[error("the length of penalty ({penalties}) and loss_values ({values}) must be the same")]
    PenaltyLengthMismatch {
        /// Number of penalty entries supplied.
        penalties: usize,
        /// Number of value rows supplied.
        values: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_shapes() {
        let err = RankError::ObjectiveCountMismatch { left: 2, right: 3 };
        assert!(err.to_string().contains("2 vs 3"));

        let err = RankError::DirectionCountMismatch {
            values: 2,
            directions: 3,
        };
        assert!(err.to_string().contains("(2)"));
        assert!(err.to_string().contains("(3)"));

        let err = RankError::PenaltyLengthMismatch {
            penalties: 4,
            values: 5,
        };
        assert!(err.to_string().contains("(4)"));
        assert!(err.to_string().contains("(5)"));
    }
}
