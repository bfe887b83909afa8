//! Pareto dominance rankings for multi-objective search.
//!
//! Orders candidate solutions when no single scalar score exists: given
//! records carrying one value per objective axis (minimized or maximized
//! per axis), an optional constraint-violation penalty, and a completion
//! state, this crate determines which records form the non-dominated
//! (Pareto-optimal) front and stratifies all of them into integer
//! dominance ranks.
//!
//! # Components
//!
//! - [`dominates`]: state-aware Pareto dominance between two records
//! - [`normalize_value`]: maps any axis onto the internal "lower is
//!   better" convention (missing values become worst-possible)
//! - [`FrontStrategy`] / [`pareto_front_mask`]: front detection with a
//!   dedicated log-linear path for two objectives
//! - [`nondomination_rank`]: layered ranking with an early-stop budget
//! - [`constrained_rank`]: constrained-NSGA-II precedence — feasible,
//!   then infeasible by penalty value, then unknown feasibility
//! - [`pareto_front_records`]: record-level front extraction preserving
//!   arrival order
//!
//! Every operation is a pure function of its inputs: no shared state, no
//! I/O, no blocking. Independent calls may run concurrently without any
//! coordination.
//!
//! # Example
//!
//! ```
//! use pareto_rank::{constrained_rank, nondomination_rank};
//!
//! let loss_values = vec![
//!     vec![1.0, 5.0],
//!     vec![3.0, 3.0],
//!     vec![5.0, 1.0],
//!     vec![4.0, 4.0], // dominated by (3, 3)
//! ];
//! let ranks = nondomination_rank(&loss_values, None).unwrap();
//! assert_eq!(ranks, vec![0, 0, 0, 1]);
//!
//! // A violated constraint outranks any objective value.
//! let penalty = [0.0, 0.0, 0.0, 2.0];
//! let ranks = constrained_rank(&loss_values, Some(&penalty), None).unwrap();
//! assert_eq!(ranks, vec![0, 0, 0, 1]);
//! ```
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II*, IEEE Trans. Evolutionary Computation 6(2)

pub mod dominance;
pub mod error;
pub mod extract;
pub mod front;
pub mod rank;
pub mod record;

pub use dominance::{dominates, normalize_value};
pub use error::RankError;
pub use extract::{feasible_records, pareto_front_records};
pub use front::{pareto_front_mask, FrontStrategy};
pub use rank::{constrained_rank, nondomination_rank};
pub use record::{Direction, Record, RecordState};
