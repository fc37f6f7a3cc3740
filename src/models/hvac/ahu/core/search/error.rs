use thiserror::Error;

use super::super::SolveError;
use super::SearchVariable;

/// Errors that can occur during a setpoint search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The target identifier is not recognized.
    #[error("unknown setpoint target {0:?}, expected \"θS\" or \"φI\"")]
    InvalidTarget(String),

    /// No value of the search variable meets the setpoint.
    ///
    /// The working point of the unit is left unchanged.
    #[error("no {variable} meets the setpoint: best value={best_value}, cost={cost}")]
    NoSolution {
        /// Variable that was searched.
        variable: SearchVariable,

        /// Value with the lowest cost encountered.
        best_value: f64,

        /// Least-squares cost at `best_value`.
        cost: f64,
    },

    /// The final solve at the accepted value failed.
    #[error("process solve failed")]
    Solve(#[from] SolveError),

    /// The minimizer reported an internal error.
    #[error("minimizer error: {0}")]
    Optimizer(String),
}
