//! Setpoint search over one design variable.
//!
//! A bounded Brent minimization of the least-squares cost `½·r²` adjusts the
//! supply flow or the bypass factor until the supply air temperature or
//! humidity meets its setpoint. Every trial re-runs the full saturation
//! solve on a private copy of the operating point.

mod config;
mod error;
mod problem;
mod target;

pub use config::SearchConfig;
pub use error::SearchError;
pub use target::{SearchVariable, SetpointTarget};

use argmin::{
    core::{Executor, State},
    solver::brent::BrentOpt,
};
use tracing::{info, warn};
use twine_core::Model;

use crate::support::psychro::Psychrometrics;

use super::{OperatingPoint, Solution, SolveConfig};

use problem::{SearchCost, TrialModel};
use target::Objective;

/// Outcome of a successful search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Found {
    /// Accepted value of the search variable.
    pub(super) value: f64,

    /// Converged solution at `value`.
    pub(super) solution: Solution,
}

/// Searches `variable` for the value that brings `target` to its setpoint.
///
/// `point` is only read. The caller decides whether to commit the found value.
///
/// # Errors
///
/// Returns [`SearchError::NoSolution`] if the best cost exceeds the
/// tolerance for `variable`, or a solve or minimizer error.
pub(super) fn search<P: Psychrometrics>(
    point: &OperatingPoint,
    psychro: &P,
    variable: SearchVariable,
    target: SetpointTarget,
    solve_config: SolveConfig,
    config: SearchConfig,
) -> Result<Found, SearchError> {
    let (lower, upper) = variable.bounds(&config);
    let model = TrialModel::new(
        target.prepare(*point),
        variable,
        psychro,
        config.initial_guess(),
        solve_config,
    );
    let objective = target.objective(&point.conditions, psychro);

    let result = Executor::new(SearchCost::new(&model, objective), BrentOpt::new(lower, upper))
        .configure(|state| state.max_iters(config.max_iters()))
        .run()
        .map_err(|err| SearchError::Optimizer(err.to_string()))?;

    let state = result.state();
    let best_value = state
        .get_best_param()
        .copied()
        .ok_or_else(|| SearchError::Optimizer("no trial was evaluated".to_owned()))?;
    let cost = state.get_best_cost();

    let accepted = cost < variable.cost_tol(&config);
    if !accepted {
        warn!(%variable, best_value, cost, ?target, "setpoint search found no solution");
        return Err(SearchError::NoSolution {
            variable,
            best_value,
            cost,
        });
    }

    let solution = model.call(&best_value)?;
    info!(%variable, value = best_value, cost, "setpoint search converged");

    Ok(Found {
        value: best_value,
        solution,
    })
}
