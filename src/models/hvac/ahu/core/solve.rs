//! Saturation fixed-point solve of the process model.
//!
//! The cooling coil outlet must lie on the saturation curve, which is
//! nonlinear. Each iteration replaces the curve by its tangent at the current
//! linearization temperature, solves the resulting [`LinearSystem`], and moves
//! the linearization point to the computed coil outlet temperature. The loop
//! stops once the coil outlet humidity ratio is within tolerance of the true
//! saturation value at that temperature.

mod config;
mod error;
mod linear;

pub use config::SolveConfig;
pub use error::SolveError;
pub use linear::{LATENT_HEAT, LinearSystem, SPECIFIC_HEAT};

use tracing::{debug, trace};
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::psychro::Psychrometrics;

use super::{OperatingPoint, Solution, StatePoint};

/// Solves the process model for `point`, starting the saturation
/// linearization at `initial_guess` (°C).
///
/// # Errors
///
/// Returns [`SolveError::SingularSystem`] if the system assembled at
/// `initial_guess` has no unique solution. Returns
/// [`SolveError::NonConvergence`] if the iteration bound is exhausted, or if
/// the linearization diverges so that properties, the solution, or the
/// matrix of a later iteration degenerate.
pub(super) fn solve(
    point: &OperatingPoint,
    psychro: &impl Psychrometrics,
    initial_guess: f64,
    config: SolveConfig,
) -> Result<Solution, SolveError> {
    let (coil_t, coil_w) = StatePoint::CoilOutlet.slots();
    let tol = config.humidity_tol.get::<ratio>();

    let mut linearization = initial_guess;
    let mut discrepancy = f64::INFINITY;

    for iter in 1..=config.max_iters {
        let system = LinearSystem::assemble(point, psychro, linearization);
        if !system.is_finite() {
            return Err(non_convergence(iter - 1, discrepancy));
        }

        // A non-finite solution, or a singular system past the first
        // iteration, means the linearization has diverged.
        let x = match system.solve() {
            Some(x) if x.iter().all(|v| v.is_finite()) => x,
            Some(_) => return Err(non_convergence(iter, discrepancy)),
            None if iter > 1 => return Err(non_convergence(iter, discrepancy)),
            None => {
                return Err(SolveError::SingularSystem {
                    linearization_temp: ThermodynamicTemperature::new::<degree_celsius>(
                        linearization,
                    ),
                });
            }
        };

        discrepancy = (psychro.saturation_humidity_ratio(x[coil_t]) - x[coil_w]).abs();
        trace!(iter, linearization, coil_temp = x[coil_t], discrepancy, "saturation iteration");

        if !discrepancy.is_finite() {
            return Err(non_convergence(iter, discrepancy));
        }
        if discrepancy <= tol {
            debug!(iters = iter, coil_temp = x[coil_t], "saturation iteration converged");
            return Ok(Solution::from_array(x));
        }

        linearization = x[coil_t];
    }

    Err(non_convergence(config.max_iters, discrepancy))
}

fn non_convergence(iters: usize, discrepancy: f64) -> SolveError {
    SolveError::NonConvergence {
        iters,
        discrepancy: Ratio::new::<ratio>(discrepancy),
    }
}
