use thiserror::Error;
use uom::si::f64::{Ratio, ThermodynamicTemperature};

/// Errors that can occur while solving the process model.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolveError {
    /// The linear system has no unique solution.
    ///
    /// Typical causes are a zero supply flow or a fully bypassed coil, which
    /// leaves the coil outlet undetermined.
    #[error("singular process model at linearization temperature {linearization_temp:?}")]
    SingularSystem {
        /// Saturation linearization temperature of the failed solve.
        linearization_temp: ThermodynamicTemperature,
    },

    /// The saturation iteration did not settle within the iteration bound.
    ///
    /// Also raised when psychrometric properties become non-finite, which
    /// happens when the linearization point runs far off the saturation curve.
    #[error("saturation iteration did not converge after {iters} iterations: discrepancy={discrepancy:?}")]
    NonConvergence {
        /// Linear solves performed.
        iters: usize,

        /// Last gap between the coil outlet and the saturation curve.
        ///
        /// May be NaN or infinite if the iteration diverged.
        discrepancy: Ratio,
    },
}
