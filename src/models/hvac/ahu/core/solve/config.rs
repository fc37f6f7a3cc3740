use uom::si::{f64::Ratio, ratio::ratio};

/// Configuration of the saturation fixed-point iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolveConfig {
    /// Maximum number of linear solves before giving up.
    pub max_iters: usize,

    /// Largest accepted gap between the coil outlet humidity ratio and the
    /// saturation curve at the coil outlet temperature.
    pub humidity_tol: Ratio,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            humidity_tol: Ratio::new::<ratio>(1e-5),
        }
    }
}
