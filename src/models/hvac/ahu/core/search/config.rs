use uom::si::{
    f64::{MassRate, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    thermodynamic_temperature::degree_celsius,
};

/// Configuration of the setpoint search.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Maximum iteration count of the scalar minimizer.
    pub max_iters: usize,

    /// Saturation linearization temperature each trial solve starts from.
    pub initial_saturation_temp: ThermodynamicTemperature,

    /// Upper bound of the supply flow search interval.
    pub max_supply_flow: MassRate,

    /// Largest least-squares cost accepted by the supply flow search.
    pub flow_cost_tol: f64,

    /// Largest least-squares cost accepted by the bypass factor search.
    pub bypass_cost_tol: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            initial_saturation_temp: ThermodynamicTemperature::new::<degree_celsius>(5.0),
            max_supply_flow: MassRate::new::<kilogram_per_second>(100.0),
            flow_cost_tol: 1e-4,
            bypass_cost_tol: 1e-5,
        }
    }
}

impl SearchConfig {
    pub(super) fn initial_guess(&self) -> f64 {
        self.initial_saturation_temp.get::<degree_celsius>()
    }

    pub(super) fn max_iters(&self) -> u64 {
        u64::try_from(self.max_iters).unwrap_or(u64::MAX)
    }
}
