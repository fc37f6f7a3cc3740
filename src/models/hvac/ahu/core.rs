//! Steady-state psychrometric process model of an air-handling unit.
//!
//! The unit draws outdoor air into a mixing box with the zone return air,
//! sends the mix through a cooling coil with partial bypass, reheats it,
//! and supplies it to a single thermal zone. Proportional controllers tie
//! the coil heats to the zone setpoints.

mod chart;
mod clamp;
mod input;
mod search;
mod solution;
mod solve;

#[cfg(test)]
mod test_support;

pub use chart::{CHART_LABELS, CHART_POINTS, CHART_PROCESSES, ChartRenderer, ProcessChart};
pub use input::{Conditions, InputError, OperatingPoint, Parameters, ProcessState};
pub use search::{SearchConfig, SearchError, SearchVariable, SetpointTarget};
pub use solution::{AirState, Solution, StatePoint};
pub use solve::{LATENT_HEAT, LinearSystem, SPECIFIC_HEAT, SolveConfig, SolveError};

use uom::si::{
    f64::{MassRate, Ratio, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::psychro::{MoistAir, Psychrometrics};

/// An air-handling unit serving one thermal zone.
///
/// Holds the design operating point, a working copy that searches and
/// condition updates modify, and the psychrometric property provider.
///
/// Methods taking `&mut self` are the only ones that modify the working point.
/// A search leaves it untouched unless it succeeds.
#[derive(Debug, Clone)]
pub struct AirHandlingUnit<P = MoistAir> {
    state: ProcessState,
    psychro: P,
    solve_config: SolveConfig,
    search_config: SearchConfig,
}

impl AirHandlingUnit {
    /// Creates a unit using standard-atmosphere moist air properties.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the conditions are out of range.
    pub fn new(parameters: Parameters, conditions: Conditions) -> Result<Self, InputError> {
        Self::with_psychrometrics(parameters, conditions, MoistAir::standard())
    }
}

impl<P: Psychrometrics> AirHandlingUnit<P> {
    /// Creates a unit with a custom property provider.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the conditions are out of range.
    pub fn with_psychrometrics(
        parameters: Parameters,
        conditions: Conditions,
        psychro: P,
    ) -> Result<Self, InputError> {
        let design = OperatingPoint::new(parameters, conditions)?;
        Ok(Self {
            state: ProcessState::new(design),
            psychro,
            solve_config: SolveConfig::default(),
            search_config: SearchConfig::default(),
        })
    }

    /// Replaces the saturation fixed-point settings.
    #[must_use]
    pub fn with_solve_config(mut self, config: SolveConfig) -> Self {
        self.solve_config = config;
        self
    }

    /// Replaces the setpoint search settings.
    #[must_use]
    pub fn with_search_config(mut self, config: SearchConfig) -> Self {
        self.search_config = config;
        self
    }

    /// The operating point the unit was built with.
    #[must_use]
    pub fn design(&self) -> &OperatingPoint {
        self.state.design()
    }

    /// The current working point.
    #[must_use]
    pub fn actual(&self) -> &OperatingPoint {
        self.state.actual()
    }

    /// Design and working points together.
    #[must_use]
    pub fn state(&self) -> &ProcessState {
        &self.state
    }

    /// The psychrometric property provider.
    #[must_use]
    pub fn psychrometrics(&self) -> &P {
        &self.psychro
    }

    /// Replaces the boundary conditions of the working point.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] and keeps the current conditions if the new
    /// ones are out of range.
    pub fn set_conditions(&mut self, conditions: Conditions) -> Result<(), InputError> {
        conditions.check()?;
        self.state.actual_mut().conditions = conditions;
        Ok(())
    }

    /// Restores the working point to the design point.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Assembles the linear process model at the working point.
    #[must_use]
    pub fn linear_system(&self, linearization: ThermodynamicTemperature) -> LinearSystem {
        LinearSystem::assemble(
            self.state.actual(),
            &self.psychro,
            linearization.get::<degree_celsius>(),
        )
    }

    /// Solves the process model at the working point.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the system is singular or the saturation
    /// iteration does not converge.
    pub fn solve(&self, initial_guess: ThermodynamicTemperature) -> Result<Solution, SolveError> {
        solve::solve(
            self.state.actual(),
            &self.psychro,
            initial_guess.get::<degree_celsius>(),
            self.solve_config,
        )
    }

    /// Adjusts the supply flow until `target` meets its setpoint.
    ///
    /// On success the found flow is written into the working point and the
    /// converged solution at that flow is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] and leaves the working point unchanged if no
    /// flow in `[0, max_supply_flow]` meets the setpoint.
    pub fn search_by_flow(&mut self, target: SetpointTarget) -> Result<Solution, SearchError> {
        self.search(SearchVariable::SupplyFlow, target)
    }

    /// Adjusts the bypass factor until `target` meets its setpoint.
    ///
    /// On success the found bypass factor is written into the working point
    /// and the converged solution at that value is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] and leaves the working point unchanged if no
    /// bypass factor in `[0, 1]` meets the setpoint.
    pub fn search_by_bypass(&mut self, target: SetpointTarget) -> Result<Solution, SearchError> {
        self.search(SearchVariable::Bypass, target)
    }

    fn search(
        &mut self,
        variable: SearchVariable,
        target: SetpointTarget,
    ) -> Result<Solution, SearchError> {
        let found = search::search(
            self.state.actual(),
            &self.psychro,
            variable,
            target,
            self.solve_config,
            self.search_config,
        )?;

        let actual = self.state.actual_mut();
        *actual = variable.apply(*actual, found.value);

        Ok(found.solution)
    }

    /// Caps supersaturated humidity ratios in `solution` at saturation.
    ///
    /// Returns the adjusted points. The result is informational: balances are
    /// not re-enforced after a clamp.
    pub fn clamp_to_saturation(&self, solution: &mut Solution) -> Vec<StatePoint> {
        clamp::clamp_to_saturation(solution, &self.psychro)
    }

    /// Moisture mass flow that brings the supply air to `target` humidity ratio.
    ///
    /// Negative when moisture must be removed.
    #[must_use]
    pub fn moisture_to_add(&self, supply: AirState, target: Ratio) -> MassRate {
        let m = self.state.actual().parameters.supply_flow();
        let delta = target.get::<ratio>() - supply.humidity_ratio.get::<ratio>();
        MassRate::new::<kilogram_per_second>(m.get::<kilogram_per_second>() * delta)
    }

    /// Chart data for `solution`, with the outdoor state of the working point.
    #[must_use]
    pub fn chart(&self, solution: &Solution) -> ProcessChart {
        let conditions = &self.state.actual().conditions;
        let t_o = conditions.outdoor_temperature.get::<degree_celsius>();
        let w_o = self
            .psychro
            .humidity_ratio(t_o, conditions.outdoor_humidity.get::<ratio>());
        ProcessChart::new(AirState::new(t_o, w_o), solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;
    use uom::si::{f64::Power, power::watt};

    use super::test_support::{
        STIFF_GAIN, celsius, nominal_conditions, nominal_unit, parameters, unit,
    };

    #[test]
    fn new_unit_starts_at_design() {
        let ahu = nominal_unit();
        assert_eq!(ahu.design(), ahu.actual());
    }

    #[test]
    fn state_tracks_design_and_working_points() {
        let mut ahu = nominal_unit();
        ahu.set_conditions(nominal_conditions().with_outdoor_temperature(celsius(-5.0)))
            .unwrap();

        let state = ahu.state();
        assert_eq!(state.design(), ahu.design());
        assert_eq!(state.actual(), ahu.actual());
        assert_ne!(state.design(), state.actual());
    }

    #[test]
    fn rejects_invalid_conditions() {
        let conditions = Conditions {
            setpoint_humidity: Ratio::new::<ratio>(-0.1),
            ..nominal_conditions()
        };
        let params = parameters(1.601, 0.7, STIFF_GAIN, STIFF_GAIN);
        assert!(AirHandlingUnit::new(params, conditions).is_err());
    }

    #[test]
    fn successful_search_commits_only_the_search_variable() {
        let mut ahu = unit(parameters(1.601, 0.7, 0.0, STIFF_GAIN), nominal_conditions());
        let solution = ahu
            .search_by_flow(SetpointTarget::SupplyTemperature(celsius(12.0)))
            .unwrap();

        let actual = ahu.actual().parameters;
        let design = ahu.design().parameters;
        assert_relative_eq!(actual.supply_flow().get::<kilogram_per_second>(), 4.096, epsilon = 1e-2);
        assert_eq!(actual.bypass(), design.bypass());
        assert_eq!(actual.humidity_gain(), design.humidity_gain());
        assert_eq!(ahu.actual().conditions, ahu.design().conditions);

        // The committed working point reproduces the returned solution.
        let resolved = ahu.solve(ahu.search_config.initial_saturation_temp).unwrap();
        assert_eq!(resolved, solution);
    }

    #[test]
    fn humidity_search_restores_humidity_gain() {
        let mut conditions = nominal_conditions();
        conditions.auxiliary_latent = Power::new::<watt>(5000.0);
        let mut ahu = unit(parameters(1.601, 0.7, STIFF_GAIN, STIFF_GAIN), conditions);

        ahu.search_by_flow(SetpointTarget::parse("φI", 0.6).unwrap())
            .unwrap();

        assert_eq!(
            ahu.actual().parameters.humidity_gain(),
            Power::new::<watt>(STIFF_GAIN)
        );
    }

    #[test]
    fn failed_search_leaves_working_point_unchanged() {
        let mut ahu = nominal_unit();
        let before = *ahu.actual();

        let result = ahu.search_by_flow(SetpointTarget::SupplyTemperature(celsius(12.0)));

        assert!(matches!(result, Err(SearchError::NoSolution { .. })));
        assert_eq!(*ahu.actual(), before);
    }

    #[test]
    fn reset_discards_search_and_condition_changes() {
        let mut ahu = unit(parameters(1.601, 0.7, 1000.0, STIFF_GAIN), nominal_conditions());
        ahu.search_by_bypass(SetpointTarget::SupplyTemperature(celsius(18.0)))
            .unwrap();
        ahu.set_conditions(nominal_conditions().with_outdoor_temperature(celsius(-5.0)))
            .unwrap();
        assert_ne!(ahu.actual(), ahu.design());

        ahu.reset();
        assert_eq!(ahu.actual(), ahu.design());
    }

    #[test]
    fn set_conditions_rejects_out_of_range() {
        let mut ahu = nominal_unit();
        let conditions = Conditions {
            outdoor_humidity: Ratio::new::<ratio>(2.0),
            ..nominal_conditions()
        };
        assert!(ahu.set_conditions(conditions).is_err());
        assert_eq!(ahu.actual(), ahu.design());
    }

    #[test]
    fn moisture_to_add_scales_with_supply_flow() {
        let ahu = nominal_unit();
        let supply = AirState::new(19.0, 0.006);
        let flow = ahu.moisture_to_add(supply, Ratio::new::<ratio>(0.0065));
        assert_relative_eq!(
            flow.get::<kilogram_per_second>(),
            1.601 * 0.0005,
            max_relative = 1e-9
        );

        let flow = ahu.moisture_to_add(supply, Ratio::new::<ratio>(0.005));
        assert!(flow.get::<kilogram_per_second>() < 0.0);
    }

    #[test]
    fn linear_system_matches_working_point() {
        let ahu = nominal_unit();
        let x = ahu.linear_system(celsius(5.0)).solve().unwrap();
        assert_relative_eq!(x[4], 19.0, epsilon = 1e-5);
    }

    #[test]
    fn chart_starts_at_outdoor_air() {
        struct Counter(Cell<usize>);
        impl ChartRenderer for Counter {
            fn render(&self, chart: &ProcessChart) {
                assert_relative_eq!(chart.temperatures()[0], 0.108, epsilon = 1e-9);
                self.0.set(self.0.get() + 1);
            }
        }

        let ahu = nominal_unit();
        let solution = ahu.solve(celsius(5.0)).unwrap();
        let chart = ahu.chart(&solution);
        let outdoor_w = ahu.psychrometrics().humidity_ratio(0.108, 0.8);
        assert_relative_eq!(chart.humidity_ratios()[0], outdoor_w, epsilon = 1e-12);

        let renderer = Counter(Cell::new(0));
        renderer.render(&chart);
        assert_eq!(renderer.0.get(), 1);
    }

    #[test]
    fn clamp_on_converged_solution_only_touches_humidity() {
        let ahu = nominal_unit();
        let mut solution = ahu.solve(celsius(5.0)).unwrap();
        let before = solution;
        let clamped = ahu.clamp_to_saturation(&mut solution);
        for point in StatePoint::ALL {
            let (t, w) = point.slots();
            assert_eq!(solution.as_array()[t], before.as_array()[t]);
            if !clamped.contains(&point) {
                assert_eq!(solution.as_array()[w], before.as_array()[w]);
            }
        }
    }
}
