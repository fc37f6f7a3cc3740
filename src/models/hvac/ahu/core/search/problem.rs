//! Problem formulation for the setpoint search.

use argmin::core::{CostFunction, Error};
use tracing::debug;
use twine_core::Model;

use crate::support::psychro::Psychrometrics;

use super::super::{OperatingPoint, Solution, SolveConfig, SolveError, solve::solve};
use super::{Objective, SearchVariable};

/// Cost assigned to trials whose solve fails.
///
/// Far above any reachable least-squares cost, so the minimizer is steered
/// back toward the solvable region.
pub(super) const PENALTY_COST: f64 = 1e10;

/// Model adapter exposing the search variable as the sole input.
///
/// Each call solves a fresh copy of the trial baseline, so the unit's working
/// point is never touched while the minimizer probes.
pub(super) struct TrialModel<'a, P> {
    base: OperatingPoint,
    variable: SearchVariable,
    psychro: &'a P,
    initial_guess: f64,
    config: SolveConfig,
}

impl<'a, P: Psychrometrics> TrialModel<'a, P> {
    pub(super) fn new(
        base: OperatingPoint,
        variable: SearchVariable,
        psychro: &'a P,
        initial_guess: f64,
        config: SolveConfig,
    ) -> Self {
        Self {
            base,
            variable,
            psychro,
            initial_guess,
            config,
        }
    }
}

impl<P: Psychrometrics> Model for TrialModel<'_, P> {
    type Input = f64;
    type Output = Solution;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let point = self.variable.apply(self.base, *input);
        solve(&point, self.psychro, self.initial_guess, self.config)
    }
}

/// Least-squares cost `½·r²` of a trial.
pub(super) struct SearchCost<'a, P> {
    model: &'a TrialModel<'a, P>,
    objective: Objective,
}

impl<'a, P> SearchCost<'a, P> {
    pub(super) fn new(model: &'a TrialModel<'a, P>, objective: Objective) -> Self {
        Self { model, objective }
    }
}

impl<P: Psychrometrics> CostFunction for SearchCost<'_, P> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, param: &Self::Param) -> Result<Self::Output, Error> {
        match self.model.call(param) {
            Ok(solution) => {
                let residual = self.objective.residual(&solution);
                Ok(0.5 * residual * residual)
            }
            Err(err) => {
                debug!(variable = %self.model.variable, value = *param, %err, "search trial failed");
                Ok(PENALTY_COST)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

    use crate::models::hvac::ahu::core::test_support::nominal_operating_point;
    use crate::models::hvac::ahu::core::search::SetpointTarget;
    use crate::support::psychro::MoistAir;

    #[test]
    fn trial_solves_at_requested_value() {
        let air = MoistAir::standard();
        let model = TrialModel::new(
            nominal_operating_point(),
            SearchVariable::SupplyFlow,
            &air,
            5.0,
            SolveConfig::default(),
        );
        let solution = model.call(&3.0).unwrap();
        assert_relative_eq!(solution.as_array()[4], 19.0, epsilon = 1e-4);
    }

    #[test]
    fn failed_trial_costs_penalty() {
        let air = MoistAir::standard();
        let point = nominal_operating_point();
        let model = TrialModel::new(point, SearchVariable::Bypass, &air, 5.0, SolveConfig::default());
        let objective = SetpointTarget::SupplyTemperature(
            ThermodynamicTemperature::new::<degree_celsius>(12.0),
        )
        .objective(&point.conditions, &air);
        let cost = SearchCost::new(&model, objective);

        assert_eq!(cost.cost(&1.0).unwrap(), PENALTY_COST);
        assert!(cost.cost(&0.7).unwrap() < PENALTY_COST);
    }
}
