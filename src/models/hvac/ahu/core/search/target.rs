use std::fmt;

use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::psychro::Psychrometrics;

use super::super::{Conditions, OperatingPoint, Solution, StatePoint};
use super::{SearchConfig, SearchError};

/// Quantity a setpoint search drives to its setpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetpointTarget {
    /// Supply air temperature.
    ///
    /// A search accepts a miss of at most `sqrt(2·tol)` K.
    SupplyTemperature(ThermodynamicTemperature),

    /// Relative humidity of the air delivered to the zone.
    ///
    /// Converted to a humidity ratio at the indoor temperature of the
    /// current conditions. The humidity controller is switched off during
    /// the search so it does not counteract the search variable.
    ///
    /// The supply humidity ratio is compared in g/kg. A search therefore
    /// accepts a miss of at most `sqrt(2·tol)` g/kg, about 0.014 g/kg for a
    /// flow search and 0.0045 g/kg for a bypass search with the default
    /// [`SearchConfig`] tolerances.
    IndoorHumidity(Ratio),
}

impl SetpointTarget {
    /// Builds a target from an identifier and a raw setpoint.
    ///
    /// Accepts `"θS"` or `"thetaS"` (°C) and `"φI"` or `"phiI"` (fraction).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidTarget`] for any other identifier.
    pub fn parse(id: &str, value: f64) -> Result<Self, SearchError> {
        match id {
            "θS" | "thetaS" => Ok(Self::SupplyTemperature(
                ThermodynamicTemperature::new::<degree_celsius>(value),
            )),
            "φI" | "phiI" => Ok(Self::IndoorHumidity(Ratio::new::<ratio>(value))),
            other => Err(SearchError::InvalidTarget(other.to_owned())),
        }
    }

    /// Trial baseline for this target.
    pub(super) fn prepare(self, mut point: OperatingPoint) -> OperatingPoint {
        if let Self::IndoorHumidity(_) = self {
            point.parameters = point.parameters.without_humidity_control();
        }
        point
    }

    /// Residual extractor for this target under `conditions`.
    pub(super) fn objective(
        self,
        conditions: &Conditions,
        psychro: &impl Psychrometrics,
    ) -> Objective {
        let (supply_t, supply_w) = StatePoint::Supply.slots();
        match self {
            Self::SupplyTemperature(temperature) => Objective {
                slot: supply_t,
                setpoint: temperature.get::<degree_celsius>(),
                scale: 1.0,
            },
            Self::IndoorHumidity(humidity) => Objective {
                slot: supply_w,
                setpoint: psychro.humidity_ratio(
                    conditions.indoor_temperature.get::<degree_celsius>(),
                    humidity.get::<ratio>(),
                ),
                // Residual in g/kg.
                scale: 1e3,
            },
        }
    }
}

/// Scaled difference between one solution slot and its setpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Objective {
    slot: usize,
    setpoint: f64,
    scale: f64,
}

impl Objective {
    pub(super) fn residual(&self, solution: &Solution) -> f64 {
        (solution.value(self.slot) - self.setpoint) * self.scale
    }
}

/// Design parameter adjusted by a setpoint search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchVariable {
    /// Supply air mass flow, searched over `[0, max_supply_flow]`.
    SupplyFlow,

    /// Coil bypass factor, searched over `[0, 1]`.
    Bypass,
}

impl SearchVariable {
    pub(super) fn bounds(self, config: &SearchConfig) -> (f64, f64) {
        match self {
            Self::SupplyFlow => (0.0, config.max_supply_flow.get::<kilogram_per_second>()),
            Self::Bypass => (0.0, 1.0),
        }
    }

    pub(super) fn cost_tol(self, config: &SearchConfig) -> f64 {
        match self {
            Self::SupplyFlow => config.flow_cost_tol,
            Self::Bypass => config.bypass_cost_tol,
        }
    }

    /// Copy of `point` with this variable set to `value`.
    pub(crate) fn apply(self, mut point: OperatingPoint, value: f64) -> OperatingPoint {
        point.parameters = match self {
            Self::SupplyFlow => point.parameters.with_supply_flow_unchecked(value),
            Self::Bypass => point.parameters.with_bypass_unchecked(value),
        };
        point
    }
}

impl fmt::Display for SearchVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SupplyFlow => f.write_str("supply flow"),
            Self::Bypass => f.write_str("bypass factor"),
        }
    }
}
