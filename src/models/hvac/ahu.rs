//! Air-handling unit model.
//!
//! This module provides the [`twine_core::Model`] implementation for an
//! air-handling unit. The computational core is in the internal `core` module;
//! [`AirHandlingUnit`] also exposes the setpoint searches and operating-point
//! management that do not fit the single-call `Model` shape.
//!
//! # Example
//!
//! ```
//! use ahu_models::models::hvac::ahu::{AirHandlingUnit, Conditions, Parameters, SetpointTarget};
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{MassRate, Power, Ratio, ThermalConductance, ThermodynamicTemperature},
//!     mass_rate::kilogram_per_second,
//!     power::watt,
//!     ratio::ratio,
//!     thermal_conductance::watt_per_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let celsius = ThermodynamicTemperature::new::<degree_celsius>;
//! let parameters = Parameters::new(
//!     MassRate::new::<kilogram_per_second>(1.601),
//!     MassRate::new::<kilogram_per_second>(0.1601),
//!     Ratio::new::<ratio>(0.7),
//!     ThermalConductance::new::<watt_per_kelvin>(0.0),
//!     Power::new::<watt>(1e9),
//! )?;
//! let conditions = Conditions {
//!     outdoor_temperature: celsius(0.108),
//!     outdoor_humidity: Ratio::new::<ratio>(0.8),
//!     indoor_temperature: celsius(19.0),
//!     indoor_humidity_ratio: Ratio::new::<ratio>(0.0068),
//!     setpoint_temperature: celsius(19.0),
//!     setpoint_humidity: Ratio::new::<ratio>(0.5),
//!     infiltration: MassRate::new::<kilogram_per_second>(0.137_92),
//!     envelope_conductance: ThermalConductance::new::<watt_per_kelvin>(675.0),
//!     auxiliary_sensible: Power::new::<watt>(-5.1976),
//!     auxiliary_latent: Power::new::<watt>(3.36),
//!     cabinet_sensible: Power::new::<watt>(23.01),
//!     cabinet_latent: Power::new::<watt>(6.282),
//! };
//!
//! let mut ahu = AirHandlingUnit::new(parameters, conditions)?;
//! let solution = ahu.call(&celsius(5.0))?;
//! println!("{solution}");
//!
//! let solution = ahu.search_by_flow(SetpointTarget::parse("θS", 12.0)?)?;
//! assert!((solution.supply().temperature.get::<degree_celsius>() - 12.0).abs() < 0.01);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod core;

pub use self::core::{
    AirHandlingUnit, AirState, CHART_LABELS, CHART_POINTS, CHART_PROCESSES, ChartRenderer,
    Conditions, InputError, LATENT_HEAT, LinearSystem, OperatingPoint, Parameters, ProcessChart,
    ProcessState, SPECIFIC_HEAT, SearchConfig, SearchError, SearchVariable, SetpointTarget,
    Solution, SolveConfig, SolveError, StatePoint,
};

use twine_core::Model;
use uom::si::f64::ThermodynamicTemperature;

use crate::support::psychro::Psychrometrics;

/// Solves the working point from an initial saturation linearization temperature.
impl<P: Psychrometrics> Model for AirHandlingUnit<P> {
    type Input = ThermodynamicTemperature;
    type Output = Solution;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(*input)
    }
}
