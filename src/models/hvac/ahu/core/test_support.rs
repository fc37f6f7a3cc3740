use uom::si::{
    f64::{MassRate, Power, Ratio, ThermalConductance, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    power::watt,
    ratio::ratio,
    thermal_conductance::watt_per_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::psychro::{MoistAir, Psychrometrics};

use super::{AirHandlingUnit, Conditions, OperatingPoint, Parameters};

/// Gain large enough to pin a controlled variable to its setpoint.
pub(super) const STIFF_GAIN: f64 = 1e9;

pub(super) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

/// Parameters with the nominal outdoor flow, capped at the supply flow.
pub(super) fn parameters(supply: f64, bypass: f64, k_theta: f64, k_w: f64) -> Parameters {
    Parameters::new(
        MassRate::new::<kilogram_per_second>(supply),
        MassRate::new::<kilogram_per_second>(supply.min(0.1601)),
        Ratio::new::<ratio>(bypass),
        ThermalConductance::new::<watt_per_kelvin>(k_theta),
        Power::new::<watt>(k_w),
    )
    .unwrap()
}

/// Supermarket sales room on a mild winter day.
pub(super) fn nominal_conditions() -> Conditions {
    Conditions {
        outdoor_temperature: celsius(0.108),
        outdoor_humidity: Ratio::new::<ratio>(0.8),
        indoor_temperature: celsius(19.0),
        indoor_humidity_ratio: Ratio::new::<ratio>(MoistAir::standard().humidity_ratio(19.0, 0.5)),
        setpoint_temperature: celsius(19.0),
        setpoint_humidity: Ratio::new::<ratio>(0.5),
        infiltration: MassRate::new::<kilogram_per_second>(0.137_92),
        envelope_conductance: ThermalConductance::new::<watt_per_kelvin>(675.0),
        auxiliary_sensible: Power::new::<watt>(-5.1976),
        auxiliary_latent: Power::new::<watt>(3.36),
        cabinet_sensible: Power::new::<watt>(23.01),
        cabinet_latent: Power::new::<watt>(6.282),
    }
}

pub(super) fn nominal_operating_point() -> OperatingPoint {
    OperatingPoint::new(
        parameters(1.601, 0.7, STIFF_GAIN, STIFF_GAIN),
        nominal_conditions(),
    )
    .unwrap()
}

pub(super) fn unit(parameters: Parameters, conditions: Conditions) -> AirHandlingUnit {
    AirHandlingUnit::new(parameters, conditions).unwrap()
}

pub(super) fn nominal_unit() -> AirHandlingUnit {
    let point = nominal_operating_point();
    unit(point.parameters, point.conditions)
}
