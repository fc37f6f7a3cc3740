use uom::si::{
    f64::{MassRate, Power, Ratio, ThermalConductance, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    power::watt,
    ratio::ratio,
    thermal_conductance::watt_per_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::{NonNegative, UnitInterval};

use super::InputError;

/// Boundary conditions acting on the air-handling unit and its thermal zone.
///
/// The loads are produced upstream by closed-form building-load estimates and
/// enter the zone balance as given values. Positive sensible and latent loads
/// are gains to the zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    /// Outdoor dry-bulb temperature.
    pub outdoor_temperature: ThermodynamicTemperature,

    /// Outdoor relative humidity.
    pub outdoor_humidity: Ratio,

    /// Indoor dry-bulb temperature used to interpret relative-humidity setpoints.
    pub indoor_temperature: ThermodynamicTemperature,

    /// Indoor humidity ratio (kg/kg).
    pub indoor_humidity_ratio: Ratio,

    /// Setpoint of the indoor temperature controller.
    pub setpoint_temperature: ThermodynamicTemperature,

    /// Setpoint of the indoor humidity controller, as relative humidity.
    pub setpoint_humidity: Ratio,

    /// Infiltration mass flow of dry outdoor air into the zone.
    pub infiltration: MassRate,

    /// Overall heat-transfer coefficient of the building envelope (UA).
    pub envelope_conductance: ThermalConductance,

    /// Auxiliary sensible load on the zone.
    pub auxiliary_sensible: Power,

    /// Auxiliary latent load on the zone.
    pub auxiliary_latent: Power,

    /// Sensible heat exchanged with the refrigerated cabinets.
    pub cabinet_sensible: Power,

    /// Latent heat exchanged with the refrigerated cabinets.
    pub cabinet_latent: Power,
}

impl Conditions {
    /// Checks the physical ranges of the conditions.
    ///
    /// Relative humidities must lie in `[0, 1]`; infiltration, envelope
    /// conductance, and the indoor humidity ratio must be non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] naming the first offending field.
    pub fn check(&self) -> Result<(), InputError> {
        UnitInterval::new(self.outdoor_humidity).map_err(InputError::field("outdoor humidity"))?;
        UnitInterval::new(self.setpoint_humidity)
            .map_err(InputError::field("setpoint humidity"))?;
        NonNegative::new(self.indoor_humidity_ratio)
            .map_err(InputError::field("indoor humidity ratio"))?;
        NonNegative::new(self.infiltration).map_err(InputError::field("infiltration"))?;
        NonNegative::new(self.envelope_conductance)
            .map_err(InputError::field("envelope conductance"))?;
        Ok(())
    }

    /// Returns a copy with a different outdoor temperature.
    ///
    /// Convenient for feeding an ambient temperature series one value at a time.
    #[must_use]
    pub fn with_outdoor_temperature(mut self, temperature: ThermodynamicTemperature) -> Self {
        self.outdoor_temperature = temperature;
        self
    }

    /// Condition scalars in model order:
    /// `θo, φo, θ3, w3, θIsp, φIsp, mi, UA, Qsaux, Qlaux, Qscab, Qlcab`.
    pub(crate) fn to_array(self) -> [f64; 12] {
        [
            self.outdoor_temperature.get::<degree_celsius>(),
            self.outdoor_humidity.get::<ratio>(),
            self.indoor_temperature.get::<degree_celsius>(),
            self.indoor_humidity_ratio.get::<ratio>(),
            self.setpoint_temperature.get::<degree_celsius>(),
            self.setpoint_humidity.get::<ratio>(),
            self.infiltration.get::<kilogram_per_second>(),
            self.envelope_conductance.get::<watt_per_kelvin>(),
            self.auxiliary_sensible.get::<watt>(),
            self.auxiliary_latent.get::<watt>(),
            self.cabinet_sensible.get::<watt>(),
            self.cabinet_latent.get::<watt>(),
        ]
    }
}
