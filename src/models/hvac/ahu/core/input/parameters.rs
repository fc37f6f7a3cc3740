use uom::si::{
    f64::{MassRate, Power, Ratio, ThermalConductance},
    mass_rate::kilogram_per_second,
    power::watt,
    ratio::ratio,
    thermal_conductance::watt_per_kelvin,
};

use crate::support::constraint::{Constrained, NonNegative, UnitInterval};

use super::InputError;

/// Design parameters of the air-handling unit.
///
/// The parameters satisfy `supply ≥ outdoor ≥ 0`, `0 ≤ bypass ≤ 1`, and
/// non-negative controller gains.
///
/// # Controller gains
///
/// Each controller contributes one proportional equation to the process model:
/// the temperature controller drives the coil sensible heat with
/// `Kθ·(θsp − θ)`, the humidity controller drives the coil latent heat with
/// `Kw·(wsp − w)`. A very large gain (order 1e9) turns the equation into a
/// near-equality that pins the controlled variable to its setpoint.
/// A gain of zero switches the controller off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    supply_flow: MassRate,
    outdoor_flow: MassRate,
    bypass: Ratio,
    temperature_gain: ThermalConductance,
    humidity_gain: Power,
}

impl Parameters {
    /// Constructs validated parameters.
    ///
    /// The humidity gain is expressed as power per unit humidity ratio (W per kg/kg).
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if any value is out of range or if the
    /// outdoor air flow exceeds the supply air flow.
    pub fn new(
        supply_flow: MassRate,
        outdoor_flow: MassRate,
        bypass: Ratio,
        temperature_gain: ThermalConductance,
        humidity_gain: Power,
    ) -> Result<Self, InputError> {
        Self::from_constrained(
            NonNegative::new(supply_flow).map_err(InputError::field("supply air flow"))?,
            NonNegative::new(outdoor_flow).map_err(InputError::field("outdoor air flow"))?,
            UnitInterval::new(bypass).map_err(InputError::field("bypass factor"))?,
            NonNegative::new(temperature_gain)
                .map_err(InputError::field("temperature controller gain"))?,
            NonNegative::new(humidity_gain).map_err(InputError::field("humidity controller gain"))?,
        )
    }

    /// Constructs parameters from pre-validated values.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::OutdoorExceedsSupply`] if `outdoor_flow > supply_flow`.
    pub fn from_constrained(
        supply_flow: Constrained<MassRate, NonNegative>,
        outdoor_flow: Constrained<MassRate, NonNegative>,
        bypass: Constrained<Ratio, UnitInterval>,
        temperature_gain: Constrained<ThermalConductance, NonNegative>,
        humidity_gain: Constrained<Power, NonNegative>,
    ) -> Result<Self, InputError> {
        let supply = supply_flow.into_inner();
        let outdoor = outdoor_flow.into_inner();
        if outdoor > supply {
            return Err(InputError::OutdoorExceedsSupply { supply, outdoor });
        }
        Ok(Self {
            supply_flow: supply,
            outdoor_flow: outdoor,
            bypass: bypass.into_inner(),
            temperature_gain: temperature_gain.into_inner(),
            humidity_gain: humidity_gain.into_inner(),
        })
    }

    /// Mass flow of dry air through the supply fan.
    #[must_use]
    pub fn supply_flow(&self) -> MassRate {
        self.supply_flow
    }

    /// Mass flow of dry outdoor (fresh) air admitted by the mixing box.
    #[must_use]
    pub fn outdoor_flow(&self) -> MassRate {
        self.outdoor_flow
    }

    /// Fraction of the coil stream that bypasses the cooling coil surface.
    #[must_use]
    pub fn bypass(&self) -> Ratio {
        self.bypass
    }

    /// Gain of the indoor temperature controller.
    #[must_use]
    pub fn temperature_gain(&self) -> ThermalConductance {
        self.temperature_gain
    }

    /// Gain of the indoor humidity controller, in W per kg/kg.
    #[must_use]
    pub fn humidity_gain(&self) -> Power {
        self.humidity_gain
    }

    /// Parameter scalars in model order: `m, mo, β, Kθ, Kw`.
    pub(crate) fn to_array(self) -> [f64; 5] {
        [
            self.supply_flow.get::<kilogram_per_second>(),
            self.outdoor_flow.get::<kilogram_per_second>(),
            self.bypass.get::<ratio>(),
            self.temperature_gain.get::<watt_per_kelvin>(),
            self.humidity_gain.get::<watt>(),
        ]
    }

    /// Replaces the supply flow with a search trial value (kg/s).
    ///
    /// Search trials span `[0, m_max]` and may fall below the outdoor flow.
    pub(crate) fn with_supply_flow_unchecked(mut self, supply_flow: f64) -> Self {
        self.supply_flow = MassRate::new::<kilogram_per_second>(supply_flow);
        self
    }

    /// Replaces the bypass factor with a search trial value in `[0, 1]`.
    pub(crate) fn with_bypass_unchecked(mut self, bypass: f64) -> Self {
        self.bypass = Ratio::new::<ratio>(bypass);
        self
    }

    /// Switches the humidity controller off.
    pub(crate) fn without_humidity_control(mut self) -> Self {
        self.humidity_gain = Power::new::<watt>(0.0);
        self
    }
}
