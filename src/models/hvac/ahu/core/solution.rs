//! Converged state of the air-handling process.

use std::fmt;

use uom::si::{
    f64::{Power, Ratio, ThermodynamicTemperature},
    power::{kilowatt, watt},
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

/// Number of unknowns in the process model.
pub(crate) const UNKNOWNS: usize = 13;

/// Slot of the coil sensible heat.
pub(crate) const COIL_SENSIBLE: usize = 10;

/// Slot of the coil latent heat.
pub(crate) const COIL_LATENT: usize = 11;

/// Slot of the heating coil heat.
pub(crate) const HEATING: usize = 12;

/// Dry-bulb temperature and humidity ratio of a moist-air stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirState {
    /// Dry-bulb temperature.
    pub temperature: ThermodynamicTemperature,

    /// Humidity ratio, kg of water vapour per kg of dry air.
    pub humidity_ratio: Ratio,
}

impl AirState {
    /// Creates a state from °C and kg/kg.
    #[must_use]
    pub fn new(temperature: f64, humidity_ratio: f64) -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(temperature),
            humidity_ratio: Ratio::new::<ratio>(humidity_ratio),
        }
    }
}

/// Air states computed by the process model, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatePoint {
    /// Outdoor and return air after the mixing box.
    Mixed,
    /// Coil outlet, the apparatus dew point on the saturation tangent.
    CoilOutlet,
    /// Coil air recombined with the bypassed stream.
    BypassMixed,
    /// Heating coil outlet, supplied to the zone.
    Supply,
    /// Thermal zone, also the return air.
    Indoor,
}

impl StatePoint {
    /// All computed points in flow order.
    pub const ALL: [Self; 5] = [
        Self::Mixed,
        Self::CoilOutlet,
        Self::BypassMixed,
        Self::Supply,
        Self::Indoor,
    ];

    /// Slots of the temperature and humidity ratio of this point.
    pub(crate) const fn slots(self) -> (usize, usize) {
        match self {
            Self::Mixed => (0, 1),
            Self::BypassMixed => (2, 3),
            Self::Supply => (4, 5),
            Self::Indoor => (6, 7),
            Self::CoilOutlet => (8, 9),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Mixed => "mixed",
            Self::CoilOutlet => "coil outlet",
            Self::BypassMixed => "bypass mixed",
            Self::Supply => "supply",
            Self::Indoor => "indoor",
        }
    }
}

/// Solution of the process model for one operating point.
///
/// Slot layout:
///
/// | slots      | meaning                                 |
/// |------------|-----------------------------------------|
/// | 0, 1       | mixing box outlet `θ, w`                |
/// | 2, 3       | bypass mixing outlet `θ, w`             |
/// | 4, 5       | supply air (heating coil outlet) `θ, w` |
/// | 6, 7       | thermal zone `θ, w`                     |
/// | 8, 9       | cooling coil outlet `θ, w`              |
/// | 10, 11, 12 | `Qsc`, `Qlc`, `Qsh` in W                |
///
/// Temperatures are in °C and humidity ratios in kg/kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    x: [f64; UNKNOWNS],
}

impl Solution {
    pub(crate) fn from_array(x: [f64; UNKNOWNS]) -> Self {
        Self { x }
    }

    /// Raw unknowns in slot order.
    #[must_use]
    pub fn as_array(&self) -> &[f64; UNKNOWNS] {
        &self.x
    }

    /// State of the given point.
    #[must_use]
    pub fn state(&self, point: StatePoint) -> AirState {
        let (t, w) = point.slots();
        AirState::new(self.x[t], self.x[w])
    }

    /// Outdoor and return air after the mixing box.
    #[must_use]
    pub fn mixed(&self) -> AirState {
        self.state(StatePoint::Mixed)
    }

    /// Saturated air leaving the cooling coil (apparatus dew point).
    #[must_use]
    pub fn coil_outlet(&self) -> AirState {
        self.state(StatePoint::CoilOutlet)
    }

    /// Coil outlet air after remixing with the bypass stream.
    #[must_use]
    pub fn bypass_mixed(&self) -> AirState {
        self.state(StatePoint::BypassMixed)
    }

    /// Air delivered to the zone after the heating coil.
    #[must_use]
    pub fn supply(&self) -> AirState {
        self.state(StatePoint::Supply)
    }

    /// Zone air, which is also the return air.
    #[must_use]
    pub fn indoor(&self) -> AirState {
        self.state(StatePoint::Indoor)
    }

    /// Sensible heat removed by the cooling coil.
    #[must_use]
    pub fn coil_sensible(&self) -> Power {
        Power::new::<watt>(self.x[COIL_SENSIBLE])
    }

    /// Latent heat removed by the cooling coil.
    ///
    /// Negative when the coil stream gains moisture.
    #[must_use]
    pub fn coil_latent(&self) -> Power {
        Power::new::<watt>(self.x[COIL_LATENT])
    }

    /// Sensible heat added by the heating coil.
    #[must_use]
    pub fn heating(&self) -> Power {
        Power::new::<watt>(self.x[HEATING])
    }

    pub(crate) fn value(&self, slot: usize) -> f64 {
        self.x[slot]
    }

    pub(crate) fn set_humidity_ratio(&mut self, point: StatePoint, humidity_ratio: f64) {
        let (_, w) = point.slots();
        self.x[w] = humidity_ratio;
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<14}{:>10}{:>10}", "point", "θ [°C]", "w [g/kg]")?;
        for point in StatePoint::ALL {
            let state = self.state(point);
            writeln!(
                f,
                "{:<14}{:>10.2}{:>10.2}",
                point.label(),
                state.temperature.get::<degree_celsius>(),
                state.humidity_ratio.get::<ratio>() * 1e3,
            )?;
        }
        writeln!(f, "Qsc = {:.2} kW", self.coil_sensible().get::<kilowatt>())?;
        writeln!(f, "Qlc = {:.2} kW", self.coil_latent().get::<kilowatt>())?;
        write!(f, "Qsh = {:.2} kW", self.heating().get::<kilowatt>())
    }
}
