//! Ideal moist-air mixture with Hyland–Wexler saturation pressure.
//!
//! # Assumptions
//!
//! - Dry air and water vapour behave as an ideal-gas mixture at a fixed total
//!   pressure, so `w = ε·pv / (p − pv)` with `ε = Mw/Ma = 0.621945`.
//! - Saturation pressure follows the ASHRAE (Hyland–Wexler) correlations:
//!   over ice below 0 °C and over liquid water at or above 0 °C.
//!
//! The saturation slope is evaluated analytically from the same correlations,
//! so it is consistent with [`Psychrometrics::saturation_humidity_ratio`]
//! to machine precision rather than to a finite-difference step.

use uom::si::{
    f64::Pressure,
    pressure::{atmosphere, pascal},
};

use crate::support::constraint::ConstraintError;

use super::Psychrometrics;

/// Ratio of molar masses of water vapour and dry air.
const EPSILON: f64 = 0.621_945;

/// Offset between the Celsius and Kelvin scales.
const CELSIUS_OFFSET: f64 = 273.15;

/// Hyland–Wexler coefficients over ice (−100 °C to 0 °C).
const ICE: [f64; 7] = [
    -5.674_535_9e3,
    6.392_524_7,
    -9.677_843e-3,
    6.221_570_1e-7,
    2.074_782_5e-9,
    -9.484_024e-13,
    4.163_501_9,
];

/// Hyland–Wexler coefficients over liquid water (0 °C to 200 °C).
const WATER: [f64; 6] = [
    -5.800_220_6e3,
    1.391_499_3,
    -4.864_023_9e-2,
    4.176_476_8e-5,
    -1.445_209_3e-8,
    6.545_967_3,
];

/// Moist air at a constant total pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistAir {
    pressure: f64,
}

impl MoistAir {
    /// Moist air at one standard atmosphere (101 325 Pa).
    #[must_use]
    pub fn standard() -> Self {
        Self {
            pressure: Pressure::new::<atmosphere>(1.0).get::<pascal>(),
        }
    }

    /// Moist air at the given total pressure.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the pressure is not strictly positive.
    pub fn at_pressure(pressure: Pressure) -> Result<Self, ConstraintError> {
        let pressure = pressure.get::<pascal>();
        if pressure.is_nan() {
            return Err(ConstraintError::NotANumber);
        }
        if pressure <= 0.0 {
            return Err(ConstraintError::BelowMinimum);
        }
        Ok(Self { pressure })
    }

    /// Total pressure of the mixture.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        Pressure::new::<pascal>(self.pressure)
    }

    /// Saturation vapour pressure (Pa) and its logarithmic derivative
    /// `d(ln ps)/dT` (1/K) at `temperature` (°C).
    fn saturation_pressure(temperature: f64) -> (f64, f64) {
        let t = temperature + CELSIUS_OFFSET;
        if temperature < 0.0 {
            let [c1, c2, c3, c4, c5, c6, c7] = ICE;
            let ln_ps = c1 / t + c2 + t * (c3 + t * (c4 + t * (c5 + t * c6))) + c7 * t.ln();
            let d_ln_ps =
                -c1 / (t * t) + c3 + t * (2.0 * c4 + t * (3.0 * c5 + t * 4.0 * c6)) + c7 / t;
            (ln_ps.exp(), d_ln_ps)
        } else {
            let [c8, c9, c10, c11, c12, c13] = WATER;
            let ln_ps = c8 / t + c9 + t * (c10 + t * (c11 + t * c12)) + c13 * t.ln();
            let d_ln_ps = -c8 / (t * t) + c10 + t * (2.0 * c11 + t * 3.0 * c12) + c13 / t;
            (ln_ps.exp(), d_ln_ps)
        }
    }
}

impl Default for MoistAir {
    fn default() -> Self {
        Self::standard()
    }
}

impl Psychrometrics for MoistAir {
    fn humidity_ratio(&self, temperature: f64, relative_humidity: f64) -> f64 {
        let (ps, _) = Self::saturation_pressure(temperature);
        let pv = relative_humidity * ps;
        EPSILON * pv / (self.pressure - pv)
    }

    fn saturation_slope(&self, temperature: f64) -> f64 {
        let (ps, d_ln_ps) = Self::saturation_pressure(temperature);
        let dps = ps * d_ln_ps;
        let dp = self.pressure - ps;
        EPSILON * self.pressure * dps / (dp * dp)
    }
}
