//! Moist-air property provider.
//!
//! Process models consume psychrometric properties through the
//! [`Psychrometrics`] trait rather than calling a fixed correlation. This keeps
//! the solver independent of the property source: a caller can plug in a
//! higher-fidelity library, a test double, or the bundled [`MoistAir`] model.
//!
//! All methods work in plain `f64` with fixed units, since they sit on the hot
//! path of the saturation linearization:
//!
//! - temperature in °C
//! - relative humidity as a fraction (`1.0` = saturated)
//! - humidity ratio in kg of water vapour per kg of dry air

mod moist_air;

pub use moist_air::MoistAir;

/// Psychrometric properties needed by air-handling process models.
pub trait Psychrometrics {
    /// Returns the humidity ratio (kg/kg) of air at `temperature` (°C) and
    /// relative humidity `relative_humidity` (fraction).
    fn humidity_ratio(&self, temperature: f64, relative_humidity: f64) -> f64;

    /// Returns the humidity ratio (kg/kg) of saturated air at `temperature` (°C).
    fn saturation_humidity_ratio(&self, temperature: f64) -> f64 {
        self.humidity_ratio(temperature, 1.0)
    }

    /// Returns the slope of the saturation curve, `d(ws)/dθ`, in kg/kg per K.
    fn saturation_slope(&self, temperature: f64) -> f64;
}

impl<T: Psychrometrics + ?Sized> Psychrometrics for &T {
    fn humidity_ratio(&self, temperature: f64, relative_humidity: f64) -> f64 {
        (**self).humidity_ratio(temperature, relative_humidity)
    }

    fn saturation_humidity_ratio(&self, temperature: f64) -> f64 {
        (**self).saturation_humidity_ratio(temperature)
    }

    fn saturation_slope(&self, temperature: f64) -> f64 {
        (**self).saturation_slope(temperature)
    }
}
