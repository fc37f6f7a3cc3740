//! # AHU Models
//!
//! Steady-state psychrometric models of air-handling units, built on
//! [Twine](https://github.com/isentropic-dev/twine) for sizing and tuning
//! HVAC controls.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models, as happened with the
//! psychrometric property provider.

pub mod models;
pub mod support;
