//! Supporting utilities used by models.
//!
//! - [`constraint`]: Construction-time numeric invariants.
//! - [`psychro`]: Moist-air property provider used by the process models.

pub mod constraint;
pub mod psychro;
