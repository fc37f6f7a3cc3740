use thiserror::Error;
use uom::si::f64::MassRate;

use crate::support::constraint::ConstraintError;

/// Errors raised while validating model parameters or boundary conditions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A single field violates its physical range.
    #[error("invalid {field}: {source}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,

        #[source]
        source: ConstraintError,
    },

    /// More outdoor air is requested than the unit supplies.
    #[error("outdoor air flow {outdoor:?} exceeds supply air flow {supply:?}")]
    OutdoorExceedsSupply {
        /// Requested supply air flow.
        supply: MassRate,

        /// Requested outdoor air flow.
        outdoor: MassRate,
    },
}

impl InputError {
    /// Tags a constraint violation with the field it came from.
    pub(super) fn field(field: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::Invalid { field, source }
    }
}
