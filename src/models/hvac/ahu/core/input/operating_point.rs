use super::{Conditions, InputError, Parameters};

/// A complete operating point: design parameters plus boundary conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Flows, bypass and controller gains.
    pub parameters: Parameters,

    /// Outdoor, zone and load conditions.
    pub conditions: Conditions,
}

impl OperatingPoint {
    /// Creates an operating point after checking the boundary conditions.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the conditions are out of range.
    pub fn new(parameters: Parameters, conditions: Conditions) -> Result<Self, InputError> {
        conditions.check()?;
        Ok(Self {
            parameters,
            conditions,
        })
    }

    /// All 17 scalars in model order:
    /// `m, mo, β, Kθ, Kw, θo, φo, θ3, w3, θIsp, φIsp, mi, UA, Qsaux, Qlaux, Qscab, Qlcab`.
    pub(crate) fn to_array(self) -> [f64; 17] {
        let mut out = [0.0; 17];
        out[..5].copy_from_slice(&self.parameters.to_array());
        out[5..].copy_from_slice(&self.conditions.to_array());
        out
    }
}

/// The immutable design point and the live working point of a unit.
///
/// Only `actual` is ever modified, and only by a successful setpoint search
/// or an explicit caller request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessState {
    design: OperatingPoint,
    actual: OperatingPoint,
}

impl ProcessState {
    pub(crate) fn new(design: OperatingPoint) -> Self {
        Self {
            design,
            actual: design,
        }
    }

    /// The baseline the unit was constructed with.
    #[must_use]
    pub fn design(&self) -> &OperatingPoint {
        &self.design
    }

    /// The current working point.
    #[must_use]
    pub fn actual(&self) -> &OperatingPoint {
        &self.actual
    }

    pub(crate) fn actual_mut(&mut self) -> &mut OperatingPoint {
        &mut self.actual
    }

    /// Restores the working point to the design point.
    pub fn reset(&mut self) {
        self.actual = self.design;
    }
}
