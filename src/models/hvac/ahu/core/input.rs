mod conditions;
mod error;
mod operating_point;
mod parameters;

pub use conditions::Conditions;
pub use error::InputError;
pub use operating_point::{OperatingPoint, ProcessState};
pub use parameters::Parameters;
