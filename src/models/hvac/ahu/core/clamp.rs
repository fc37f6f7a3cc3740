//! Projection of supersaturated states back onto the saturation curve.

use tracing::warn;

use crate::support::psychro::Psychrometrics;

use super::{Solution, StatePoint};

/// Caps every humidity ratio in `solution` at saturation for its temperature.
///
/// Returns the points that were adjusted, in flow order. Temperatures and
/// heats are left untouched and the system is not re-solved, so balances no
/// longer close exactly after a clamp.
pub(super) fn clamp_to_saturation(
    solution: &mut Solution,
    psychro: &impl Psychrometrics,
) -> Vec<StatePoint> {
    let mut clamped = Vec::new();

    for point in StatePoint::ALL {
        let (t, w) = point.slots();
        let temperature = solution.value(t);
        let humidity_ratio = solution.value(w);
        let saturated = psychro.saturation_humidity_ratio(temperature);

        if humidity_ratio > saturated {
            warn!(
                ?point,
                temperature,
                humidity_ratio,
                saturated,
                "supersaturated state clamped"
            );
            solution.set_humidity_ratio(point, saturated);
            clamped.push(point);
        }
    }

    clamped
}
