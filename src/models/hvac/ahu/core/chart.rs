//! Psychrometric chart data for a solved process.
//!
//! Drawing is left to a [`ChartRenderer`] supplied by the caller.

use uom::si::{ratio::ratio, thermodynamic_temperature::degree_celsius};

use super::{AirState, Solution, StatePoint};

/// Number of air states on the chart.
pub const CHART_POINTS: usize = 6;

/// Number of process elements on the chart.
pub const CHART_PROCESSES: usize = 5;

/// Column order of the chart points.
pub const CHART_LABELS: [&str; CHART_POINTS] =
    ["outdoor", "mixed", "bypass mixed", "supply", "indoor", "coil outlet"];

/// Incidence of points on process elements.
///
/// Rows are mixing box, cooling coil, bypass mixing, heating coil, and thermal
/// zone. An entry is `-1` for an inlet, `+1` for the outlet, `0` otherwise.
const CONNECTIVITY: [[i8; CHART_POINTS]; CHART_PROCESSES] = [
    [-1, 1, 0, 0, -1, 0],
    [0, -1, 0, 0, 0, 1],
    [0, -1, 1, 0, 0, -1],
    [0, 0, -1, 1, 0, 0],
    [0, 0, 0, -1, 1, 0],
];

/// Air states of a solved process and how process elements connect them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessChart {
    states: [AirState; CHART_POINTS],
}

impl ProcessChart {
    pub(super) fn new(outdoor: AirState, solution: &Solution) -> Self {
        Self {
            states: [
                outdoor,
                solution.state(StatePoint::Mixed),
                solution.state(StatePoint::BypassMixed),
                solution.state(StatePoint::Supply),
                solution.state(StatePoint::Indoor),
                solution.state(StatePoint::CoilOutlet),
            ],
        }
    }

    /// States in [`CHART_LABELS`] order.
    #[must_use]
    pub fn states(&self) -> &[AirState; CHART_POINTS] {
        &self.states
    }

    /// Element-by-point incidence matrix.
    #[must_use]
    pub fn connectivity(&self) -> &[[i8; CHART_POINTS]; CHART_PROCESSES] {
        &CONNECTIVITY
    }

    /// Dry-bulb temperatures in °C.
    #[must_use]
    pub fn temperatures(&self) -> [f64; CHART_POINTS] {
        self.states
            .map(|state| state.temperature.get::<degree_celsius>())
    }

    /// Humidity ratios in kg/kg.
    #[must_use]
    pub fn humidity_ratios(&self) -> [f64; CHART_POINTS] {
        self.states.map(|state| state.humidity_ratio.get::<ratio>())
    }
}

/// Draws a [`ProcessChart`], typically onto a psychrometric chart.
pub trait ChartRenderer {
    /// Draws one chart. Called once per solved process.
    fn render(&self, chart: &ProcessChart);
}
