//! Run-time settings for the visualizer.

use std::time::Duration;

use pathstep_core::{GridConfig, ZoomConfig};
use pathstep_search::{AlgorithmKind, GreedyHeuristic};

/// Fastest cadence: one step per frame.
pub const MIN_INTERVAL: Duration = Duration::ZERO;
/// Slowest cadence.
pub const MAX_INTERVAL: Duration = Duration::from_millis(1000);
/// Cadence change per `faster`/`slower` command.
pub const INTERVAL_STEP: Duration = Duration::from_millis(50);

/// Settings a run of the visualizer starts from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Time between two search steps.
    pub interval: Duration,
    pub algorithm: AlgorithmKind,
    pub heuristic: GreedyHeuristic,
    pub grid: GridConfig,
    pub zoom: ZoomConfig,
    /// Seed for random wall scattering. `None` draws one at startup.
    pub seed: Option<u64>,
    /// Fraction of cells left open by random scattering. `None` draws a
    /// fresh weight on every scatter.
    pub wall_weight: Option<f64>,
    /// Capture mouse clicks, drags and the wheel.
    pub mouse: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(250),
            algorithm: AlgorithmKind::default(),
            heuristic: GreedyHeuristic::default(),
            grid: GridConfig::default(),
            zoom: ZoomConfig::default(),
            seed: None,
            wall_weight: None,
            mouse: true,
        }
    }
}

impl RunConfig {
    /// Copy of `self` with the interval clamped to the allowed range.
    pub fn sanitized(mut self) -> Self {
        self.interval = clamp_interval(self.interval);
        self.wall_weight = self.wall_weight.map(|w| w.clamp(0.0, 1.0));
        self
    }
}

/// Clamp `interval` to `MIN_INTERVAL..=MAX_INTERVAL`.
pub fn clamp_interval(interval: Duration) -> Duration {
    interval.clamp(MIN_INTERVAL, MAX_INTERVAL)
}
