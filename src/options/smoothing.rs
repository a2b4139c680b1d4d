use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Smoothing", inline)]
#[serde(default)]
/// Interpolation and sampling cadence parameters.
pub struct SmoothingOptions {
    /// Per-frame interpolation factor toward the target, in `(0, 1]`.
    /// Lower values settle more slowly.
    #[schemars(title = "Lerp Factor", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub lerp_factor: f32,
    /// Per-channel distance from the target below which the animation
    /// counts as settled.
    #[schemars(skip)]
    pub lerp_threshold: f32,
    /// How long after the last pointer movement the loop may stop, in
    /// milliseconds.
    #[schemars(title = "Stop Delay", range(min = 0, max = 2000), extend("step" = 10))]
    pub stop_delay_ms: u64,
    /// Minimum interval between processed pointer samples, in milliseconds.
    /// `0` disables throttling and processes one sample per frame.
    #[schemars(title = "Throttle Delay", range(min = 0, max = 100), extend("step" = 1))]
    pub throttle_delay_ms: u64,
}

impl SmoothingOptions {
    /// Idle-stop delay as a [`Duration`].
    pub fn stop_delay(&self) -> Duration {
        Duration::from_millis(self.stop_delay_ms)
    }

    /// Sample throttle window as a [`Duration`].
    pub fn throttle_delay(&self) -> Duration {
        Duration::from_millis(self.throttle_delay_ms)
    }
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            lerp_factor: 0.1,
            lerp_threshold: 0.01,
            stop_delay_ms: 100,
            throttle_delay_ms: 16,
        }
    }
}
