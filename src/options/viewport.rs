use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Viewport", inline)]
#[serde(default)]
/// Viewport tracking parameters.
pub struct ViewportOptions {
    /// Debounce delay for resize events in milliseconds. Bursts of resize
    /// events collapse into one committed size.
    #[schemars(title = "Resize Debounce", range(min = 0, max = 2000), extend("step" = 10))]
    pub resize_debounce_ms: u64,
}

impl ViewportOptions {
    /// Resize debounce as a [`Duration`].
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            resize_debounce_ms: 250,
        }
    }
}
