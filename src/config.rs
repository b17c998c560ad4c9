use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Runtime constants for a rendering session.
///
/// Defaults match the classic view of the set; any field can be overridden
/// from a JSON file passed as the first command line argument.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Canvas size in pixels, fixed for the session.
    pub width: usize,
    pub height: usize,

    /// Fixed outer extent of the explorable complex-plane region. Every
    /// viewport the controller produces stays inside this rectangle.
    pub x_min_min: f64,
    pub x_max_max: f64,
    pub y_min_min: f64,
    pub y_max_max: f64,

    /// Iteration budget per full recomputation (one pass per iteration).
    pub max_iterations: u16,

    /// Delay between passes, in milliseconds.
    pub pass_delay_ms: u64,

    /// Linear magnification applied per zoom-in step.
    pub zoom_factor: usize,

    /// Endpoint colors for the intensity table: `base_color` is the
    /// interior/background endpoint, `escaped_color` the fast-escape endpoint.
    pub base_color: [u8; 3],
    pub escaped_color: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 900,
            height: 800,
            x_min_min: -2.05,
            x_max_max: 0.47,
            y_min_min: -1.12,
            y_max_max: 1.12,
            max_iterations: 400,
            pass_delay_ms: 50,
            zoom_factor: 8,
            base_color: [255, 255, 255],
            escaped_color: [255, 0, 0],
        }
    }
}

impl RenderConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        let config: RenderConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.width == 0 || self.height == 0 {
            return Err("canvas size must be non-zero".into());
        }
        if self.x_min_min >= self.x_max_max || self.y_min_min >= self.y_max_max {
            return Err("outer extent must have positive width and height".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.zoom_factor < 2 {
            return Err("zoom_factor must be greater than 1".into());
        }
        Ok(())
    }
}
