//! Light state owned by the controller
//!
//! While the light is off after a power off, `brightness` is 0 and
//! `saved_brightness` holds the level to restore. While it is on, both
//! hold the active level.

use crate::color::{Rgb, hsv_to_rgb};
use crate::config::LightConfig;

/// Upper bound for percentage values
pub const PERCENT_MAX: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    pub(crate) hue: f32,
    pub(crate) saturation: f32,
    pub(crate) brightness: u8,
    pub(crate) saved_brightness: u8,
    pub(crate) is_on: bool,
}

impl LightState {
    /// Create the startup state from the configuration
    ///
    /// The light starts off, with the configured brightness remembered
    /// for the first power on.
    pub fn new(config: &LightConfig) -> Self {
        let brightness = config.brightness.min(PERCENT_MAX);
        Self {
            hue: config.hue,
            saturation: clamp_percent(config.saturation),
            brightness,
            saved_brightness: brightness,
            is_on: false,
        }
    }

    /// Hue in degrees, as last written
    pub const fn hue(&self) -> f32 {
        self.hue
    }

    /// Saturation in percent
    pub const fn saturation(&self) -> f32 {
        self.saturation
    }

    /// Visible brightness in percent
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Brightness restored by the next power on
    pub const fn saved_brightness(&self) -> u8 {
        self.saved_brightness
    }

    pub const fn is_on(&self) -> bool {
        self.is_on
    }

    /// Color the state renders to
    pub fn color(&self) -> Rgb {
        hsv_to_rgb(self.hue, self.saturation, f32::from(self.brightness))
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new(&LightConfig::DEFAULT)
    }
}

/// Clamp a percentage into `0..=100`
pub(crate) fn clamp_percent(value: f32) -> f32 {
    value.clamp(0.0, f32::from(PERCENT_MAX))
}

/// Clamp an integer percentage into `0..=100`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn clamp_percent_int(value: i32) -> u8 {
    value.clamp(0, i32::from(PERCENT_MAX)) as u8
}
