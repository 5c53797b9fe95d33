use embassy_time::Duration;

/// Default hue in degrees
pub const DEFAULT_HUE: f32 = 360.0;

/// Default saturation in percent
pub const DEFAULT_SATURATION: f32 = 10.0;

/// Default brightness in percent
pub const DEFAULT_BRIGHTNESS: u8 = 50;

/// Default upper bound for a single strip refresh
pub const DEFAULT_REFRESH_TIMEOUT: Duration = Duration::from_millis(100);

/// Configuration for the night light controller
#[derive(Debug, Clone)]
pub struct LightConfig {
    /// Startup hue in degrees
    pub hue: f32,
    /// Startup saturation in percent (0-100)
    pub saturation: f32,
    /// Brightness restored by the first power on, in percent (0-100)
    pub brightness: u8,
    /// Timeout passed to the strip on every refresh
    pub refresh_timeout: Duration,
    /// How many times a failed pixel push is repeated before giving up
    pub output_retries: u8,
}

impl LightConfig {
    pub const DEFAULT: Self = Self {
        hue: DEFAULT_HUE,
        saturation: DEFAULT_SATURATION,
        brightness: DEFAULT_BRIGHTNESS,
        refresh_timeout: DEFAULT_REFRESH_TIMEOUT,
        output_retries: 0,
    };
}

impl Default for LightConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
