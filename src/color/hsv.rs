//! Percentage-scaled HSV to RGB conversion
//!
//! Hue is given in degrees, saturation and value in percent (0-100).
//! Implements the hexagonal HSV model: the hue circle is split into six
//! 60 degree sectors, each mixing a rising or falling channel between the
//! darkest and the brightest channel level.

use crate::color::Rgb;

/// Full hue circle in degrees
pub const HUE_CIRCLE: f32 = 360.0;

/// Width of one hue sector in degrees
const SECTOR_WIDTH: f32 = 60.0;

/// Maximum channel intensity
const CHANNEL_MAX: f32 = 255.0;

/// Normalize a hue into `[0, 360)`
///
/// Negative hues wrap around the circle, so `-90` becomes `270`.
pub fn normalize_hue(hue: f32) -> f32 {
    let hue = libm::fmodf(hue, HUE_CIRCLE);
    let hue = if hue < 0.0 { hue + HUE_CIRCLE } else { hue };
    // Tiny negative remainders round up to a full circle
    if hue >= HUE_CIRCLE { 0.0 } else { hue }
}

/// Convert HSV to RGB
///
/// # Arguments
/// * `hue` - Hue in degrees, any real value
/// * `saturation` - Saturation in percent (0-100)
/// * `value` - Value in percent (0-100)
///
/// Out-of-range saturation or value is not rejected. The resulting
/// channels are rounded and clamped into `0..=255`.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb {
    let hue = normalize_hue(hue);

    let rgb_max = value * CHANNEL_MAX / 100.0;
    let rgb_min = rgb_max * (100.0 - saturation) / 100.0;

    let sector = libm::floorf(hue / SECTOR_WIDTH);
    let diff = hue - sector * SECTOR_WIDTH;

    // RGB adjustment amount by hue
    let rgb_adj = (rgb_max - rgb_min) * diff / SECTOR_WIDTH;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (r, g, b) = match sector as u8 {
        0 => (rgb_max, rgb_min + rgb_adj, rgb_min),
        1 => (rgb_max - rgb_adj, rgb_max, rgb_min),
        2 => (rgb_min, rgb_max, rgb_min + rgb_adj),
        3 => (rgb_min, rgb_max - rgb_adj, rgb_max),
        4 => (rgb_min + rgb_adj, rgb_min, rgb_max),
        _ => (rgb_max, rgb_min, rgb_max - rgb_adj),
    };

    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

/// Round a channel level and clamp it into the drivable range
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(level: f32) -> u8 {
    // NaN saturates to 0 on the cast
    libm::roundf(level).clamp(0.0, CHANNEL_MAX) as u8
}
