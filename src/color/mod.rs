mod hsv;

pub use hsv::{HUE_CIRCLE, hsv_to_rgb, normalize_hue};

pub type Rgb = smart_leds::RGB8;
