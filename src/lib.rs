#![no_std]

pub mod accessory;
pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod output;
pub mod shared;
pub mod state;

pub use accessory::{
    Characteristic, CharacteristicStore, CharacteristicValue, LightbulbService, WriteRequest,
    WriteStatus,
};
pub use config::LightConfig;
pub use controller::LightController;
pub use error::{LightError, OutputError, WriteError};
pub use output::SmartLedsOutput;
pub use shared::SharedLightbulb;
pub use state::LightState;

pub use color::{Rgb, hsv_to_rgb};
pub use embassy_time::Duration;

/// Abstract LED strip output
///
/// Implement this trait to support different hardware platforms.
/// The light controller is generic over this trait.
pub trait StripOutput {
    /// Set a single pixel color, shown on the next refresh
    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), OutputError>;

    /// Send the buffered colors to the strip
    fn refresh(&mut self, timeout: Duration) -> Result<(), OutputError>;

    /// Turn all pixels off
    fn clear(&mut self, timeout: Duration) -> Result<(), OutputError>;
}
