use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StripOutput;
use crate::color::Rgb;
use crate::config::LightConfig;
use crate::error::{LightError, OutputError};
use crate::state::{LightState, clamp_percent, clamp_percent_int};

/// Index of the night light pixel on the strip
pub const PIXEL_INDEX: usize = 0;

/// Light state controller
///
/// Owns the light state and keeps the strip in sync with it. Power
/// changes always repaint the pixel, color changes only while the light
/// is on.
pub struct LightController<O: StripOutput> {
    // External dependencies and configuration
    output: O,
    refresh_timeout: Duration,
    output_retries: u8,

    // Internal state
    state: LightState,
}

impl<O: StripOutput> LightController<O> {
    /// Create a new controller with the configured startup state
    ///
    /// Does not touch the strip, call [`Self::init`] for that.
    pub fn new(output: O, config: &LightConfig) -> Self {
        Self {
            output,
            refresh_timeout: config.refresh_timeout,
            output_retries: config.output_retries,
            state: LightState::new(config),
        }
    }

    /// Turn all pixels off so the light starts dark
    pub fn init(&mut self) -> Result<(), LightError> {
        self.clear()
    }

    /// Turn all pixels off before releasing the strip
    pub fn deinit(&mut self) -> Result<(), LightError> {
        self.clear()
    }

    /// Get the current light state
    pub const fn state(&self) -> LightState {
        self.state
    }

    /// Get the color the current state renders to
    pub fn color(&self) -> Rgb {
        self.state.color()
    }

    /// Turn the light on or off
    ///
    /// Turning off remembers the current brightness, turning on restores
    /// it. The pixel is repainted even if the power state did not change.
    pub fn set_on(&mut self, value: bool) -> Result<(), LightError> {
        #[cfg(feature = "esp32-log")]
        println!("[LightController.set_on] {:?}", value);

        if value {
            self.state.brightness = self.state.saved_brightness;
            self.state.is_on = true;
        } else {
            // Repeated power off must not overwrite the level to restore
            if self.state.is_on {
                self.state.saved_brightness = self.state.brightness;
            }
            self.state.brightness = 0;
            self.state.is_on = false;
        }
        self.render()
    }

    /// Set saturation in percent
    ///
    /// Values are clamped into `0..=100`. While the light is off the value
    /// is only recorded.
    pub fn set_saturation(&mut self, value: f32) -> Result<(), LightError> {
        #[cfg(feature = "esp32-log")]
        println!("[LightController.set_saturation] {:?}", value);

        if !value.is_finite() {
            return Err(LightError::InvalidValue);
        }
        self.state.saturation = clamp_percent(value);
        self.render_if_on()
    }

    /// Set hue in degrees
    ///
    /// While the light is off the value is only recorded.
    pub fn set_hue(&mut self, value: f32) -> Result<(), LightError> {
        #[cfg(feature = "esp32-log")]
        println!("[LightController.set_hue] {:?}", value);

        if !value.is_finite() {
            return Err(LightError::InvalidValue);
        }
        self.state.hue = value;
        self.render_if_on()
    }

    /// Set brightness in percent
    ///
    /// The value also becomes the level restored by the next power on,
    /// whether or not the light is currently on.
    pub fn set_brightness(&mut self, value: i32) -> Result<(), LightError> {
        #[cfg(feature = "esp32-log")]
        println!("[LightController.set_brightness] {:?}", value);

        let brightness = clamp_percent_int(value);
        self.state.brightness = brightness;
        self.state.saved_brightness = brightness;
        self.render_if_on()
    }

    /// Get a reference to the strip output
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the strip output
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Release the strip output
    pub fn into_output(self) -> O {
        self.output
    }

    fn render_if_on(&mut self) -> Result<(), LightError> {
        if self.state.is_on {
            return self.render();
        }
        Ok(())
    }

    /// Push the current color to the strip, retrying failed pushes
    fn render(&mut self) -> Result<(), LightError> {
        let color = self.state.color();
        let mut attempts_left = self.output_retries;
        loop {
            match self.push(color) {
                Ok(()) => return Ok(()),
                Err(_err) if attempts_left > 0 => {
                    #[cfg(feature = "esp32-log")]
                    println!(
                        "[LightController.render] push failed: {:?}, retries left: {:?}",
                        _err, attempts_left
                    );
                    attempts_left -= 1;
                }
                Err(err) => {
                    #[cfg(feature = "esp32-log")]
                    println!("[LightController.render] push failed: {:?}", err);
                    return Err(LightError::Output(err));
                }
            }
        }
    }

    fn push(&mut self, color: Rgb) -> Result<(), OutputError> {
        self.output.set_pixel(PIXEL_INDEX, color)?;
        self.output.refresh(self.refresh_timeout)
    }

    fn clear(&mut self) -> Result<(), LightError> {
        self.output.clear(self.refresh_timeout).map_err(|err| {
            #[cfg(feature = "esp32-log")]
            println!("[LightController.clear] clear failed: {:?}", err);
            LightError::Output(err)
        })
    }
}
