//! Strip output backed by any `smart-leds` writer
//!
//! Keeps a frame buffer of `N` pixels. Pixel updates only touch the
//! buffer; the strip is written on refresh.

use embassy_time::Duration;
use smart_leds::SmartLedsWrite;

use crate::StripOutput;
use crate::color::Rgb;
use crate::error::OutputError;

/// Buffered [`StripOutput`] over a [`SmartLedsWrite`] writer
pub struct SmartLedsOutput<W, const N: usize> {
    writer: W,
    pixels: [Rgb; N],
}

impl<W, const N: usize> SmartLedsOutput<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    /// Create a new output with all pixels off
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [Rgb { r: 0, g: 0, b: 0 }; N],
        }
    }

    /// Buffered pixel colors, as they will be sent on the next refresh
    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    /// Get a reference to the writer
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Get a mutable reference to the writer
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Release the writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush(&mut self) -> Result<(), OutputError> {
        self.writer
            .write(self.pixels.iter().copied())
            .map_err(|_| OutputError::Write)
    }
}

impl<W, const N: usize> StripOutput for SmartLedsOutput<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), OutputError> {
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(OutputError::IndexOutOfRange)?;
        *pixel = color;
        Ok(())
    }

    // smart-leds writers are blocking and bound the transfer themselves
    fn refresh(&mut self, _timeout: Duration) -> Result<(), OutputError> {
        self.flush()
    }

    fn clear(&mut self, _timeout: Duration) -> Result<(), OutputError> {
        self.pixels = [Rgb::default(); N];
        self.flush()
    }
}
