use core::fmt;

/// Errors reported by a [`StripOutput`](crate::StripOutput)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputError {
    /// Pixel index is outside of the strip
    IndexOutOfRange,
    /// Strip did not finish the transaction in time
    Timeout,
    /// Underlying LED writer failed
    Write,
}

/// Errors returned by the light controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightError {
    /// Written value can not be represented (NaN or infinite)
    InvalidValue,
    /// Pushing the color to the strip failed
    Output(OutputError),
}

impl LightError {
    /// Returns true if the error leaves the strip in an unknown state.
    ///
    /// The host is expected to restart the device on fatal errors.
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Output(_))
    }
}

impl From<OutputError> for LightError {
    fn from(err: OutputError) -> Self {
        Self::Output(err)
    }
}

/// Error returned when at least one write of a batch failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteError {
    /// Number of writes that did not succeed
    pub failed: usize,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange => f.write_str("pixel index out of range"),
            Self::Timeout => f.write_str("strip refresh timed out"),
            Self::Write => f.write_str("LED writer failed"),
        }
    }
}

impl fmt::Display for LightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue => f.write_str("invalid value"),
            Self::Output(err) => write!(f, "strip output failed: {err}"),
        }
    }
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} characteristic write(s) failed", self.failed)
    }
}
