use core::convert::Infallible;

/// Error number reported when an LED's GPIO device is not ready ("no such device").
pub const ENODEV: i32 = 19;

/// Numeric code of a platform error.
///
/// Codes follow the negative-errno convention of the platform layer.
pub trait ErrorCode {
    /// Returns the platform's numeric code for this error.
    fn code(&self) -> i32;
}

impl ErrorCode for Infallible {
    fn code(&self) -> i32 {
        match *self {}
    }
}

/// Initialization errors.
///
/// `E` is the error type of the underlying [`OutputLine`](crate::OutputLine).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The GPIO device of the LED at `index` did not report ready.
    DeviceNotReady {
        /// Position of the LED in the output set.
        index: usize,
    },
    /// Configuring the LED at `index` as an output failed.
    ConfigurationFailed {
        /// Position of the LED in the output set.
        index: usize,
        /// The platform error, unchanged.
        source: E,
    },
}

impl<E> Error<E> {
    /// Returns the position of the LED that failed.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::DeviceNotReady { index } | Self::ConfigurationFailed { index, .. } => *index,
        }
    }
}

impl<E: ErrorCode> Error<E> {
    /// Returns the code to report as the failure result.
    ///
    /// A device that is not ready maps to `-ENODEV`; configuration failures pass the
    /// platform's code through.
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::DeviceNotReady { .. } => -ENODEV,
            Self::ConfigurationFailed { source, .. } => source.code(),
        }
    }
}

impl<E: ErrorCode> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DeviceNotReady { index } => write!(f, "LED{index} GPIO device not ready"),
            Self::ConfigurationFailed { index, source } => {
                write!(f, "LED{index} configure failed: {}", source.code())
            }
        }
    }
}
