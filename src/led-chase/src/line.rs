use core::convert::Infallible;

use embedded_hal::digital::StatefulOutputPin;

use crate::{
    gpio::{Level, Polarity},
    ErrorCode,
};

/// Capabilities the patterns need from a digital output.
///
/// Levels are electrical; polarity is handled by [`Led`].
pub trait OutputLine {
    /// Error returned when configuring the line fails.
    type Error: ErrorCode;

    /// Returns whether the GPIO device behind this line can be used.
    fn is_ready(&self) -> bool;

    /// Configures the line as an output, driving `initial`.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the line cannot be configured.
    fn configure_output(&mut self, initial: Level) -> Result<(), Self::Error>;

    /// Drives the line to `level`.
    fn set_level(&mut self, level: Level);

    /// Inverts the level currently driven.
    fn toggle(&mut self);
}

/// [`OutputLine`] backed by an [`embedded_hal`] output pin.
///
/// HAL outputs are configured when they are constructed and owning one guarantees its port is
/// usable, so readiness and configuration cannot fail.
pub struct HalLine<P> {
    pin: P,
}

impl<P> HalLine<P> {
    /// Wraps an already constructed output pin.
    #[must_use]
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Returns the wrapped pin.
    #[must_use]
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputLine for HalLine<P>
where
    P: StatefulOutputPin<Error = Infallible>,
{
    type Error = Infallible;

    fn is_ready(&self) -> bool {
        true
    }

    fn configure_output(&mut self, initial: Level) -> Result<(), Self::Error> {
        self.pin.set_state(initial.into())
    }

    fn set_level(&mut self, level: Level) {
        self.pin.set_state(level.into()).unwrap_or_else(|e| match e {});
    }

    fn toggle(&mut self) {
        self.pin.toggle().unwrap_or_else(|e| match e {});
    }
}

/// One LED: an output line and the polarity it is wired with.
///
/// Both are fixed for the lifetime of the value.
pub struct Led<L> {
    line: L,
    polarity: Polarity,
}

impl<L> Led<L> {
    /// Creates an LED from its line and polarity.
    #[must_use]
    pub const fn new(line: L, polarity: Polarity) -> Self {
        Self { line, polarity }
    }

    /// Returns how this LED is wired.
    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Returns the underlying line.
    #[must_use]
    pub fn line(&self) -> &L {
        &self.line
    }
}

impl<L: OutputLine> Led<L> {
    pub(crate) fn is_ready(&self) -> bool {
        self.line.is_ready()
    }

    pub(crate) fn configure_inactive(&mut self) -> Result<(), L::Error> {
        self.line.configure_output(self.polarity.inactive_level())
    }

    /// Lights the LED (`true`) or turns it off (`false`).
    pub fn set_active(&mut self, active: bool) {
        self.line.set_level(self.polarity.level(active));
    }

    /// Inverts the LED's state.
    pub fn toggle(&mut self) {
        self.line.toggle();
    }
}
