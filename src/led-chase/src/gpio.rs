//! HAL-agnostic GPIO-related types.

/// Digital level of an output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Digital low level.
    Low,
    /// Digital high level.
    High,
}

impl Level {
    /// Returns the opposite level.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => false,
            Level::High => true,
        }
    }
}

impl From<bool> for Level {
    fn from(boolean: bool) -> Self {
        if boolean {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<embedded_hal::digital::PinState> for Level {
    fn from(pin_state: embedded_hal::digital::PinState) -> Self {
        bool::from(pin_state).into()
    }
}

impl From<Level> for embedded_hal::digital::PinState {
    fn from(level: Level) -> Self {
        bool::from(level).into()
    }
}

/// Which electrical level lights an LED.
///
/// Boards wire LEDs either between the pin and ground (active-high) or between the supply and
/// the pin (active-low).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// The LED is lit when the pin is driven high.
    ActiveHigh,
    /// The LED is lit when the pin is driven low.
    ActiveLow,
}

impl Polarity {
    /// Returns the electrical level that puts the LED in the given logical state.
    #[must_use]
    pub const fn level(self, active: bool) -> Level {
        match (self, active) {
            (Polarity::ActiveHigh, true) | (Polarity::ActiveLow, false) => Level::High,
            (Polarity::ActiveHigh, false) | (Polarity::ActiveLow, true) => Level::Low,
        }
    }

    /// Returns the level that keeps the LED dark.
    #[must_use]
    pub const fn inactive_level(self) -> Level {
        self.level(false)
    }
}
