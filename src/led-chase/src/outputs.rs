use crate::{Error, ErrorCode, Led, OutputLine};

/// Number of LEDs every board must provide (`led0` to `led3`).
pub const LED_COUNT: usize = 4;

/// The ordered, fixed-length set of LEDs the patterns run on.
///
/// The order defines the animation sequence, not any physical arrangement.
pub struct OutputSet<L, const N: usize = LED_COUNT> {
    leds: [Led<L>; N],
}

impl<L, const N: usize> OutputSet<L, N> {
    /// Creates the set from its LEDs, in animation order.
    #[must_use]
    pub const fn new(leds: [Led<L>; N]) -> Self {
        Self { leds }
    }

    /// Returns the number of LEDs.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns whether the set holds no LED.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Iterates over the LEDs in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, Led<L>> {
        self.leds.iter()
    }

    /// Iterates mutably over the LEDs in index order.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Led<L>> {
        self.leds.iter_mut()
    }
}

impl<'a, L, const N: usize> IntoIterator for &'a OutputSet<L, N> {
    type Item = &'a Led<L>;
    type IntoIter = core::slice::Iter<'a, Led<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, L, const N: usize> IntoIterator for &'a mut OutputSet<L, N> {
    type Item = &'a mut Led<L>;
    type IntoIter = core::slice::IterMut<'a, Led<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<L: OutputLine, const N: usize> OutputSet<L, N> {
    /// Lights every LED (`true`) or turns every LED off (`false`), in index order.
    pub fn set_all(&mut self, active: bool) {
        for led in &mut *self {
            led.set_active(active);
        }
    }
}

/// Checks and configures every LED, in index order, leaving each one dark.
///
/// LEDs are configured to their inactive level rather than to a low level, so active-low LEDs
/// do not light up at boot.
/// Stops at the first failure; LEDs configured before it are left as they are.
///
/// # Errors
///
/// - [`Error::DeviceNotReady`] when an LED's GPIO device is not ready.
/// - [`Error::ConfigurationFailed`] when the platform rejects the configuration.
pub fn initialize_outputs<L: OutputLine, const N: usize>(
    outputs: &mut OutputSet<L, N>,
) -> Result<(), Error<L::Error>> {
    for (index, led) in outputs.iter_mut().enumerate() {
        if !led.is_ready() {
            crate::log::error!("LED{} GPIO device not ready", index);
            return Err(Error::DeviceNotReady { index });
        }

        if let Err(source) = led.configure_inactive() {
            crate::log::error!("LED{} configure failed: {}", index, source.code());
            return Err(Error::ConfigurationFailed { index, source });
        }
    }

    crate::log::info!("LEDs ready: {}", N);
    Ok(())
}
