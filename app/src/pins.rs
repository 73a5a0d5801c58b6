//! Board LED tables.
//!
//! Every board names its four LEDs `led0` to `led3` through [`define_leds!`]; a table with a
//! missing or extra alias does not compile.
//! The build script rejects builds without exactly one board feature.

use embassy_nrf::{
    gpio::{Level, Output, OutputDrive, Pin},
    Peripheral,
};
use led_chase::{gpio::Polarity, HalLine, Led, OutputSet};

/// The output set driven by this firmware.
pub type Leds = OutputSet<HalLine<Output<'static>>>;

/// Defines `resolve_output_set()` for the board, from its `led0` to `led3` aliases.
///
/// Each alias names an `embassy_nrf` peripheral pin and the LED's polarity.
macro_rules! define_leds {
    (
        led0: $pin0:ident = $polarity0:ident,
        led1: $pin1:ident = $polarity1:ident,
        led2: $pin2:ident = $polarity2:ident,
        led3: $pin3:ident = $polarity3:ident $(,)?
    ) => {
        /// Takes the board's LED pins and resolves them into the output set.
        ///
        /// Pins start out at their inactive level.
        pub fn resolve_output_set(p: embassy_nrf::Peripherals) -> Leds {
            OutputSet::new([
                led(p.$pin0, Polarity::$polarity0),
                led(p.$pin1, Polarity::$polarity1),
                led(p.$pin2, Polarity::$polarity2),
                led(p.$pin3, Polarity::$polarity3),
            ])
        }
    };
    ($($other:tt)*) => {
        compile_error!("define_leds! requires exactly the aliases led0, led1, led2 and led3, in order");
    };
}

fn led(
    pin: impl Peripheral<P = impl Pin> + 'static,
    polarity: Polarity,
) -> Led<HalLine<Output<'static>>> {
    let initial = match polarity.inactive_level() {
        led_chase::gpio::Level::Low => Level::Low,
        led_chase::gpio::Level::High => Level::High,
    };
    let output = Output::new(pin, initial, OutputDrive::Standard);
    Led::new(HalLine::new(output), polarity)
}

// The DK boards wire their LEDs to VDD, hence active-low.

#[cfg(feature = "nrf52840dk")]
define_leds! {
    led0: P0_13 = ActiveLow,
    led1: P0_14 = ActiveLow,
    led2: P0_15 = ActiveLow,
    led3: P0_16 = ActiveLow,
}

#[cfg(feature = "nrf52dk")]
define_leds! {
    led0: P0_17 = ActiveLow,
    led1: P0_18 = ActiveLow,
    led2: P0_19 = ActiveLow,
    led3: P0_20 = ActiveLow,
}

#[cfg(feature = "nrf5340dk")]
define_leds! {
    led0: P0_28 = ActiveLow,
    led1: P0_29 = ActiveLow,
    led2: P0_30 = ActiveLow,
    led3: P0_31 = ActiveLow,
}
