//! Drives a fixed set of four LEDs through a startup flash and an endless chase pattern.
//!
//! The crate is hardware-agnostic: LEDs are reached through the [`OutputLine`] capability
//! trait, delays through [`embedded_hal_async::delay::DelayNs`].
//! [`HalLine`] adapts any [`embedded_hal`] output pin, so a firmware only needs to resolve its
//! board pins into an [`OutputSet`] and hand it to [`run_app()`].

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(clippy::pedantic)]

pub mod env;
mod error;
pub mod gpio;
mod line;
pub mod log;
mod outputs;
mod pattern;
mod timing;

#[cfg(test)]
mod testing;

pub use error::{Error, ErrorCode, ENODEV};
pub use line::{HalLine, Led, OutputLine};
pub use outputs::{initialize_outputs, OutputSet, LED_COUNT};
pub use pattern::{chase_lap, run, run_app, startup_blink};
pub use timing::Timing;
