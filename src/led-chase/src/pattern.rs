//! Startup flash and chase animation.

use embassy_sync::{blocking_mutex::raw::RawMutex, signal::Signal};
use embedded_hal_async::delay::DelayNs;

use crate::{initialize_outputs, Error, Led, OutputLine, OutputSet, Timing};

/// Flashes every LED `timing.startup_flashes` times to show the board booted.
///
/// Each flash lights all LEDs, waits `timing.startup_on_ms`, turns them off and waits
/// `timing.startup_off_ms`. Expects initialized outputs.
pub async fn startup_blink<L, D, const N: usize>(
    outputs: &mut OutputSet<L, N>,
    delay: &mut D,
    timing: &Timing,
) where
    L: OutputLine,
    D: DelayNs,
{
    for _ in 0..timing.startup_flashes {
        outputs.set_all(true);
        delay.delay_ms(timing.startup_on_ms).await;
        outputs.set_all(false);
        delay.delay_ms(timing.startup_off_ms).await;
    }
}

/// Runs one chase lap: pulses every LED from first to last, then from last to first, then
/// waits `timing.lap_ms`.
///
/// The backward sweep visits every LED, both ends included.
/// Each LED is toggled an even number of times, so the lap leaves every LED as it found it.
pub async fn chase_lap<L, D, const N: usize>(
    outputs: &mut OutputSet<L, N>,
    delay: &mut D,
    timing: &Timing,
) where
    L: OutputLine,
    D: DelayNs,
{
    for led in &mut *outputs {
        pulse(led, delay, timing.step_ms).await;
    }

    for led in outputs.iter_mut().rev() {
        pulse(led, delay, timing.step_ms).await;
    }

    delay.delay_ms(timing.lap_ms).await;
}

async fn pulse<L: OutputLine, D: DelayNs>(led: &mut Led<L>, delay: &mut D, step_ms: u32) {
    led.toggle();
    delay.delay_ms(step_ms).await;
    led.toggle();
}

/// Runs chase laps until `stop` is signaled.
///
/// The signal is checked between laps; a lap that has started always completes. The signal is
/// left set.
pub async fn run<L, D, M, const N: usize>(
    outputs: &mut OutputSet<L, N>,
    delay: &mut D,
    timing: &Timing,
    stop: &Signal<M, ()>,
) where
    L: OutputLine,
    D: DelayNs,
    M: RawMutex,
{
    let mut laps: u32 = 0;

    while !stop.signaled() {
        chase_lap(outputs, delay, timing).await;
        laps = laps.wrapping_add(1);
    }

    crate::log::debug!("chase stopped after {} laps", laps);
}

/// Initializes the outputs, flashes them once for boot, then chases until `stop` is signaled.
///
/// # Errors
///
/// Returns the initialization error, before any LED is animated.
pub async fn run_app<L, D, M, const N: usize>(
    outputs: &mut OutputSet<L, N>,
    delay: &mut D,
    timing: &Timing,
    stop: &Signal<M, ()>,
) -> Result<(), Error<L::Error>>
where
    L: OutputLine,
    D: DelayNs,
    M: RawMutex,
{
    initialize_outputs(outputs)?;

    startup_blink(outputs, delay, timing).await;
    run(outputs, delay, timing, stop).await;

    Ok(())
}
