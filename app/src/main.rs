#![no_main]
#![no_std]

mod debug;
mod pins;

use embassy_executor::Spawner;
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::Delay;
use led_chase::Timing;

use debug::ExitCode;

// Never signaled on hardware: the chase runs for as long as the board is powered.
static STOP: Signal<CriticalSectionRawMutex, ()> = Signal::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    debug::init();

    let p = embassy_nrf::init(Default::default());
    let mut leds = pins::resolve_output_set(p);

    match led_chase::run_app(&mut leds, &mut Delay, &Timing::DEFAULT, &STOP).await {
        Ok(()) => debug::exit(ExitCode::SUCCESS),
        Err(err) => {
            // Raw text, so the failure shows even without a defmt decoder.
            debug::println!("LED init failed: {}", err.code());
            debug::exit(ExitCode::FAILURE)
        }
    }
}

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    debug::println!("panic: {}\n", info);
    debug::exit(ExitCode::FAILURE)
}
