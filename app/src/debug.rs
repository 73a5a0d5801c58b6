//! Debug console over RTT.
//!
//! Up-channel 0 carries raw text ([`println!`]), up-channel 1 carries the `defmt` log stream.
//! Raw text stays readable when no `defmt` decoder is attached.

pub use rtt_target::rprintln as println;

/// Represents the exit code of a debug output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExitCode {
    #[doc(hidden)]
    Success,
    #[doc(hidden)]
    Failure,
}

impl ExitCode {
    /// The [`ExitCode`] for success.
    pub const SUCCESS: Self = Self::Success;
    /// The [`ExitCode`] for failure.
    pub const FAILURE: Self = Self::Failure;
}

#[cfg(feature = "semihosting")]
impl From<ExitCode> for cortex_m_semihosting::debug::ExitStatus {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => cortex_m_semihosting::debug::EXIT_SUCCESS,
            ExitCode::Failure => cortex_m_semihosting::debug::EXIT_FAILURE,
        }
    }
}

/// Sets up the RTT channels. Must run before anything is printed or logged.
pub fn init() {
    use rtt_target::ChannelMode::{NoBlockSkip, NoBlockTrim};

    let channels = rtt_target::rtt_init! {
        up: {
            0: {
                size: 1024,
                mode: NoBlockTrim,
                name: "Terminal"
            }
            1: {
                size: 1024,
                mode: NoBlockSkip,
                // probe-rs autodetects whether defmt is in use based on this channel name
                name: "defmt"
            }
        }
    };

    rtt_target::set_print_channel(channels.up.0);
    rtt_target::set_defmt_channel(channels.up.1);
}

/// Terminates the debug session.
///
/// Without the `semihosting` feature there is no host to report to and this only parks the
/// core.
pub fn exit(code: ExitCode) -> ! {
    loop {
        #[cfg(feature = "semihosting")]
        cortex_m_semihosting::debug::exit(code.into());

        #[cfg(not(feature = "semihosting"))]
        {
            let _ = code;
            core::hint::spin_loop();
        }
    }
}
