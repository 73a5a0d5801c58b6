//! Logging facade.
//!
//! With the `defmt` Cargo feature enabled, [`debug!`], [`info!`] and [`error!`] are the
//! [`defmt`](https://docs.rs/defmt) macros. Otherwise they evaluate their arguments and do
//! nothing.

#[cfg(feature = "defmt")]
pub use defmt::{debug, error, info};

// The defmt macros expand to paths through the crate.
#[cfg(feature = "defmt")]
#[doc(hidden)]
pub use defmt;

#[cfg(not(feature = "defmt"))]
/// Discards a log statement after evaluating its arguments.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_stub {
    ($($arg:tt)*) => {{
        let _ = ($($arg)*);
    }};
}

#[cfg(not(feature = "defmt"))]
pub use crate::__log_stub as debug;
#[cfg(not(feature = "defmt"))]
pub use crate::__log_stub as error;
#[cfg(not(feature = "defmt"))]
pub use crate::__log_stub as info;
