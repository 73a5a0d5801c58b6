//! Build-time configuration read from environment variables.
//!
//! Values are parsed in const context, so a malformed value fails the build instead of the
//! boot.

pub use {const_panic, konst};

/// Reads a `u32` from the environment variable `$env_var` at build time, falling back to
/// `$default` when it is unset.
///
/// The third argument documents the value; it is not used otherwise.
///
/// # Panics
///
/// Panics at compile time if the variable is set but cannot be parsed as a `u32`.
#[macro_export]
macro_rules! u32_from_env_or {
    ($env_var:literal, $default:expr, $doc:literal $(,)?) => {
        if let Some(str_value) = option_env!($env_var) {
            if let Ok(value) = $crate::env::konst::primitive::parse_u32(str_value) {
                value
            } else {
                $crate::env::const_panic::concat_panic!(
                    "Could not parse environment variable `",
                    $env_var,
                    "=",
                    str_value,
                    "` as a u32 (",
                    $doc,
                    ")",
                );
            }
        } else {
            $default
        }
    };
}
