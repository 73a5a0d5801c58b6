/// Delay between the two toggles of a chase step, in milliseconds.
pub(crate) const STEP_DELAY_MS: u32 = crate::u32_from_env_or!(
    "CONFIG_LED_CHASE_STEP_DELAY_MS",
    150,
    "delay between the toggles of a chase step (in ms)"
);

/// Delay after a full chase lap, in milliseconds.
pub(crate) const LAP_DELAY_MS: u32 = crate::u32_from_env_or!(
    "CONFIG_LED_CHASE_LAP_DELAY_MS",
    400,
    "delay after a full chase lap (in ms)"
);

pub(crate) const STARTUP_FLASHES: u32 = crate::u32_from_env_or!(
    "CONFIG_LED_CHASE_STARTUP_FLASHES",
    2,
    "number of startup flashes"
);

// With 0 the LEDs are lit for a single scheduler pass; raise it for a visible flash.
pub(crate) const STARTUP_ON_MS: u32 = crate::u32_from_env_or!(
    "CONFIG_LED_CHASE_STARTUP_ON_MS",
    0,
    "time LEDs stay lit during a startup flash (in ms)"
);

pub(crate) const STARTUP_OFF_MS: u32 = crate::u32_from_env_or!(
    "CONFIG_LED_CHASE_STARTUP_OFF_MS",
    100,
    "time LEDs stay dark after a startup flash (in ms)"
);

/// Timing of the startup flash and of the chase pattern.
///
/// [`Timing::DEFAULT`] holds the values chosen at build time; each can be overridden through
/// the `CONFIG_LED_CHASE_*` environment variable of the same name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Delay between the two toggles of a chase step (`CONFIG_LED_CHASE_STEP_DELAY_MS`).
    pub step_ms: u32,
    /// Delay after a full chase lap (`CONFIG_LED_CHASE_LAP_DELAY_MS`).
    pub lap_ms: u32,
    /// Number of startup flashes (`CONFIG_LED_CHASE_STARTUP_FLASHES`).
    pub startup_flashes: u32,
    /// Time all LEDs stay lit during a startup flash (`CONFIG_LED_CHASE_STARTUP_ON_MS`).
    pub startup_on_ms: u32,
    /// Time all LEDs stay dark after a startup flash (`CONFIG_LED_CHASE_STARTUP_OFF_MS`).
    pub startup_off_ms: u32,
}

impl Timing {
    /// Build-time configured timing.
    pub const DEFAULT: Self = Self {
        step_ms: STEP_DELAY_MS,
        lap_ms: LAP_DELAY_MS,
        startup_flashes: STARTUP_FLASHES,
        startup_on_ms: STARTUP_ON_MS,
        startup_off_ms: STARTUP_OFF_MS,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}
