//! Controller states and boot facts

/// Why the chip is running
///
/// Supplied by the platform once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeCause {
    /// Cold boot or reset
    PowerOn,
    /// Deep sleep ended by the PIR wake source
    Sensor,
    /// Deep sleep ended by anything else
    Other,
}

impl WakeCause {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PowerOn => "power-on",
            Self::Sensor => "motion",
            Self::Other => "other",
        }
    }
}

/// Presence controller state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceState {
    /// Fresh session, peripherals not yet initialized
    Booting,
    /// Running the wipe-in effect
    Rising,
    /// Animating while motion is recent
    Active,
    /// Running the fade-out effect
    Falling,
    /// Terminal: waiting to be put into deep sleep
    Halted,
    /// Deep sleep disabled: LEDs off, sensor still polled
    Idle,
}
