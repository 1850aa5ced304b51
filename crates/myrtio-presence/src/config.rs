use embassy_time::Duration;

use crate::color::{BLUE, Rgb};

/// Presence controller configuration
///
/// Fixed for the process lifetime. The LED count is the controller's
/// const generic, pins belong to the platform layer.
#[derive(Debug, Clone, Copy)]
pub struct PresenceConfig {
    /// Default global brightness (0-255)
    pub brightness: u8,
    /// Pause after every rainbow frame
    pub frame_delay: Duration,
    /// Hue shift between neighbouring pixels of the rainbow
    pub rainbow_delta_hue: u8,
    /// Time without motion before the lights go off
    pub motion_timeout: Duration,
    /// Enter deep sleep after the fade-out, or idle with LEDs off
    pub deep_sleep: bool,
    /// Wipe-in color
    pub wipe_color: Rgb,
    /// Pause after every wipe-in step
    pub wipe_step_delay: Duration,
    /// Brightness decrement per fade-out step
    pub fade_step: u8,
    /// Pause after every fade-out step
    pub fade_step_delay: Duration,
    /// Pause between the final dark frame and deep sleep
    pub sleep_settle_delay: Duration,
}

impl PresenceConfig {
    pub const fn new() -> Self {
        Self {
            brightness: 80,
            frame_delay: Duration::from_millis(50),
            rainbow_delta_hue: 7,
            motion_timeout: Duration::from_millis(15_000),
            deep_sleep: true,
            wipe_color: BLUE,
            wipe_step_delay: Duration::from_millis(8),
            fade_step: 10,
            fade_step_delay: Duration::from_millis(15),
            sleep_settle_delay: Duration::from_millis(100),
        }
    }
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self::new()
    }
}
