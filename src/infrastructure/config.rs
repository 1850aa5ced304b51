use myrtio_presence::{ColorOrder, PresenceConfig};

pub(crate) struct DeviceConfig {
    pub name: &'static str,
    pub model: &'static str,
}

pub(crate) struct LightConfig {
    pub led_count: usize,
    pub color_order: ColorOrder,
    pub brightness: u8,
}

pub(crate) struct PresenceTimings {
    pub frame_delay_ms: u64,
    pub motion_timeout_ms: u64,
}

pub(crate) const DEVICE_MANUFACTURER: &str = "MyrtIO";

/// LED count the strip buffer is sized for
pub const LED_COUNT: usize = LIGHT.led_count;

/// Deep sleep can be compiled out for bench work on USB power
pub(crate) const DEEP_SLEEP_ENABLED: bool = !cfg!(feature = "no-deep-sleep");

#[cfg(feature = "hallway")]
pub(crate) const DEVICE: DeviceConfig = DeviceConfig {
    name: "MyrtIO Door Light Hallway",
    model: "Hallway",
};
#[cfg(feature = "porch")]
pub(crate) const DEVICE: DeviceConfig = DeviceConfig {
    name: "MyrtIO Door Light Porch",
    model: "Porch",
};
#[cfg(not(any(feature = "hallway", feature = "porch")))]
pub(crate) const DEVICE: DeviceConfig = DeviceConfig {
    name: "MyrtIO Door Light",
    model: "ESP32",
};

#[cfg(feature = "hallway")]
pub(crate) const LIGHT: LightConfig = LightConfig {
    led_count: 60,
    color_order: ColorOrder::Grb,
    brightness: 80,
};
#[cfg(feature = "porch")]
pub(crate) const LIGHT: LightConfig = LightConfig {
    led_count: 120,
    color_order: ColorOrder::Grb,
    brightness: 120,
};
#[cfg(not(any(feature = "hallway", feature = "porch")))]
pub(crate) const LIGHT: LightConfig = LightConfig {
    led_count: 60,
    color_order: ColorOrder::Grb,
    brightness: 80,
};

#[cfg(feature = "porch")]
pub(crate) const TIMINGS: PresenceTimings = PresenceTimings {
    frame_delay_ms: 50,
    motion_timeout_ms: 30_000,
};
#[cfg(not(feature = "porch"))]
pub(crate) const TIMINGS: PresenceTimings = PresenceTimings {
    frame_delay_ms: 50,
    motion_timeout_ms: 15_000,
};

/// Presence controller settings for the selected board
pub(crate) const fn presence_config() -> PresenceConfig {
    let mut config = PresenceConfig::new();
    config.brightness = LIGHT.brightness;
    config.frame_delay = embassy_time::Duration::from_millis(TIMINGS.frame_delay_ms);
    config.motion_timeout = embassy_time::Duration::from_millis(TIMINGS.motion_timeout_ms);
    config.deep_sleep = DEEP_SLEEP_ENABLED;
    config
}

/// WS2812 data line
#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO5
    };
}

/// PIR output, must be an RTC GPIO to serve as the EXT0 wake source
#[macro_export]
macro_rules! pir_gpio {
    ($p:expr) => {
        $p.GPIO13
    };
}

pub(crate) const PIR_GPIO_NUMBER: u8 = 13;
