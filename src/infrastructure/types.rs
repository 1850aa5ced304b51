use esp_hal::gpio::Input;

use myrtio_presence::PresenceController;

use crate::infrastructure::{
    config::LED_COUNT,
    drivers::{EmbassyTimebase, EspLedDriver},
};

pub type LightDriver = EspLedDriver<'static>;

pub type PresenceControllerImpl<'d> =
    PresenceController<LightDriver, Input<'d>, EmbassyTimebase, LED_COUNT>;
