use esp_hal::gpio::InputPin;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::peripherals::RMT;
use log::info;

use myrtio_presence::{PresenceController, WakeCause};

use crate::infrastructure::config::{self, DEVICE, DEVICE_MANUFACTURER, PIR_GPIO_NUMBER};
use crate::infrastructure::drivers::{EmbassyTimebase, EspLedDriver, init_pir_input};
use crate::infrastructure::types::PresenceControllerImpl;

/// Build the presence controller for this board
///
/// # Arguments
/// * `rmt` - RMT peripheral driving the strip
/// * `led_pin` - LED data line
/// * `pir_pin` - PIR output line, usually a reborrow of the wake pin
/// * `wake_cause` - Why the chip is running
pub fn init_presence_controller<'d, O>(
    rmt: RMT<'static>,
    led_pin: O,
    pir_pin: impl InputPin + 'd,
    wake_cause: WakeCause,
) -> PresenceControllerImpl<'d>
where
    O: PeripheralOutput<'static>,
{
    info!(
        "{} {} ({}), pir on gpio {}, {} leds",
        DEVICE_MANUFACTURER,
        DEVICE.name,
        DEVICE.model,
        PIR_GPIO_NUMBER,
        config::LED_COUNT
    );

    let driver = EspLedDriver::new(rmt, led_pin, config::LIGHT.color_order);
    let sensor = init_pir_input(pir_pin);

    PresenceController::new(
        driver,
        sensor,
        EmbassyTimebase,
        config::presence_config(),
        wake_cause,
    )
}
