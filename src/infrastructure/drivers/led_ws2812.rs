use static_cell::make_static;

use esp_hal::xtensa_lx::interrupt;
use esp_hal::{gpio::interconnect::PeripheralOutput, peripherals::RMT, rmt::Rmt, time::Rate};
use esp_hal_smartled::{SmartLedsAdapter, buffer_size, smart_led_buffer};
use smart_leds::SmartLedsWrite;

use myrtio_presence::{ColorOrder, LedDriver, Rgb};

pub(crate) const MAX_LED_COUNT: usize = 128;

/// ESP-specific LED driver using RMT peripheral
///
/// This driver uses the ESP32's RMT (Remote Control) peripheral
/// to generate the precise timing signals required by WS2812B LEDs.
pub struct EspLedDriver<'a> {
    adapter: SmartLedsAdapter<'a, { buffer_size(MAX_LED_COUNT) }>,
    color_order: ColorOrder,
}

impl<'a> EspLedDriver<'a> {
    /// Create a new ESP LED driver
    ///
    /// # Arguments
    /// * `rmt` - RMT peripheral
    /// * `pin` - GPIO pin connected to the LED data line
    /// * `color_order` - Channel order of the strip
    pub(crate) fn new<O>(rmt: RMT<'a>, pin: O, color_order: ColorOrder) -> Self
    where
        O: PeripheralOutput<'a>,
    {
        // Board bring-up: without the RMT channel there is no light to drive
        let rmt = Rmt::new(rmt, Rate::from_mhz(80)).expect("rmt: init failed");

        // The RMT buffer has to outlive the driver, which lives until deep sleep
        let rmt_buffer = make_static!(smart_led_buffer!(MAX_LED_COUNT));
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer);

        Self {
            adapter,
            color_order,
        }
    }
}

impl<const N: usize> LedDriver<N> for EspLedDriver<'static> {
    fn write(&mut self, colors: &[Rgb; N]) {
        let order = self.color_order;
        // A failed transfer only loses this frame, the next one retries
        interrupt::free(|| {
            let pixels = colors
                .iter()
                .take(MAX_LED_COUNT)
                .map(|color| order.to_grb_wire(*color));
            let _ = self.adapter.write(pixels);
        });
    }
}
