#![no_std]
#![no_main]

use embassy_executor::Spawner;

use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;

use myrtio_door_light::infrastructure::drivers::{DeepSleep, read_wake_cause};
use myrtio_door_light::infrastructure::tasks::init_presence_controller;
use myrtio_door_light::{led_gpio, pir_gpio};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let peripherals = esp_hal::init(esp_hal::Config::default());

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let wake_cause = read_wake_cause();
    let mut deep_sleep = DeepSleep::new(peripherals.LPWR);

    // The PIR pin is polled during the session and armed as wake source after it
    let mut pir_pin = pir_gpio!(peripherals);

    let halt = {
        let mut controller = init_presence_controller(
            peripherals.RMT,
            led_gpio!(peripherals),
            pir_pin.reborrow(),
            wake_cause,
        );
        controller.run().await
    };

    deep_sleep.arm_and_halt(pir_pin, halt)
}
