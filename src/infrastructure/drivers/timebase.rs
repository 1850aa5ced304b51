use embassy_time::{Instant, Timer};
use embedded_hal_async::delay::DelayNs;

use myrtio_presence::Clock;

/// Clock and delay source backed by the embassy time driver
#[derive(Default)]
pub struct EmbassyTimebase;

impl Clock for EmbassyTimebase {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl DelayNs for EmbassyTimebase {
    async fn delay_ns(&mut self, ns: u32) {
        Timer::after_nanos(u64::from(ns)).await;
    }

    async fn delay_us(&mut self, us: u32) {
        Timer::after_micros(u64::from(us)).await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        Timer::after_millis(u64::from(ms)).await;
    }
}
