//! Wake cause and deep sleep
//!
//! The PIR line is armed as the EXT0 wake source: deep sleep ends when it
//! goes high. Waking from deep sleep resets the chip, so nothing here ever
//! returns to the caller.

use esp_hal::{
    delay::Delay,
    gpio::RtcPin,
    peripherals::LPWR,
    rtc_cntl::{
        Rtc, SleepSource,
        sleep::{Ext0WakeupSource, WakeupLevel},
        wakeup_cause,
    },
};
use log::info;

use myrtio_presence::{HaltRequest, WakeCause};

use crate::infrastructure::config::PIR_GPIO_NUMBER;

/// Time for the UART FIFO to drain the last log line
const LOG_DRAIN_DELAY_MS: u32 = 100;

/// Read why the chip is running
pub fn read_wake_cause() -> WakeCause {
    match wakeup_cause() {
        SleepSource::Ext0 => WakeCause::Sensor,
        SleepSource::Undefined => WakeCause::PowerOn,
        _ => WakeCause::Other,
    }
}

/// Owner of the RTC controller used to enter deep sleep
pub struct DeepSleep<'d> {
    rtc: Rtc<'d>,
}

impl<'d> DeepSleep<'d> {
    pub fn new(lpwr: LPWR<'d>) -> Self {
        Self {
            rtc: Rtc::new(lpwr),
        }
    }

    /// Arm the PIR pin as wake source and enter deep sleep
    ///
    /// `esp-println` returns once bytes reach the UART FIFO, so the CPU
    /// waits for the FIFO to drain before it stops.
    pub fn arm_and_halt<P: RtcPin>(&mut self, pir: P, request: HaltRequest) -> ! {
        let wake_source = Ext0WakeupSource::new(pir, WakeupLevel::High);
        info!(
            "power: entering deep sleep after {} session, wake on gpio {} high",
            request.wake_cause.as_str(),
            PIR_GPIO_NUMBER
        );
        Delay::new().delay_millis(LOG_DRAIN_DELAY_MS);
        self.rtc.sleep_deep(&[&wake_source])
    }
}
