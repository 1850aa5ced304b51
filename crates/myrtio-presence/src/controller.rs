//! Presence controller - main state machine
//!
//! The controller is the central coordinator that:
//! - Initializes the strip for a fresh session
//! - Plays the wipe-in effect when the session starts
//! - Polls the PIR sensor and animates while motion is recent
//! - Plays the fade-out effect once the motion timeout expires
//! - Hands control back to the platform for deep sleep
//!
//! ```text
//! Booting -> Rising -> Active -> Falling -> Halted
//!                        ^          |
//!                        |          v (deep sleep disabled)
//!              Booting <-+------- Idle
//! ```
//!
//! Deep sleep itself is not part of the controller: [`PresenceController::run`]
//! returns a [`HaltRequest`] and the platform performs the diverging sleep
//! call. Nothing held by the controller survives that call.

use embassy_time::Duration;
use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;
use log::{debug, info};

use crate::{
    config::PresenceConfig,
    driver::{Clock, LedDriver},
    effect::{FadeOutEffect, FrameEffect, RainbowEffect, WipeInEffect},
    frame::PixelBuffer,
    session::SessionClock,
    state::{PresenceState, WakeCause},
};

/// Proof that the controller reached its terminal state
///
/// The strip is dark and the session is over. The platform is expected to
/// arm the wake source and halt.
#[must_use = "the platform must put the device to sleep"]
#[derive(Debug)]
pub struct HaltRequest {
    /// Wake cause of the session that just ended
    pub wake_cause: WakeCause,
}

/// Presence controller
///
/// Generic over `D: LedDriver`, the PIR input `S` and the timebase `T`,
/// so the same state machine runs on the chip and on the host.
pub struct PresenceController<D, S, T, const N: usize> {
    /// Hardware driver for LED output
    driver: D,
    /// PIR sensor input, high means presence
    sensor: S,
    /// Clock and delay source
    time: T,
    config: PresenceConfig,
    frame: PixelBuffer<N>,
    rainbow: RainbowEffect,
    session: SessionClock,
    state: PresenceState,
    wake_cause: WakeCause,
}

impl<D, S, T, const N: usize> PresenceController<D, S, T, N>
where
    D: LedDriver<N>,
    S: InputPin,
    T: Clock + DelayNs,
{
    /// Create a controller in the `Booting` state
    pub fn new(driver: D, sensor: S, time: T, config: PresenceConfig, wake_cause: WakeCause) -> Self {
        let session = SessionClock::start(time.now(), config.motion_timeout);
        Self {
            driver,
            sensor,
            time,
            config,
            frame: PixelBuffer::new(config.brightness),
            rainbow: RainbowEffect::new(config.rainbow_delta_hue),
            session,
            state: PresenceState::Booting,
            wake_cause,
        }
    }

    /// Start the animation from a given hue phase
    #[must_use]
    pub fn with_hue(mut self, hue: u8) -> Self {
        self.rainbow = self.rainbow.with_hue(hue);
        self
    }

    pub fn state(&self) -> PresenceState {
        self.state
    }

    pub fn wake_cause(&self) -> WakeCause {
        self.wake_cause
    }

    pub fn frame(&self) -> &PixelBuffer<N> {
        &self.frame
    }

    pub fn session(&self) -> &SessionClock {
        &self.session
    }

    /// Hue phase of the next rainbow frame
    pub fn hue(&self) -> u8 {
        self.rainbow.hue()
    }

    /// Drive the state machine until it halts
    pub async fn run(&mut self) -> HaltRequest {
        while self.step().await != PresenceState::Halted {}
        HaltRequest {
            wake_cause: self.wake_cause,
        }
    }

    /// Perform one transition (or one `Active`/`Idle` iteration)
    pub async fn step(&mut self) -> PresenceState {
        self.state = match self.state {
            PresenceState::Booting => {
                self.boot();
                PresenceState::Rising
            }
            PresenceState::Rising => {
                self.power_on_effect().await;
                self.session = SessionClock::start(self.time.now(), self.config.motion_timeout);
                info!("presence: leds on, sleeping after {} ms without motion", self.config.motion_timeout.as_millis());
                PresenceState::Active
            }
            PresenceState::Active => self.tick_active().await,
            PresenceState::Falling => {
                self.power_off_effect().await;
                if self.config.deep_sleep {
                    info!("presence: leds off, entering deep sleep");
                    self.settle().await;
                    PresenceState::Halted
                } else {
                    info!("presence: deep sleep disabled, idling with leds off");
                    PresenceState::Idle
                }
            }
            PresenceState::Halted => PresenceState::Halted,
            PresenceState::Idle => self.tick_idle().await,
        };
        self.state
    }

    /// Read the PIR input. Driver errors read as "no motion".
    pub fn poll_sensor(&mut self) -> bool {
        self.sensor.is_high().unwrap_or(false)
    }

    /// Render and push one rainbow frame, then wait the frame delay
    pub async fn render_frame(&mut self) {
        self.rainbow.next_frame(&mut self.frame);
        self.frame.show(&mut self.driver);
        self.delay(self.config.frame_delay).await;
    }

    /// Wipe the wake color in from both ends of the strip
    pub async fn power_on_effect(&mut self) {
        self.frame.clear();
        let mut wipe = WipeInEffect::new(self.config.wipe_color);
        self.play(&mut wipe, self.config.wipe_step_delay).await;
    }

    /// Ramp brightness down to zero, clear, restore the default brightness
    pub async fn power_off_effect(&mut self) {
        let mut fade = FadeOutEffect::new(self.config.brightness, self.config.fade_step);
        self.play(&mut fade, self.config.fade_step_delay).await;
        self.frame.clear();
        self.frame.show(&mut self.driver);
        self.frame.set_brightness(self.config.brightness);
    }

    fn boot(&mut self) {
        match self.wake_cause {
            WakeCause::Sensor => info!("presence: woke up from motion"),
            WakeCause::PowerOn => info!("presence: power-on, battery mode"),
            WakeCause::Other => info!("presence: woke up, cause: {}", self.wake_cause.as_str()),
        }
        FrameEffect::<N>::reset(&mut self.rainbow);
        self.frame.set_brightness(self.config.brightness);
        self.frame.clear();
        self.frame.show(&mut self.driver);
    }

    async fn tick_active(&mut self) -> PresenceState {
        if self.poll_sensor() {
            self.session.record_motion(self.time.now());
        }
        self.render_frame().await;

        if self.session.is_expired(self.time.now()) {
            info!("presence: no motion, going to sleep");
            PresenceState::Falling
        } else {
            PresenceState::Active
        }
    }

    async fn tick_idle(&mut self) -> PresenceState {
        if self.poll_sensor() {
            debug!("presence: motion while idle, starting a new session");
            self.wake_cause = WakeCause::Sensor;
            return PresenceState::Booting;
        }
        self.delay(self.config.frame_delay).await;
        PresenceState::Idle
    }

    /// Push a dark frame and give the strip and the log UART time to drain
    async fn settle(&mut self) {
        self.frame.clear();
        self.frame.show(&mut self.driver);
        self.delay(self.config.sleep_settle_delay).await;
    }

    async fn play<E: FrameEffect<N>>(&mut self, effect: &mut E, step_delay: Duration) {
        while effect.next_frame(&mut self.frame) {
            self.frame.show(&mut self.driver);
            self.delay(step_delay).await;
        }
    }

    async fn delay(&mut self, duration: Duration) {
        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        if ms > 0 {
            self.time.delay_ms(ms).await;
        }
    }
}
