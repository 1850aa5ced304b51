//! Fake peripherals for driving the presence controller on the host
//!
//! Every fake hands out clones that share state, so a test keeps one copy
//! for inspection and moves the other into the controller.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};
use embedded_hal_async::delay::DelayNs;
use myrtio_presence::{Clock, Instant, LedDriver, PresenceConfig, PresenceController, Rgb, WakeCause};

/// Virtual clock that only moves when delayed or set
#[derive(Clone, Default)]
pub struct FakeClock {
    nanos: Rc<Cell<u64>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn millis(&self) -> u64 {
        self.nanos.get() / 1_000_000
    }

    pub fn set_millis(&self, ms: u64) {
        self.nanos.set(ms * 1_000_000);
    }

    pub fn advance_millis(&self, ms: u64) {
        self.nanos.set(self.nanos.get() + ms * 1_000_000);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        Instant::from_micros(self.nanos.get() / 1_000)
    }
}

impl DelayNs for FakeClock {
    async fn delay_ns(&mut self, ns: u32) {
        self.nanos.set(self.nanos.get() + u64::from(ns));
    }

    async fn delay_us(&mut self, us: u32) {
        self.nanos.set(self.nanos.get() + u64::from(us) * 1_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.advance_millis(u64::from(ms));
    }
}

/// LED sink that records every pushed frame
#[derive(Clone)]
pub struct FakeStrip<const N: usize> {
    frames: Rc<RefCell<Vec<[Rgb; N]>>>,
}

impl<const N: usize> Default for FakeStrip<N> {
    fn default() -> Self {
        Self {
            frames: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<const N: usize> FakeStrip<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn frame(&self, index: usize) -> [Rgb; N] {
        self.frames.borrow()[index]
    }

    pub fn last_frame(&self) -> Option<[Rgb; N]> {
        self.frames.borrow().last().copied()
    }

    /// Frames pushed since `start`
    pub fn frames_since(&self, start: usize) -> Vec<[Rgb; N]> {
        self.frames.borrow()[start..].to_vec()
    }
}

impl<const N: usize> LedDriver<N> for FakeStrip<N> {
    fn write(&mut self, colors: &[Rgb; N]) {
        self.frames.borrow_mut().push(*colors);
    }
}

/// PIR input with a settable level and an optional read failure
#[derive(Clone, Default)]
pub struct FakePir {
    level: Rc<Cell<bool>>,
    failing: Rc<Cell<bool>>,
    reads: Rc<Cell<usize>>,
}

impl FakePir {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_motion(&self, motion: bool) {
        self.level.set(motion);
    }

    /// Make every read return a driver error
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl ErrorType for FakePir {
    type Error = ErrorKind;
}

impl InputPin for FakePir {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.reads.set(self.reads.get() + 1);
        if self.failing.get() {
            return Err(ErrorKind::Other);
        }
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

pub type TestController<const N: usize> = PresenceController<FakeStrip<N>, FakePir, FakeClock, N>;

/// Controller plus handles to its fake peripherals
pub struct Rig<const N: usize> {
    pub controller: TestController<N>,
    pub clock: FakeClock,
    pub strip: FakeStrip<N>,
    pub pir: FakePir,
}

impl<const N: usize> Rig<N> {
    pub fn new(config: PresenceConfig, wake_cause: WakeCause) -> Self {
        let clock = FakeClock::new();
        let strip = FakeStrip::new();
        let pir = FakePir::new();
        let controller =
            PresenceController::new(strip.clone(), pir.clone(), clock.clone(), config, wake_cause);
        Self {
            controller,
            clock,
            strip,
            pir,
        }
    }
}

/// Default timings with an instant frame delay, so every check of an
/// `Active` step happens at the same instant as its sensor poll
pub fn instant_frames_config() -> PresenceConfig {
    let mut config = PresenceConfig::default();
    config.frame_delay = myrtio_presence::Duration::from_millis(0);
    config
}
