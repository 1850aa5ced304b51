//! Hardware abstraction layer
//!
//! Provides trait-based ports for the LED strip and the monotonic clock,
//! allowing the controller to be hardware-agnostic. The PIR input uses
//! [`embedded_hal::digital::InputPin`] directly and delays use
//! [`embedded_hal_async::delay::DelayNs`].

use embassy_time::Instant;

use crate::color::Rgb;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Colors arrive already scaled by the global brightness. Write errors
/// are the implementation's concern: the controller never retries.
pub trait LedDriver<const N: usize> {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb; N]);
}

/// Monotonic clock
pub trait Clock {
    /// Current instant since boot
    fn now(&self) -> Instant;
}
