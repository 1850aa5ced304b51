//! Frame effects
//!
//! Effects are step-driven rather than time-driven: every call to
//! [`FrameEffect::next_frame`] mutates the buffer into the next frame.
//! Pacing is left to the caller.

mod fade;
mod rainbow;
mod wipe;

pub use fade::FadeOutEffect;
pub use rainbow::RainbowEffect;
pub use wipe::WipeInEffect;

use crate::frame::PixelBuffer;

/// Trait for effect implementations
pub trait FrameEffect<const N: usize> {
    /// Write the next frame into `frame`
    ///
    /// # Returns
    /// `false` once the effect is finished and nothing was written
    fn next_frame(&mut self, frame: &mut PixelBuffer<N>) -> bool;

    /// Reset effect state
    fn reset(&mut self) {}
}
