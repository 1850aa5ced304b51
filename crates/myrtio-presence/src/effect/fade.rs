//! Brightness ramp for the power-off transition
//!
//! Lowers the global brightness in fixed decrements, one level per frame.
//! The last frame is always at brightness zero, even when the starting
//! level is not a multiple of the step.

use super::FrameEffect;
use crate::{frame::PixelBuffer, math8::step_down8};

#[derive(Debug, Clone)]
pub struct FadeOutEffect {
    /// Level the ramp starts from
    from: u8,
    /// Decrement per frame
    step: u8,
    /// Level of the next frame, `None` once zero was shown
    next: Option<u8>,
}

impl FadeOutEffect {
    pub const fn new(from: u8, step: u8) -> Self {
        Self {
            from,
            step,
            next: Some(from),
        }
    }
}

impl<const N: usize> FrameEffect<N> for FadeOutEffect {
    fn next_frame(&mut self, frame: &mut PixelBuffer<N>) -> bool {
        let Some(level) = self.next else {
            return false;
        };
        frame.set_brightness(level);
        self.next = if level == 0 {
            None
        } else {
            Some(step_down8(level, self.step))
        };
        true
    }

    fn reset(&mut self) {
        self.next = Some(self.from);
    }
}
