//! Wipe-in power-on effect
//!
//! Lights the strip pair by pair from both ends until the two fronts meet
//! in the middle: `(0, N-1)`, `(1, N-2)`, ... For an odd length the final
//! step lights only the center pixel.

use super::FrameEffect;
use crate::{color::Rgb, frame::PixelBuffer};

#[derive(Debug, Clone)]
pub struct WipeInEffect {
    color: Rgb,
    /// Index of the next pair, counted from the start of the strip
    next: usize,
}

impl WipeInEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color, next: 0 }
    }

    /// Number of frames the wipe produces on `len` pixels
    pub const fn steps(len: usize) -> usize {
        len.div_ceil(2)
    }
}

impl<const N: usize> FrameEffect<N> for WipeInEffect {
    fn next_frame(&mut self, frame: &mut PixelBuffer<N>) -> bool {
        if self.next >= Self::steps(N) {
            return false;
        }
        frame.set_pixel(self.next, self.color);
        frame.set_pixel(N - 1 - self.next, self.color);
        self.next += 1;
        true
    }

    fn reset(&mut self) {
        self.next = 0;
    }
}
