//! Rainbow cycling animation
//!
//! Every frame paints the strip with a rainbow starting at the current hue
//! phase and then shifts the phase by one step. The phase is a pure
//! function of the number of rendered frames.

use super::FrameEffect;
use crate::{color::fill_rainbow, frame::PixelBuffer};

const DEFAULT_DELTA_HUE: u8 = 7;
const HUE_STEP: u8 = 1;

/// Endless rainbow animation
#[derive(Debug, Clone)]
pub struct RainbowEffect {
    /// Hue the animation restarts from
    start: u8,
    /// Hue of the first pixel in the next frame
    hue: u8,
    /// Hue shift between neighbouring pixels
    delta_hue: u8,
}

impl Default for RainbowEffect {
    fn default() -> Self {
        Self::new(DEFAULT_DELTA_HUE)
    }
}

impl RainbowEffect {
    pub const fn new(delta_hue: u8) -> Self {
        Self {
            start: 0,
            hue: 0,
            delta_hue,
        }
    }

    /// Set the starting hue phase
    #[must_use]
    pub const fn with_hue(mut self, hue: u8) -> Self {
        self.start = hue;
        self.hue = hue;
        self
    }

    /// Hue the next frame will start with
    pub const fn hue(&self) -> u8 {
        self.hue
    }
}

impl<const N: usize> FrameEffect<N> for RainbowEffect {
    fn next_frame(&mut self, frame: &mut PixelBuffer<N>) -> bool {
        fill_rainbow(frame.pixels_mut(), self.hue, self.delta_hue);
        self.hue = self.hue.wrapping_add(HUE_STEP);
        true
    }

    fn reset(&mut self) {
        self.hue = self.start;
    }
}
