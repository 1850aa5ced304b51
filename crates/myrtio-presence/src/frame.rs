//! Pixel buffer with a global brightness scalar
//!
//! Effects write logical colors into the buffer. The brightness is applied
//! only when the frame is pushed to the driver, so fading never destroys
//! the underlying colors.

use crate::{
    color::{BLACK, Rgb},
    driver::LedDriver,
    math8::scale8,
};

/// Fixed-size frame owned by the controller
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Rgb; N],
    /// Global brightness (0-255)
    brightness: u8,
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a cleared buffer with the given brightness
    pub const fn new(brightness: u8) -> Self {
        Self {
            pixels: [BLACK; N],
            brightness,
        }
    }

    /// Set a single pixel. Out of range indices are ignored.
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied()
    }

    pub fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb; N] {
        &mut self.pixels
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels = [color; N];
    }

    pub fn is_cleared(&self) -> bool {
        self.pixels.iter().all(|pixel| *pixel == BLACK)
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Colors as they should appear on the strip
    pub fn output(&self) -> [Rgb; N] {
        let mut frame = self.pixels;
        match self.brightness {
            255 => {}
            0 => frame = [BLACK; N],
            level => {
                for pixel in &mut frame {
                    pixel.r = scale8(pixel.r, level);
                    pixel.g = scale8(pixel.g, level);
                    pixel.b = scale8(pixel.b, level);
                }
            }
        }
        frame
    }

    /// Push the frame to the driver
    pub fn show<D: LedDriver<N>>(&self, driver: &mut D) {
        driver.write(&self.output());
    }
}
