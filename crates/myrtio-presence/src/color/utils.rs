use crate::color::{Hsv, Rgb, hsv2rgb};

/// Fill the slice with a rainbow
///
/// The first pixel gets `initial_hue`, every following pixel is shifted by
/// `delta_hue`. Hue arithmetic wraps at 256.
pub fn fill_rainbow(leds: &mut [Rgb], initial_hue: u8, delta_hue: u8) {
    let mut hue = initial_hue;
    for led in leds.iter_mut() {
        *led = hsv2rgb(Hsv {
            hue,
            sat: 255,
            val: 255,
        });
        hue = hue.wrapping_add(delta_hue);
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
