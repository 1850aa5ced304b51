mod order;
mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use order::ColorOrder;
pub use utils::{fill_rainbow, rgb_from_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;
pub use smart_leds::hsv::hsv2rgb;

/// All channels off
pub const BLACK: Rgb = rgb_from_u32(0x00_0000);

/// Pure blue, the default wipe-in color
pub const BLUE: Rgb = rgb_from_u32(0x00_00FF);
