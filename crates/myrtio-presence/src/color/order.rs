use crate::color::Rgb;

/// Channel order expected by the strip
///
/// Encoders such as `esp-hal-smartled` always shift bytes out as G, R, B.
/// [`ColorOrder::to_grb_wire`] rearranges a logical color so that each
/// channel still lands on the right emitter when the strip uses a
/// different order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOrder {
    Rgb,
    Rbg,
    #[default]
    Grb,
    Gbr,
    Brg,
    Bgr,
}

#[derive(Clone, Copy)]
enum Channel {
    R,
    G,
    B,
}

impl ColorOrder {
    const fn channels(self) -> [Channel; 3] {
        match self {
            Self::Rgb => [Channel::R, Channel::G, Channel::B],
            Self::Rbg => [Channel::R, Channel::B, Channel::G],
            Self::Grb => [Channel::G, Channel::R, Channel::B],
            Self::Gbr => [Channel::G, Channel::B, Channel::R],
            Self::Brg => [Channel::B, Channel::R, Channel::G],
            Self::Bgr => [Channel::B, Channel::G, Channel::R],
        }
    }

    /// Remap a logical color for a GRB-native encoder
    pub const fn to_grb_wire(self, color: Rgb) -> Rgb {
        let [first, second, third] = self.channels();
        // The encoder sends `g` first, then `r`, then `b`.
        Rgb {
            g: pick(color, first),
            r: pick(color, second),
            b: pick(color, third),
        }
    }
}

const fn pick(color: Rgb, channel: Channel) -> u8 {
    match channel {
        Channel::R => color.r,
        Channel::G => color.g,
        Channel::B => color.b,
    }
}
