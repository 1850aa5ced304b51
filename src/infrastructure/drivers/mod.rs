mod led_ws2812;
mod pir;
mod power;
mod timebase;

pub use led_ws2812::EspLedDriver;
pub use pir::init_pir_input;
pub use power::{DeepSleep, read_wake_cause};
pub use timebase::EmbassyTimebase;
