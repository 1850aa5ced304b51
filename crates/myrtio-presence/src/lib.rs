#![no_std]

//! Presence-driven light controller
//!
//! Architecture layers:
//! - `driver` - Hardware abstraction ([`LedDriver`] and [`Clock`] ports)
//! - `frame` - Fixed-size pixel buffer with global brightness
//! - `effect` - Frame effects (rainbow animation, wipe-in, fade-out)
//! - `session` - Motion timeout bookkeeping
//! - `controller` - The state machine that ties everything together
//!
//! The controller is generic over its ports, so the whole session can be
//! driven on the host with fake peripherals.

pub mod color;
pub mod config;
pub mod controller;
pub mod driver;
pub mod effect;
pub mod frame;
pub mod math8;
pub mod session;
pub mod state;

pub use color::{ColorOrder, Hsv, Rgb};
pub use config::PresenceConfig;
pub use controller::{HaltRequest, PresenceController};
pub use driver::{Clock, LedDriver};
pub use effect::{FadeOutEffect, FrameEffect, RainbowEffect, WipeInEffect};
pub use frame::PixelBuffer;
pub use session::SessionClock;
pub use state::{PresenceState, WakeCause};

pub use embassy_time::{Duration, Instant};
