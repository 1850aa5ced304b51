pub mod presence;

pub use presence::init_presence_controller;
