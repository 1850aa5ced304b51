use esp_hal::gpio::{Input, InputConfig, InputPin, Pull};

/// PIR sensor input
///
/// HC-SR501 style sensors drive the line actively, the pull-down only keeps
/// a disconnected sensor reading as "no motion".
pub fn init_pir_input<'d>(pin: impl InputPin + 'd) -> Input<'d> {
    Input::new(pin, InputConfig::default().with_pull(Pull::Down))
}
