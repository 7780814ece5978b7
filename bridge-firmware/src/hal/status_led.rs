// Status-LED an einem digitalen Ausgang

use bridge_core::{ActuatorState, StatusOutput};
use esp_hal::gpio::{Level, Output};

pub struct GpioStatusLed<'a> {
    pin: Output<'a>,
}

impl<'a> GpioStatusLed<'a> {
    pub fn new(pin: Output<'a>) -> Self {
        Self { pin }
    }
}

impl StatusOutput for GpioStatusLed<'_> {
    fn set(&mut self, state: ActuatorState) {
        let level = if state.is_on() { Level::High } else { Level::Low };
        self.pin.set_level(level);
    }
}
