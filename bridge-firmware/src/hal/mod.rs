// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus bridge-core
// mit den ESP32-C6 Peripherals.

pub mod can_bus;
pub mod light_sensor;
pub mod status_led;

pub use can_bus::{Mcp2515Bus, SpiCanDevice};
pub use light_sensor::AdcLightSensor;
pub use status_led::GpioStatusLed;
