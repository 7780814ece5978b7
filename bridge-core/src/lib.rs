//! Bridge Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Traits, Typen und Pure Functions.

#![no_std]

pub mod bridge;
pub mod logic;
pub mod pacing;
pub mod signals;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use bridge::{InitError, LightBridge};
pub use logic::{decide, encode_actuator, encode_brightness, raw_to_percent};
pub use pacing::{CyclePacer, Pace};
pub use signals::{MAX_SIGNAL_BITS, SignalSpec, decode_actuator, decode_brightness};
pub use traits::{
    BusConfig, BusError, BusMode, CanBitrate, CanBus, LightSensor, OscillatorClock, StatusOutput,
};
pub use types::{
    ACTUATOR_FRAME_ID, ActuatorState, BRIGHTNESS_FRAME_ID, BrightnessPercent, CanFrame,
    CycleReport, DARKNESS_THRESHOLD, Measurement, PERCENT_MAX, RAW_MAX, RawSample,
};
