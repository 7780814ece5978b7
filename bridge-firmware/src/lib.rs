// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von bridge-core
pub use bridge_core::{
    CanBus, CycleReport, CyclePacer, InitError, LightBridge, LightSensor, Pace, StatusOutput,
};
