//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use core::fmt;

use crate::types::{ActuatorState, CanFrame, RawSample};

/// Fehler-Typ für CAN-Bus Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Bitrate/Takt konnten nicht gesetzt werden
    ConfigurationFailed,
    /// Modus gewechselt bevor `configure()` aufgerufen wurde
    NotConfigured,
    ModeChangeFailed,
    TransmitFailed,
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            BusError::ConfigurationFailed => "bus configuration failed",
            BusError::NotConfigured => "bus not configured",
            BusError::ModeChangeFailed => "bus mode change failed",
            BusError::TransmitFailed => "frame transmission failed",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for BusError {}

/// CAN Bitrate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CanBitrate {
    Kbps125,
    Kbps250,
    Kbps500,
    Kbps1000,
}

/// Oszillator-Takt des CAN-Controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OscillatorClock {
    MHz8,
    MHz16,
}

/// Betriebsmodus des CAN-Controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusMode {
    /// Volle Teilnahme an Arbitrierung und ACK
    Normal,
    ListenOnly,
    Loopback,
}

/// Physikalische Bus-Parameter (müssen auf dem ganzen Segment gleich sein)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusConfig {
    pub bitrate: CanBitrate,
    pub clock: OscillatorClock,
}

impl BusConfig {
    /// 1000 kbit/s bei 8 MHz Quarz
    pub const DEFAULT: Self = Self {
        bitrate: CanBitrate::Kbps1000,
        clock: OscillatorClock::MHz8,
    };
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Trait für den Helligkeits-Sensor (ADC)
///
/// # Implementierungen
/// - **Production:** AdcLightSensor (ESP32 ADC1 One-Shot)
/// - **Testing:** MockSensor (vorgegebene Messwerte)
pub trait LightSensor {
    /// Liest genau eine Wandlung, ohne Wiederholung
    fn read_raw(&mut self) -> RawSample;
}

/// Trait für den digitalen Ausgang der Status-LED
pub trait StatusOutput {
    /// High bei `On`, Low bei `Off`
    fn set(&mut self, state: ActuatorState);
}

/// Trait für den CAN-Controller
///
/// Nur die drei Fähigkeiten die die Bridge braucht. Jeder Treiber der
/// diese erfüllt ist austauschbar.
///
/// # Implementierungen
/// - **Production:** Mcp2515Bus (MCP2515 über SPI)
/// - **Testing:** MockBus (zeichnet Frames auf)
pub trait CanBus {
    /// Setzt Bitrate und Takt
    fn configure(&mut self, config: &BusConfig) -> Result<(), BusError>;

    /// Wechselt in den angegebenen Betriebsmodus
    fn set_mode(&mut self, mode: BusMode) -> Result<(), BusError>;

    /// Sendet einen Frame
    ///
    /// # Fehlerbehandlung
    /// Gibt `BusError::TransmitFailed` zurück wenn der Controller den Frame
    /// nicht annimmt
    fn send(&mut self, frame: &CanFrame) -> Result<(), BusError>;
}
