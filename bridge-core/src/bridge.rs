//! Bridge-Zyklus: Sensor → Entscheidung → LED → CAN
//!
//! `LightBridge` besitzt Sensor, LED und CAN-Controller. Eine Instanz
//! existiert nur nach erfolgreicher Initialisierung, ein Zyklus auf einem
//! unkonfigurierten Bus ist damit nicht möglich.

use core::fmt;

use crate::logic::{decide, encode_actuator, encode_brightness, raw_to_percent};
use crate::traits::{BusConfig, BusError, BusMode, CanBus, LightSensor, StatusOutput};
use crate::types::{ActuatorState, CycleReport, Measurement};

/// Fehler während der Initialisierung (fatal, kein Retry)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// Bitrate/Takt konnten nicht gesetzt werden
    Configure(BusError),
    /// Normal-Modus konnte nicht aktiviert werden
    Mode(BusError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Configure(e) => write!(f, "CAN configure failed: {}", e),
            InitError::Mode(e) => write!(f, "CAN normal mode failed: {}", e),
        }
    }
}

impl core::error::Error for InitError {}

/// Die Bridge im Zustand "Cycling"
pub struct LightBridge<S, L, B> {
    sensor: S,
    led: L,
    bus: B,
}

impl<S, L, B> LightBridge<S, L, B>
where
    S: LightSensor,
    L: StatusOutput,
    B: CanBus,
{
    /// Initialisierung (einmalig)
    ///
    /// LED aus, Bitrate/Takt setzen, Controller in den Normal-Modus.
    /// Bei einem Fehler gibt es keine Bridge.
    pub fn initialize(
        sensor: S,
        mut led: L,
        mut bus: B,
        config: &BusConfig,
    ) -> Result<Self, InitError> {
        led.set(ActuatorState::Off);
        bus.configure(config).map_err(InitError::Configure)?;
        bus.set_mode(BusMode::Normal).map_err(InitError::Mode)?;

        Ok(Self { sensor, led, bus })
    }

    /// Ein Durchlauf: lesen, umrechnen, entscheiden, LED setzen, senden
    ///
    /// Beide Frames werden immer gesendet. Ein Sendefehler wird im Report
    /// vermerkt, aber nicht wiederholt.
    pub fn run_cycle(&mut self) -> CycleReport {
        let measurement = self.measure();
        self.transmit(measurement)
    }

    /// Erste Zyklus-Hälfte: lesen, umrechnen, entscheiden, LED setzen
    ///
    /// Sendet nichts. Danach muss `transmit()` mit dem Ergebnis folgen.
    pub fn measure(&mut self) -> Measurement {
        let raw = self.sensor.read_raw();
        let percent = raw_to_percent(raw);
        let state = decide(percent);

        self.led.set(state);

        Measurement {
            raw,
            percent,
            state,
        }
    }

    /// Zweite Zyklus-Hälfte: Helligkeits- und Licht-Frame senden
    pub fn transmit(&mut self, measurement: Measurement) -> CycleReport {
        let Measurement {
            raw,
            percent,
            state,
        } = measurement;

        let brightness_tx = self.bus.send(&encode_brightness(percent));
        let actuator_tx = self.bus.send(&encode_actuator(state));

        CycleReport {
            raw,
            percent,
            state,
            brightness_tx,
            actuator_tx,
        }
    }

    /// Gibt die Hardware-Treiber zurück
    pub fn release(self) -> (S, L, B) {
        (self.sensor, self.led, self.bus)
    }
}
