//! Core Types für die Helligkeits-Bridge
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

use embedded_can::{Frame, Id, StandardId};

use crate::traits::BusError;

/// Maximaler ADC-Rohwert (10-Bit Auflösung)
pub const RAW_MAX: u16 = 1023;

/// Maximale Helligkeit: 100.00% × 100
pub const PERCENT_MAX: u16 = 10_000;

/// Unterhalb dieser Helligkeit (50.00%) wird das Licht eingeschaltet
pub const DARKNESS_THRESHOLD: u16 = 5_000;

/// CAN-ID für die Helligkeit (Vehicle.Exterior.LightIntensity)
pub const BRIGHTNESS_FRAME_ID: StandardId = match StandardId::new(0x001) {
    Some(id) => id,
    None => panic!("invalid brightness frame id"),
};

/// CAN-ID für den Licht-Status (Vehicle.Body.Lights.Beam.Low.IsOn)
pub const ACTUATOR_FRAME_ID: StandardId = match StandardId::new(0x002) {
    Some(id) => id,
    None => panic!("invalid actuator frame id"),
};

/// Ein ADC-Rohwert im Bereich 0..=1023
///
/// Wird einmal pro Zyklus gelesen und nicht aufbewahrt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RawSample(u16);

impl RawSample {
    /// Erstellt einen Rohwert. Werte über `RAW_MAX` werden begrenzt
    /// (Treiberfehler, wird hier nicht gemeldet).
    pub const fn new(raw: u16) -> Self {
        if raw > RAW_MAX {
            Self(RAW_MAX)
        } else {
            Self(raw)
        }
    }

    /// Skaliert eine 12-Bit Messung (ESP32 ADC) auf 10 Bit
    pub const fn from_adc_12bit(raw: u16) -> Self {
        Self::new(raw >> 2)
    }

    pub const fn value(self) -> u16 {
        self.0
    }
}

/// Helligkeit in Hundertstel-Prozent (0 = 0.00%, 10000 = 100.00%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct BrightnessPercent(u16);

impl BrightnessPercent {
    /// Erstellt einen Helligkeitswert, begrenzt auf `PERCENT_MAX`
    pub const fn new(value: u16) -> Self {
        if value > PERCENT_MAX {
            Self(PERCENT_MAX)
        } else {
            Self(value)
        }
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    /// Physikalischer Wert in Prozent (Faktor 0.01)
    pub fn as_percent(self) -> f32 {
        f32::from(self.0) * 0.01
    }
}

/// Schaltzustand des Lichts (LED)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorState {
    On,
    Off,
}

impl ActuatorState {
    pub const fn is_on(self) -> bool {
        matches!(self, ActuatorState::On)
    }

    /// Pegel für Diagnose und CAN-Payload: 1 = an, 0 = aus
    pub const fn as_level(self) -> u8 {
        match self {
            ActuatorState::On => 1,
            ActuatorState::Off => 0,
        }
    }
}

/// Ein CAN Data-Frame mit Standard-ID (11 Bit)
///
/// Wird für jeden Versand neu erstellt. ID, Länge und Payload stammen
/// immer vollständig aus dem aktuellen Encoder-Aufruf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanFrame {
    id: StandardId,
    dlc: u8,
    data: [u8; 8],
}

impl CanFrame {
    /// Erstellt einen Frame aus Standard-ID und bis zu 8 Bytes Payload
    pub fn with_payload(id: StandardId, payload: &[u8]) -> Option<Self> {
        if payload.len() > 8 {
            return None;
        }
        let mut data = [0u8; 8];
        data[..payload.len()].copy_from_slice(payload);
        Some(Self {
            id,
            dlc: payload.len() as u8,
            data,
        })
    }

    /// Erstellt einen Frame aus einer Payload fester Länge (N <= 8)
    pub(crate) fn from_array<const N: usize>(id: StandardId, payload: [u8; N]) -> Self {
        const { assert!(N <= 8) };
        let mut data = [0u8; 8];
        data[..N].copy_from_slice(&payload);
        Self {
            id,
            dlc: N as u8,
            data,
        }
    }

    pub fn standard_id(&self) -> StandardId {
        self.id
    }
}

impl Frame for CanFrame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        match id.into() {
            Id::Standard(id) => Self::with_payload(id, data),
            // Extended IDs werden von dieser Bridge nicht verwendet
            Id::Extended(_) => None,
        }
    }

    fn new_remote(_id: impl Into<Id>, _dlc: usize) -> Option<Self> {
        None
    }

    fn is_extended(&self) -> bool {
        false
    }

    fn is_remote_frame(&self) -> bool {
        false
    }

    fn id(&self) -> Id {
        Id::Standard(self.id)
    }

    fn dlc(&self) -> usize {
        usize::from(self.dlc)
    }

    fn data(&self) -> &[u8] {
        &self.data[..usize::from(self.dlc)]
    }
}

/// Messung eines Zyklus: Rohwert, Helligkeit und Entscheidung
///
/// Steht fest bevor gesendet wird, damit die Diagnose-Zeile vor den
/// CAN-Frames ausgegeben werden kann.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub raw: RawSample,
    pub percent: BrightnessPercent,
    pub state: ActuatorState,
}

/// Diagnose-Zeile: `cds_raw=<int>; cds_pct=<int>; led=<0|1>;`
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cds_raw={}; cds_pct={}; led={};",
            self.raw.value(),
            self.percent.value(),
            self.state.as_level()
        )
    }
}

/// Ergebnis eines Bridge-Zyklus
///
/// Enthält Messwerte, Entscheidung und das Ergebnis beider Sendevorgänge.
/// Sendefehler werden nur gemeldet, nie wiederholt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub raw: RawSample,
    pub percent: BrightnessPercent,
    pub state: ActuatorState,
    pub brightness_tx: Result<(), BusError>,
    pub actuator_tx: Result<(), BusError>,
}

impl CycleReport {
    /// true wenn beide Frames erfolgreich gesendet wurden
    pub fn all_sent(&self) -> bool {
        self.brightness_tx.is_ok() && self.actuator_tx.is_ok()
    }

    pub fn measurement(&self) -> Measurement {
        Measurement {
            raw: self.raw,
            percent: self.percent,
            state: self.state,
        }
    }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.measurement(), f)
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Measurement {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "cds_raw={}; cds_pct={}; led={};",
            self.raw.value(),
            self.percent.value(),
            self.state.as_level()
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CycleReport {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::Format::format(&self.measurement(), fmt)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CanFrame {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "CanFrame {{ id: {=u16:#x}, dlc: {}, data: {=[u8]:#x} }}",
            self.id.as_raw(),
            self.dlc,
            self.data()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_sample_clamps_to_10_bit() {
        assert_eq!(RawSample::new(1023).value(), 1023);
        assert_eq!(RawSample::new(1024).value(), 1023);
        assert_eq!(RawSample::new(u16::MAX).value(), 1023);
    }

    #[test]
    fn test_raw_sample_from_12_bit_adc() {
        assert_eq!(RawSample::from_adc_12bit(0).value(), 0);
        assert_eq!(RawSample::from_adc_12bit(4095).value(), 1023);
        assert_eq!(RawSample::from_adc_12bit(800).value(), 200);
    }

    #[test]
    fn test_brightness_as_percent() {
        let pct = BrightnessPercent::new(1955);
        let value = pct.as_percent();
        assert!(value > 19.549 && value < 19.551);
        assert_eq!(BrightnessPercent::new(12_000).value(), PERCENT_MAX);
    }

    #[test]
    fn test_frame_rejects_oversized_payload() {
        assert!(CanFrame::with_payload(BRIGHTNESS_FRAME_ID, &[0; 9]).is_none());
    }

    #[test]
    fn test_frame_rejects_extended_id() {
        let id = embedded_can::ExtendedId::new(0x1234).unwrap();
        assert!(<CanFrame as Frame>::new(id, &[1]).is_none());
    }

    #[test]
    fn test_frame_data_matches_dlc() {
        let frame = CanFrame::with_payload(ACTUATOR_FRAME_ID, &[1]).unwrap();
        assert_eq!(frame.dlc(), 1);
        assert_eq!(frame.data(), &[1]);
        assert_eq!(frame.id(), Id::Standard(ACTUATOR_FRAME_ID));
    }
}
