//! Signal-Dekodierung auf Empfängerseite
//!
//! Beschreibt wie ein Empfänger die beiden Frames in Fahrzeug-Signale
//! zurückrechnet (Signal-Katalog + Decoder-Manifest) und stellt die
//! Umkehrfunktionen der Encoder bereit.

use embedded_can::{Frame, Id, StandardId};

use crate::types::{
    ACTUATOR_FRAME_ID, ActuatorState, BRIGHTNESS_FRAME_ID, BrightnessPercent, CanFrame,
    PERCENT_MAX,
};

/// Maximale Signal-Länge in Bit
pub const MAX_SIGNAL_BITS: u8 = 16;

/// Signale müssen in den ersten 4 Bytes des Payloads liegen
const MAX_END_BIT: usize = 32;

/// Beschreibung eines CAN-Signals im Decoder-Manifest
///
/// Nur vorzeichenlose Little-Endian Signale mit 1..=16 Bit, die
/// vollständig in den ersten 4 Payload-Bytes liegen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalSpec {
    /// Vollständiger Signalname im Fahrzeugmodell
    pub name: &'static str,
    pub message_id: StandardId,
    pub start_bit: u8,
    /// Länge in Bit
    pub length: u8,
    pub factor: f32,
    pub offset: f32,
}

impl SignalSpec {
    /// Rohwert → physikalischer Wert
    pub fn physical(&self, raw: u16) -> f32 {
        f32::from(raw) * self.factor + self.offset
    }

    /// true wenn Länge und Lage des Signals dekodierbar sind
    pub fn is_valid(&self) -> bool {
        let end_bit = usize::from(self.start_bit) + usize::from(self.length);
        (1..=MAX_SIGNAL_BITS).contains(&self.length) && end_bit <= MAX_END_BIT
    }

    /// Bit-Maske für die Signal-Länge (1..=16 Bit)
    fn mask(&self) -> u16 {
        if self.length >= MAX_SIGNAL_BITS {
            u16::MAX
        } else {
            (1u16 << self.length) - 1
        }
    }

    /// Liest den Rohwert des Signals aus einem Frame
    ///
    /// `None` bei ungültiger Signal-Beschreibung, falscher ID oder zu
    /// kurzem Payload.
    pub fn extract(&self, frame: &CanFrame) -> Option<u16> {
        if !self.is_valid() || frame.id() != Id::Standard(self.message_id) {
            return None;
        }
        // end_bit <= 32: höchstens 4 Bytes, alle Shifts bleiben unter 32
        let end_bit = usize::from(self.start_bit) + usize::from(self.length);
        let needed = end_bit.div_ceil(8);
        let data = frame.data();
        if data.len() < needed {
            return None;
        }
        let mut word = 0u32;
        for (i, byte) in data[..needed].iter().enumerate() {
            word |= u32::from(*byte) << (8 * i);
        }
        Some((word >> self.start_bit) as u16 & self.mask())
    }
}

/// Vehicle.Exterior.LightIntensity: 16 Bit unsigned, LE, Faktor 0.01 → %
pub const LIGHT_INTENSITY: SignalSpec = SignalSpec {
    name: "Vehicle.Exterior.LightIntensity",
    message_id: BRIGHTNESS_FRAME_ID,
    start_bit: 0,
    length: 16,
    factor: 0.01,
    offset: 0.0,
};

/// Vehicle.Body.Lights.Beam.Low.IsOn: 1 Bit
pub const LOW_BEAM_IS_ON: SignalSpec = SignalSpec {
    name: "Vehicle.Body.Lights.Beam.Low.IsOn",
    message_id: ACTUATOR_FRAME_ID,
    start_bit: 0,
    length: 1,
    factor: 1.0,
    offset: 0.0,
};

/// Alle Signale die diese Bridge sendet
pub const SIGNALS: [SignalSpec; 2] = [LIGHT_INTENSITY, LOW_BEAM_IS_ON];

/// Dekodiert die Helligkeit aus einem 0x001-Frame
///
/// Werte über 10000 (100.00%) sind ungültig und ergeben `None`.
pub fn decode_brightness(frame: &CanFrame) -> Option<BrightnessPercent> {
    LIGHT_INTENSITY
        .extract(frame)
        .filter(|raw| *raw <= PERCENT_MAX)
        .map(BrightnessPercent::new)
}

/// Dekodiert den Licht-Status aus einem 0x002-Frame (nur Bit 0 zählt)
pub fn decode_actuator(frame: &CanFrame) -> Option<ActuatorState> {
    LOW_BEAM_IS_ON.extract(frame).map(|bit| {
        if bit == 1 {
            ActuatorState::On
        } else {
            ActuatorState::Off
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{encode_actuator, encode_brightness};

    #[test]
    fn test_decode_brightness() {
        let frame = encode_brightness(BrightnessPercent::new(8798));
        assert_eq!(decode_brightness(&frame), Some(BrightnessPercent::new(8798)));
    }

    #[test]
    fn test_decode_brightness_wrong_id() {
        let frame = encode_actuator(ActuatorState::On);
        assert_eq!(decode_brightness(&frame), None);
    }

    #[test]
    fn test_decode_brightness_short_payload() {
        let frame = CanFrame::with_payload(BRIGHTNESS_FRAME_ID, &[0xA3]).unwrap();
        assert_eq!(decode_brightness(&frame), None);
    }

    #[test]
    fn test_decode_actuator_reads_bit_zero_only() {
        let frame = CanFrame::with_payload(ACTUATOR_FRAME_ID, &[0b10]).unwrap();
        assert_eq!(decode_actuator(&frame), Some(ActuatorState::Off));

        let frame = CanFrame::with_payload(ACTUATOR_FRAME_ID, &[0b11]).unwrap();
        assert_eq!(decode_actuator(&frame), Some(ActuatorState::On));
    }

    #[test]
    fn test_decode_actuator_empty_payload() {
        let frame = CanFrame::with_payload(ACTUATOR_FRAME_ID, &[]).unwrap();
        assert_eq!(decode_actuator(&frame), None);
    }

    #[test]
    fn test_decode_brightness_rejects_out_of_range() {
        // 10001
        let frame = CanFrame::with_payload(BRIGHTNESS_FRAME_ID, &[0x11, 0x27]).unwrap();
        assert_eq!(decode_brightness(&frame), None);

        let frame = CanFrame::with_payload(BRIGHTNESS_FRAME_ID, &[0xFF, 0xFF]).unwrap();
        assert_eq!(decode_brightness(&frame), None);

        // 10000 ist noch gültig
        let frame = CanFrame::with_payload(BRIGHTNESS_FRAME_ID, &[0x10, 0x27]).unwrap();
        assert_eq!(decode_brightness(&frame), Some(BrightnessPercent::new(10000)));
    }

    #[test]
    fn test_extract_signal_past_32_bits_is_rejected() {
        let frame = CanFrame::with_payload(BRIGHTNESS_FRAME_ID, &[0xFF; 8]).unwrap();
        let signal = SignalSpec {
            start_bit: 24,
            length: 16,
            ..LIGHT_INTENSITY
        };
        assert!(!signal.is_valid());
        assert_eq!(signal.extract(&frame), None);

        let signal = SignalSpec {
            start_bit: 40,
            length: 8,
            ..LIGHT_INTENSITY
        };
        assert_eq!(signal.extract(&frame), None);
    }

    #[test]
    fn test_extract_rejects_invalid_length() {
        let frame = CanFrame::with_payload(BRIGHTNESS_FRAME_ID, &[0xFF; 8]).unwrap();
        for length in [0, 17, 32, u8::MAX] {
            let signal = SignalSpec {
                length,
                ..LIGHT_INTENSITY
            };
            assert_eq!(signal.extract(&frame), None, "length={}", length);
        }
    }

    #[test]
    fn test_extract_signal_ending_at_bit_32() {
        let frame =
            CanFrame::with_payload(BRIGHTNESS_FRAME_ID, &[0x00, 0x00, 0x34, 0x12]).unwrap();
        let signal = SignalSpec {
            start_bit: 16,
            length: 16,
            ..LIGHT_INTENSITY
        };
        assert!(signal.is_valid());
        assert_eq!(signal.extract(&frame), Some(0x1234));
    }

    #[test]
    fn test_builtin_signals_are_valid() {
        assert!(SIGNALS.iter().all(SignalSpec::is_valid));
    }

    #[test]
    fn test_light_intensity_physical_value() {
        let value = LIGHT_INTENSITY.physical(10000);
        assert!(value > 99.99 && value < 100.01);
    }
}
