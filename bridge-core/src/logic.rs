//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{
    ACTUATOR_FRAME_ID, ActuatorState, BRIGHTNESS_FRAME_ID, BrightnessPercent, CanFrame,
    DARKNESS_THRESHOLD, PERCENT_MAX, RAW_MAX, RawSample,
};

/// Rechnet einen ADC-Rohwert in Hundertstel-Prozent um
///
/// `round(raw / 1023 * 10000)`, kaufmännisch gerundet mit Integer-Arithmetik.
///
/// # Beispiele
///
/// ```
/// # use bridge_core::{RawSample, raw_to_percent};
/// assert_eq!(raw_to_percent(RawSample::new(200)).value(), 1955);
/// assert_eq!(raw_to_percent(RawSample::new(1023)).value(), 10000);
/// ```
pub fn raw_to_percent(raw: RawSample) -> BrightnessPercent {
    let max = u32::from(RAW_MAX);
    let scaled = u32::from(raw.value()) * u32::from(PERCENT_MAX);
    // raw <= 1023 → Ergebnis <= 10000, passt in u16
    BrightnessPercent::new(((scaled + max / 2) / max) as u16)
}

/// Licht an wenn Helligkeit unter 50.00%
///
/// Keine Hysterese: 5000 ist bereits `Off`.
pub fn decide(percent: BrightnessPercent) -> ActuatorState {
    if percent.value() < DARKNESS_THRESHOLD {
        ActuatorState::On
    } else {
        ActuatorState::Off
    }
}

/// Helligkeits-Frame: ID 0x001, 2 Bytes, Little Endian
pub fn encode_brightness(percent: BrightnessPercent) -> CanFrame {
    CanFrame::from_array(BRIGHTNESS_FRAME_ID, percent.value().to_le_bytes())
}

/// Licht-Frame: ID 0x002, 1 Byte, 1 = an / 0 = aus
pub fn encode_actuator(state: ActuatorState) -> CanFrame {
    CanFrame::from_array(ACTUATOR_FRAME_ID, [state.as_level()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_can::Frame;

    #[test]
    fn test_raw_to_percent_bounds() {
        assert_eq!(raw_to_percent(RawSample::new(0)).value(), 0);
        assert_eq!(raw_to_percent(RawSample::new(1023)).value(), 10000);
    }

    #[test]
    fn test_raw_to_percent_rounds() {
        // 511 / 1023 * 10000 = 4995.11
        assert_eq!(raw_to_percent(RawSample::new(511)).value(), 4995);
        // 900 / 1023 * 10000 = 8797.65
        assert_eq!(raw_to_percent(RawSample::new(900)).value(), 8798);
        // 1 / 1023 * 10000 = 9.78
        assert_eq!(raw_to_percent(RawSample::new(1)).value(), 10);
    }

    #[test]
    fn test_decide_boundary() {
        assert_eq!(decide(BrightnessPercent::new(4999)), ActuatorState::On);
        assert_eq!(decide(BrightnessPercent::new(5000)), ActuatorState::Off);
        assert_eq!(decide(BrightnessPercent::new(5001)), ActuatorState::Off);
    }

    #[test]
    fn test_encode_brightness_little_endian() {
        let frame = encode_brightness(BrightnessPercent::new(1955));
        assert_eq!(frame.standard_id().as_raw(), 0x001);
        assert_eq!(frame.dlc(), 2);
        assert_eq!(frame.data(), &[0xA3, 0x07]);
    }

    #[test]
    fn test_encode_actuator() {
        let on = encode_actuator(ActuatorState::On);
        assert_eq!(on.standard_id().as_raw(), 0x002);
        assert_eq!(on.data(), &[1]);

        let off = encode_actuator(ActuatorState::Off);
        assert_eq!(off.dlc(), 1);
        assert_eq!(off.data(), &[0]);
    }
}
