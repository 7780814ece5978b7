// Helligkeits-Sensor über ADC1 (One-Shot)
//
// Der ESP32-C6 wandelt mit 12 Bit, die Bridge rechnet mit 10 Bit.

use bridge_core::{LightSensor, RawSample};
use defmt::warn;
use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO3};

/// CdS-Fotowiderstand im Spannungsteiler an GPIO3
pub struct AdcLightSensor<'a> {
    adc: Adc<'a, ADC1<'a>, Blocking>,
    pin: AdcPin<GPIO3<'a>, ADC1<'a>>,
    last: RawSample,
}

impl<'a> AdcLightSensor<'a> {
    /// Erstellt einen neuen AdcLightSensor
    ///
    /// 11 dB Dämpfung: voller Messbereich bis ca. 3.1 V
    pub fn new(adc1: ADC1<'a>, gpio3: GPIO3<'a>) -> Self {
        let mut config = AdcConfig::new();
        let pin = config.enable_pin(gpio3, Attenuation::_11dB);
        let adc = Adc::new(adc1, config);

        Self {
            adc,
            pin,
            last: RawSample::default(),
        }
    }
}

impl LightSensor for AdcLightSensor<'_> {
    fn read_raw(&mut self) -> RawSample {
        match nb::block!(self.adc.read_oneshot(&mut self.pin)) {
            Ok(raw) => {
                self.last = RawSample::from_adc_12bit(raw);
            }
            // Wandlung fehlgeschlagen: letzter Wert bleibt stehen
            Err(_) => warn!("ADC: read failed, reusing last sample"),
        }
        self.last
    }
}
