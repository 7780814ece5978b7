// Bridge Task - Sensor lesen, LED schalten, Frames auf den CAN-Bus senden
use defmt::{info, warn};
use embassy_time::{Instant, Timer};

use crate::config::CYCLE_PERIOD_MS;
use crate::hal::{AdcLightSensor, GpioStatusLed, Mcp2515Bus, SpiCanDevice};
use crate::{CanBus, CyclePacer, LightBridge, LightSensor, Pace, StatusOutput};

/// Bridge Logic - Zyklus-Schleife ohne Hardware-Abhängigkeit
///
/// Läuft endlos:
/// - Misst und schaltet die LED (Sensor → Entscheidung → LED)
/// - Gibt die Diagnose-Zeile aus, noch vor dem Senden
/// - Sendet beide CAN-Frames und meldet Sendefehler, wiederholt sie aber nicht
/// - Wartet den Rest der Periode (Überlauf: sofort weiter)
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter erlauben echte Hardware im Production-Code
/// und Mocks in Tests.
pub async fn bridge_logic<S, L, B>(mut bridge: LightBridge<S, L, B>, pacer: CyclePacer) -> !
where
    S: LightSensor,
    L: StatusOutput,
    B: CanBus,
{
    loop {
        let started = Instant::now();

        let measurement = bridge.measure();
        info!("{}", measurement);

        let report = bridge.transmit(measurement);

        if let Err(e) = report.brightness_tx {
            warn!("CAN: brightness frame not sent: {}", e);
        }
        if let Err(e) = report.actuator_tx {
            warn!("CAN: actuator frame not sent: {}", e);
        }

        match pacer.pace(started.elapsed().as_millis()) {
            Pace::Sleep { ms } => Timer::after_millis(ms).await,
            Pace::Overrun { late_by_ms } => {
                warn!("Cycle overrun by {} ms", late_by_ms);
            }
        }
    }
}

/// Konkrete Bridge mit ESP32-C6 Hardware
pub type HwBridge = LightBridge<
    AdcLightSensor<'static>,
    GpioStatusLed<'static>,
    Mcp2515Bus<SpiCanDevice, esp_hal::delay::Delay>,
>;

/// Bridge Task - Embassy Task
///
/// Bekommt die fertig initialisierte Bridge aus `main()` und ruft die
/// `bridge_logic()` Schleife auf.
#[embassy_executor::task]
pub async fn bridge_task(bridge: HwBridge) {
    bridge_logic(bridge, CyclePacer::new(CYCLE_PERIOD_MS)).await
}
