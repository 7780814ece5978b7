// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::spi::Mode;
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;

use defmt::{error, info};
use embedded_hal_bus::spi::ExclusiveDevice;

// Backtrace bei Panic und Log-Transport (defmt über esp-println)
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use bridge_core::signals::SIGNALS;
use bridge_core::BusConfig;
use cds_can_bridge::LightBridge;
use cds_can_bridge::config::{CYCLE_PERIOD_MS, SPI_CLOCK_MHZ};
use cds_can_bridge::hal::{AdcLightSensor, GpioStatusLed, Mcp2515Bus};
use cds_can_bridge::tasks::bridge_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware und CAN-Controller, startet die Embassy Runtime
/// und spawnt den Bridge-Task. Danach schläft main().
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("CdS → CAN Bridge v{}", env!("CARGO_PKG_VERSION"));
    for signal in SIGNALS {
        info!("Signal {} on id {=u16:#x}", signal.name, signal.message_id.as_raw());
    }

    // Status-LED (GPIO4), startet aus
    let led = GpioStatusLed::new(Output::new(
        peripherals.GPIO4,
        Level::Low,
        OutputConfig::default(),
    ));

    // Helligkeits-Sensor (ADC1, GPIO3)
    let sensor = AdcLightSensor::new(peripherals.ADC1, peripherals.GPIO3);

    // SPI2 für den MCP2515: SCK GPIO6, MOSI GPIO7, MISO GPIO5, CS GPIO10
    let spi = Spi::new(
        peripherals.SPI2,
        SpiConfig::default()
            .with_frequency(Rate::from_mhz(SPI_CLOCK_MHZ))
            .with_mode(Mode::_0),
    )
    .expect("Failed to initialize SPI2")
    .with_sck(peripherals.GPIO6)
    .with_mosi(peripherals.GPIO7)
    .with_miso(peripherals.GPIO5);

    let cs = Output::new(peripherals.GPIO10, Level::High, OutputConfig::default());
    let spi_device =
        ExclusiveDevice::new(spi, cs, Delay::new()).expect("Failed to set up CAN chip select");
    let bus = Mcp2515Bus::new(spi_device, Delay::new());

    // CAN konfigurieren und in den Normal-Modus schalten.
    // Fehler sind fatal: kein Retry, Panic-Handler gibt Backtrace aus und hält an.
    let bridge = match LightBridge::initialize(sensor, led, bus, &BusConfig::DEFAULT) {
        Ok(bridge) => bridge,
        Err(e) => {
            error!("Bridge init failed: {} - halting", e);
            panic!("bridge initialization failed");
        }
    };
    info!(
        "CAN ready ({}), cycle period {} ms",
        BusConfig::DEFAULT,
        CYCLE_PERIOD_MS
    );

    spawner.spawn(bridge_task(bridge)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Bridge-Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
