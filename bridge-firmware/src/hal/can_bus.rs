// CAN-Bus Adapter für den MCP2515
//
// Implementiert den CanBus-Trait aus bridge-core mit dem mcp2515-Treiber.
// Register-Protokoll, Reset und Bit-Timing übernimmt der Treiber.

use bridge_core::{BusConfig, BusError, BusMode, CanBitrate, CanBus, CanFrame, OscillatorClock};
use defmt::{debug, error};
use embedded_can::Frame;
use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiDevice;
use mcp2515::frame::CanFrame as McpFrame;
use mcp2515::regs::OpMode;
use mcp2515::{CanSpeed, MCP2515, McpSpeed, Settings};

/// SPI-Device des MCP2515 auf dem ESP32-C6 (SPI2 + CS-Pin)
pub type SpiCanDevice = embedded_hal_bus::spi::ExclusiveDevice<
    esp_hal::spi::master::Spi<'static, esp_hal::Blocking>,
    esp_hal::gpio::Output<'static>,
    esp_hal::delay::Delay,
>;

/// MCP2515 über SPI
///
/// `configure()` merkt sich nur Bitrate und Takt. Erst `set_mode()` führt
/// die Init-Sequenz des Treibers aus (Reset, Bit-Timing, Modus).
pub struct Mcp2515Bus<SPI, D> {
    can: MCP2515<SPI>,
    delay: D,
    config: Option<BusConfig>,
}

impl<SPI, D> Mcp2515Bus<SPI, D>
where
    SPI: SpiDevice,
    D: DelayNs,
{
    /// Erstellt einen neuen Adapter
    ///
    /// # Parameter
    /// - `spi`: SPI-Device inkl. Chip-Select (z.B. ExclusiveDevice)
    /// - `delay`: Delay für die Reset-Sequenz des Controllers
    pub fn new(spi: SPI, delay: D) -> Self {
        Self {
            can: MCP2515::new(spi),
            delay,
            config: None,
        }
    }
}

impl<SPI, D> CanBus for Mcp2515Bus<SPI, D>
where
    SPI: SpiDevice,
    D: DelayNs,
{
    fn configure(&mut self, config: &BusConfig) -> Result<(), BusError> {
        debug!("CAN: configure {}", config);
        self.config = Some(*config);
        Ok(())
    }

    fn set_mode(&mut self, mode: BusMode) -> Result<(), BusError> {
        let config = self.config.ok_or(BusError::NotConfigured)?;

        let settings = Settings {
            mode: op_mode(mode),
            can_speed: can_speed(config.bitrate),
            mcp_speed: mcp_speed(config.clock),
            clkout_en: false,
        };

        self.can.init(&mut self.delay, settings).map_err(|_| {
            error!("CAN: init in mode {} failed", mode);
            BusError::ModeChangeFailed
        })
    }

    fn send(&mut self, frame: &CanFrame) -> Result<(), BusError> {
        let mcp_frame =
            McpFrame::new(Frame::id(frame), frame.data()).ok_or(BusError::TransmitFailed)?;

        self.can
            .send_message(mcp_frame)
            .map_err(|_| BusError::TransmitFailed)
    }
}

fn op_mode(mode: BusMode) -> OpMode {
    match mode {
        BusMode::Normal => OpMode::Normal,
        BusMode::ListenOnly => OpMode::ListenOnly,
        BusMode::Loopback => OpMode::Loopback,
    }
}

fn can_speed(bitrate: CanBitrate) -> CanSpeed {
    match bitrate {
        CanBitrate::Kbps125 => CanSpeed::Kbps125,
        CanBitrate::Kbps250 => CanSpeed::Kbps250,
        CanBitrate::Kbps500 => CanSpeed::Kbps500,
        CanBitrate::Kbps1000 => CanSpeed::Kbps1000,
    }
}

fn mcp_speed(clock: OscillatorClock) -> McpSpeed {
    match clock {
        OscillatorClock::MHz8 => McpSpeed::MHz8,
        OscillatorClock::MHz16 => McpSpeed::MHz16,
    }
}
