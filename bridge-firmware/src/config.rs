// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
// Alle Werte sind zur Build-Zeit fest, es gibt keine Laufzeit-Konfiguration.

// ============================================================================
// CAN (MCP2515 über SPI2)
// ============================================================================
// Pins: SCK GPIO6, MOSI GPIO7, MISO GPIO5, CS GPIO10 (siehe main.rs)
// Bitrate/Quarz: BusConfig::DEFAULT (1000 kbit/s, 8 MHz), muss zu allen
// Teilnehmern am Bus passen

/// SPI Taktfrequenz in MHz
/// Der MCP2515 verträgt maximal 10 MHz
pub const SPI_CLOCK_MHZ: u32 = 8;

// ============================================================================
// Zyklus
// ============================================================================

/// Periode von Zyklus-Start zu Zyklus-Start in Millisekunden
pub const CYCLE_PERIOD_MS: u64 = 500;
