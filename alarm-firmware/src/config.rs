// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// Pin-Zuordnung (ESP32-C6 DevKit)
// ============================================================================
//
// Die Peripherals sind in esp-hal typisiert, die Zuordnung steht deshalb
// zusätzlich in main.rs. Diese Tabelle dient als Referenz für die Verdrahtung.

/// Gas-Detektor (active-high, Pull-Down)
pub const GAS_DETECTOR_GPIO: u8 = 2;

/// Übertemperatur-Detektor (active-high, Pull-Down)
pub const OVER_TEMP_DETECTOR_GPIO: u8 = 3;

/// Code-Tasten A-D (active-high, Pull-Down)
pub const CODE_BUTTON_GPIOS: [u8; 4] = [18, 19, 20, 21];

/// Enter-Taste (active-high, Pull-Down)
pub const ENTER_BUTTON_GPIO: u8 = 22;

/// Alarm-LED
pub const ALARM_LED_GPIO: u8 = 10;

/// LED für falschen Code
pub const INCORRECT_CODE_LED_GPIO: u8 = 11;

/// LED für Systemsperre
pub const SYSTEM_BLOCKED_LED_GPIO: u8 = 23;

// ============================================================================
// UART Konfiguration
// ============================================================================

/// Baudrate der seriellen Schnittstelle (UART0 über USB-Bridge)
pub const UART_BAUDRATE: u32 = 115_200;

/// UART0 TX-Pin
pub const UART_TX_GPIO: u8 = 16;

/// UART0 RX-Pin
pub const UART_RX_GPIO: u8 = 17;

// ============================================================================
// Timing
// ============================================================================

/// Intervall des Status-Reports in Sekunden
pub const REPORT_INTERVAL_SECS: u64 = 2;

/// Pause zwischen zwei Poll-Ticks in Millisekunden
/// Gibt dem Executor Zeit für Report- und UART-Tasks
pub const POLL_INTERVAL_MS: u64 = 10;

// ============================================================================
// Channel-Größen
// ============================================================================

/// Empfangene Kommando-Bytes (UART RX → Alarm Task)
pub const COMMAND_QUEUE_SIZE: usize = 4;

/// Ausgehende Nachrichten (Alarm Task + Report Task → UART TX)
/// Ein kompletter Report (max. 7 Nachrichten) plus Reserve
pub const MESSAGE_QUEUE_SIZE: usize = 16;
