// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von alarm-core
pub use alarm_core::{
    AlarmController, IndicatorPort, InputPort, Message, SharedStatus, periodic_report,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

// Konfigurationswerte
use crate::config::{COMMAND_QUEUE_SIZE, MESSAGE_QUEUE_SIZE};

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  Sender<'static, CriticalSectionRawMutex, Message, 16>
// Nutze:  MessageSender
//
// CriticalSectionRawMutex statt NoopRawMutex: Report- und Alarm-Task
// greifen beide schreibend auf den Nachrichten-Channel zu.

/// Channel für empfangene Kommando-Bytes (UART RX Task → Alarm Task)
pub type CommandChannel = Channel<CriticalSectionRawMutex, u8, COMMAND_QUEUE_SIZE>;

/// Sender für Kommando-Bytes (UART RX Task sendet)
pub type CommandSender = Sender<'static, CriticalSectionRawMutex, u8, COMMAND_QUEUE_SIZE>;

/// Receiver für Kommando-Bytes (Alarm Task liest non-blocking)
pub type CommandReceiver = Receiver<'static, CriticalSectionRawMutex, u8, COMMAND_QUEUE_SIZE>;

/// Channel für ausgehende Nachrichten (Alarm + Report → UART TX Task)
/// Genau ein Konsument: der UART TX Task
pub type MessageChannel = Channel<CriticalSectionRawMutex, Message, MESSAGE_QUEUE_SIZE>;

/// Sender für ausgehende Nachrichten
pub type MessageSender = Sender<'static, CriticalSectionRawMutex, Message, MESSAGE_QUEUE_SIZE>;

/// Receiver für ausgehende Nachrichten (nur UART TX Task)
pub type MessageReceiver = Receiver<'static, CriticalSectionRawMutex, Message, MESSAGE_QUEUE_SIZE>;
