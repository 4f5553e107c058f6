// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über Embassy Channels (UART RX → Alarm, Alarm/Report → UART TX).

pub mod alarm;
pub mod report;
pub mod serial;

// Re-export Tasks für einfachen Import
pub use alarm::alarm_task;
pub use report::report_task;
pub use serial::{serial_rx_task, serial_tx_task};
