//! Alarm Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, den Zustandsautomaten der Alarmanlage und den
//! Nachrichtenkatalog für die serielle Schnittstelle.

#![no_std]

pub mod controller;
pub mod engine;
pub mod interpreter;
pub mod messages;
pub mod reporter;
pub mod status;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::AlarmController;
pub use engine::AlarmEngine;
pub use interpreter::handle_command;
pub use messages::{HELP, Message, OUTBOX_CAPACITY, Outbox};
pub use reporter::periodic_report;
pub use status::{SharedStatus, StatusSnapshot};
pub use traits::{IndicatorPort, InputPort};
pub use types::{
    AlarmEvent, AlarmState, ButtonSnapshot, Command, Indicators, LOCKOUT_THRESHOLD,
    SensorSnapshot, VALID_CODE,
};
