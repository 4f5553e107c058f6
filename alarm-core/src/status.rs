//! Geteilter Status zwischen Poll-Loop und Status-Report
//!
//! Ein Schreiber (Poll-Loop), beliebig viele Leser. Jedes Feld ist ein
//! eigenes Atomic, ein Leser sieht daher nie einen halb geschriebenen
//! Alarm-Zustand.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::engine::AlarmEngine;
use crate::types::{AlarmState, SensorSnapshot};

/// Lesbare Kopie des geteilten Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusSnapshot {
    pub alarm: AlarmState,
    pub sensors: SensorSnapshot,
    pub failed_attempts: u8,
    pub blocked: bool,
}

/// Atomarer Status für `static`-Nutzung
pub struct SharedStatus {
    armed: AtomicBool,
    gas: AtomicBool,
    over_temperature: AtomicBool,
    failed_attempts: AtomicU8,
    blocked: AtomicBool,
}

impl Default for SharedStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedStatus {
    pub const fn new() -> Self {
        Self {
            armed: AtomicBool::new(false),
            gas: AtomicBool::new(false),
            over_temperature: AtomicBool::new(false),
            failed_attempts: AtomicU8::new(0),
            blocked: AtomicBool::new(false),
        }
    }

    /// Nur vom Poll-Loop aufrufen (einziger Schreiber)
    pub fn publish(&self, engine: &AlarmEngine, sensors: SensorSnapshot) {
        self.gas.store(sensors.gas, Ordering::Release);
        self.over_temperature
            .store(sensors.over_temperature, Ordering::Release);
        self.failed_attempts
            .store(engine.failed_attempts(), Ordering::Release);
        self.blocked.store(engine.is_blocked(), Ordering::Release);
        self.armed
            .store(engine.state().is_armed(), Ordering::Release);
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        let alarm = if self.armed.load(Ordering::Acquire) {
            AlarmState::Armed
        } else {
            AlarmState::Disarmed
        };
        StatusSnapshot {
            alarm,
            sensors: SensorSnapshot {
                gas: self.gas.load(Ordering::Acquire),
                over_temperature: self.over_temperature.load(Ordering::Acquire),
            },
            failed_attempts: self.failed_attempts.load(Ordering::Acquire),
            blocked: self.blocked.load(Ordering::Acquire),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusSnapshot {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusSnapshot {{ alarm: {}, sensors: {}, failed_attempts: {}, blocked: {} }}",
            self.alarm,
            self.sensors,
            self.failed_attempts,
            self.blocked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ButtonSnapshot;

    #[test]
    fn test_initial_snapshot_is_idle() {
        let status = SharedStatus::new();
        assert_eq!(status.snapshot(), StatusSnapshot::default());
    }

    #[test]
    fn test_publish_then_snapshot() {
        let status = SharedStatus::new();
        let mut engine = AlarmEngine::new();
        let sensors = SensorSnapshot {
            gas: true,
            over_temperature: false,
        };
        engine.update_activation(sensors);
        engine.update_deactivation(ButtonSnapshot {
            digits: [false; 4],
            enter: true,
        });

        status.publish(&engine, sensors);

        let snapshot = status.snapshot();
        assert_eq!(snapshot.alarm, AlarmState::Armed);
        assert_eq!(snapshot.sensors, sensors);
        assert_eq!(snapshot.failed_attempts, 1);
        assert!(!snapshot.blocked);
    }
}
