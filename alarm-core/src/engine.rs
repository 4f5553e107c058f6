//! Alarm Engine - Zustandsautomat der Alarmanlage
//!
//! Aktivierung (Sensoren) und Deaktivierung (Code-Tasten) pro Poll-Tick,
//! inklusive Zähler für Fehlversuche und Sperre.

use crate::types::{
    AlarmEvent, AlarmState, ButtonSnapshot, Indicators, LOCKOUT_THRESHOLD, SensorSnapshot,
    VALID_CODE,
};

/// Zustand der Alarmanlage mit LED-Projektion
///
/// Die Incorrect-Code-LED ist gleichzeitig der Riegel für die
/// Flankenerkennung: solange sie leuchtet, wird kein weiterer Versuch
/// ausgewertet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmEngine {
    state: AlarmState,
    failed_attempts: u8,
    indicators: Indicators,
}

impl Default for AlarmEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AlarmEngine {
    pub const fn new() -> Self {
        Self {
            state: AlarmState::Disarmed,
            failed_attempts: 0,
            indicators: Indicators {
                alarm: false,
                incorrect_code: false,
                system_blocked: false,
            },
        }
    }

    pub fn state(&self) -> AlarmState {
        self.state
    }

    pub fn failed_attempts(&self) -> u8 {
        self.failed_attempts
    }

    pub fn indicators(&self) -> Indicators {
        self.indicators
    }

    /// Sperre erreicht (nur `reset()` hebt sie auf)
    pub fn is_blocked(&self) -> bool {
        self.failed_attempts >= LOCKOUT_THRESHOLD
    }

    /// Aktivierung: ein ausgelöster Sensor schaltet scharf
    ///
    /// Einweg-Riegel: Sensoren allein können den Alarm nie zurücknehmen.
    pub fn update_activation(&mut self, sensors: SensorSnapshot) -> AlarmState {
        if sensors.any_triggered() {
            self.state = AlarmState::Armed;
        }
        self.indicators.alarm = self.state.is_armed();
        self.state
    }

    /// Deaktivierung über die Code-Tasten
    ///
    /// Liefert höchstens ein Ereignis pro Tick. Im gesperrten Zustand wird
    /// `SystemBlocked` in jedem Tick gemeldet und kein Code ausgewertet.
    pub fn update_deactivation(&mut self, buttons: ButtonSnapshot) -> Option<AlarmEvent> {
        if self.is_blocked() {
            self.indicators.system_blocked = true;
            return Some(AlarmEvent::SystemBlocked);
        }

        // Tasten losgelassen: bereit für neuen Versuch
        if buttons.all_digits_released() && !buttons.enter {
            self.indicators.incorrect_code = false;
        }

        if !(buttons.enter && !self.indicators.incorrect_code && self.state.is_armed()) {
            return None;
        }

        if buttons.matches(&VALID_CODE) {
            self.state = AlarmState::Disarmed;
            self.failed_attempts = 0;
            Some(AlarmEvent::Deactivated)
        } else {
            self.indicators.incorrect_code = true;
            self.failed_attempts = (self.failed_attempts + 1).min(LOCKOUT_THRESHOLD);
            Some(AlarmEvent::IncorrectAttempt)
        }
    }

    /// Setzt Zustand, Zähler und alle LEDs zurück (idempotent)
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAS: SensorSnapshot = SensorSnapshot {
        gas: true,
        over_temperature: false,
    };

    const QUIET: SensorSnapshot = SensorSnapshot {
        gas: false,
        over_temperature: false,
    };

    fn enter_with(digits: [bool; 4]) -> ButtonSnapshot {
        ButtonSnapshot {
            digits,
            enter: true,
        }
    }

    fn armed_engine() -> AlarmEngine {
        let mut engine = AlarmEngine::new();
        engine.update_activation(GAS);
        engine
    }

    #[test]
    fn test_new_engine_is_disarmed() {
        let engine = AlarmEngine::new();
        assert_eq!(engine.state(), AlarmState::Disarmed);
        assert_eq!(engine.failed_attempts(), 0);
        assert_eq!(engine.indicators(), Indicators::default());
    }

    #[test]
    fn test_over_temperature_arms() {
        let mut engine = AlarmEngine::new();
        let state = engine.update_activation(SensorSnapshot {
            gas: false,
            over_temperature: true,
        });
        assert_eq!(state, AlarmState::Armed);
        assert!(engine.indicators().alarm);
    }

    #[test]
    fn test_activation_latches() {
        let mut engine = armed_engine();
        assert_eq!(engine.update_activation(QUIET), AlarmState::Armed);
        assert!(engine.indicators().alarm);
    }

    #[test]
    fn test_valid_code_disarms() {
        let mut engine = armed_engine();
        let event = engine.update_deactivation(enter_with(VALID_CODE));
        assert_eq!(event, Some(AlarmEvent::Deactivated));
        assert_eq!(engine.state(), AlarmState::Disarmed);
        assert_eq!(engine.failed_attempts(), 0);
    }

    #[test]
    fn test_enter_ignored_while_disarmed() {
        let mut engine = AlarmEngine::new();
        assert_eq!(engine.update_deactivation(enter_with([true; 4])), None);
        assert_eq!(engine.failed_attempts(), 0);
    }

    #[test]
    fn test_held_enter_counts_once() {
        let mut engine = armed_engine();
        let wrong = enter_with([true, false, true, false]);

        assert_eq!(
            engine.update_deactivation(wrong),
            Some(AlarmEvent::IncorrectAttempt)
        );
        for _ in 0..10 {
            assert_eq!(engine.update_deactivation(wrong), None);
        }
        assert_eq!(engine.failed_attempts(), 1);
        assert!(engine.indicators().incorrect_code);
    }

    #[test]
    fn test_incorrect_indicator_clears_after_release() {
        let mut engine = armed_engine();
        engine.update_deactivation(enter_with([false; 4]));
        assert!(engine.indicators().incorrect_code);

        // Enter noch gedrückt: bleibt an
        engine.update_deactivation(enter_with([false; 4]));
        assert!(engine.indicators().incorrect_code);

        // Code-Taste noch gedrückt: bleibt an
        engine.update_deactivation(ButtonSnapshot {
            digits: [false, false, true, false],
            enter: false,
        });
        assert!(engine.indicators().incorrect_code);

        engine.update_deactivation(ButtonSnapshot::default());
        assert!(!engine.indicators().incorrect_code);
    }

    #[test]
    fn test_blocked_after_five_failures() {
        let mut engine = armed_engine();
        for _ in 0..LOCKOUT_THRESHOLD {
            engine.update_deactivation(enter_with([false; 4]));
            engine.update_deactivation(ButtonSnapshot::default());
        }
        assert_eq!(engine.failed_attempts(), LOCKOUT_THRESHOLD);
        assert!(engine.is_blocked());

        // Auch der gültige Code wird ignoriert, Meldung in jedem Tick
        for _ in 0..3 {
            assert_eq!(
                engine.update_deactivation(enter_with(VALID_CODE)),
                Some(AlarmEvent::SystemBlocked)
            );
        }
        assert_eq!(engine.state(), AlarmState::Armed);
        assert!(engine.indicators().system_blocked);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut engine = armed_engine();
        engine.update_deactivation(enter_with([false; 4]));

        engine.reset();
        let once = engine.clone();
        engine.reset();

        assert_eq!(engine, once);
        assert_eq!(engine, AlarmEngine::new());
    }
}
