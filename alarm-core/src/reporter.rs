//! Periodic Reporter - vollständiger Status in festem Intervall
//!
//! Liest nur; verändert nie den Engine-Zustand.

use crate::messages::{Message, Outbox, emit};
use crate::status::StatusSnapshot;

/// Baut den periodischen Status-Report
///
/// Reihenfolge: Zeile löschen, Zeilenumbruch, Alarm, Gas (+ Warnung),
/// Übertemperatur (+ Warnung). Wird immer vollständig gesendet, auch ohne
/// Änderung seit dem letzten Report.
pub fn periodic_report(status: StatusSnapshot) -> Outbox {
    let mut outbox = Outbox::new();

    emit(&mut outbox, Message::ClearLine);
    emit(&mut outbox, Message::NewLine);
    emit(&mut outbox, Message::alarm(status.alarm));

    emit(&mut outbox, Message::gas(status.sensors.gas));
    if status.sensors.gas {
        emit(&mut outbox, Message::GasWarning);
    }

    emit(
        &mut outbox,
        Message::over_temperature(status.sensors.over_temperature),
    );
    if status.sensors.over_temperature {
        emit(&mut outbox, Message::TemperatureWarning);
    }

    outbox
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AlarmState, SensorSnapshot};

    #[test]
    fn test_quiet_report() {
        let report = periodic_report(StatusSnapshot::default());
        assert_eq!(
            report.as_slice(),
            &[
                Message::ClearLine,
                Message::NewLine,
                Message::AlarmNotActivated,
                Message::GasNotTriggered,
                Message::OverTemperatureNotTriggered,
            ]
        );
    }

    #[test]
    fn test_report_with_both_warnings() {
        let report = periodic_report(StatusSnapshot {
            alarm: AlarmState::Armed,
            sensors: SensorSnapshot {
                gas: true,
                over_temperature: true,
            },
            ..StatusSnapshot::default()
        });
        assert_eq!(
            report.as_slice(),
            &[
                Message::ClearLine,
                Message::NewLine,
                Message::AlarmActivated,
                Message::GasTriggered,
                Message::GasWarning,
                Message::OverTemperatureTriggered,
                Message::TemperatureWarning,
            ]
        );
    }
}
