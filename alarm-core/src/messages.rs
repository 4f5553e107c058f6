//! Nachrichtenkatalog für die serielle Schnittstelle
//!
//! Alle ausgehenden Texte an einer Stelle, damit Interpreter und
//! Status-Report denselben Wortlaut senden.

use crate::types::{AlarmEvent, AlarmState};

/// Maximale Anzahl Nachrichten pro Tick bzw. pro Report
///
/// Längster Fall: Report mit beiden Warnungen (7 Nachrichten).
pub const OUTBOX_CAPACITY: usize = 8;

/// Puffer für ausgehende Nachrichten eines Ticks
pub type Outbox = heapless::Vec<Message, OUTBOX_CAPACITY>;

/// Ausgehende Nachricht (kanonischer Text über [`Message::as_str`])
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    AlarmActivated,
    AlarmNotActivated,
    GasTriggered,
    GasNotTriggered,
    OverTemperatureTriggered,
    OverTemperatureNotTriggered,
    GasWarning,
    TemperatureWarning,
    Deactivated,
    IncorrectAttempt,
    SystemBlocked,
    SystemReset,
    HelpHeader,
    HelpAlarm,
    HelpGas,
    HelpOverTemperature,
    HelpReset,
    /// ANSI: aktuelle Zeile löschen + Wagenrücklauf
    ClearLine,
    NewLine,
}

/// Hilfe-Liste in Sende-Reihenfolge
pub const HELP: [Message; 5] = [
    Message::HelpHeader,
    Message::HelpAlarm,
    Message::HelpGas,
    Message::HelpOverTemperature,
    Message::HelpReset,
];

impl Message {
    /// Kanonischer Text inklusive CRLF
    pub fn as_str(self) -> &'static str {
        match self {
            Message::AlarmActivated => "The alarm is activated.\r\n",
            Message::AlarmNotActivated => "The alarm is not activated.\r\n",
            Message::GasTriggered => "Gas detector is triggered.\r\n",
            Message::GasNotTriggered => "Gas detector is not triggered.\r\n",
            Message::OverTemperatureTriggered => "Over temperature detector is triggered.\r\n",
            Message::OverTemperatureNotTriggered => {
                "Over temperature detector is not triggered.\r\n"
            }
            Message::GasWarning => "WARNING: GAS LEVEL TOO HIGH!\r\n",
            Message::TemperatureWarning => "WARNING: TEMPERATURE IS TOO HIGH!\r\n",
            Message::Deactivated => "Alarm deactivated successfully.\r\n",
            Message::IncorrectAttempt => "Incorrect code attempt. Try again.\r\n",
            Message::SystemBlocked => "System is blocked due to 5 incorrect attempts.\r\n",
            Message::SystemReset => "System has been reset.\r\n",
            Message::HelpHeader => "Available commands:\r\n",
            Message::HelpAlarm => "Press '1' to get the alarm state\r\n",
            Message::HelpGas => "Press '2' to get the gas detector state\r\n",
            Message::HelpOverTemperature => {
                "Press '3' to get the over-temperature detector state\r\n"
            }
            Message::HelpReset => "Press 'r' to reset the system\r\n",
            Message::ClearLine => "\x1b[2K\r",
            Message::NewLine => "\r\n",
        }
    }

    pub fn as_bytes(self) -> &'static [u8] {
        self.as_str().as_bytes()
    }

    /// Alarm-Zustand als Nachricht
    pub fn alarm(state: AlarmState) -> Self {
        if state.is_armed() {
            Message::AlarmActivated
        } else {
            Message::AlarmNotActivated
        }
    }

    /// Gas-Sensor als Nachricht
    pub fn gas(triggered: bool) -> Self {
        if triggered {
            Message::GasTriggered
        } else {
            Message::GasNotTriggered
        }
    }

    /// Übertemperatur-Sensor als Nachricht
    pub fn over_temperature(triggered: bool) -> Self {
        if triggered {
            Message::OverTemperatureTriggered
        } else {
            Message::OverTemperatureNotTriggered
        }
    }
}

impl From<AlarmEvent> for Message {
    fn from(event: AlarmEvent) -> Self {
        match event {
            AlarmEvent::Deactivated => Message::Deactivated,
            AlarmEvent::IncorrectAttempt => Message::IncorrectAttempt,
            AlarmEvent::SystemBlocked => Message::SystemBlocked,
        }
    }
}

/// Hängt eine Nachricht an die Outbox an
///
/// Die Kapazität deckt den längsten Fall ab, ein Überlauf verwirft still.
pub(crate) fn emit(outbox: &mut Outbox, message: Message) {
    let _ = outbox.push(message);
}

#[cfg(feature = "defmt")]
impl defmt::Format for Message {
    fn format(&self, fmt: defmt::Formatter) {
        // Ohne Steuerzeichen/CRLF ins Log
        defmt::write!(fmt, "{=str}", self.as_str().trim_matches(['\x1b', '\r', '\n']))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_line_message_ends_with_crlf() {
        let all = [
            Message::AlarmActivated,
            Message::AlarmNotActivated,
            Message::GasTriggered,
            Message::GasNotTriggered,
            Message::OverTemperatureTriggered,
            Message::OverTemperatureNotTriggered,
            Message::GasWarning,
            Message::TemperatureWarning,
            Message::Deactivated,
            Message::IncorrectAttempt,
            Message::SystemBlocked,
            Message::SystemReset,
            Message::HelpHeader,
            Message::HelpAlarm,
            Message::HelpGas,
            Message::HelpOverTemperature,
            Message::HelpReset,
            Message::NewLine,
        ];
        for message in all {
            assert!(message.as_str().ends_with("\r\n"), "{:?}", message);
        }
    }

    #[test]
    fn test_clear_line_is_ansi_erase() {
        assert_eq!(Message::ClearLine.as_bytes(), b"\x1b[2K\r");
    }

    #[test]
    fn test_alarm_message_follows_state() {
        assert_eq!(Message::alarm(AlarmState::Armed), Message::AlarmActivated);
        assert_eq!(
            Message::alarm(AlarmState::Disarmed),
            Message::AlarmNotActivated
        );
    }

    #[test]
    fn test_event_to_message() {
        assert_eq!(
            Message::from(AlarmEvent::Deactivated).as_str(),
            "Alarm deactivated successfully.\r\n"
        );
        assert_eq!(
            Message::from(AlarmEvent::SystemBlocked).as_str(),
            "System is blocked due to 5 incorrect attempts.\r\n"
        );
    }

    #[test]
    fn test_emit_drops_on_overflow() {
        let mut outbox = Outbox::new();
        for _ in 0..OUTBOX_CAPACITY + 2 {
            emit(&mut outbox, Message::NewLine);
        }
        assert_eq!(outbox.len(), OUTBOX_CAPACITY);
    }
}
