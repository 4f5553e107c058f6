//! Command Interpreter - ein Byte pro Tick
//!
//! Zustandslos: liest und verändert nur die übergebene Engine.

use crate::engine::AlarmEngine;
use crate::messages::{HELP, Message, Outbox, emit};
use crate::types::{Command, SensorSnapshot};

/// Verarbeitet ein empfangenes Byte
///
/// Sensorabfragen beantworten den Wert des aktuellen Ticks. Unbekannte
/// Bytes liefern die Hilfe-Liste und verändern nichts.
///
/// # Beispiele
///
/// ```
/// # use alarm_core::{AlarmEngine, Message, SensorSnapshot, handle_command};
/// let mut engine = AlarmEngine::new();
/// let reply = handle_command(b'1', &mut engine, SensorSnapshot::default());
/// assert_eq!(reply.as_slice(), &[Message::AlarmNotActivated]);
/// ```
pub fn handle_command(byte: u8, engine: &mut AlarmEngine, sensors: SensorSnapshot) -> Outbox {
    let mut outbox = Outbox::new();

    match Command::try_from(byte) {
        Ok(Command::QueryAlarm) => emit(&mut outbox, Message::alarm(engine.state())),
        Ok(Command::QueryGas) => emit(&mut outbox, Message::gas(sensors.gas)),
        Ok(Command::QueryOverTemperature) => {
            emit(&mut outbox, Message::over_temperature(sensors.over_temperature))
        }
        Ok(Command::Reset) => {
            engine.reset();
            emit(&mut outbox, Message::SystemReset);
        }
        Err(()) => {
            for line in HELP {
                emit(&mut outbox, line);
            }
        }
    }

    outbox
}
