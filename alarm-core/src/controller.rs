//! Alarm Controller - ein vollständiger Poll-Tick
//!
//! Verbindet Engine, Interpreter und Ports. Die Reihenfolge pro Tick:
//! Eingänge lesen → Aktivierung → Deaktivierung → Kommando → LEDs
//! schreiben → Status veröffentlichen.

use crate::engine::AlarmEngine;
use crate::interpreter::handle_command;
use crate::messages::{Message, Outbox, emit};
use crate::status::SharedStatus;
use crate::traits::{IndicatorPort, InputPort};

/// Besitzt die Engine und die Hardware-Ports
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (GpioInputs, GpioIndicators) im Production-Code
/// - Mock Implementation (MockInputs, MockIndicators) in Tests
pub struct AlarmController<'a, I: InputPort, O: IndicatorPort> {
    inputs: I,
    indicators: O,
    engine: AlarmEngine,
    status: &'a SharedStatus,
}

impl<'a, I: InputPort, O: IndicatorPort> AlarmController<'a, I, O> {
    /// Erstellt den Controller und schaltet alle LEDs aus
    pub fn new(inputs: I, mut indicators: O, status: &'a SharedStatus) -> Self {
        let engine = AlarmEngine::new();
        indicators.write(engine.indicators());
        Self {
            inputs,
            indicators,
            engine,
            status,
        }
    }

    /// Führt einen Poll-Tick aus
    ///
    /// `received` ist das höchstens eine Byte, das seit dem letzten Tick
    /// von der seriellen Schnittstelle kam.
    pub fn tick(&mut self, received: Option<u8>) -> Outbox {
        let mut outbox = Outbox::new();

        let sensors = self.inputs.read_sensors();
        self.engine.update_activation(sensors);

        let buttons = self.inputs.read_buttons();
        if let Some(event) = self.engine.update_deactivation(buttons) {
            emit(&mut outbox, Message::from(event));
        }

        if let Some(byte) = received {
            for message in handle_command(byte, &mut self.engine, sensors) {
                emit(&mut outbox, message);
            }
        }

        self.indicators.write(self.engine.indicators());
        self.status.publish(&self.engine, sensors);

        outbox
    }

    pub fn engine(&self) -> &AlarmEngine {
        &self.engine
    }

    pub fn inputs_mut(&mut self) -> &mut I {
        &mut self.inputs
    }

    pub fn indicator_port(&self) -> &O {
        &self.indicators
    }
}
