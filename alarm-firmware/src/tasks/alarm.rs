// Alarm Task - Poll-Loop der Alarmanlage
use defmt::{info, warn};
use embassy_time::{Duration, Timer};

use alarm_core::{AlarmState, Message};

use crate::config::POLL_INTERVAL_MS;
use crate::hal::{GpioIndicators, GpioInputs};
use crate::{
    AlarmController, CommandReceiver, IndicatorPort, InputPort, MessageSender, SharedStatus,
};

/// Alarm Loop Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Pro Durchlauf:
/// - Höchstens ein Kommando-Byte non-blocking aus dem Channel holen
/// - Einen Tick des Controllers ausführen (Aktivierung, Deaktivierung, Kommando)
/// - Alle erzeugten Nachrichten an den UART TX Task weitergeben
///
/// # Parameter
/// - `controller`: Alarm Controller (Hardware- oder Mock-Ports)
/// - `command_receiver`: Channel Receiver für Kommando-Bytes
/// - `message_sender`: Channel Sender für ausgehende Nachrichten
pub async fn alarm_loop_logic<I: InputPort, O: IndicatorPort>(
    mut controller: AlarmController<'_, I, O>,
    command_receiver: CommandReceiver,
    message_sender: MessageSender,
) {
    let mut last_state = controller.engine().state();
    let mut was_blocked = false;

    loop {
        // Prüfe auf eingehendes Byte (non-blocking)
        let received = command_receiver.try_receive().ok();
        if let Some(byte) = received {
            info!("Command byte received: {=u8:#x}", byte);
        }

        let outbox = controller.tick(received);

        // Nur Übergänge loggen, die Sperre meldet sich sonst in jedem Tick
        let engine = controller.engine();
        if engine.state() != last_state {
            match engine.state() {
                AlarmState::Armed => warn!("Alarm armed"),
                AlarmState::Disarmed => info!("Alarm disarmed"),
            }
            last_state = engine.state();
        }
        if engine.is_blocked() != was_blocked {
            if engine.is_blocked() {
                warn!(
                    "System blocked after {} incorrect attempts",
                    engine.failed_attempts()
                );
            } else {
                info!("System block cleared");
            }
            was_blocked = engine.is_blocked();
        }

        for message in outbox {
            if message == Message::IncorrectAttempt {
                warn!("Incorrect code attempt ({})", engine.failed_attempts());
            }
            // Blockiert, bis der UART TX Task Platz schafft
            message_sender.send(message).await;
        }

        // Async Delay: gibt CPU an Report- und UART-Tasks
        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

/// Alarm Task - Embassy Task für den Poll-Loop
///
/// # Parameter
/// - `inputs`: Sensoren und Tasten (GPIO)
/// - `indicators`: Status-LEDs (GPIO)
/// - `status`: Geteilter Status (einziger Schreiber ist dieser Task)
/// - `command_receiver`: Channel Receiver für Kommando-Bytes
/// - `message_sender`: Channel Sender für ausgehende Nachrichten
#[embassy_executor::task]
pub async fn alarm_task(
    inputs: GpioInputs<'static>,
    indicators: GpioIndicators<'static>,
    status: &'static SharedStatus,
    command_receiver: CommandReceiver,
    message_sender: MessageSender,
) {
    info!("Alarm: Poll loop starting ({} ms tick)", POLL_INTERVAL_MS);

    // Controller schaltet beim Erstellen alle LEDs aus
    let controller = AlarmController::new(inputs, indicators, status);

    alarm_loop_logic(controller, command_receiver, message_sender).await;
}
