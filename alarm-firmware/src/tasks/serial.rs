// Serial Tasks - UART0 Empfang und Versand
use defmt::{Debug2Format, error, info};
use esp_hal::Async;
use esp_hal::uart::{UartRx, UartTx};

use crate::{CommandSender, MessageReceiver};

/// UART RX Task - leitet jedes empfangene Byte an den Alarm Task weiter
///
/// Der Alarm Task holt pro Tick höchstens ein Byte ab.
///
/// # Parameter
/// - `rx`: UART RX-Hälfte (async)
/// - `command_sender`: Channel Sender für Kommando-Bytes
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: UartRx<'static, Async>, command_sender: CommandSender) {
    info!("UART: RX task started");

    let mut buffer = [0u8; 1];

    loop {
        match rx.read_async(&mut buffer).await {
            Ok(0) => {}
            Ok(_) => command_sender.send(buffer[0]).await,
            Err(e) => error!("UART: RX error: {}", Debug2Format(&e)),
        }
    }
}

/// UART TX Task - einziger Konsument des Nachrichten-Channels
///
/// Schreibt Nachrichten in Empfangs-Reihenfolge. Fehler werden geloggt,
/// die Nachricht ist dann verloren (fire-and-forget).
///
/// # Parameter
/// - `tx`: UART TX-Hälfte (async)
/// - `message_receiver`: Channel Receiver für ausgehende Nachrichten
#[embassy_executor::task]
pub async fn serial_tx_task(mut tx: UartTx<'static, Async>, message_receiver: MessageReceiver) {
    info!("UART: TX task started");

    loop {
        let message = message_receiver.receive().await;
        let mut bytes = message.as_bytes();

        while !bytes.is_empty() {
            match tx.write_async(bytes).await {
                Ok(written) => bytes = &bytes[written..],
                Err(e) => {
                    error!("UART: TX error: {}", Debug2Format(&e));
                    break;
                }
            }
        }
    }
}
