// Report Task - Sendet periodisch den vollständigen Status
use defmt::{debug, info};
use embassy_time::{Duration, Ticker};

use crate::config::REPORT_INTERVAL_SECS;
use crate::{MessageSender, SharedStatus, periodic_report};

/// Report Task - läuft unabhängig vom Poll-Loop
///
/// Liest nur den geteilten Status und verändert nie den Alarm-Zustand.
/// Der Report wird immer vollständig gesendet, auch ohne Änderung.
///
/// # Parameter
/// - `status`: Geteilter Status (nur lesend)
/// - `message_sender`: Channel Sender für ausgehende Nachrichten
#[embassy_executor::task]
pub async fn report_task(status: &'static SharedStatus, message_sender: MessageSender) {
    info!("Report: every {}s", REPORT_INTERVAL_SECS);

    let mut ticker = Ticker::every(Duration::from_secs(REPORT_INTERVAL_SECS));

    loop {
        ticker.next().await;

        let snapshot = status.snapshot();
        debug!("Report: {}", snapshot);

        for message in periodic_report(snapshot) {
            message_sender.send(message).await;
        }
    }
}
