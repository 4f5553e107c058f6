// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_alarmanlage::config::UART_BAUDRATE;
use esp_alarmanlage::hal::{GpioIndicators, GpioInputs};
use esp_alarmanlage::tasks::{alarm_task, report_task, serial_rx_task, serial_tx_task};
use esp_alarmanlage::{CommandChannel, MessageChannel, SharedStatus};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Geteilter Status: Alarm Task schreibt, Report Task liest
static STATUS: SharedStatus = SharedStatus::new();

/// Main Entry Point
///
/// Initialisiert GPIOs und UART, startet Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("Alarmanlage: booting");

    // Eingänge: Sensoren + Tasten (active-high, Pull-Down)
    // Zuordnung siehe config.rs
    let inputs = GpioInputs::new(
        peripherals.GPIO2,
        peripherals.GPIO3,
        (
            peripherals.GPIO18,
            peripherals.GPIO19,
            peripherals.GPIO20,
            peripherals.GPIO21,
        ),
        peripherals.GPIO22,
    );

    // Ausgänge: Alarm-, Incorrect-Code- und Blocked-LED (starten aus)
    let indicators = GpioIndicators::new(peripherals.GPIO10, peripherals.GPIO11, peripherals.GPIO23);

    // UART0 über die USB-Bridge, 115200 Baud
    let uart = Uart::new(
        peripherals.UART0,
        UartConfig::default().with_baudrate(UART_BAUDRATE),
    )
    .expect("Failed to configure UART0")
    .with_tx(peripherals.GPIO16)
    .with_rx(peripherals.GPIO17)
    .into_async();
    let (uart_rx, uart_tx) = uart.split();

    // Kommando-Channel (UART RX → Alarm Task)
    static COMMAND_CHANNEL: static_cell::StaticCell<CommandChannel> =
        static_cell::StaticCell::new();
    let command_channel = &*COMMAND_CHANNEL.init(CommandChannel::new());

    // Nachrichten-Channel (Alarm + Report → UART TX)
    // Ein Konsument: alle Ausgaben laufen seriell über den TX Task
    static MESSAGE_CHANNEL: static_cell::StaticCell<MessageChannel> =
        static_cell::StaticCell::new();
    let message_channel = &*MESSAGE_CHANNEL.init(MessageChannel::new());

    // Spawn UART Tasks
    spawner
        .spawn(serial_tx_task(uart_tx, message_channel.receiver()))
        .unwrap();
    spawner
        .spawn(serial_rx_task(uart_rx, command_channel.sender()))
        .unwrap();

    // Spawn Alarm Task (Poll-Loop, einziger Schreiber auf STATUS)
    spawner
        .spawn(alarm_task(
            inputs,
            indicators,
            &STATUS,
            command_channel.receiver(),
            message_channel.sender(),
        ))
        .unwrap();

    // Spawn Report Task (liest STATUS alle 2 s)
    spawner
        .spawn(report_task(&STATUS, message_channel.sender()))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
