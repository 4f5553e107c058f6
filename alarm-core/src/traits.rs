//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::{ButtonSnapshot, Indicators, SensorSnapshot};

/// Trait für digitale Eingänge (Sensoren + Tasten)
///
/// Alle Eingänge sind active-high und im Ruhezustand auf Low gezogen.
/// Es gibt keine Entprellung.
///
/// # Implementierungen
/// - **Production:** GpioInputs (ESP32 GPIO mit Pull-Down)
/// - **Testing:** MockInputs (in-memory Mock)
pub trait InputPort {
    /// Liest Gas- und Übertemperatur-Sensor
    fn read_sensors(&mut self) -> SensorSnapshot;

    /// Liest die vier Code-Tasten und die Enter-Taste
    fn read_buttons(&mut self) -> ButtonSnapshot;
}

/// Trait für die drei Status-LEDs
///
/// Schreibt immer die vollständige Projektion. Hardware-Fehler werden
/// nicht erkannt.
pub trait IndicatorPort {
    fn write(&mut self, indicators: Indicators);
}
