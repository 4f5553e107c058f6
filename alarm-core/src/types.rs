//! Core Types für die Alarmanlage
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Anzahl falscher Code-Eingaben bis zur Systemsperre
pub const LOCKOUT_THRESHOLD: u8 = 5;

/// Gültiges Code-Muster für die vier Code-Tasten (gedrückt = `true`)
pub const VALID_CODE: [bool; 4] = [true, true, false, false];

/// Zustand der Alarmanlage
///
/// Wird ausschließlich von der `AlarmEngine` verändert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlarmState {
    /// Ruhezustand (Startwert nach Boot und Reset)
    #[default]
    Disarmed,
    /// Ausgelöst, wartet auf gültigen Deaktivierungs-Code
    Armed,
}

impl AlarmState {
    pub fn is_armed(self) -> bool {
        matches!(self, AlarmState::Armed)
    }
}

/// Momentaufnahme der beiden Gefahren-Sensoren
///
/// Wird in jedem Poll-Tick frisch gelesen und nicht gespeichert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SensorSnapshot {
    pub gas: bool,
    pub over_temperature: bool,
}

impl SensorSnapshot {
    /// Mindestens ein Sensor hat ausgelöst
    pub fn any_triggered(self) -> bool {
        self.gas || self.over_temperature
    }
}

/// Momentaufnahme der fünf Tasten (vier Code-Tasten + Enter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonSnapshot {
    pub digits: [bool; 4],
    pub enter: bool,
}

impl ButtonSnapshot {
    /// Alle vier Code-Tasten losgelassen
    pub fn all_digits_released(&self) -> bool {
        self.digits.iter().all(|pressed| !pressed)
    }

    /// Vergleicht die Code-Tasten mit einem Muster
    pub fn matches(&self, code: &[bool; 4]) -> bool {
        self.digits == *code
    }
}

/// Projektion des Engine-Zustands auf die drei LEDs
///
/// Keine eigene Wahrheit: wird immer aus der Engine abgeleitet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indicators {
    pub alarm: bool,
    pub incorrect_code: bool,
    pub system_blocked: bool,
}

/// Ereignisse der Deaktivierungs-Logik
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmEvent {
    /// Gültiger Code, Alarm deaktiviert
    Deactivated,
    /// Falscher Code, Zähler erhöht
    IncorrectAttempt,
    /// Sperre aktiv (wird in jedem Tick gemeldet)
    SystemBlocked,
}

/// Serielles Kommando (ein Byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `'1'`: Alarm-Zustand abfragen
    QueryAlarm,
    /// `'2'`: Gas-Sensor abfragen
    QueryGas,
    /// `'3'`: Übertemperatur-Sensor abfragen
    QueryOverTemperature,
    /// `'r'`: System zurücksetzen
    Reset,
}

impl core::convert::TryFrom<u8> for Command {
    type Error = ();

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            b'1' => Ok(Self::QueryAlarm),
            b'2' => Ok(Self::QueryGas),
            b'3' => Ok(Self::QueryOverTemperature),
            b'r' => Ok(Self::Reset),
            _ => Err(()),
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for AlarmState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            AlarmState::Disarmed => defmt::write!(fmt, "Disarmed"),
            AlarmState::Armed => defmt::write!(fmt, "Armed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorSnapshot {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "SensorSnapshot {{ gas: {}, over_temperature: {} }}",
            self.gas,
            self.over_temperature
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ButtonSnapshot {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ButtonSnapshot {{ digits: [{}, {}, {}, {}], enter: {} }}",
            self.digits[0],
            self.digits[1],
            self.digits[2],
            self.digits[3],
            self.enter
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Indicators {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Indicators {{ alarm: {}, incorrect_code: {}, system_blocked: {} }}",
            self.alarm,
            self.incorrect_code,
            self.system_blocked
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AlarmEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            AlarmEvent::Deactivated => defmt::write!(fmt, "Deactivated"),
            AlarmEvent::IncorrectAttempt => defmt::write!(fmt, "IncorrectAttempt"),
            AlarmEvent::SystemBlocked => defmt::write!(fmt, "SystemBlocked"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Command::QueryAlarm => defmt::write!(fmt, "QueryAlarm"),
            Command::QueryGas => defmt::write!(fmt, "QueryGas"),
            Command::QueryOverTemperature => defmt::write!(fmt, "QueryOverTemperature"),
            Command::Reset => defmt::write!(fmt, "Reset"),
        }
    }
}
