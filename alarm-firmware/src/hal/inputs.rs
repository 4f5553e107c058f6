// GPIO-Eingänge: Sensoren und Code-Tasten
//
// Alle Eingänge sind active-high mit internem Pull-Down.
// Keine Entprellung (die Flankenerkennung erledigt die Engine).

use alarm_core::{ButtonSnapshot, InputPort, SensorSnapshot};
use esp_hal::gpio::{Input, InputConfig, InputPin, Pull};

/// Real Hardware Input Reader
///
/// Kapselt die sieben digitalen Eingänge der Alarmanlage.
pub struct GpioInputs<'a> {
    gas: Input<'a>,
    over_temperature: Input<'a>,
    digits: [Input<'a>; 4],
    enter: Input<'a>,
}

impl<'a> GpioInputs<'a> {
    /// Erstellt GpioInputs und konfiguriert alle Pins mit Pull-Down
    ///
    /// # Parameter
    /// - `gas`, `over_temperature`: Sensor-Pins
    /// - `digits`: Code-Tasten A-D in Reihenfolge
    /// - `enter`: Enter-Taste
    pub fn new(
        gas: impl InputPin + 'a,
        over_temperature: impl InputPin + 'a,
        digits: (
            impl InputPin + 'a,
            impl InputPin + 'a,
            impl InputPin + 'a,
            impl InputPin + 'a,
        ),
        enter: impl InputPin + 'a,
    ) -> Self {
        let config = InputConfig::default().with_pull(Pull::Down);

        Self {
            gas: Input::new(gas, config),
            over_temperature: Input::new(over_temperature, config),
            digits: [
                Input::new(digits.0, config),
                Input::new(digits.1, config),
                Input::new(digits.2, config),
                Input::new(digits.3, config),
            ],
            enter: Input::new(enter, config),
        }
    }
}

impl<'a> InputPort for GpioInputs<'a> {
    fn read_sensors(&mut self) -> SensorSnapshot {
        SensorSnapshot {
            gas: self.gas.is_high(),
            over_temperature: self.over_temperature.is_high(),
        }
    }

    fn read_buttons(&mut self) -> ButtonSnapshot {
        ButtonSnapshot {
            digits: [
                self.digits[0].is_high(),
                self.digits[1].is_high(),
                self.digits[2].is_high(),
                self.digits[3].is_high(),
            ],
            enter: self.enter.is_high(),
        }
    }
}
