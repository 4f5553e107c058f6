// GPIO-Ausgänge: die drei Status-LEDs

use alarm_core::{IndicatorPort, Indicators};
use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};

/// Real Hardware LED Writer
///
/// Alle LEDs starten ausgeschaltet (Level::Low).
pub struct GpioIndicators<'a> {
    alarm: Output<'a>,
    incorrect_code: Output<'a>,
    system_blocked: Output<'a>,
}

impl<'a> GpioIndicators<'a> {
    pub fn new(
        alarm: impl OutputPin + 'a,
        incorrect_code: impl OutputPin + 'a,
        system_blocked: impl OutputPin + 'a,
    ) -> Self {
        let config = OutputConfig::default();

        Self {
            alarm: Output::new(alarm, Level::Low, config),
            incorrect_code: Output::new(incorrect_code, Level::Low, config),
            system_blocked: Output::new(system_blocked, Level::Low, config),
        }
    }
}

impl<'a> IndicatorPort for GpioIndicators<'a> {
    fn write(&mut self, indicators: Indicators) {
        self.alarm.set_level(Level::from(indicators.alarm));
        self.incorrect_code
            .set_level(Level::from(indicators.incorrect_code));
        self.system_blocked
            .set_level(Level::from(indicators.system_blocked));
    }
}
