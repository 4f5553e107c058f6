// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Port-Traits aus alarm-core
// für die GPIOs des ESP32-C6.

pub mod indicators;
pub mod inputs;

pub use indicators::GpioIndicators;
pub use inputs::GpioInputs;
