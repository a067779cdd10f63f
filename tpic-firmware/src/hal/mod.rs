// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul liefert die konkreten ESP32-C6 Implementierungen
// der tpic-core Traits.

pub mod output_enable;
pub mod twi_bus;

pub use output_enable::{GpioOutputEnable, LedcOutputEnable};
pub use twi_bus::HalTwiBus;
