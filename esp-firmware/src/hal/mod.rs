// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert den HardwareIo-Trait aus esp-core
// für die echte ESP32-C6 Hardware.

pub mod buzzer_pwm;
pub mod esp_io;

pub use buzzer_pwm::{Buzzer, BuzzerChannel, Buzzers};
pub use esp_io::EspHardwareIo;
