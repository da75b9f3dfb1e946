// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Zeiten und Schwellwerte der Ampel-Logik stehen in esp_core::config.

use esp_hal::ledc::timer::config::Duty;

// ============================================================================
// GPIO-Zuordnung
// ============================================================================
//
// Die Pins werden in main.rs über peripherals.GPIOx geholt, dort ist die
// einzige Stelle für die Verdrahtung. Die Nummern werden beim Start direkt
// von den Pins gelesen und geloggt.
//
//   GPIO4  LED Grün (Fahrzeuge)
//   GPIO5  LED Gelb (Übergang)
//   GPIO6  LED Rot (Fußgänger gehen)
//   GPIO2  Passiver Buzzer A ("Ding"), LEDC Channel0 / Timer0
//   GPIO3  Passiver Buzzer B ("Dong"), LEDC Channel1 / Timer1
//   GPIO10 HC-SR04 Trigger
//   GPIO11 HC-SR04 Echo
//          Achtung: der HC-SR04 liefert 5V, Spannungsteiler auf 3,3V nötig!

// ============================================================================
// Buzzer (LEDC)
// ============================================================================

/// Auflösung des Tastverhältnisses der Buzzer-Timer
/// 10 Bit bei 784 Hz: Teiler ~100 aus dem 80 MHz APB-Takt
pub const BUZZER_DUTY_RESOLUTION: Duty = Duty::Duty10Bit;

// ============================================================================
// Laufzeit
// ============================================================================

/// Heap-Größe für den esp-rtos Scheduler (Bytes)
pub const HEAP_SIZE: usize = 16384; // 16 KB

/// Schwellwert, ab dem sleep() den Embassy-Timer statt Busy-Wait nutzt
/// Kurze Pausen (Trigger-Puls 10 µs) müssen exakt sein
pub const BUSY_WAIT_LIMIT_US: u64 = 1000;
