// Library-Root: Firmware-Module für die Fußgängerampel
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{CrossingConfig, CrossingController, HardwareIo};

// Tests: Die Ampel-Logik ist hardwarefrei in esp-core und wird in esp-tests
// auf dem Host getestet (MockHardwareIo). Dieses Crate kompiliert nur für
// riscv32imac-unknown-none-elf.
