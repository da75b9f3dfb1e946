// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
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
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pin, Pull};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_fussgaengerampel::config::*;
use esp_fussgaengerampel::hal::{Buzzers, EspHardwareIo};
use esp_fussgaengerampel::tasks::crossing_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    esp_alloc::heap_allocator!(size: HEAP_SIZE);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Verdrahtung (siehe config.rs): einzige Stelle mit GPIO-Nummern
    let green_pin = peripherals.GPIO4;
    let yellow_pin = peripherals.GPIO5;
    let red_pin = peripherals.GPIO6;
    let buzzer_a_pin = peripherals.GPIO2;
    let buzzer_b_pin = peripherals.GPIO3;
    let trigger_pin = peripherals.GPIO10;
    let echo_pin = peripherals.GPIO11;

    info!(
        "Pins: green GPIO{}, yellow GPIO{}, red GPIO{}, buzzer GPIO{}/GPIO{}, trigger GPIO{}, echo GPIO{}",
        green_pin.number(),
        yellow_pin.number(),
        red_pin.number(),
        buzzer_a_pin.number(),
        buzzer_b_pin.number(),
        trigger_pin.number(),
        echo_pin.number()
    );

    // Ausgänge: Grün an, alles andere aus (wie nach CrossingController::init)
    let green = Output::new(green_pin, Level::High, OutputConfig::default());
    let yellow = Output::new(yellow_pin, Level::Low, OutputConfig::default());
    let red = Output::new(red_pin, Level::Low, OutputConfig::default());
    let trigger = Output::new(trigger_pin, Level::Low, OutputConfig::default());

    // Echo: Pull-Down, damit ein abgezogener Sensor als "kein Echo" gilt
    let echo = Input::new(echo_pin, InputConfig::default().with_pull(Pull::Down));

    // Buzzer an LEDC-Kanälen, stumm bis zum ersten Ton
    let buzzers = Buzzers::new(peripherals.LEDC, buzzer_a_pin, buzzer_b_pin);

    let io = EspHardwareIo::new(trigger, echo, green, yellow, red, buzzers);
    spawner.spawn(crossing_task(io)).unwrap();

    info!("Fußgängerampel gestartet");

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
