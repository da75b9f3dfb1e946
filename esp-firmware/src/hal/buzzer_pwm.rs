// LEDC-PWM für die beiden passiven Buzzer
//
// Jeder Buzzer hat einen eigenen LEDC-Timer, der beim Start auf die Frequenz
// seiner Note eingestellt wird. Ein Ton ist nur noch ein Tastverhältnis auf
// dem Kanal, Stille ist 0 %.

use defmt::info;
use esp_core::HwError;
use esp_core::cue::{NOTE_DING_HZ, NOTE_DONG_HZ};
use esp_hal::gpio::DriveMode;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::ledc::channel::{self, Channel, ChannelIFace};
use esp_hal::ledc::timer::{self, Timer, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;
use static_cell::StaticCell;

use crate::config::BUZZER_DUTY_RESOLUTION;

/// Buzzer-Kanal
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Buzzer {
    A,
    B,
}

/// Ein Buzzer an einem LEDC-Kanal mit fester Frequenz
pub struct BuzzerChannel {
    channel: Channel<'static, LowSpeed>,
    frequency_hz: u32,
}

impl BuzzerChannel {
    /// Setzt das Tastverhältnis, wenn die Frequenz zum Timer passt
    pub fn start(&mut self, frequency_hz: u32, duty_percent: u8) -> Result<(), HwError> {
        if frequency_hz != self.frequency_hz {
            return Err(HwError::UnsupportedFrequency);
        }
        self.channel
            .set_duty(duty_percent.min(100))
            .map_err(|_| HwError::PwmFailed)
    }

    /// Tastverhältnis 0 %, der Pin bleibt low
    pub fn stop(&mut self) -> Result<(), HwError> {
        self.channel.set_duty(0).map_err(|_| HwError::PwmFailed)
    }

    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }
}

/// Beide Buzzer
pub struct Buzzers {
    a: BuzzerChannel,
    b: BuzzerChannel,
}

impl Buzzers {
    /// Initialisiert LEDC, zwei Timer und zwei Kanäle
    ///
    /// Buzzer A läuft auf Timer0/Channel0 mit `NOTE_DING_HZ`, Buzzer B auf
    /// Timer1/Channel1 mit `NOTE_DONG_HZ`. Die Kanäle starten stumm.
    /// Darf nur einmal aufgerufen werden (StaticCells).
    ///
    /// # Parameter
    /// - `ledc`: LEDC Peripheral
    /// - `pin_a` / `pin_b`: Ausgänge der beiden Buzzer
    pub fn new(
        ledc: esp_hal::peripherals::LEDC<'static>,
        pin_a: impl PeripheralOutput<'static>,
        pin_b: impl PeripheralOutput<'static>,
    ) -> Self {
        // Kanäle halten eine Referenz auf ihren Timer, daher 'static
        static LEDC: StaticCell<Ledc<'static>> = StaticCell::new();
        static TIMER_A: StaticCell<Timer<'static, LowSpeed>> = StaticCell::new();
        static TIMER_B: StaticCell<Timer<'static, LowSpeed>> = StaticCell::new();

        let ledc = LEDC.init(Ledc::new(ledc));
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);
        let ledc: &'static Ledc<'static> = ledc;

        let timer_a = TIMER_A.init(ledc.timer::<LowSpeed>(timer::Number::Timer0));
        configure_timer(timer_a, NOTE_DING_HZ);
        let timer_b = TIMER_B.init(ledc.timer::<LowSpeed>(timer::Number::Timer1));
        configure_timer(timer_b, NOTE_DONG_HZ);

        let a = BuzzerChannel {
            channel: silent_channel(ledc, channel::Number::Channel0, timer_a, pin_a),
            frequency_hz: NOTE_DING_HZ,
        };
        let b = BuzzerChannel {
            channel: silent_channel(ledc, channel::Number::Channel1, timer_b, pin_b),
            frequency_hz: NOTE_DONG_HZ,
        };
        info!(
            "Buzzer: A {} Hz, B {} Hz (LEDC)",
            a.frequency_hz(),
            b.frequency_hz()
        );

        Self { a, b }
    }

    pub fn channel(&mut self, buzzer: Buzzer) -> &mut BuzzerChannel {
        match buzzer {
            Buzzer::A => &mut self.a,
            Buzzer::B => &mut self.b,
        }
    }
}

fn configure_timer(ledc_timer: &mut Timer<'static, LowSpeed>, frequency_hz: u32) {
    ledc_timer
        .configure(timer::config::Config {
            duty: BUZZER_DUTY_RESOLUTION,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_hz(frequency_hz),
        })
        .expect("Failed to configure LEDC timer");
}

fn silent_channel(
    ledc: &'static Ledc<'static>,
    number: channel::Number,
    ledc_timer: &'static Timer<'static, LowSpeed>,
    pin: impl PeripheralOutput<'static>,
) -> Channel<'static, LowSpeed> {
    let mut buzzer = ledc.channel(number, pin);
    buzzer
        .configure(channel::config::Config {
            timer: ledc_timer,
            duty_pct: 0,
            drive_mode: DriveMode::PushPull,
        })
        .expect("Failed to configure LEDC channel");
    buzzer
}
