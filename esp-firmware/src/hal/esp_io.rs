// HardwareIo Implementierung für den ESP32-C6
//
// Lampen, Trigger und Echo hängen direkt an GPIOs, die Buzzer an LEDC-Kanälen.

use core::time::Duration;

use defmt::{error, info, warn};
use embassy_time::{Instant, Timer};
use esp_core::{HardwareIo, HwError, Level, LogEvent, Pin, PinMode, Timestamp, ToneHandle};
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, Level as GpioLevel, Output};

use crate::config::BUSY_WAIT_LIMIT_US;
use crate::hal::buzzer_pwm::{Buzzer, Buzzers};

fn gpio_level(level: Level) -> GpioLevel {
    match level {
        Level::High => GpioLevel::High,
        Level::Low => GpioLevel::Low,
    }
}

fn buzzer_for(pin: Pin) -> Option<Buzzer> {
    match pin {
        Pin::BuzzerA => Some(Buzzer::A),
        Pin::BuzzerB => Some(Buzzer::B),
        _ => None,
    }
}

/// Real Hardware I/O
///
/// Die Pins kommen fertig konfiguriert aus main.rs; `set_pin_mode` prüft
/// nur noch, ob die Konfiguration zur Ampel-Logik passt.
pub struct EspHardwareIo<'d> {
    trigger: Output<'d>,
    echo: Input<'d>,
    green: Output<'d>,
    yellow: Output<'d>,
    red: Output<'d>,
    buzzers: Buzzers,
    delay: Delay,
}

impl<'d> EspHardwareIo<'d> {
    /// Erstellt einen neuen EspHardwareIo
    ///
    /// # Parameter
    /// - `trigger` / `echo`: HC-SR04 Anschlüsse
    /// - `green` / `yellow` / `red`: Lampen
    /// - `buzzers`: LEDC-Kanäle der beiden Buzzer
    pub fn new(
        trigger: Output<'d>,
        echo: Input<'d>,
        green: Output<'d>,
        yellow: Output<'d>,
        red: Output<'d>,
        buzzers: Buzzers,
    ) -> Self {
        Self {
            trigger,
            echo,
            green,
            yellow,
            red,
            buzzers,
            delay: Delay::new(),
        }
    }

    fn output(&mut self, pin: Pin) -> Option<&mut Output<'d>> {
        match pin {
            Pin::Trigger => Some(&mut self.trigger),
            Pin::LightGreen => Some(&mut self.green),
            Pin::LightYellow => Some(&mut self.yellow),
            Pin::LightRed => Some(&mut self.red),
            Pin::Echo | Pin::BuzzerA | Pin::BuzzerB => None,
        }
    }
}

impl<'d> HardwareIo for EspHardwareIo<'d> {
    fn set_pin_mode(&mut self, pin: Pin, mode: PinMode) {
        let expected = match pin {
            Pin::Echo => PinMode::Input,
            _ => PinMode::Output,
        };
        if mode != expected {
            warn!("{}: mode {} not supported, wired as {}", pin, mode, expected);
        }
    }

    fn digital_write(&mut self, pin: Pin, level: Level) {
        if let Some(buzzer) = buzzer_for(pin) {
            // Low auf einem Buzzer heißt: Ton aus
            if level == Level::Low
                && let Err(err) = self.buzzers.channel(buzzer).stop()
            {
                warn!("{}: cannot silence: {}", pin, err);
            }
            return;
        }

        match self.output(pin) {
            Some(output) => output.set_level(gpio_level(level)),
            None => warn!("{}: not an output", pin),
        }
    }

    fn digital_read(&mut self, pin: Pin) -> Level {
        match pin {
            Pin::Echo => Level::from(self.echo.is_high()),
            other => match self.output(other) {
                Some(output) => Level::from(output.is_set_high()),
                None => Level::Low,
            },
        }
    }

    fn pwm_tone(
        &mut self,
        pin: Pin,
        frequency_hz: u32,
        duty_percent: u8,
    ) -> Result<ToneHandle, HwError> {
        let buzzer = buzzer_for(pin).ok_or(HwError::NotAToneChannel)?;
        self.buzzers.channel(buzzer).start(frequency_hz, duty_percent)?;
        Ok(ToneHandle::new(pin))
    }

    fn pwm_stop(&mut self, handle: ToneHandle) {
        if let Some(buzzer) = buzzer_for(handle.pin())
            && let Err(err) = self.buzzers.channel(buzzer).stop()
        {
            error!("{}: tone keeps running: {}", handle.pin(), err);
        }
    }

    async fn sleep(&mut self, duration: Duration) {
        let micros = duration.as_micros() as u64;
        if micros < BUSY_WAIT_LIMIT_US {
            self.delay.delay_micros(micros as u32);
        } else {
            Timer::after(embassy_time::Duration::from_micros(micros)).await;
        }
    }

    fn now(&self) -> Timestamp {
        Timestamp::from_micros(Instant::now().as_micros())
    }

    fn log(&mut self, event: LogEvent) {
        match event {
            LogEvent::Distance(reading) => info!("Distance: {}", reading),
            LogEvent::SensorTimeout { edge } => {
                warn!("Sensor: no {} echo edge, treating as no detection", edge)
            }
            LogEvent::PhaseChanged { from, to } => info!("Phase: {} -> {}", from, to),
            LogEvent::ToneFailed { pin, error } => error!("Tone on {} failed: {}", pin, error),
        }
    }
}
