//! Simulierte Hardware für die Host-Tests
//!
//! Die Uhr läuft nur durch `sleep` und durch jedes Lesen des Echo-Pins
//! (1 µs pro Lesezugriff). Echo-Pulse werden per Skript vorgegeben.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use esp_core::{
    HardwareIo, HwError, Level, LightOutputs, LogEvent, Pin, PinMode, SignalPhase, Timestamp,
    ToneHandle, config::SPEED_OF_SOUND_CM_PER_US,
};

/// Verzögerung zwischen Trigger-Ende und steigender Echo-Flanke
const ECHO_DELAY_US: u64 = 200;

/// Skriptierte Antwort des Sensors auf einen Trigger-Puls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EchoPulse {
    /// Echo-Puls mit dieser Länge in µs
    Width(u64),
    /// Echo bleibt low
    Silent,
    /// Echo geht high und bleibt high
    StuckHigh,
}

impl EchoPulse {
    /// Puls, der genau `cm` entspricht
    pub fn for_cm(cm: f32) -> Self {
        EchoPulse::Width((cm * 2.0 / SPEED_OF_SOUND_CM_PER_US).round() as u64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneRecord {
    pub pin: Pin,
    pub frequency_hz: u32,
    pub duty_percent: u8,
    pub started: Timestamp,
    pub stopped: Option<Timestamp>,
}

#[derive(Default)]
pub struct MockHardwareIo {
    now_us: u64,
    pub pin_modes: HashMap<Pin, PinMode>,
    levels: HashMap<Pin, Level>,
    pulses: VecDeque<EchoPulse>,
    echo_high_from: Option<u64>,
    echo_high_until: Option<u64>,
    /// Lampen-Zustand nach jedem Schreibzugriff auf eine Lampe
    pub light_history: Vec<LightOutputs>,
    pub tones: Vec<ToneRecord>,
    pub events: Vec<LogEvent>,
    pub trigger_count: usize,
    pub sleep_total: Duration,
    /// Simuliere Fehler beim nächsten pwm_tone()
    pub fail_next_tone: bool,
    /// Feste Frequenz je Buzzer (A, B) wie bei den LEDC-Timern der Firmware
    pub buzzer_hz: Option<(u32, u32)>,
}

impl MockHardwareIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_pulse(&mut self, pulse: EchoPulse) {
        self.pulses.push_back(pulse);
    }

    /// Skriptet einen kompletten Messzyklus (5 Samples) mit derselben Entfernung
    pub fn push_reading_cm(&mut self, cm: f32) {
        for _ in 0..5 {
            self.push_pulse(EchoPulse::for_cm(cm));
        }
    }

    pub fn level(&self, pin: Pin) -> Level {
        self.levels.get(&pin).copied().unwrap_or(Level::Low)
    }

    pub fn lights(&self) -> LightOutputs {
        LightOutputs::new(
            self.level(Pin::LightGreen) == Level::High,
            self.level(Pin::LightYellow) == Level::High,
            self.level(Pin::LightRed) == Level::High,
        )
    }

    /// Läuft auf `pin` gerade ein Ton?
    pub fn tone_active(&self, pin: Pin) -> bool {
        self.tones
            .iter()
            .any(|tone| tone.pin == pin && tone.stopped.is_none())
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_micros(self.now_us)
    }

    pub fn phase_changes(&self) -> Vec<(SignalPhase, SignalPhase)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                LogEvent::PhaseChanged { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn timeouts(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, LogEvent::SensorTimeout { .. }))
            .count()
    }

    fn arm_echo(&mut self) {
        self.trigger_count += 1;
        let rise = self.now_us + ECHO_DELAY_US;
        let (from, until) = match self.pulses.pop_front().unwrap_or(EchoPulse::Silent) {
            EchoPulse::Width(width) => (Some(rise), Some(rise + width)),
            EchoPulse::Silent => (None, None),
            EchoPulse::StuckHigh => (Some(rise), None),
        };
        self.echo_high_from = from;
        self.echo_high_until = until;
    }

    fn echo_level(&self) -> Level {
        let high = match (self.echo_high_from, self.echo_high_until) {
            (Some(from), Some(until)) => self.now_us >= from && self.now_us < until,
            (Some(from), None) => self.now_us >= from,
            _ => false,
        };
        high.into()
    }
}

impl HardwareIo for MockHardwareIo {
    fn set_pin_mode(&mut self, pin: Pin, mode: PinMode) {
        self.pin_modes.insert(pin, mode);
    }

    fn digital_write(&mut self, pin: Pin, level: Level) {
        let previous = self.level(pin);
        self.levels.insert(pin, level);

        match pin {
            Pin::Trigger if previous == Level::High && level == Level::Low => self.arm_echo(),
            Pin::LightGreen | Pin::LightYellow | Pin::LightRed => {
                let lights = self.lights();
                self.light_history.push(lights);
            }
            _ => {}
        }
    }

    fn digital_read(&mut self, pin: Pin) -> Level {
        self.now_us += 1;
        match pin {
            Pin::Echo => self.echo_level(),
            other => self.level(other),
        }
    }

    fn pwm_tone(
        &mut self,
        pin: Pin,
        frequency_hz: u32,
        duty_percent: u8,
    ) -> Result<ToneHandle, HwError> {
        if self.fail_next_tone {
            self.fail_next_tone = false;
            return Err(HwError::PwmFailed);
        }
        let channel_hz = match (pin, self.buzzer_hz) {
            (Pin::BuzzerA, fixed) => fixed.map(|(a, _)| a),
            (Pin::BuzzerB, fixed) => fixed.map(|(_, b)| b),
            _ => return Err(HwError::NotAToneChannel),
        };
        if channel_hz.is_some_and(|hz| hz != frequency_hz) {
            return Err(HwError::UnsupportedFrequency);
        }

        let started = self.now();
        self.tones.push(ToneRecord {
            pin,
            frequency_hz,
            duty_percent,
            started,
            stopped: None,
        });
        Ok(ToneHandle::new(pin))
    }

    fn pwm_stop(&mut self, handle: ToneHandle) {
        let now = self.now();
        if let Some(tone) = self
            .tones
            .iter_mut()
            .rev()
            .find(|tone| tone.pin == handle.pin() && tone.stopped.is_none())
        {
            tone.stopped = Some(now);
        }
    }

    async fn sleep(&mut self, duration: Duration) {
        self.now_us += duration.as_micros() as u64;
        self.sleep_total += duration;
    }

    fn now(&self) -> Timestamp {
        Timestamp::from_micros(self.now_us)
    }

    fn log(&mut self, event: LogEvent) {
        self.events.push(event);
    }
}
