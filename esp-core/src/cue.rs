//! Akustische Signale ("Ding-Dong") für Übergangs- und Rotphase

use core::time::Duration;

use crate::config::TONE_DUTY_PERCENT;
use crate::traits::HardwareIo;
use crate::types::{LogEvent, Pin};

/// Frequenz für "Ding" und "Dong" (G5)
pub const NOTE_DING_HZ: u32 = 784;
pub const NOTE_DONG_HZ: u32 = 784;

/// Eine Note; `frequency_hz == 0` ist eine Pause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub frequency_hz: u32,
    pub duration: Duration,
}

impl Note {
    pub const fn new(frequency_hz: u32, duration_ms: u64) -> Self {
        Self {
            frequency_hz,
            duration: Duration::from_millis(duration_ms),
        }
    }

    pub const fn is_rest(&self) -> bool {
        self.frequency_hz == 0
    }
}

/// Vollständiger Zeitplan eines Signalmusters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueTiming {
    /// Note A ("Ding", Buzzer A) und Note B ("Dong", Buzzer B)
    pub notes: [Note; 2],
    /// Kurze Pause direkt nach jeder Note
    pub gap: Duration,
    /// Zusätzliche Pause nach jeder Note
    pub pause: Duration,
    /// Gesamtdauer, nach der das Muster endet
    pub budget: Duration,
}

impl CueTiming {
    /// Dauer eines Ding-Dong-Paares inklusive Pausen
    pub fn pair_duration(&self) -> Duration {
        self.notes
            .iter()
            .map(|note| note.duration + self.gap + self.pause)
            .sum()
    }
}

/// Signalmuster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CuePattern {
    /// Übergangsphase, längere Töne
    Intermittent,
    /// Rotphase, kurze Klicks
    Continuous,
}

impl CuePattern {
    pub fn timing(self) -> CueTiming {
        match self {
            CuePattern::Intermittent => CueTiming {
                notes: [Note::new(NOTE_DING_HZ, 300), Note::new(NOTE_DONG_HZ, 500)],
                gap: Duration::from_millis(100),
                pause: Duration::from_millis(1000),
                budget: Duration::from_millis(10_000),
            },
            // Rotphase: 30 s
            CuePattern::Continuous => CueTiming {
                notes: [Note::new(NOTE_DING_HZ, 10), Note::new(NOTE_DONG_HZ, 10)],
                gap: Duration::from_millis(100),
                pause: Duration::from_millis(1000),
                budget: Duration::from_millis(30_000),
            },
        }
    }
}

/// Spielt Signalmuster auf den beiden Buzzer-Kanälen
#[derive(Debug, Clone, Copy, Default)]
pub struct AudioCue;

const CHANNELS: [Pin; 2] = [Pin::BuzzerA, Pin::BuzzerB];

impl AudioCue {
    pub fn new() -> Self {
        Self
    }

    /// Spielt ein Muster bis sein Budget aufgebraucht ist
    ///
    /// Kein Abbruch möglich. Gibt die nominell abgespielte Zeit zurück.
    pub async fn play<H: HardwareIo>(&self, hw: &mut H, pattern: CuePattern) -> Duration {
        self.play_timing(hw, &pattern.timing()).await
    }

    /// Wie `play`, aber mit beliebigem Zeitplan
    ///
    /// Das Budget wird erst nach einem vollständigen Paar geprüft; ein leeres
    /// Budget spielt also trotzdem genau ein Paar.
    pub async fn play_timing<H: HardwareIo>(&self, hw: &mut H, timing: &CueTiming) -> Duration {
        let mut elapsed = Duration::ZERO;

        loop {
            for (note, channel) in timing.notes.iter().zip(CHANNELS) {
                self.play_note(hw, channel, *note).await;
                hw.sleep(timing.gap).await;
                hw.sleep(timing.pause).await;
                elapsed += note.duration + timing.gap + timing.pause;
            }

            if elapsed >= timing.budget {
                return elapsed;
            }
        }
    }

    /// Spielt eine einzelne Note auf `channel`
    ///
    /// Pausen (0 Hz) und abgelehnte Töne halten nur die Zeit ein.
    pub async fn play_note<H: HardwareIo>(&self, hw: &mut H, channel: Pin, note: Note) {
        if note.is_rest() {
            hw.sleep(note.duration).await;
            return;
        }

        match hw.pwm_tone(channel, note.frequency_hz, TONE_DUTY_PERCENT) {
            Ok(handle) => {
                hw.sleep(note.duration).await;
                hw.pwm_stop(handle);
            }
            Err(error) => {
                hw.log(LogEvent::ToneFailed { pin: channel, error });
                hw.sleep(note.duration).await;
            }
        }
    }
}
