//! Zustandsautomat der Fußgängerampel
//!
//! Grün für Fahrzeuge, bis der Sensor einen Fußgänger im Erkennungsfenster
//! meldet. Danach läuft die komplette Sequenz ohne Abbruch durch:
//!
//! ```text
//! VehicleGreen → PedestrianHold → TransitionYellow → PedestrianCrossing → VehicleGreen
//!                  (10 s)          (Intermittent)     (Continuous)
//! ```

use crate::config::CrossingConfig;
use crate::cue::{AudioCue, CuePattern};
use crate::sensor::RangeSensor;
use crate::traits::HardwareIo;
use crate::types::{DistanceReading, Level, LogEvent, Pin, PinMode, SignalPhase};

/// Ergebnis eines Schleifendurchlaufs
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// Kein Fußgänger erkannt, Ampel bleibt grün
    Idle(DistanceReading),
    /// Fußgänger erkannt, komplette Sequenz wurde durchlaufen
    Crossed(DistanceReading),
}

pub struct CrossingController {
    config: CrossingConfig,
    sensor: RangeSensor,
    cue: AudioCue,
    phase: SignalPhase,
}

impl CrossingController {
    pub fn new(config: CrossingConfig) -> Self {
        Self {
            sensor: RangeSensor::new(config.sensor.clone()),
            cue: AudioCue::new(),
            phase: SignalPhase::VehicleGreen,
            config,
        }
    }

    pub fn phase(&self) -> SignalPhase {
        self.phase
    }

    pub fn config(&self) -> &CrossingConfig {
        &self.config
    }

    /// Initialisiert Pin-Modi und setzt alle Ausgänge auf den Grundzustand
    pub fn init<H: HardwareIo>(&mut self, hw: &mut H) {
        for pin in [
            Pin::LightGreen,
            Pin::LightYellow,
            Pin::LightRed,
            Pin::BuzzerA,
            Pin::BuzzerB,
            Pin::Trigger,
        ] {
            hw.set_pin_mode(pin, PinMode::Output);
        }
        hw.set_pin_mode(Pin::Echo, PinMode::Input);

        self.reset_outputs(hw);
    }

    /// Hauptschleife, kehrt nie zurück
    pub async fn run<H: HardwareIo>(&mut self, hw: &mut H) -> ! {
        self.init(hw);
        loop {
            self.step(hw).await;
        }
    }

    /// Ein Durchlauf: messen, ggf. Sequenz fahren, Abfrageintervall abwarten
    pub async fn step<H: HardwareIo>(&mut self, hw: &mut H) -> StepOutcome {
        let reading = self.sensor.measure(hw).await;
        hw.log(LogEvent::Distance(reading));

        let outcome = if self.config.is_detection(reading) {
            self.run_crossing_sequence(hw).await;
            StepOutcome::Crossed(reading)
        } else {
            // Grün erneut setzen (idempotent)
            self.enter(hw, SignalPhase::VehicleGreen);
            StepOutcome::Idle(reading)
        };

        hw.sleep(self.config.poll_interval).await;
        outcome
    }

    /// Komplette Fußgänger-Sequenz, läuft immer bis zum Ende
    pub async fn run_crossing_sequence<H: HardwareIo>(&mut self, hw: &mut H) {
        self.enter(hw, SignalPhase::PedestrianHold);
        hw.sleep(self.config.hold).await;

        self.enter(hw, SignalPhase::TransitionYellow);
        self.cue.play(hw, CuePattern::Intermittent).await;

        self.enter(hw, SignalPhase::PedestrianCrossing);
        self.cue.play(hw, CuePattern::Continuous).await;

        self.reset_outputs(hw);
    }

    /// Zurück in den Grundzustand: Grün, Buzzer aus, Trigger low
    fn reset_outputs<H: HardwareIo>(&mut self, hw: &mut H) {
        self.enter(hw, SignalPhase::VehicleGreen);
        hw.digital_write(Pin::BuzzerA, Level::Low);
        hw.digital_write(Pin::BuzzerB, Level::Low);
        hw.digital_write(Pin::Trigger, Level::Low);
    }

    /// Wechselt die Phase und schreibt alle drei Lampen
    ///
    /// Kein `await` zwischen den Schreibzugriffen, es gibt also keinen
    /// beobachtbaren Zwischenzustand.
    fn enter<H: HardwareIo>(&mut self, hw: &mut H, phase: SignalPhase) {
        if phase != self.phase {
            hw.log(LogEvent::PhaseChanged {
                from: self.phase,
                to: phase,
            });
            self.phase = phase;
        }

        let lights = self.config.lights_for(phase);
        hw.digital_write(Pin::LightGreen, lights.green.into());
        hw.digital_write(Pin::LightYellow, lights.yellow.into());
        hw.digital_write(Pin::LightRed, lights.red.into());
    }
}

impl Default for CrossingController {
    fn default() -> Self {
        Self::new(CrossingConfig::default())
    }
}
