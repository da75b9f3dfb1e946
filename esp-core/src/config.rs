//! Kompilierzeit-Konfiguration der Ampel-Logik
//!
//! Alle Zeiten und Schwellwerte der Fußgängerampel an einer Stelle.

use core::ops::RangeInclusive;
use core::time::Duration;

use crate::types::{DistanceReading, LightOutputs, SignalPhase};

/// Schallgeschwindigkeit in cm/µs (bei ca. 20 °C)
pub const SPEED_OF_SOUND_CM_PER_US: f32 = 0.0343;

/// Tastverhältnis der Buzzer-Töne in Prozent
pub const TONE_DUTY_PERCENT: u8 = 50;

/// Parameter für den Ultraschallsensor (HC-SR04)
#[derive(Debug, Clone, PartialEq)]
pub struct SensorConfig {
    /// Anzahl Einzelmessungen pro Messzyklus
    pub samples: u8,
    /// Länge des Trigger-Pulses
    pub trigger_pulse: Duration,
    /// Pause zwischen zwei Einzelmessungen
    pub sample_interval: Duration,
    /// Maximale Wartezeit pro Echo-Flanke.
    /// Der HC-SR04 liefert ohne Hindernis einen ~38 ms Puls, der muss noch
    /// durchpassen (wird dann vom Plausibilitätsfenster verworfen).
    pub echo_timeout: Duration,
    /// Plausibilitätsfenster für Einzelmessungen in cm
    pub plausible_cm: RangeInclusive<f32>,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            samples: 5,
            trigger_pulse: Duration::from_micros(10),
            sample_interval: Duration::from_millis(10),
            echo_timeout: Duration::from_millis(40),
            plausible_cm: 2.0..=400.0,
        }
    }
}

/// Ausgänge während der Übergangsphase
///
/// Die ursprüngliche Verdrahtung hatte keine eigene gelbe Lampe und hat
/// Grün und Rot gemeinsam eingeschaltet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionLights {
    /// Nur die gelbe Lampe
    #[default]
    DedicatedYellow,
    /// Grün und Rot gleichzeitig
    GreenAndRed,
}

/// Konfiguration des Ampel-Zustandsautomaten
#[derive(Debug, Clone, PartialEq)]
pub struct CrossingConfig {
    pub sensor: SensorConfig,
    /// Erkennungsfenster für Fußgänger in cm (Grenzen inklusive)
    pub detection_cm: RangeInclusive<f32>,
    /// Pause zwischen zwei Messzyklen in der Grünphase
    pub poll_interval: Duration,
    /// Wartezeit nach Erkennung, damit Fahrzeuge die Kreuzung räumen
    pub hold: Duration,
    pub transition_lights: TransitionLights,
}

impl Default for CrossingConfig {
    fn default() -> Self {
        Self {
            sensor: SensorConfig::default(),
            detection_cm: 30.0..=150.0,
            poll_interval: Duration::from_millis(100),
            hold: Duration::from_secs(10),
            transition_lights: TransitionLights::default(),
        }
    }
}

impl CrossingConfig {
    /// Liegt die Messung im Erkennungsfenster?
    ///
    /// Das Sentinel `0` liegt nie im Fenster, solange das Fenster bei > 0 beginnt.
    pub fn is_detection(&self, reading: DistanceReading) -> bool {
        !reading.is_none() && self.detection_cm.contains(&reading.cm())
    }

    /// Lampen-Zustand einer Phase
    pub fn lights_for(&self, phase: SignalPhase) -> LightOutputs {
        match phase {
            SignalPhase::VehicleGreen | SignalPhase::PedestrianHold => LightOutputs::GREEN,
            SignalPhase::TransitionYellow => match self.transition_lights {
                TransitionLights::DedicatedYellow => LightOutputs::YELLOW,
                TransitionLights::GreenAndRed => LightOutputs::new(true, false, true),
            },
            SignalPhase::PedestrianCrossing => LightOutputs::RED,
        }
    }
}
