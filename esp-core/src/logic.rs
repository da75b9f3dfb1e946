//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use core::ops::RangeInclusive;
use core::time::Duration;

use crate::config::SPEED_OF_SOUND_CM_PER_US;
use crate::types::DistanceReading;

/// Rechnet die Echo-Pulsdauer in eine Entfernung um
///
/// Der Schall legt den Weg zweimal zurück (hin und zurück), daher `/ 2`.
///
/// # Beispiele
///
/// ```
/// # use core::time::Duration;
/// # use esp_core::echo_to_cm;
/// let cm = echo_to_cm(Duration::from_micros(1000));
/// assert!((cm - 17.15).abs() < 0.001);
/// ```
pub fn echo_to_cm(elapsed: Duration) -> f32 {
    elapsed.as_micros() as f32 * SPEED_OF_SOUND_CM_PER_US / 2.0
}

/// Mittelwertbildung über die plausiblen Einzelmessungen eines Zyklus
///
/// Unplausible Werte werden verworfen, nicht als 0 mitgezählt.
#[derive(Debug, Clone)]
pub struct SampleAverager {
    plausible_cm: RangeInclusive<f32>,
    sum_cm: f32,
    accepted: u8,
}

impl SampleAverager {
    pub fn new(plausible_cm: RangeInclusive<f32>) -> Self {
        Self {
            plausible_cm,
            sum_cm: 0.0,
            accepted: 0,
        }
    }

    /// Nimmt eine Einzelmessung auf, gibt `false` zurück wenn sie verworfen wurde
    pub fn push(&mut self, cm: f32) -> bool {
        if !self.plausible_cm.contains(&cm) {
            return false;
        }
        self.sum_cm += cm;
        self.accepted += 1;
        true
    }

    pub fn accepted(&self) -> u8 {
        self.accepted
    }

    /// Mittelwert, oder `DistanceReading::NONE` ohne gültige Messung
    pub fn reading(&self) -> DistanceReading {
        match self.accepted {
            0 => DistanceReading::NONE,
            n => DistanceReading::from_cm(self.sum_cm / f32::from(n)),
        }
    }
}
