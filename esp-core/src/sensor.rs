//! Ultraschall-Entfernungsmessung (HC-SR04)
//!
//! Ein Messzyklus besteht aus mehreren Einzelmessungen, deren plausible
//! Werte gemittelt werden.

use crate::config::SensorConfig;
use crate::logic::{SampleAverager, echo_to_cm};
use crate::traits::HardwareIo;
use crate::types::{DistanceReading, EchoEdge, Level, LogEvent, Pin, Timestamp};

/// Fehler einer Einzelmessung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Echo-Pin hat innerhalb von `echo_timeout` nicht gewechselt
    Timeout { edge: EchoEdge },
}

/// Entfernungssensor
///
/// Hält keine Hardware-Handles; der Provider wird pro Messung übergeben.
#[derive(Debug, Clone, Default)]
pub struct RangeSensor {
    config: SensorConfig,
}

impl RangeSensor {
    pub fn new(config: SensorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Führt einen kompletten Messzyklus durch
    ///
    /// Liefert den Mittelwert der plausiblen Einzelmessungen oder
    /// `DistanceReading::NONE`. Ein Timeout beendet den Zyklus sofort mit
    /// `DistanceReading::NONE`, die bis dahin gesammelten Werte verfallen.
    pub async fn measure<H: HardwareIo>(&self, hw: &mut H) -> DistanceReading {
        let mut averager = SampleAverager::new(self.config.plausible_cm.clone());

        for _ in 0..self.config.samples {
            match self.sample(hw).await {
                Ok(cm) => {
                    averager.push(cm);
                }
                Err(SensorError::Timeout { edge }) => {
                    hw.log(LogEvent::SensorTimeout { edge });
                    return DistanceReading::NONE;
                }
            }

            hw.sleep(self.config.sample_interval).await;
        }

        averager.reading()
    }

    /// Einzelmessung: Trigger-Puls senden und Echo-Dauer in cm umrechnen
    pub async fn sample<H: HardwareIo>(&self, hw: &mut H) -> Result<f32, SensorError> {
        hw.digital_write(Pin::Trigger, Level::High);
        hw.sleep(self.config.trigger_pulse).await;
        hw.digital_write(Pin::Trigger, Level::Low);

        let start = self.wait_for_echo(hw, Level::High)?;
        let end = self.wait_for_echo(hw, Level::Low)?;

        Ok(echo_to_cm(hw.elapsed(start, end)))
    }

    /// Pollt den Echo-Pin bis `level` anliegt oder die Deadline abläuft
    ///
    /// Aktives Warten ohne `await`, damit die Flanken-Zeitstempel nicht durch
    /// andere Tasks verfälscht werden.
    fn wait_for_echo<H: HardwareIo>(
        &self,
        hw: &mut H,
        level: Level,
    ) -> Result<Timestamp, SensorError> {
        let edge = match level {
            Level::High => EchoEdge::Rising,
            Level::Low => EchoEdge::Falling,
        };
        let wait_start = hw.now();

        loop {
            if hw.digital_read(Pin::Echo) == level {
                return Ok(hw.now());
            }
            if hw.elapsed(wait_start, hw.now()) > self.config.echo_timeout {
                return Err(SensorError::Timeout { edge });
            }
        }
    }
}
