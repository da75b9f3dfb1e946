//! Core Types für die Fußgängerampel
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::time::Duration;

/// Logischer Pin der Ampel
///
/// Die Zuordnung zu echten GPIO-Nummern passiert ausschließlich in der Firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pin {
    /// HC-SR04 Trigger (Ausgang)
    Trigger,
    /// HC-SR04 Echo (Eingang)
    Echo,
    /// Grün für Fahrzeuge
    LightGreen,
    /// Gelb (Übergang)
    LightYellow,
    /// Rot (Fußgänger gehen)
    LightRed,
    BuzzerA,
    BuzzerB,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(on: bool) -> Self {
        if on { Level::High } else { Level::Low }
    }
}

/// Monotoner Zeitstempel in Mikrosekunden
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timestamp(u64);

impl Timestamp {
    pub const fn from_micros(micros: u64) -> Self {
        Self(micros)
    }

    pub const fn as_micros(self) -> u64 {
        self.0
    }

    /// Zeit seit `earlier` (sättigt bei 0, falls `earlier` später liegt)
    pub fn duration_since(self, earlier: Timestamp) -> Duration {
        Duration::from_micros(self.0.saturating_sub(earlier.0))
    }
}

/// Gemittelte Entfernung eines Messzyklus in Zentimetern
///
/// Der Wert `0` ist ein Sentinel ("keine gültige Einzelmessung") und
/// keine physikalische Entfernung.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct DistanceReading(f32);

impl DistanceReading {
    /// Kein gültiges Sample im Messzyklus
    pub const NONE: Self = Self(0.0);

    pub const fn from_cm(cm: f32) -> Self {
        Self(cm)
    }

    pub const fn cm(self) -> f32 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0.0
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DistanceReading {
    fn format(&self, fmt: defmt::Formatter) {
        if self.is_none() {
            defmt::write!(fmt, "--- cm (keine gültige Messung)")
        } else {
            defmt::write!(fmt, "{=f32} cm", self.0)
        }
    }
}

/// Phase der Ampel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalPhase {
    /// Grün für Fahrzeuge, Sensor wird abgefragt
    #[default]
    VehicleGreen,
    /// Fußgänger erkannt, Fahrzeuge dürfen die Kreuzung noch räumen
    PedestrianHold,
    /// Übergang mit intermittierendem Signalton
    TransitionYellow,
    /// Rot für Fahrzeuge, Fußgänger gehen (kontinuierlicher Signalton)
    PedestrianCrossing,
}

/// Zustand der drei Ampel-Ausgänge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightOutputs {
    pub green: bool,
    pub yellow: bool,
    pub red: bool,
}

impl LightOutputs {
    pub const GREEN: Self = Self::new(true, false, false);
    pub const YELLOW: Self = Self::new(false, true, false);
    pub const RED: Self = Self::new(false, false, true);

    pub const fn new(green: bool, yellow: bool, red: bool) -> Self {
        Self { green, yellow, red }
    }
}

/// Flanke des Echo-Pulses, auf die gewartet wurde
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EchoEdge {
    Rising,
    Falling,
}

/// Handle auf einen laufenden Ton
///
/// Wird von `HardwareIo::pwm_tone` ausgegeben und von `pwm_stop` verbraucht.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneHandle {
    pin: Pin,
}

impl ToneHandle {
    pub const fn new(pin: Pin) -> Self {
        Self { pin }
    }

    pub const fn pin(&self) -> Pin {
        self.pin
    }
}

/// Diagnose-Ereignisse der Core-Logik
///
/// Werden über `HardwareIo::log` nach außen gereicht; die Firmware gibt sie
/// per defmt aus.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogEvent {
    /// Ergebnis eines Messzyklus
    Distance(DistanceReading),
    /// Echo-Pin hat innerhalb des Timeouts nicht gewechselt
    SensorTimeout { edge: EchoEdge },
    PhaseChanged { from: SignalPhase, to: SignalPhase },
    ToneFailed { pin: Pin, error: crate::HwError },
}
