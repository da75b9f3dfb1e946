//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Typen und die komplette Ampel-Logik:
//! Entfernungsmessung, Zustandsautomat und Signaltöne.

#![no_std]

pub mod config;
pub mod controller;
pub mod cue;
pub mod logic;
pub mod sensor;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use config::{CrossingConfig, SensorConfig, TransitionLights};
pub use controller::{CrossingController, StepOutcome};
pub use cue::{AudioCue, CuePattern, CueTiming, Note};
pub use logic::{SampleAverager, echo_to_cm};
pub use sensor::{RangeSensor, SensorError};
pub use traits::{HardwareIo, HwError};
pub use types::{
    DistanceReading, EchoEdge, Level, LightOutputs, LogEvent, Pin, PinMode, SignalPhase,
    Timestamp, ToneHandle,
};
