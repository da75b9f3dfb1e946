//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use core::time::Duration;

use crate::types::{Level, LogEvent, Pin, PinMode, Timestamp, ToneHandle};

/// Fehler-Typ für Hardware-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HwError {
    /// Auf diesem Pin kann kein Ton erzeugt werden
    NotAToneChannel,
    /// Der Kanal ist auf eine andere Frequenz eingestellt
    UnsupportedFrequency,
    /// PWM-Peripherie hat das Tastverhältnis nicht übernommen
    PwmFailed,
}

/// Trait für den Hardware-Zugriff der Ampel
///
/// Einzige Schnittstelle zwischen Ampel-Logik und Hardware. Jede Komponente
/// bekommt den Provider als `&mut` übergeben und hält selbst keine Handles.
///
/// # Implementierungen
/// - **Production:** EspHardwareIo (ESP32-C6 GPIO + LEDC-PWM)
/// - **Testing:** MockHardwareIo (simulierte Uhr und Echo-Pulse)
#[allow(async_fn_in_trait)]
pub trait HardwareIo {
    fn set_pin_mode(&mut self, pin: Pin, mode: PinMode);

    fn digital_write(&mut self, pin: Pin, level: Level);

    fn digital_read(&mut self, pin: Pin) -> Level;

    /// Startet ein Rechtecksignal auf einem Buzzer-Kanal
    ///
    /// # Fehlerbehandlung
    /// Gibt `HwError::NotAToneChannel` zurück wenn `pin` kein Buzzer ist,
    /// `HwError::UnsupportedFrequency` wenn der Kanal die Frequenz nicht kann
    fn pwm_tone(
        &mut self,
        pin: Pin,
        frequency_hz: u32,
        duty_percent: u8,
    ) -> Result<ToneHandle, HwError>;

    fn pwm_stop(&mut self, handle: ToneHandle);

    /// Wartet die angegebene Zeit
    async fn sleep(&mut self, duration: Duration);

    fn now(&self) -> Timestamp;

    fn elapsed(&self, t0: Timestamp, t1: Timestamp) -> Duration {
        t1.duration_since(t0)
    }

    /// Diagnose-Ausgabe, darf ein No-op sein
    fn log(&mut self, _event: LogEvent) {}
}
