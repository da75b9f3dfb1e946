// Ampel Task - Steuert Lampen, Sensor und Signaltöne
use defmt::info;
use esp_core::{CrossingConfig, CrossingController};

use crate::hal::EspHardwareIo;

/// Ampel Task - Embassy Task für die Fußgängerampel
///
/// Bekommt die fertig initialisierte Hardware und ruft dann die testbare
/// Ampel-Logik aus esp-core auf. Kehrt nie zurück.
///
/// # Parameter
/// - `io`: HardwareIo für Lampen, HC-SR04 und Buzzer
#[embassy_executor::task]
pub async fn crossing_task(mut io: EspHardwareIo<'static>) {
    let config = CrossingConfig::default();
    info!(
        "Crossing: detection window {}..={} cm, hold {} ms, transition {}",
        config.detection_cm.start(),
        config.detection_cm.end(),
        config.hold.as_millis() as u64,
        config.transition_lights
    );

    let mut controller = CrossingController::new(config);
    controller.run(&mut io).await
}
