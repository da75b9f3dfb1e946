// Task-Modul: Enthält alle Embassy Tasks
//
// Die Ampel-Logik läuft in einem einzigen Task. Die Töne erzeugt die
// LEDC-Peripherie, dafür braucht es keinen eigenen Task.

pub mod crossing;

// Re-export Tasks für einfachen Import
pub use crossing::crossing_task;
