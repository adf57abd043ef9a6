// Task-Modul: Enthält die beiden Hauptschleifen
//
// Jede Schleife läuft allein auf der CPU (kein Scheduler, keine Interrupts).
// Die *_logic Funktionen sind generisch über die Hardware-Traits,
// die *_task Funktionen verdrahten echte Peripherie.

pub mod hello;
pub mod pwm;

// Re-export Tasks für einfachen Import
pub use hello::{hello_logic, hello_task};
pub use pwm::{pwm_logic, pwm_task};
