// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus avr-core,
// damit die Schleifen-Logik auf dem Host testbar bleibt.

pub mod pwm_output;
pub mod serial_writer;

pub use pwm_output::Timer0PwmOutput;
pub use serial_writer::UsartWriter;
