// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von arduino_hal::entry bereitgestellt)
#![no_main]

// Panic: CPU anhalten
use panic_halt as _;

use avr_workshop::tasks::pwm_task;

/// Main Entry Point
///
/// Startet Timer0 Fast PWM auf PD6 (~976 Hz) und hält den konfigurierten
/// Duty Cycle (pwm0_set_percent(0) = Motor aus, 50 = halbe, 100 = volle Drehzahl).
#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();

    pwm_task(dp)
}
