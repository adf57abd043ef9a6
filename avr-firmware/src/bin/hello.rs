// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von arduino_hal::entry bereitgestellt)
#![no_main]

// Panic: CPU anhalten
use panic_halt as _;

use avr_workshop::GreetingMode;
use avr_workshop::tasks::hello_task;

/// Main Entry Point
///
/// Schreibt jede Sekunde "Hello World" auf USART0.
#[arduino_hal::entry]
fn main() -> ! {
    // take() liefert nur beim ersten Aufruf Some
    let dp = arduino_hal::Peripherals::take().unwrap();

    hello_task(dp, GreetingMode::Plain)
}
