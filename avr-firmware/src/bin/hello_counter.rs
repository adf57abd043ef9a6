#![no_std]
#![no_main]

use panic_halt as _;

use avr_workshop::GreetingMode;
use avr_workshop::tasks::hello_task;

/// Wie `hello`, hängt aber einen fortlaufenden Zähler an jede Zeile.
#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();

    hello_task(dp, GreetingMode::Counting)
}
