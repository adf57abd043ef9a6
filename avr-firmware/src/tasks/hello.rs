// Hello Task - Schreibt im Sekundentakt "Hello World" auf USART0
use embedded_hal::delay::DelayNs;
use ufmt::uWrite;

use crate::config::{
    BAUD_RATE, CPU_FREQ_HZ, HELLO_INTERVAL_MS, USART_TIMING, USART_TIMING_ERROR_PERMILLE,
};
use crate::hal::UsartWriter;
use crate::{Greeter, GreetingMode, SerialError, SerialWriter, hello_step, info};

/// Hello Logic - Schleife ohne Hardware-Abhängigkeit
///
/// Schreibt eine Zeile, wartet HELLO_INTERVAL_MS, endlos.
/// Ein fehlgeschlagener Write wird in hello_step geloggt, die Schleife läuft weiter.
///
/// # Trait-basierte Abstraktion
/// - `W: SerialWriter + uWrite`: UsartWriter oder Mock
/// - `D: DelayNs`: arduino_hal::Delay (Busy-Wait) oder Mock
pub fn hello_logic<W, D>(mut writer: W, mut delay: D, mode: GreetingMode) -> !
where
    W: SerialWriter + uWrite<Error = SerialError>,
    D: DelayNs,
{
    let mut greeter = Greeter::new(mode);

    loop {
        let _ = hello_step(&mut greeter, &mut writer, &mut delay, HELLO_INTERVAL_MS);
    }
}

/// Hello Task - initialisiert USART0 und startet die Schleife
///
/// # Parameter
/// - `dp`: Device Peripherals (USART0 + PORTD werden verbraucht)
/// - `mode`: fester Text oder mit Zähler
pub fn hello_task(dp: arduino_hal::Peripherals, mode: GreetingMode) -> ! {
    let pins = arduino_hal::pins!(dp);

    // USART0: RX = D0, TX = D1, 8N1
    let mut writer = UsartWriter::new(dp.USART0, pins.d0, pins.d1.into_output(), USART_TIMING);

    info!(
        writer,
        "USART0 {} Bd ({}, real {} Bd, {} permille off)",
        BAUD_RATE,
        USART_TIMING,
        USART_TIMING.actual_baud(CPU_FREQ_HZ),
        USART_TIMING_ERROR_PERMILLE
    );

    hello_logic(writer, arduino_hal::Delay::new(), mode)
}
