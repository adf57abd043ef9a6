//! Eine Iteration der Hauptschleifen
//!
//! Die Firmware ruft diese Funktionen in `loop {}` auf. Fehler werden auf
//! dem Log-Writer gemeldet und zusätzlich zurückgegeben, die Schleife läuft weiter.

use embedded_hal::delay::DelayNs;
use ufmt::uWrite;

use crate::logic::{Greeter, set_percent};
use crate::traits::{PwmError, PwmOutput, SerialError, SerialWriter};
use crate::types::{DutyCycle, Percent};

/// Hello-Schleife: Zeile schreiben, flushen, `interval_ms` warten
///
/// Die Pause wird auch nach einem Fehler eingehalten.
pub fn hello_step<W, D>(
    greeter: &mut Greeter,
    writer: &mut W,
    delay: &mut D,
    interval_ms: u32,
) -> Result<(), SerialError>
where
    W: SerialWriter + uWrite<Error = SerialError>,
    D: DelayNs,
{
    let result = greeter.greet(writer).and_then(|()| writer.flush());
    if let Err(e) = result {
        crate::error!(writer, "Greeting failed: {}", e);
    }

    delay.delay_ms(interval_ms);
    result
}

/// PWM-Schleife: Duty Cycle erneut setzen (wie pwm0_set_percent im Polling-Loop)
pub fn pwm_step<P, W>(pwm: &mut P, percent: Percent, console: &mut W) -> Result<DutyCycle, PwmError>
where
    P: PwmOutput,
    W: uWrite,
{
    let result = set_percent(pwm, percent.get());
    if let Err(e) = result {
        crate::error!(console, "Setting duty failed: {}", e);
    }
    result
}
