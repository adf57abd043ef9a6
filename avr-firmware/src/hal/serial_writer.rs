// USART Writer - SerialWriter Implementierung für USART0
//
// Kapselt arduino_hal::DefaultSerial (RX = PD0, TX = PD1) hinter dem
// SerialWriter Trait und stellt zusätzlich ufmt::uWrite für Log-Ausgaben bereit.

use arduino_hal::hal::port::{PD0, PD1};
use arduino_hal::hal::usart::Baudrate;
use arduino_hal::port::Pin;
use arduino_hal::port::mode::{Input, InputMode, Output};
use arduino_hal::{DefaultClock, DefaultSerial};

use avr_core::{SerialError, SerialWriter, UsartTiming};

/// Real Hardware Serial Writer
///
/// Schreibt blockierend (Polling auf UDRE0), ohne Interrupts und ohne Buffer.
pub struct UsartWriter {
    serial: DefaultSerial,
}

impl UsartWriter {
    /// Erstellt einen neuen UsartWriter
    ///
    /// # Parameter
    /// - `usart0`: USART0 Peripheral
    /// - `rx`: PD0 (Arduino D0)
    /// - `tx`: PD1 (Arduino D1), bereits als Output konfiguriert
    /// - `timing`: vorberechnete UBRR0/U2X0 Werte (siehe config::USART_TIMING)
    pub fn new<IMODE: InputMode>(
        usart0: arduino_hal::pac::USART0,
        rx: Pin<Input<IMODE>, PD0>,
        tx: Pin<Output, PD1>,
        timing: UsartTiming,
    ) -> Self {
        let baudrate = Baudrate::<DefaultClock>::with_exact(timing.u2x, timing.ubrr);
        let serial = arduino_hal::Usart::new(usart0, rx, tx, baudrate);
        Self { serial }
    }
}

impl SerialWriter for UsartWriter {
    fn write_byte(&mut self, byte: u8) -> Result<(), SerialError> {
        self.serial.write_byte(byte);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SerialError> {
        self.serial.flush();
        Ok(())
    }
}

// uWrite für uwrite!/uwriteln! (Logging auf derselben Schnittstelle)
impl ufmt::uWrite for UsartWriter {
    type Error = SerialError;

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        SerialWriter::write_str(self, text)
    }
}
