//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.
//!
//! Verzögerungen laufen über `embedded_hal::delay::DelayNs` (siehe steps.rs).

use crate::types::DutyCycle;

/// Fehler-Typ für serielle Ausgabe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    WriteFailed,
}

/// Fehler-Typ für PWM-Ausgabe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmError {
    Unavailable,
}

/// Trait für serielle Byte-Ausgabe (USART TX)
///
/// # Implementierungen
/// - **Production:** UsartWriter (ATmega328P USART0)
/// - **Testing:** MockSerialWriter (in-memory Mock)
pub trait SerialWriter {
    /// Schreibt ein einzelnes Byte (blockierend)
    fn write_byte(&mut self, byte: u8) -> Result<(), SerialError>;

    /// Schreibt einen String Byte für Byte
    ///
    /// Bricht beim ersten fehlgeschlagenen Byte ab.
    fn write_str(&mut self, text: &str) -> Result<(), SerialError> {
        for byte in text.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Wartet bis das Senderegister leer ist
    fn flush(&mut self) -> Result<(), SerialError> {
        Ok(())
    }
}

/// Trait für einen PWM-Kanal mit 8-Bit Compare-Register
///
/// # Implementierungen
/// - **Production:** Timer0PwmOutput (OC0A auf PD6)
/// - **Testing:** MockPwmOutput (in-memory Mock)
pub trait PwmOutput {
    /// Schreibt den Compare-Wert
    ///
    /// Die Hardware übernimmt ihn zum nächsten Periodenbeginn
    /// (OCR0A ist im Fast-PWM Modus double-buffered).
    fn set_duty(&mut self, duty: DutyCycle) -> Result<(), PwmError>;
}

#[cfg(feature = "ufmt")]
impl ufmt::uDisplay for SerialError {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        match self {
            SerialError::WriteFailed => f.write_str("serial write failed"),
        }
    }
}

#[cfg(feature = "ufmt")]
impl ufmt::uDisplay for PwmError {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        match self {
            PwmError::Unavailable => f.write_str("pwm output unavailable"),
        }
    }
}
