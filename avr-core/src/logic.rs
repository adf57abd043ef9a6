//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::traits::{PwmError, PwmOutput, SerialError, SerialWriter};
use crate::types::{DutyCycle, GreetingMode, MAX_PERCENT, Percent, Prescaler, UsartTiming};

/// Text der Hello-World Schleife (inklusive Leerzeichen vor dem Zähler)
pub const GREETING: &str = "Hello World ";

/// Zeilenende für serielle Terminals (CR + LF)
pub const LINE_ENDING: &str = "\r\n";

/// Zählerbreite von Timer0 im Fast-PWM Modus (TOP = 0xFF)
const TIMER0_STEPS: u32 = 256;

/// Skaliert einen Prozentwert (0-100) auf den OCR0A Compare-Wert (0-255)
///
/// Werte über 100 werden auf 100 begrenzt, das Ergebnis wird gerundet:
/// round(percent / 100 × 255).
///
/// # Beispiele
///
/// ```
/// # use avr_core::duty_from_percent;
/// assert_eq!(duty_from_percent(0).compare(), 0);
/// assert_eq!(duty_from_percent(50).compare(), 128);
/// assert_eq!(duty_from_percent(60).compare(), 153);
/// assert_eq!(duty_from_percent(100).compare(), 255);
/// assert_eq!(duty_from_percent(200).compare(), 255);
/// ```
pub const fn duty_from_percent(percent: u8) -> DutyCycle {
    let percent = Percent::saturating(percent).get() as u16;
    let half = MAX_PERCENT as u16 / 2;
    DutyCycle::from_compare(((percent * u8::MAX as u16 + half) / MAX_PERCENT as u16) as u8)
}

/// Setzt den Duty Cycle eines PWM-Kanals in Prozent
///
/// Gibt den tatsächlich geschriebenen Compare-Wert zurück.
pub fn set_percent<P: PwmOutput + ?Sized>(pwm: &mut P, percent: u8) -> Result<DutyCycle, PwmError> {
    let duty = duty_from_percent(percent);
    pwm.set_duty(duty)?;
    Ok(duty)
}

/// PWM-Frequenz im Fast-PWM Modus: f_PWM = f_clk / (N × 256)
///
/// ```
/// # use avr_core::{pwm_frequency_hz, Prescaler};
/// assert_eq!(pwm_frequency_hz(16_000_000, Prescaler::Div64), 976);
/// ```
pub const fn pwm_frequency_hz(cpu_hz: u32, prescaler: Prescaler) -> u32 {
    cpu_hz / (prescaler.divisor() as u32 * TIMER0_STEPS)
}

impl UsartTiming {
    /// Berechnet UBRR0/U2X0 für eine Baudrate
    ///
    /// Zuerst Double-Speed, Fallback auf Normal-Speed wenn der Teiler nicht
    /// in 12 Bit passt. 57600 Bd bei 16 MHz läuft immer im Normal-Modus,
    /// sonst verschluckt sich der Arduino-Bootloader-Takt.
    ///
    /// `None` bei Baudrate 0 oder wenn die Rate mit dem Takt nicht erreichbar ist.
    pub const fn for_baud(cpu_hz: u32, baud: u32) -> Option<Self> {
        if baud == 0 || cpu_hz / 8 / baud == 0 {
            return None;
        }

        let mut ubrr = (cpu_hz / 4 / baud - 1) / 2;
        let mut u2x = true;

        if (cpu_hz == 16_000_000 && baud == 57_600) || ubrr > 4095 {
            u2x = false;
            ubrr = (cpu_hz / 8 / baud - 1) / 2;
        }

        if ubrr > 4095 {
            return None;
        }

        Some(Self {
            ubrr: ubrr as u16,
            u2x,
        })
    }

    /// Tatsächlich erreichte Baudrate
    pub const fn actual_baud(&self, cpu_hz: u32) -> u32 {
        let samples = if self.u2x { 8 } else { 16 };
        cpu_hz / (samples * (self.ubrr as u32 + 1))
    }

    /// Abweichung von der angeforderten Baudrate in Promille
    ///
    /// `None` bei Baudrate 0 oder Überlauf.
    pub const fn error_permille(&self, cpu_hz: u32, baud: u32) -> Option<u32> {
        let actual = self.actual_baud(cpu_hz);
        match actual.abs_diff(baud).checked_mul(1000) {
            Some(scaled) => scaled.checked_div(baud),
            None => None,
        }
    }
}

/// Parst eine Dezimalzahl aus ASCII-Ziffern (const, für Build-Konfiguration)
///
/// Kein Vorzeichen, keine Leerzeichen. `None` bei leerem Text,
/// ungültigen Zeichen oder Überlauf.
///
/// ```
/// # use avr_core::parse_decimal;
/// assert_eq!(parse_decimal("9600"), Some(9600));
/// assert_eq!(parse_decimal("96O0"), None);
/// ```
pub const fn parse_decimal(text: &str) -> Option<u32> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if !byte.is_ascii_digit() {
            return None;
        }
        value = match value.checked_mul(10) {
            Some(v) => v,
            None => return None,
        };
        value = match value.checked_add((byte - b'0') as u32) {
            Some(v) => v,
            None => return None,
        };
        i += 1;
    }
    Some(value)
}

/// Erzeugt die Zeilen der Hello-World Schleife
///
/// Im Modus `Counting` wird der Zähler nach jeder geschriebenen Zahl erhöht
/// (wrapping bei `u32::MAX`).
#[derive(Debug, Clone)]
pub struct Greeter {
    mode: GreetingMode,
    counter: u32,
}

impl Greeter {
    pub const fn new(mode: GreetingMode) -> Self {
        Self { mode, counter: 0 }
    }

    pub const fn mode(&self) -> GreetingMode {
        self.mode
    }

    /// Nächster Zählerwert der ausgegeben wird
    pub const fn counter(&self) -> u32 {
        self.counter
    }

    /// Schreibt eine Zeile auf den seriellen Ausgang
    pub fn greet<W: SerialWriter + ?Sized>(&mut self, writer: &mut W) -> Result<(), SerialError> {
        writer.write_str(GREETING)?;

        if self.mode == GreetingMode::Counting {
            let mut buffer = itoa::Buffer::new();
            writer.write_str(buffer.format(self.counter))?;
            self.counter = self.counter.wrapping_add(1);
        }

        writer.write_str(LINE_ENDING)
    }
}
