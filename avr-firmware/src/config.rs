// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use avr_core::{Percent, Prescaler, UsartTiming, duty_from_percent, parse_decimal, pwm_frequency_hz};

// ============================================================================
// Takt
// ============================================================================

/// CPU-Taktfrequenz in Hz (Arduino Uno Quarz)
/// Muss zu arduino_hal::DefaultClock passen
pub const CPU_FREQ_HZ: u32 = 16_000_000;

// ============================================================================
// USART Konfiguration
// ============================================================================

/// Baudrate für USART0 (8N1)
/// Kann per AVR_BAUD_RATE in .env überschrieben werden
pub const BAUD_RATE: u32 = match option_env!("AVR_BAUD_RATE") {
    Some(value) => match parse_decimal(value) {
        Some(baud) => baud,
        None => panic!("AVR_BAUD_RATE ist keine Dezimalzahl"),
    },
    None => 9600,
};

/// UBRR0/U2X0 für BAUD_RATE, wird zur Compile-Zeit berechnet
pub const USART_TIMING: UsartTiming = match UsartTiming::for_baud(CPU_FREQ_HZ, BAUD_RATE) {
    Some(timing) => timing,
    None => panic!("AVR_BAUD_RATE ist mit 16 MHz nicht erreichbar"),
};

/// Abweichung der realen Baudrate in Promille (nur für die Startmeldung)
pub const USART_TIMING_ERROR_PERMILLE: u32 = match USART_TIMING.error_permille(CPU_FREQ_HZ, BAUD_RATE) {
    Some(permille) => permille,
    None => panic!("AVR_BAUD_RATE darf nicht 0 sein"),
};

/// Intervall der Hello-World Ausgabe in Millisekunden
pub const HELLO_INTERVAL_MS: u32 = 1000;

// ============================================================================
// PWM Konfiguration (Timer0, OC0A)
// ============================================================================

/// PWM-Ausgang: PD6 = OC0A = Arduino D6
/// Datasheet Table 13-9 "Alternate Port Functions"
pub const PWM_PIN_NAME: &str = "PD6/OC0A";

/// Timer0 Prescaler (CS02:0 = 0,1,1)
pub const PWM_PRESCALER: Prescaler = Prescaler::Div64;

/// Resultierende PWM-Frequenz: 16 MHz / (64 × 256) ≈ 976 Hz
pub const PWM_FREQUENCY_HZ: u32 = pwm_frequency_hz(CPU_FREQ_HZ, PWM_PRESCALER);

/// Duty Cycle direkt nach der Initialisierung (~20 %, OCR0A = 51)
pub const PWM_INITIAL_PERCENT: Percent = Percent::saturating(20);

/// Duty Cycle den die Hauptschleife hält
/// Kann per AVR_PWM_DUTY_PERCENT in .env überschrieben werden (0-100)
pub const PWM_DUTY_PERCENT: Percent = match option_env!("AVR_PWM_DUTY_PERCENT") {
    Some(value) => match parse_decimal(value) {
        Some(percent) if percent <= u8::MAX as u32 => match Percent::new(percent as u8) {
            Some(percent) => percent,
            None => panic!("AVR_PWM_DUTY_PERCENT muss zwischen 0 und 100 liegen"),
        },
        _ => panic!("AVR_PWM_DUTY_PERCENT muss zwischen 0 und 100 liegen"),
    },
    None => Percent::saturating(60),
};

// Compile-Zeit Check: Initialwert entspricht dem dokumentierten Compare-Wert
const _: () = assert!(duty_from_percent(PWM_INITIAL_PERCENT.get()).compare() == 51);
