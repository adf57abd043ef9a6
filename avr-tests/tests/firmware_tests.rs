//! Integration Tests für UART- und PWM-Logik
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen Mock-Hardware

use avr_core::{
    DutyCycle, Greeter, GreetingMode, Percent, Prescaler, PwmError, PwmOutput, SerialError,
    SerialWriter, UsartTiming, duty_from_percent, hello_step, parse_decimal, pwm_frequency_hz,
    pwm_step, set_percent,
};
use embedded_hal::delay::DelayNs;

// ============================================================================
// Mock Serial Writer
// ============================================================================

#[derive(Default)]
pub struct MockSerialWriter {
    pub bytes: Vec<u8>,
    pub flush_count: usize,
    /// Simuliere Fehler beim nächsten write_byte()
    pub fail_next_write: bool,
}

impl MockSerialWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        std::str::from_utf8(&self.bytes).unwrap()
    }
}

impl SerialWriter for MockSerialWriter {
    fn write_byte(&mut self, byte: u8) -> Result<(), SerialError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(SerialError::WriteFailed);
        }

        self.bytes.push(byte);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SerialError> {
        self.flush_count += 1;
        Ok(())
    }
}

impl ufmt::uWrite for MockSerialWriter {
    type Error = SerialError;

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        SerialWriter::write_str(self, text)
    }
}

// ============================================================================
// Mock PWM Output
// ============================================================================

#[derive(Default)]
pub struct MockPwmOutput {
    pub last_duty: Option<DutyCycle>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl PwmOutput for MockPwmOutput {
    fn set_duty(&mut self, duty: DutyCycle) -> Result<(), PwmError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(PwmError::Unavailable);
        }

        self.last_duty = Some(duty);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
    pub ms_calls: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.ms_calls.push(ms);
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

// ============================================================================
// Tests: duty_from_percent() / set_percent()
// ============================================================================

#[test]
fn test_duty_endpoints() {
    assert_eq!(duty_from_percent(0).compare(), 0);
    assert_eq!(duty_from_percent(100).compare(), 255);
}

#[test]
fn test_duty_clamps_above_100() {
    let full = duty_from_percent(100);
    assert_eq!(duty_from_percent(101), full);
    assert_eq!(duty_from_percent(150), full);
    assert_eq!(duty_from_percent(u8::MAX), full);
}

#[test]
fn test_duty_is_linear_and_monotonic() {
    let mut previous = duty_from_percent(0);
    for p in 1..=100u8 {
        let duty = duty_from_percent(p);
        assert!(duty >= previous, "not monotonic at {p}");
        // round(p / 100 × 255)
        assert_eq!(u32::from(duty.compare()), (u32::from(p) * 255 + 50) / 100);
        previous = duty;
    }
}

#[test]
fn test_duty_workshop_values() {
    assert_eq!(duty_from_percent(20).compare(), 51); // Initialwert
    assert_eq!(duty_from_percent(60).compare(), 153); // Testwert der Hauptschleife
}

#[test]
fn test_duty_rounds_midpoints() {
    assert_eq!(duty_from_percent(50).compare(), 128); // 127.5
    assert_eq!(duty_from_percent(10).compare(), 26); // 25.5
    assert_eq!(duty_from_percent(30).compare(), 77); // 76.5
    assert_eq!(duty_from_percent(33).compare(), 84); // 84.15
}

#[test]
fn test_set_percent_writes_to_output() {
    let mut pwm = MockPwmOutput::default();

    let duty = set_percent(&mut pwm, 60).unwrap();

    assert_eq!(duty.compare(), 153);
    assert_eq!(pwm.last_duty, Some(duty));
    assert_eq!(pwm.write_count, 1);
}

#[test]
fn test_set_percent_clamps_before_writing() {
    let mut pwm = MockPwmOutput::default();

    set_percent(&mut pwm, 200).unwrap();

    assert_eq!(pwm.last_duty, Some(DutyCycle::MAX));
}

#[test]
fn test_set_percent_fail_then_recover() {
    let mut pwm = MockPwmOutput {
        fail_next_write: true,
        ..Default::default()
    };

    assert_eq!(set_percent(&mut pwm, 50), Err(PwmError::Unavailable));
    assert_eq!(pwm.last_duty, None);

    // Zweiter Versuch klappt
    assert_eq!(set_percent(&mut pwm, 50), Ok(DutyCycle::from_compare(128)));
    assert_eq!(pwm.write_count, 1);
}

#[test]
fn test_pwm_step_holds_same_value() {
    let mut pwm = MockPwmOutput::default();
    let mut console = MockSerialWriter::new();
    let percent = Percent::saturating(60);

    for _ in 0..5 {
        pwm_step(&mut pwm, percent, &mut console).unwrap();
    }

    assert_eq!(pwm.write_count, 5);
    assert_eq!(pwm.last_duty, Some(DutyCycle::from_compare(153)));
    assert_eq!(console.output(), "");
}

#[test]
fn test_pwm_step_logs_failure_and_continues() {
    let mut pwm = MockPwmOutput {
        fail_next_write: true,
        ..Default::default()
    };
    let mut console = MockSerialWriter::new();
    let percent = Percent::saturating(60);

    let first = pwm_step(&mut pwm, percent, &mut console);
    assert_eq!(first, Err(PwmError::Unavailable));
    assert_eq!(
        console.output(),
        "[ERROR] Setting duty failed: pwm output unavailable\r\n"
    );

    // Nächste Iteration schreibt wieder normal
    assert_eq!(
        pwm_step(&mut pwm, percent, &mut console),
        Ok(DutyCycle::from_compare(153))
    );
    assert_eq!(pwm.write_count, 1);
}

// ============================================================================
// Tests: Timer0 / USART Berechnungen
// ============================================================================

#[test]
fn test_pwm_frequency_workshop_setup() {
    assert_eq!(pwm_frequency_hz(16_000_000, Prescaler::Div64), 976);
    assert_eq!(pwm_frequency_hz(16_000_000, Prescaler::Div8), 7812);
    assert_eq!(pwm_frequency_hz(16_000_000, Prescaler::Div256), 244);
}

#[test]
fn test_usart_timing_9600_within_one_percent() {
    let timing = UsartTiming::for_baud(16_000_000, 9600).unwrap();
    assert!(timing.u2x);
    assert_eq!(timing.ubrr, 207);
    assert!(timing.error_permille(16_000_000, 9600).unwrap() < 10);
}

#[test]
fn test_usart_error_permille_zero_baud_is_none() {
    let timing = UsartTiming::for_baud(16_000_000, 9600).unwrap();
    assert_eq!(timing.error_permille(16_000_000, 0), None);
}

#[test]
fn test_usart_timing_115200() {
    let timing = UsartTiming::for_baud(16_000_000, 115_200).unwrap();
    assert_eq!(timing, UsartTiming { ubrr: 16, u2x: true });
    assert_eq!(timing.actual_baud(16_000_000), 117_647);
}

#[test]
fn test_usart_timing_low_baud_falls_back_to_normal_speed() {
    // 300 Bd passt mit U2X nicht in 12 Bit
    let timing = UsartTiming::for_baud(16_000_000, 300).unwrap();
    assert!(!timing.u2x);
    assert_eq!(timing.ubrr, 3332);
}

#[test]
fn test_parse_decimal_config_values() {
    assert_eq!(parse_decimal("57600"), Some(57_600));
    assert_eq!(parse_decimal("60"), Some(60));
    assert_eq!(parse_decimal(" 60"), None);
    assert_eq!(parse_decimal("6.0"), None);
}

// ============================================================================
// Tests: Greeter
// ============================================================================

#[test]
fn test_greeter_plain_repeats_fixed_line() {
    let mut writer = MockSerialWriter::new();
    let mut delay = MockDelay::default();
    let mut greeter = Greeter::new(GreetingMode::Plain);

    for _ in 0..3 {
        hello_step(&mut greeter, &mut writer, &mut delay, 1000).unwrap();
    }

    assert_eq!(
        writer.output(),
        "Hello World \r\nHello World \r\nHello World \r\n"
    );
    assert_eq!(delay.ms_calls, vec![1000, 1000, 1000]);
    assert_eq!(delay.total_ns, 3_000_000_000);
    assert_eq!(writer.flush_count, 3);
}

#[test]
fn test_greeter_counting_interpolates_counter() {
    let mut writer = MockSerialWriter::new();
    let mut delay = MockDelay::default();
    let mut greeter = Greeter::new(GreetingMode::Counting);

    for _ in 0..3 {
        hello_step(&mut greeter, &mut writer, &mut delay, 1000).unwrap();
    }

    assert_eq!(
        writer.output(),
        "Hello World 0\r\nHello World 1\r\nHello World 2\r\n"
    );
    assert_eq!(greeter.counter(), 3);
}

#[test]
fn test_greeter_write_failure_keeps_loop_alive() {
    let mut writer = MockSerialWriter::new();
    let mut delay = MockDelay::default();
    let mut greeter = Greeter::new(GreetingMode::Counting);

    writer.fail_next_write = true;
    let first = hello_step(&mut greeter, &mut writer, &mut delay, 1000);
    assert_eq!(first, Err(SerialError::WriteFailed));

    // Nach dem Fehler läuft die Schleife normal weiter, Pause wurde trotzdem eingehalten
    hello_step(&mut greeter, &mut writer, &mut delay, 1000).unwrap();
    assert_eq!(
        writer.output(),
        "[ERROR] Greeting failed: serial write failed\r\nHello World 0\r\n"
    );
    assert_eq!(delay.ms_calls, vec![1000, 1000]);
    assert_eq!(writer.flush_count, 1);
}

#[test]
fn test_greeter_default_mode_is_plain() {
    let greeter = Greeter::new(GreetingMode::default());
    assert_eq!(greeter.mode(), GreetingMode::Plain);
}

// ============================================================================
// Tests: ufmt Ausgabe der Core-Typen
// ============================================================================

#[test]
fn test_ufmt_log_line() {
    let mut writer = MockSerialWriter::new();
    let timing = UsartTiming::for_baud(16_000_000, 9600).unwrap();

    ufmt::uwrite!(
        writer,
        "{} {} {} {}",
        Percent::saturating(60),
        duty_from_percent(60),
        Prescaler::Div64,
        timing
    )
    .unwrap();

    assert_eq!(writer.output(), "60% OCR0A=153 clk/64 UBRR0=207 U2X0=1");
}

#[test]
fn test_ufmt_errors() {
    let mut writer = MockSerialWriter::new();

    ufmt::uwrite!(writer, "{} / {}", SerialError::WriteFailed, PwmError::Unavailable).unwrap();

    assert_eq!(
        writer.output(),
        "serial write failed / pwm output unavailable"
    );
}

