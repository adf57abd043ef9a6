// Timer0 PWM Output - PwmOutput Implementierung für OC0A (PD6)
//
// Timer0 läuft im Fast PWM Modus (WGM01:0 = 1,1, WGM02 = 0, TOP = 0xFF).
// OC0A ist non-inverting (COM0A1:0 = 1,0): Pin HIGH bis TCNT0 == OCR0A.

use arduino_hal::hal::port::PD6;
use arduino_hal::port::Pin;
use arduino_hal::port::mode;
use arduino_hal::simple_pwm::{self, IntoPwmPin, Timer0Pwm};

use avr_core::{DutyCycle, Prescaler, PwmError, PwmOutput};

/// Übersetzt den Core-Prescaler in den HAL-Prescaler (CS02:0)
fn hal_prescaler(prescaler: Prescaler) -> simple_pwm::Prescaler {
    match prescaler {
        Prescaler::Direct => simple_pwm::Prescaler::Direct,
        Prescaler::Div8 => simple_pwm::Prescaler::Prescale8,
        Prescaler::Div64 => simple_pwm::Prescaler::Prescale64,
        Prescaler::Div256 => simple_pwm::Prescaler::Prescale256,
        Prescaler::Div1024 => simple_pwm::Prescaler::Prescale1024,
    }
}

/// Real Hardware PWM Output
///
/// Hält Timer0 und den PWM-Pin, damit niemand sonst TCCR0A/B umkonfiguriert.
pub struct Timer0PwmOutput {
    pin: Pin<mode::PwmOutput<Timer0Pwm>, PD6>,
    _timer: Timer0Pwm,
}

impl Timer0PwmOutput {
    /// Initialisiert Timer0 und startet die PWM-Ausgabe auf PD6
    ///
    /// # Parameter
    /// - `tc0`: Timer/Counter0 Peripheral
    /// - `pd6`: PD6 (Arduino D6), bereits als Output konfiguriert (DDRD6 = 1)
    /// - `prescaler`: Clock Select, bestimmt die PWM-Frequenz
    /// - `initial`: Compare-Wert vor dem Einschalten des Ausgangs
    pub fn new(
        tc0: arduino_hal::pac::TC0,
        pd6: Pin<mode::Output, PD6>,
        prescaler: Prescaler,
        initial: DutyCycle,
    ) -> Self {
        let timer = Timer0Pwm::new(tc0, hal_prescaler(prescaler));
        let mut pin = pd6.into_pwm(&timer);

        // OCR0A zuerst setzen, dann COM0A1 aktivieren (kein Glitch beim Start)
        pin.set_duty(initial.compare());
        pin.enable();

        Self { pin, _timer: timer }
    }

    /// Aktuell gesetzter Compare-Wert (OCR0A)
    pub fn duty(&self) -> DutyCycle {
        DutyCycle::from_compare(self.pin.get_duty())
    }
}

impl PwmOutput for Timer0PwmOutput {
    fn set_duty(&mut self, duty: DutyCycle) -> Result<(), PwmError> {
        self.pin.set_duty(duty.compare());
        Ok(())
    }
}
