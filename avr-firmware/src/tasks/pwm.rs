// PWM Task - Hält einen festen Duty Cycle auf Timer0/OC0A
use ufmt::uWrite;

use crate::config::{
    PWM_DUTY_PERCENT, PWM_FREQUENCY_HZ, PWM_INITIAL_PERCENT, PWM_PIN_NAME, PWM_PRESCALER,
    USART_TIMING,
};
use crate::hal::{Timer0PwmOutput, UsartWriter};
use crate::{Percent, PwmOutput, duty_from_percent, info, pwm_step};

/// PWM Logic - Schleife ohne Hardware-Abhängigkeit
///
/// Setzt den Duty Cycle in jeder Iteration neu (wie pwm0_set_percent im
/// Polling-Loop). OCR0A ist double-buffered, ein erneutes Schreiben desselben
/// Wertes ändert die Ausgabe nicht. Fehler loggt pwm_step auf `console`.
pub fn pwm_logic<P: PwmOutput, W: uWrite>(mut pwm: P, percent: Percent, mut console: W) -> ! {
    loop {
        let _ = pwm_step(&mut pwm, percent, &mut console);
    }
}

/// PWM Task - initialisiert Timer0 auf PD6 und startet die Schleife
///
/// USART0 dient als Log-Kanal.
pub fn pwm_task(dp: arduino_hal::Peripherals) -> ! {
    let pins = arduino_hal::pins!(dp);
    let mut console = UsartWriter::new(dp.USART0, pins.d0, pins.d1.into_output(), USART_TIMING);

    // DDRD6 = 1, dann Timer0 Fast PWM mit ~20 % Duty
    let initial = duty_from_percent(PWM_INITIAL_PERCENT.get());
    let mut pwm = Timer0PwmOutput::new(dp.TC0, pins.d6.into_output(), PWM_PRESCALER, initial);

    info!(
        console,
        "Timer0 Fast PWM on {}: {} ({} Hz), start {}",
        PWM_PIN_NAME,
        PWM_PRESCALER,
        PWM_FREQUENCY_HZ,
        pwm.duty()
    );

    if let Ok(duty) = pwm_step(&mut pwm, PWM_DUTY_PERCENT, &mut console) {
        info!(console, "Holding {} ({})", PWM_DUTY_PERCENT, duty);
    }

    pwm_logic(pwm, PWM_DUTY_PERCENT, console)
}
