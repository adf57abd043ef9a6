// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von avr-core (inklusive Log-Makros info!/error!)
pub use avr_core::{
    DutyCycle, Greeter, GreetingMode, Percent, PwmError, PwmOutput, SerialError, SerialWriter,
    duty_from_percent, error, hello_step, info, pwm_step, set_percent,
};
