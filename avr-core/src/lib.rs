//! AVR Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Traits und Pure Functions.

#![no_std]

#[cfg(feature = "ufmt")]
mod log;
pub mod logic;
#[cfg(feature = "ufmt")]
pub mod steps;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use logic::{
    GREETING, Greeter, LINE_ENDING, duty_from_percent, parse_decimal, pwm_frequency_hz,
    set_percent,
};
#[cfg(feature = "ufmt")]
pub use steps::{hello_step, pwm_step};
pub use traits::{PwmError, PwmOutput, SerialError, SerialWriter};
pub use types::{DutyCycle, GreetingMode, MAX_PERCENT, Percent, Prescaler, UsartTiming};
