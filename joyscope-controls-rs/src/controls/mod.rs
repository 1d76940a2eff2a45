//! Joystick, button and LED state with the mappings between them.
//!
//! This module provides [`ControlState`], the shared state written by the
//! button tasks and the ADC loop and read by the display task.
//!
//! # Inputs and outputs
//!
//! ```text
//! VRX (ADC0) ──► sample.x ──► square x      ──► red LED duty
//! VRY (ADC1) ──► sample.y ──► square y (inv) ──► blue LED duty
//! SW         ──► green LED toggle + next border style
//! Button A   ──► PWM LEDs on/off
//! ```
//!
//! # Change Tracking
//!
//! There are no change flags. Readers copy the whole state once per
//! iteration and compare it with the copy they rendered last.
//!
//! # `no_std` Compatibility
//!
//! No heap allocation; every value is a fixed-size integer or flag.

mod debounce;
mod joystick;
mod state;

pub use debounce::Debouncer;
pub use joystick::{axis_to_position, deflection_to_duty, JoystickSample};
pub use state::{ControlState, LedDuties};

/// Largest value the 12-bit ADC returns.
pub const ADC_MAX: u16 = 4095;

/// ADC reading of a joystick axis at rest.
pub const ADC_CENTER: u16 = 2048;

/// Deflection from [`ADC_CENTER`] that still counts as centred. Absorbs the
/// resting jitter of the potentiometers so the LEDs stay dark.
pub const DEAD_ZONE: u16 = 100;

/// PWM counter wrap value; duty cycles are in `0..=PWM_TOP`.
pub const PWM_TOP: u16 = 4095;

/// Minimum time between two accepted presses of the same button.
pub const DEBOUNCE_MS: u64 = 200;

/// Number of border styles the joystick button cycles through.
pub const BORDER_STYLE_COUNT: u8 = 6;
