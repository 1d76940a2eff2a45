use super::{ADC_CENTER, ADC_MAX, DEAD_ZONE, PWM_TOP};

/// One reading of both joystick axes, raw 12-bit ADC values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickSample {
    /// Horizontal axis (VRX). Grows to the right.
    pub x: u16,
    /// Vertical axis (VRY). Grows upwards.
    pub y: u16,
}

impl Default for JoystickSample {
    /// Stick at rest.
    fn default() -> Self {
        Self::centered()
    }
}

impl JoystickSample {
    pub const fn centered() -> Self {
        Self {
            x: ADC_CENTER,
            y: ADC_CENTER,
        }
    }
}

/// Map a raw axis reading onto `0..=span`.
///
/// With `invert` the mapping runs from `span` down to 0, which turns the
/// upward-growing VRY axis into a downward-growing screen row. Readings above
/// [`ADC_MAX`] are treated as [`ADC_MAX`].
///
/// # Examples
///
/// ```
/// use joyscope::controls::axis_to_position;
///
/// assert_eq!(axis_to_position(0, 120, false), 0);
/// assert_eq!(axis_to_position(4095, 120, false), 120);
/// assert_eq!(axis_to_position(4095, 56, true), 0);
/// ```
pub fn axis_to_position(raw: u16, span: i32, invert: bool) -> i32 {
    let raw = i32::from(raw.min(ADC_MAX));
    let position = raw * span / i32::from(ADC_MAX);
    if invert {
        span - position
    } else {
        position
    }
}

/// Map an axis reading to an LED compare value in `0..=PWM_TOP`.
///
/// Brightness follows the distance from [`ADC_CENTER`] in either direction;
/// within [`DEAD_ZONE`] of the centre the LED is off.
pub fn deflection_to_duty(raw: u16) -> u16 {
    let deviation = raw.min(ADC_MAX).abs_diff(ADC_CENTER);
    if deviation <= DEAD_ZONE {
        return 0;
    }
    let duty = u32::from(deviation) * u32::from(PWM_TOP) / u32::from(ADC_MAX - ADC_CENTER);
    duty.min(u32::from(PWM_TOP)) as u16
}
