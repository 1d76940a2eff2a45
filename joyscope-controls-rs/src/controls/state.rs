use super::debounce::Debouncer;
use super::joystick::{deflection_to_duty, JoystickSample};
use super::BORDER_STYLE_COUNT;

/// Compare values for the two PWM-driven LEDs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedDuties {
    /// Follows the X deflection.
    pub red: u16,
    /// Follows the Y deflection.
    pub blue: u16,
}

/// Everything the buttons and the joystick have set, shared between tasks.
///
/// Written by the button tasks ([`press_joystick_button`], [`press_button_a`])
/// and the ADC loop ([`update_sample`]); read as a copy by the display task.
///
/// [`press_joystick_button`]: ControlState::press_joystick_button
/// [`press_button_a`]: ControlState::press_button_a
/// [`update_sample`]: ControlState::update_sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlState {
    /// Latest joystick reading.
    pub sample: JoystickSample,
    /// Active border style, always `< BORDER_STYLE_COUNT`.
    pub border_style: u8,
    /// Green LED state, toggled by the joystick button.
    pub green_led: bool,
    /// Whether the red and blue LEDs follow the joystick. Default: `true`.
    pub pwm_enabled: bool,
    joystick_button: Debouncer,
    button_a: Debouncer,
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlState {
    /// Stick centred, first border style, green LED off, PWM LEDs enabled.
    pub const fn new() -> Self {
        Self {
            sample: JoystickSample::centered(),
            border_style: 0,
            green_led: false,
            pwm_enabled: true,
            joystick_button: Debouncer::new(),
            button_a: Debouncer::new(),
        }
    }

    /// Store a fresh joystick reading.
    pub fn update_sample(&mut self, sample: JoystickSample) {
        self.sample = sample;
    }

    /// Handle a falling edge on the joystick push button.
    ///
    /// An accepted press toggles the green LED and advances the border
    /// style, wrapping after the last one. Returns whether the edge was
    /// accepted.
    pub fn press_joystick_button(&mut self, now_ms: u64) -> bool {
        if !self.joystick_button.accept(now_ms) {
            return false;
        }
        self.green_led = !self.green_led;
        self.border_style = (self.border_style + 1) % BORDER_STYLE_COUNT;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Joystick button: green={}, border style={}",
            self.green_led,
            self.border_style
        );
        true
    }

    /// Handle a falling edge on button A.
    ///
    /// An accepted press switches the PWM LEDs on or off. Returns whether the
    /// edge was accepted.
    pub fn press_button_a(&mut self, now_ms: u64) -> bool {
        if !self.button_a.accept(now_ms) {
            return false;
        }
        self.pwm_enabled = !self.pwm_enabled;

        #[cfg(feature = "defmt")]
        defmt::debug!("Button A: PWM enabled={}", self.pwm_enabled);
        true
    }

    /// Current LED compare values; both zero while PWM is disabled.
    pub fn led_duties(&self) -> LedDuties {
        if !self.pwm_enabled {
            return LedDuties::default();
        }
        LedDuties {
            red: deflection_to_duty(self.sample.x),
            blue: deflection_to_duty(self.sample.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{ADC_MAX, DEBOUNCE_MS, PWM_TOP};

    #[test]
    fn default_state() {
        let state = ControlState::default();
        assert_eq!(state.sample, JoystickSample::centered());
        assert_eq!(state.border_style, 0);
        assert!(!state.green_led);
        assert!(state.pwm_enabled);
        assert_eq!(state.led_duties(), LedDuties::default());
    }

    #[test]
    fn joystick_button_toggles_green_and_advances_style() {
        let mut state = ControlState::new();
        assert!(state.press_joystick_button(0));
        assert!(state.green_led);
        assert_eq!(state.border_style, 1);

        assert!(state.press_joystick_button(DEBOUNCE_MS));
        assert!(!state.green_led);
        assert_eq!(state.border_style, 2);
    }

    #[test]
    fn border_style_wraps_after_last() {
        let mut state = ControlState::new();
        for i in 0..u64::from(BORDER_STYLE_COUNT) {
            assert!(state.press_joystick_button(i * DEBOUNCE_MS));
        }
        assert_eq!(state.border_style, 0);
    }

    #[test]
    fn bounced_press_changes_nothing() {
        let mut state = ControlState::new();
        assert!(state.press_joystick_button(1_000));
        let before = state;
        assert!(!state.press_joystick_button(1_050));
        assert_eq!(state, before);
    }

    #[test]
    fn buttons_debounce_independently() {
        let mut state = ControlState::new();
        assert!(state.press_joystick_button(1_000));
        assert!(state.press_button_a(1_010));
        assert!(!state.pwm_enabled);
        assert!(state.green_led);
    }

    #[test]
    fn button_a_toggles_pwm() {
        let mut state = ControlState::new();
        state.update_sample(JoystickSample { x: ADC_MAX, y: 0 });
        assert_eq!(
            state.led_duties(),
            LedDuties {
                red: PWM_TOP,
                blue: PWM_TOP
            }
        );

        assert!(state.press_button_a(0));
        assert_eq!(state.led_duties(), LedDuties::default());

        assert!(state.press_button_a(DEBOUNCE_MS));
        assert_eq!(state.led_duties().red, PWM_TOP);
    }

    #[test]
    fn duties_follow_their_axis() {
        let mut state = ControlState::new();
        state.update_sample(JoystickSample { x: ADC_MAX, y: 2048 });
        let duties = state.led_duties();
        assert_eq!(duties.red, PWM_TOP);
        assert_eq!(duties.blue, 0);
    }
}
