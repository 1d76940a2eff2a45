//! joyscope-hw-interface
//!
//! Joystick → ControlState → OLED / LED firmware for the RP2040 on the
//! BitDogLab board. Wires the two library crates into a live loop:
//!
//! 1. The main loop samples both joystick axes every 10 ms, stores them in
//!    the shared `ControlState` and drives the LEDs from it: red and blue by
//!    PWM from the deflection, green on or off.
//! 2. Two button tasks wait for falling edges. The joystick button toggles
//!    the green LED and cycles the border style; button A switches the PWM
//!    LEDs on and off. Both are debounced inside `ControlState`.
//! 3. The OLED display task wakes at 50 Hz, builds a `SceneState` from the
//!    shared state and flushes a new frame when the scene changed.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::{self, Pwm};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Instant, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use joyscope::controls::{ControlState, JoystickSample, PWM_TOP};
use joyscope_oled_display_rs::{display_update_task, OledDriver, PanelConfig, SceneConfig, DEFAULT_ADDRESS};

// ---------------------------------------------------------------------------
// Interrupt binding
// ---------------------------------------------------------------------------

bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
    ADC_IRQ_FIFO => adc::InterruptHandler;
});

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Shared input state: written by the button tasks and the main loop,
/// read by the OLED display task.
static CONTROLS: StaticCell<Mutex<CriticalSectionRawMutex, ControlState>> = StaticCell::new();

/// Concrete I2C type for the OLED display, sole user of I2C1.
type OledI2c = I2c<'static, I2C1, i2c::Async>;

/// Joystick sampling period of the main loop.
const SAMPLE_PERIOD_MS: u64 = 10;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Thin wrapper that monomorphises the generic `display_update_task` so it can
/// be spawned as a concrete Embassy task.
#[embassy_executor::task]
async fn oled_task(
    driver: OledDriver<OledI2c>,
    controls: &'static Mutex<CriticalSectionRawMutex, ControlState>,
    config: SceneConfig,
) {
    display_update_task(driver, controls, config).await;
}

#[derive(Clone, Copy, Format)]
enum Button {
    Joystick,
    A,
}

/// Edge-triggered button monitor.
///
/// Waits for the active-low button to fall, then reports the press with a
/// millisecond timestamp. Debouncing and the resulting toggles happen in
/// `ControlState`; the mutex is held only for that in-memory update.
#[embassy_executor::task(pool_size = 2)]
async fn button_task(
    mut pin: Input<'static>,
    button: Button,
    controls: &'static Mutex<CriticalSectionRawMutex, ControlState>,
) {
    info!("{} button task started", button);

    loop {
        pin.wait_for_falling_edge().await;
        let now_ms = Instant::now().as_millis();

        let accepted = {
            let mut state = controls.lock().await;
            match button {
                Button::Joystick => state.press_joystick_button(now_ms),
                Button::A => state.press_button_a(now_ms),
            }
        }; // mutex released here

        if !accepted {
            trace!("{} bounce ignored at {} ms", button, now_ms);
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("joyscope-hw-interface starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // VRX      → GP26 (ADC0)
    // VRY      → GP27 (ADC1)
    // SW       → GP22  active-low, pull-up enabled
    // BUTTON_A → GP5   active-low, pull-up enabled
    // LED_G    → GP11  plain output
    // LED_B    → GP12  PWM slice 6 A
    // LED_R    → GP13  PWM slice 6 B
    // I2C_SDA  → GP14  (I2C1)
    // I2C_SCL  → GP15  (I2C1)
    // ———————————————————————————————————————————————————————————————————————

    // OLED on I2C1 at 400 kHz; a full frame takes ~25 ms.
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_async(
        p.I2C1,
        p.PIN_15, // SCL
        p.PIN_14, // SDA
        Irqs,
        i2c_config,
    );

    let oled_driver = match OledDriver::new(i2c, DEFAULT_ADDRESS, PanelConfig::default()) {
        Ok(driver) => driver,
        Err(_) => defmt::panic!("Invalid OLED geometry"),
    };

    // Joystick axes.
    let mut adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let mut vrx = Channel::new_pin(p.PIN_26, Pull::None);
    let mut vry = Channel::new_pin(p.PIN_27, Pull::None);

    // LEDs.
    let mut green = Output::new(p.PIN_11, Level::Low);
    let mut pwm_config = pwm::Config::default();
    pwm_config.top = PWM_TOP;
    let mut leds = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, pwm_config.clone());

    // Buttons.
    let joystick_button = Input::new(p.PIN_22, Pull::Up);
    let button_a = Input::new(p.PIN_5, Pull::Up);

    // Shared state.
    let controls = CONTROLS.init(Mutex::new(ControlState::new()));

    // —— Spawn tasks ————————————————————————————————————————————————————————

    spawner.spawn(unwrap!(oled_task(oled_driver, controls, SceneConfig::default())));
    spawner.spawn(unwrap!(button_task(joystick_button, Button::Joystick, controls)));
    spawner.spawn(unwrap!(button_task(button_a, Button::A, controls)));

    info!("All tasks spawned");

    // —— Sampling loop ——————————————————————————————————————————————————————

    loop {
        Timer::after_millis(SAMPLE_PERIOD_MS).await;

        let sample = match (adc.read(&mut vrx).await, adc.read(&mut vry).await) {
            (Ok(x), Ok(y)) => JoystickSample { x, y },
            _ => {
                warn!("ADC read failed");
                continue;
            }
        };

        // Mutex held only for the copy in and out.
        let (duties, green_on) = {
            let mut state = controls.lock().await;
            state.update_sample(sample);
            (state.led_duties(), state.green_led)
        };

        pwm_config.compare_a = duties.blue;
        pwm_config.compare_b = duties.red;
        leds.set_config(&pwm_config);
        green.set_level(Level::from(green_on));
    }
}
