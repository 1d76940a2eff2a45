//! Display update task.
//!
//! Contains the [`display_update_task`] async function that periodically
//! reads [`ControlState`], builds a [`SceneState`] and flushes changed frames
//! to the OLED hardware.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::i2c::I2c;

use joyscope::controls::ControlState;

use crate::driver::OledDriver;
use crate::scene::{render_scene, SceneConfig, SceneState};

// ── Display update task ──────────────────────────────────────────────────

/// Periodic display update loop.
///
/// This is a regular `async fn`, **not** an Embassy `#[task]`. Callers
/// should create a thin, concrete task wrapper that calls this function,
/// since Embassy tasks cannot be generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn oled_task(
///     driver: OledDriver<MyConcreteI2cType>,
///     controls: &'static Mutex<CriticalSectionRawMutex, ControlState>,
///     config: SceneConfig,
/// ) {
///     display_update_task(driver, controls, config).await;
/// }
/// ```
///
/// # Control flow
///
/// 1. Configure the panel and show the initial scene.
/// 2. Loop at `config.update_frequency_hz`:
///    - **Step 1**: lock `controls`, copy the state, release the mutex.
///    - **Step 2**: build a [`SceneState`] from the copy.
///    - **Step 3**: skip if it matches the last frame sent.
///    - **Step 4**: render into the frame buffer (no I2C, no mutex).
///    - **Step 5**: flush the frame buffer (~25 ms of I2C, no mutex).
///
/// # Errors
///
/// * Configuration failure: logs the error and **returns** (task exits).
/// * Flush failure: logs the error; the frame is retried next cycle.
pub async fn display_update_task<I2C>(
    mut driver: OledDriver<I2C>,
    controls: &'static Mutex<CriticalSectionRawMutex, ControlState>,
    config: SceneConfig,
) where
    I2C: I2c,
{
    // ── Initialisation ───────────────────────────────────────────────
    if let Err(_e) = driver.configure().await {
        #[cfg(feature = "defmt")]
        defmt::error!("OLED configure failed: {}", defmt::Debug2Format(&_e));
        return;
    }

    let period = embassy_time::Duration::from_millis(config.update_period_ms());
    let mut last_state: Option<SceneState> = None;

    // ── Main loop ────────────────────────────────────────────────────
    loop {
        // ── Step 1: copy the controls (mutex held briefly) ───────────
        let snapshot = *controls.lock().await;

        // ── Step 2: build the scene ──────────────────────────────────
        let state = SceneState::from_controls(&snapshot, &config);

        // ── Step 3: skip if nothing changed ──────────────────────────
        if last_state != Some(state) {
            // ── Step 4: render (no I2C, no mutex) ────────────────────
            render_scene(driver.frame_mut(), &state);

            // ── Step 5: flush ────────────────────────────────────────
            match driver.flush().await {
                Ok(()) => last_state = Some(state),
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::error!("OLED flush failed: {}", defmt::Debug2Format(&_e));
                }
            }
        }

        embassy_time::Timer::after(period).await;
    }
}
