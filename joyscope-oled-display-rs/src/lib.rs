//! Async SSD1306 (128×64) OLED driver and frame-buffer renderer for Embassy.
//!
//! This crate provides [`OledDriver`], a hand-written SSD1306 driver over
//! `embedded-hal-async` I2C that owns a packed [`FrameBuffer`]; a small
//! primitive library on that buffer (pixels, rectangles, lines, 8×8 text);
//! the [`decoration`] layer drawing the joystick square and six border
//! styles; and [`display_update_task`], a periodic update loop that reads the
//! shared [`ControlState`] and renders the scene.
//!
//! # Quick Start
//!
//! ```ignore
//! use joyscope_oled_display_rs::{display_update_task, OledDriver, PanelConfig, SceneConfig};
//!
//! // In your Embassy main:
//! let oled = OledDriver::new(i2c_oled, 0x3C, PanelConfig::default()).unwrap();
//! spawner.spawn(unwrap!(oled_task(oled, controls, SceneConfig::default())));
//!
//! // Thin task wrapper (Embassy tasks cannot be generic):
//! #[embassy_executor::task]
//! async fn oled_task(
//!     driver: OledDriver<MyI2cType>,
//!     controls: &'static Mutex<CriticalSectionRawMutex, ControlState>,
//!     config: SceneConfig,
//! ) {
//!     display_update_task(driver, controls, config).await;
//! }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`](https://docs.rs/defmt).
//! - **`task`**: [`display_update_task`] (pulls in `embassy-sync` and
//!   `embassy-time`).
//!
//! [`ControlState`]: joyscope::controls::ControlState

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod decoration;
#[cfg(feature = "task")]
pub mod display_task;
pub mod driver;
pub mod error;
pub mod font;
pub mod framebuffer;
mod graphics;
pub mod scene;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use command::DEFAULT_ADDRESS;
pub use decoration::{clamp_to_style_bounds, draw_border, draw_square, BorderStyle, SQUARE_SIZE};
#[cfg(feature = "task")]
pub use display_task::display_update_task;
pub use driver::{DriverState, OledDriver, PanelConfig};
pub use error::OledError;
pub use framebuffer::{FrameBuffer, MAX_BUFFER_LEN, MAX_HEIGHT, MAX_WIDTH};
pub use scene::{render_scene, SceneConfig, SceneState};
