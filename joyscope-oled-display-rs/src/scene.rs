//! Scene snapshot and rendering.
//!
//! This module defines the immutable [`SceneState`] snapshot derived from the
//! shared [`ControlState`], and [`render_scene`], which redraws a whole frame
//! from it. Comparing two snapshots is how the display task decides whether a
//! frame needs to be sent at all.

use joyscope::controls::{axis_to_position, ControlState};

use crate::decoration::{clamp_to_style_bounds, draw_border, draw_square, BorderStyle, SQUARE_SIZE};
use crate::framebuffer::FrameBuffer;

// ── SceneConfig ──────────────────────────────────────────────────────────

/// Scene geometry and refresh rate.
///
/// [`SceneConfig::default()`] matches the 128×64 panel refreshed at 50 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SceneConfig {
    /// Display refresh rate in Hz. Default: 50.
    pub update_frequency_hz: u32,
    /// Panel width in pixels. Default: 128.
    pub width: u8,
    /// Panel height in pixels. Default: 64.
    pub height: u8,
    /// Draw the border around the square. Default: `true`.
    pub show_border: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            update_frequency_hz: 50,
            width: 128,
            height: 64,
            show_border: true,
        }
    }
}

impl SceneConfig {
    /// Convert the configured frequency to a timer period in milliseconds.
    ///
    /// Formula: `1000 / update_frequency_hz`, with 0 Hz treated as 1 Hz.
    pub fn update_period_ms(&self) -> u64 {
        1000 / u64::from(self.update_frequency_hz.max(1))
    }
}

// ── SceneState ───────────────────────────────────────────────────────────

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SceneState {
    /// Left edge of the square, already clamped for `border_style`.
    pub square_x: i32,
    /// Top edge of the square, already clamped for `border_style`.
    pub square_y: i32,
    pub border_style: BorderStyle,
    pub border_visible: bool,
}

impl SceneState {
    /// Build a snapshot from the shared control state.
    ///
    /// The X axis maps left to right across the panel, the Y axis is inverted
    /// so pushing the stick up moves the square up. The position is then
    /// clamped into the area the active border style leaves free.
    pub fn from_controls(controls: &ControlState, config: &SceneConfig) -> Self {
        let style = BorderStyle::from_index(controls.border_style);
        let side = i32::from(SQUARE_SIZE);

        let x = axis_to_position(controls.sample.x, i32::from(config.width) - side, false);
        let y = axis_to_position(controls.sample.y, i32::from(config.height) - side, true);
        let (square_x, square_y) = clamp_to_style_bounds(x, y, style, config.width, config.height);

        Self {
            square_x,
            square_y,
            border_style: style,
            border_visible: config.show_border,
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Redraw `frame` from scratch: clear, border (if visible), then the square.
///
/// Touches only the frame buffer; the caller flushes it.
pub fn render_scene(frame: &mut FrameBuffer, state: &SceneState) {
    frame.fill(false);
    if state.border_visible {
        draw_border(frame, state.border_style);
    }
    draw_square(frame, state.square_x, state.square_y);
}

// ── Tests ────────────────────────────────────────────────────────────────
