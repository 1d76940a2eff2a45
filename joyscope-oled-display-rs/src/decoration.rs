//! Border styles, the moving square and the bounds that keep them apart.
//!
//! Everything here is expressed in terms of [`FrameBuffer`] primitives and
//! scales with the buffer's geometry. Each style has a fixed inset table so
//! [`clamp_to_style_bounds`] can keep the square inside the border it is
//! drawn with.

pub use joyscope::controls::BORDER_STYLE_COUNT;

use crate::framebuffer::FrameBuffer;

/// Side length of the square in pixels.
pub const SQUARE_SIZE: u8 = 8;

/// Decorative border drawn around the panel edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderStyle {
    /// Single outline on the panel edge.
    #[default]
    Minimal = 0,
    /// Outer outline plus a second one 3 px inside.
    Double = 1,
    /// Outline inset by 4 px with accent strokes in the corners.
    Corners = 2,
    /// Outline with a shadow along the top and left.
    Shadow = 3,
    /// Edge lines with rounded corners.
    Rounded = 4,
    /// Three concentric outlines.
    Depth = 5,
}

/// Pixels kept free between the panel edge and the square, per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inset {
    /// Free columns between the left edge and the square.
    pub left: u8,
    /// Free columns between the square and the right edge.
    pub right: u8,
    /// Free rows between the top edge and the square.
    pub top: u8,
    /// Free rows between the square and the bottom edge.
    pub bottom: u8,
}

const fn uniform(px: u8) -> Inset {
    Inset {
        left: px,
        right: px,
        top: px,
        bottom: px,
    }
}

/// Indexed by `BorderStyle as usize`.
const INSETS: [Inset; BORDER_STYLE_COUNT as usize] = [
    uniform(1),
    uniform(4),
    uniform(5),
    Inset {
        left: 2,
        right: 1,
        top: 2,
        bottom: 1,
    },
    uniform(2),
    uniform(5),
];

/// Pixels rounding off the corners of [`BorderStyle::Rounded`], as offsets
/// from the corner they belong to. Negative offsets count from the far edge.
const ROUNDED_CORNERS: [(i32, i32); 12] = [
    (1, 1),
    (0, 2),
    (2, 0),
    (-2, 0),
    (-1, 1),
    (-3, 0),
    (-1, -2),
    (-2, -1),
    (-3, -1),
    (1, -1),
    (0, -2),
    (2, -1),
];

impl BorderStyle {
    const ALL: [BorderStyle; BORDER_STYLE_COUNT as usize] = [
        BorderStyle::Minimal,
        BorderStyle::Double,
        BorderStyle::Corners,
        BorderStyle::Shadow,
        BorderStyle::Rounded,
        BorderStyle::Depth,
    ];

    /// Style for an arbitrary counter value, wrapping modulo 6.
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % BORDER_STYLE_COUNT) as usize]
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// The style after this one, wrapping back to [`BorderStyle::Minimal`].
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Margins that keep a square clear of this border.
    pub fn inset(self) -> Inset {
        INSETS[self as usize]
    }
}

/// Draw a filled [`SQUARE_SIZE`] square with its top-left corner at (x, y).
pub fn draw_square(frame: &mut FrameBuffer, x: i32, y: i32) {
    let side = u32::from(SQUARE_SIZE);
    frame.draw_rectangle(y, x, side, side, true, true);
}

/// Draw `style` around the edge of `frame`.
///
/// Only border pixels are touched; the rest of the frame keeps its content.
pub fn draw_border(frame: &mut FrameBuffer, style: BorderStyle) {
    let w = i32::from(frame.width());
    let h = i32::from(frame.height());
    let (uw, uh) = (u32::from(frame.width()), u32::from(frame.height()));

    match style {
        BorderStyle::Minimal => frame.draw_rectangle(0, 0, uw, uh, true, false),
        BorderStyle::Double => {
            frame.draw_rectangle(0, 0, uw, uh, true, false);
            frame.draw_rectangle(3, 3, uw.saturating_sub(6), uh.saturating_sub(6), true, false);
        }
        BorderStyle::Corners => {
            frame.draw_rectangle(4, 4, uw.saturating_sub(8), uh.saturating_sub(8), true, false);

            // Accent strokes, two per corner.
            frame.draw_line(0, 0, 7, 0, true);
            frame.draw_line(0, 0, 0, 7, true);
            frame.draw_line(w - 1, 0, w - 8, 0, true);
            frame.draw_line(w - 1, 0, w - 1, 7, true);
            frame.draw_line(0, h - 1, 7, h - 1, true);
            frame.draw_line(0, h - 8, 0, h - 1, true);
            frame.draw_line(w - 1, h - 1, w - 8, h - 1, true);
            frame.draw_line(w - 1, h - 8, w - 1, h - 1, true);
        }
        BorderStyle::Shadow => {
            frame.draw_line(1, 1, w - 2, 1, true);
            frame.draw_line(1, 1, 1, h - 2, true);
            frame.draw_line(w - 1, 1, w - 1, h - 1, false);
            frame.draw_line(1, h - 1, w - 1, h - 1, false);
            frame.draw_rectangle(0, 0, uw, uh, true, false);
        }
        BorderStyle::Rounded => {
            frame.draw_line(3, 0, w - 4, 0, true);
            frame.draw_line(0, 3, 0, h - 4, true);
            frame.draw_line(w - 1, 3, w - 1, h - 4, true);
            frame.draw_line(3, h - 1, w - 4, h - 1, true);

            for (dx, dy) in ROUNDED_CORNERS {
                let x = if dx < 0 { w + dx } else { dx };
                let y = if dy < 0 { h + dy } else { dy };
                frame.set_pixel(x, y, true);
            }
        }
        BorderStyle::Depth => {
            for i in 0..3u32 {
                frame.draw_rectangle(
                    (i * 2) as i32,
                    (i * 2) as i32,
                    uw.saturating_sub(i * 4),
                    uh.saturating_sub(i * 4),
                    true,
                    false,
                );
            }
        }
    }
}

/// Clamp a square's top-left corner into the area `style` leaves free on a
/// `width` × `height` panel.
///
/// For [`BorderStyle::Minimal`] on 128×64, `(200, 200)` becomes `(119, 55)`
/// and `(-50, -50)` becomes `(1, 1)`. On a panel too small for the square
/// the lower bound wins.
pub fn clamp_to_style_bounds(
    x: i32,
    y: i32,
    style: BorderStyle,
    width: u8,
    height: u8,
) -> (i32, i32) {
    let inset = style.inset();
    let side = i32::from(SQUARE_SIZE);

    let min_x = i32::from(inset.left);
    let max_x = i32::from(width) - side - i32::from(inset.right);
    let min_y = i32::from(inset.top);
    let max_y = i32::from(height) - side - i32::from(inset.bottom);

    (x.min(max_x).max(min_x), y.min(max_y).max(min_y))
}
