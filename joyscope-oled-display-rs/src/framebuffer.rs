//! Packed 1-bit-per-pixel frame buffer and the drawing primitives built on it.
//!
//! The buffer mirrors SSD1306 display RAM in vertical addressing mode: the
//! panel is split into pages of 8 pixel rows, each byte holds the 8 pixels of
//! one column within one page (bit `y % 8`, LSB at the top), and consecutive
//! bytes walk down the pages of a column before moving to the next column.
//!
//! ```text
//! byte 0          CONTROL_DATA prefix (never pixel data)
//! byte 1..=P      column 0, pages 0..P-1
//! byte P+1..=2P   column 1, pages 0..P-1
//! ...
//! ```
//!
//! Every drawing operation funnels through [`FrameBuffer::set_pixel`], so the
//! coordinate-to-bit mapping lives in exactly one place. Coordinates outside
//! the panel are clipped: the write is dropped, nothing else changes.

use heapless::Vec;

use crate::command::CONTROL_DATA;
use crate::font::{glyph, GLYPH_SIZE};

/// Widest panel the buffer can back.
pub const MAX_WIDTH: u8 = 128;

/// Tallest panel the buffer can back.
pub const MAX_HEIGHT: u8 = 64;

/// Capacity of the frame buffer storage: every pixel of the largest panel
/// plus the leading data prefix.
pub const MAX_BUFFER_LEN: usize = MAX_WIDTH as usize * MAX_HEIGHT as usize / 8 + 1;

/// In-memory copy of the panel's display RAM.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u8,
    height: u8,
    pages: u8,
    bytes: Vec<u8, MAX_BUFFER_LEN>,
}

impl FrameBuffer {
    /// Create a zero-filled buffer for a `width` × `height` panel.
    ///
    /// Returns `None` when the geometry cannot be represented: zero width,
    /// a height that is zero or not a multiple of 8, or more pixels than
    /// [`MAX_BUFFER_LEN`] holds.
    pub fn new(width: u8, height: u8) -> Option<Self> {
        if width == 0 || height == 0 || height % 8 != 0 {
            return None;
        }
        let pages = height / 8;
        let len = pages as usize * width as usize + 1;

        let mut bytes = Vec::new();
        bytes.resize(len, 0).ok()?;
        bytes[0] = CONTROL_DATA;

        Some(Self {
            width,
            height,
            pages,
            bytes,
        })
    }

    /// Panel width in pixels.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Panel height in pixels.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of 8-row pages (`height / 8`).
    pub fn pages(&self) -> u8 {
        self.pages
    }

    /// The full transmit buffer: the data prefix followed by the pixel bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Pixel bytes only, without the data prefix.
    pub fn pixels(&self) -> &[u8] {
        &self.bytes[1..]
    }

    /// Byte index and bit mask of pixel (x, y), or `None` if off-panel.
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let index = y / 8 + x * self.pages as usize + 1;
        Some((index, 1 << (y % 8)))
    }

    // -----------------------------------------------------------------------
    // Pixels
    // -----------------------------------------------------------------------

    /// Set (`on = true`) or clear a single pixel. Off-panel writes are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if let Some((index, mask)) = self.locate(x, y) {
            if on {
                self.bytes[index] |= mask;
            } else {
                self.bytes[index] &= !mask;
            }
        }
    }

    /// Read back a pixel; `None` if (x, y) is off-panel.
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        self.locate(x, y)
            .map(|(index, mask)| self.bytes[index] & mask != 0)
    }

    /// Set every pixel to `on`.
    pub fn fill(&mut self, on: bool) {
        for y in 0..i32::from(self.height) {
            for x in 0..i32::from(self.width) {
                self.set_pixel(x, y, on);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Shapes
    // -----------------------------------------------------------------------

    /// Draw the outline of a `width` × `height` rectangle whose top-left
    /// corner is (`left`, `top`), and with `fill` also every pixel inside
    /// the outline.
    ///
    /// A zero width or height draws nothing.
    pub fn draw_rectangle(
        &mut self,
        top: i32,
        left: i32,
        width: u32,
        height: u32,
        on: bool,
        fill: bool,
    ) {
        if width == 0 || height == 0 {
            return;
        }
        let right = far_edge(left, width);
        let bottom = far_edge(top, height);

        self.draw_hline(left, right, top, on);
        self.draw_hline(left, right, bottom, on);
        self.draw_vline(left, top, bottom, on);
        self.draw_vline(right, top, bottom, on);

        if fill {
            for x in self.clip_x(left.saturating_add(1), right.saturating_sub(1)) {
                for y in self.clip_y(top.saturating_add(1), bottom.saturating_sub(1)) {
                    self.set_pixel(x, y, on);
                }
            }
        }
    }

    /// Draw a line from (x0, y0) to (x1, y1), both endpoints included.
    ///
    /// Integer Bresenham: consecutive pixels differ by at most 1 on each axis.
    /// The segment is clipped to the panel first, so endpoints anywhere in
    /// `i32` cost no more than an on-panel line.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, on: bool) {
        let Some((x0, y0, x1, y1)) = self.clip_segment(x0, y0, x1, y1) else {
            return;
        };

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };

        let mut err = dx - dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set_pixel(x, y, on);
            if x == x1 && y == y1 {
                break;
            }

            let e2 = err * 2;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Horizontal line on row `y` from `x0` to `x1` inclusive, in either order.
    pub fn draw_hline(&mut self, x0: i32, x1: i32, y: i32, on: bool) {
        for x in self.clip_x(x0.min(x1), x0.max(x1)) {
            self.set_pixel(x, y, on);
        }
    }

    /// Vertical line on column `x` from `y0` to `y1` inclusive, in either order.
    pub fn draw_vline(&mut self, x: i32, y0: i32, y1: i32, on: bool) {
        for y in self.clip_y(y0.min(y1), y0.max(y1)) {
            self.set_pixel(x, y, on);
        }
    }

    // -----------------------------------------------------------------------
    // Text
    // -----------------------------------------------------------------------

    /// Blit the 8×8 glyph for `c` with its top-left corner at (x, y).
    ///
    /// Every glyph bit is written, so the cell's previous content is
    /// replaced rather than merged.
    pub fn draw_char(&mut self, c: char, x: i32, y: i32) {
        for (i, &column) in glyph(c).iter().enumerate() {
            for j in 0..GLYPH_SIZE {
                self.set_pixel(
                    x.saturating_add(i as i32),
                    y.saturating_add(i32::from(j)),
                    column & (1 << j) != 0,
                );
            }
        }
    }

    /// Draw `text` left to right starting at (x, y).
    ///
    /// The first glyph always lands at (x, y). After each glyph, when the next
    /// one would run past the right edge the cursor wraps to column 0 of the
    /// next 8-pixel row; drawing stops once that row would run past the
    /// bottom edge.
    pub fn draw_string(&mut self, text: &str, x: i32, y: i32) {
        let step = i32::from(GLYPH_SIZE);
        let (mut x, mut y) = (x, y);

        for c in text.chars() {
            self.draw_char(c, x, y);
            x = x.saturating_add(step);
            if x.saturating_add(step) > i32::from(self.width) {
                x = 0;
                y = y.saturating_add(step);
            }
            if y.saturating_add(step) > i32::from(self.height) {
                break;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Clipping helpers
    // -----------------------------------------------------------------------

    fn clip_x(&self, from: i32, to: i32) -> core::ops::RangeInclusive<i32> {
        from.max(0)..=to.min(i32::from(self.width) - 1)
    }

    fn clip_y(&self, from: i32, to: i32) -> core::ops::RangeInclusive<i32> {
        from.max(0)..=to.min(i32::from(self.height) - 1)
    }

    /// Cohen-Sutherland clip of a segment against the panel. Segments that
    /// already lie on the panel come back unchanged; `None` means nothing of
    /// the segment is visible.
    fn clip_segment(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Option<(i32, i32, i32, i32)> {
        const LEFT: u8 = 0b0001;
        const RIGHT: u8 = 0b0010;
        const TOP: u8 = 0b0100;
        const BOTTOM: u8 = 0b1000;

        let x_max = i64::from(self.width) - 1;
        let y_max = i64::from(self.height) - 1;
        let outcode = |x: i64, y: i64| {
            let mut code = 0;
            if x < 0 {
                code |= LEFT;
            } else if x > x_max {
                code |= RIGHT;
            }
            if y < 0 {
                code |= TOP;
            } else if y > y_max {
                code |= BOTTOM;
            }
            code
        };

        let (mut ax, mut ay) = (i64::from(x0), i64::from(y0));
        let (mut bx, mut by) = (i64::from(x1), i64::from(y1));
        let (mut a_code, mut b_code) = (outcode(ax, ay), outcode(bx, by));

        // Each pass moves one endpoint onto an edge; four edges per endpoint.
        for _ in 0..8 {
            if a_code | b_code == 0 {
                return Some((
                    i32::try_from(ax).ok()?,
                    i32::try_from(ay).ok()?,
                    i32::try_from(bx).ok()?,
                    i32::try_from(by).ok()?,
                ));
            }
            if a_code & b_code != 0 {
                return None;
            }

            let out = if a_code != 0 { a_code } else { b_code };
            let (x, y) = if out & TOP != 0 {
                (intercept(ax, ay, bx, by, 0), 0)
            } else if out & BOTTOM != 0 {
                (intercept(ax, ay, bx, by, y_max), y_max)
            } else if out & LEFT != 0 {
                (0, intercept(ay, ax, by, bx, 0))
            } else {
                (x_max, intercept(ay, ax, by, bx, x_max))
            };

            if out == a_code {
                (ax, ay) = (x, y);
                a_code = outcode(ax, ay);
            } else {
                (bx, by) = (x, y);
                b_code = outcode(bx, by);
            }
        }
        None
    }
}

/// Coordinate `u` where the segment (u0, v0)-(u1, v1) crosses `v`.
///
/// Callers guarantee `v0 != v1`. The product is taken in `i128` since both
/// factors can span the full `i32` range; the result lies between `u0` and
/// `u1`, so it fits back into `i64`.
fn intercept(u0: i64, v0: i64, u1: i64, v1: i64, v: i64) -> i64 {
    let offset = i128::from(u1 - u0) * i128::from(v - v0) / i128::from(v1 - v0);
    u0 + offset as i64
}

/// Last coordinate covered by a span of `len` pixels starting at `start`.
fn far_edge(start: i32, len: u32) -> i32 {
    let len = i32::try_from(len).unwrap_or(i32::MAX);
    start.saturating_add(len - 1)
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pages", &self.pages)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn panel() -> FrameBuffer {
        FrameBuffer::new(128, 64).unwrap()
    }

    fn lit(fb: &FrameBuffer) -> usize {
        fb.pixels().iter().map(|b| b.count_ones() as usize).sum()
    }

    fn is_on(fb: &FrameBuffer, x: i32, y: i32) -> bool {
        fb.pixel(x, y) == Some(true)
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_buffer_is_blank_with_data_prefix() {
        let fb = panel();
        assert_eq!(fb.pages(), 8);
        assert_eq!(fb.as_bytes().len(), 8 * 128 + 1);
        assert_eq!(fb.as_bytes()[0], CONTROL_DATA);
        assert!(fb.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn small_panel_buffer_length() {
        let fb = FrameBuffer::new(128, 32).unwrap();
        assert_eq!(fb.pages(), 4);
        assert_eq!(fb.as_bytes().len(), 4 * 128 + 1);
    }

    #[test]
    fn rejects_unrepresentable_geometry() {
        assert!(FrameBuffer::new(0, 64).is_none());
        assert!(FrameBuffer::new(128, 0).is_none());
        assert!(FrameBuffer::new(128, 60).is_none());
        assert!(FrameBuffer::new(255, 64).is_none());
        assert!(FrameBuffer::new(128, 72).is_none());
    }

    // ── Pixel addressing ─────────────────────────────────────────────

    #[test]
    fn pixel_maps_to_page_column_bit() {
        let mut fb = panel();
        fb.set_pixel(1, 9, true);
        // page 1, column 1 → 1 + 1 * 8 + 1
        assert_eq!(fb.as_bytes()[10], 0b0000_0010);
        assert_eq!(lit(&fb), 1);
    }

    #[test]
    fn last_pixel_is_last_byte_top_bit() {
        let mut fb = panel();
        fb.set_pixel(127, 63, true);
        assert_eq!(*fb.as_bytes().last().unwrap(), 0b1000_0000);
    }

    #[test]
    fn clear_pixel_leaves_neighbours() {
        let mut fb = panel();
        fb.set_pixel(5, 5, true);
        fb.set_pixel(5, 6, true);
        fb.set_pixel(5, 5, false);
        assert!(!is_on(&fb, 5, 5));
        assert!(is_on(&fb, 5, 6));
    }

    #[test]
    fn off_panel_writes_are_ignored() {
        let mut fb = panel();
        fb.set_pixel(-1, 0, true);
        fb.set_pixel(0, -1, true);
        fb.set_pixel(128, 0, true);
        fb.set_pixel(0, 64, true);
        assert_eq!(lit(&fb), 0);
        assert_eq!(fb.as_bytes()[0], CONTROL_DATA);
        assert_eq!(fb.pixel(128, 0), None);
    }

    #[test]
    fn far_off_panel_glyphs_are_clipped() {
        let mut fb = panel();
        fb.draw_char('A', i32::MAX - 2, 0);
        fb.draw_char('A', 0, i32::MAX - 2);
        fb.draw_char('A', i32::MIN, i32::MIN);
        assert_eq!(lit(&fb), 0);
    }

    #[test]
    fn far_off_panel_string_keeps_wrap_rule() {
        let mut fb = panel();
        fb.draw_string("AB", 0, i32::MAX - 3);
        assert_eq!(lit(&fb), 0);

        // 'A' lands far right and is clipped; the cursor then wraps and
        // 'B' starts the next row.
        fb.draw_string("AB", i32::MAX - 3, 0);
        let mut expected = panel();
        expected.draw_char('B', 0, 8);
        assert_eq!(fb, expected);
    }

    #[test]
    fn far_endpoint_line_draws_only_visible_part() {
        let mut fb = panel();
        fb.draw_line(-1_200_000_000, 0, 0, 0, true);
        assert_eq!(lit(&fb), 1);
        assert!(is_on(&fb, 0, 0));

        let mut fb = panel();
        fb.draw_line(i32::MIN, 10, i32::MAX, 10, true);
        assert_eq!(lit(&fb), 128);
        assert!((0..128).all(|x| is_on(&fb, x, 10)));

        let mut fb = panel();
        fb.draw_line(-1000, -1000, 1000, 1000, true);
        assert_eq!(lit(&fb), 64);
        assert!((0..64).all(|i| is_on(&fb, i, i)));
    }

    #[test]
    fn line_outside_panel_draws_nothing() {
        let mut fb = panel();
        fb.draw_line(-50, -5, 200, -5, true);
        fb.draw_line(i32::MIN, i32::MIN, i32::MAX, -1, true);
        fb.draw_line(130, 70, 300, 10, true);
        assert_eq!(lit(&fb), 0);
    }

    proptest! {
        #[test]
        fn set_then_clear_touches_one_bit(x in 0i32..128, y in 0i32..64) {
            let mut fb = panel();
            fb.set_pixel(x, y, true);
            prop_assert!(is_on(&fb, x, y));
            prop_assert_eq!(lit(&fb), 1);

            fb.set_pixel(x, y, false);
            prop_assert_eq!(fb, panel());
        }
    }

    // ── Fill ─────────────────────────────────────────────────────────

    #[test]
    fn fill_round_trip_restores_blank_buffer() {
        let mut fb = panel();
        fb.fill(true);
        assert!(fb.pixels().iter().all(|&b| b == 0xFF));
        assert_eq!(fb.as_bytes()[0], CONTROL_DATA);

        fb.fill(false);
        assert_eq!(fb, panel());
    }

    // ── Rectangles ───────────────────────────────────────────────────

    #[test]
    fn outline_sets_only_perimeter() {
        let mut fb = panel();
        fb.draw_rectangle(10, 20, 12, 7, true, false);
        assert_eq!(lit(&fb), 2 * (12 + 7) - 4);
        assert!(is_on(&fb, 20, 10));
        assert!(is_on(&fb, 31, 16));
        assert!(!is_on(&fb, 21, 11));
    }

    #[test]
    fn filled_rectangle_sets_every_pixel() {
        let mut fb = panel();
        fb.draw_rectangle(3, 4, 8, 8, true, true);
        assert_eq!(lit(&fb), 64);
        for x in 4..12 {
            for y in 3..11 {
                assert!(is_on(&fb, x, y));
            }
        }
    }

    #[test]
    fn filled_rectangle_can_clear() {
        let mut fb = panel();
        fb.fill(true);
        fb.draw_rectangle(0, 0, 4, 4, false, true);
        assert_eq!(lit(&fb), 128 * 64 - 16);
    }

    #[test]
    fn full_panel_outline() {
        let mut fb = panel();
        fb.draw_rectangle(0, 0, 128, 64, true, false);
        assert_eq!(lit(&fb), 2 * (128 + 64) - 4);
    }

    #[test]
    fn degenerate_rectangles() {
        let mut fb = panel();
        fb.draw_rectangle(5, 5, 0, 10, true, true);
        fb.draw_rectangle(5, 5, 10, 0, true, true);
        assert_eq!(lit(&fb), 0);

        fb.draw_rectangle(5, 5, 1, 1, true, false);
        assert_eq!(lit(&fb), 1);
    }

    #[test]
    fn rectangle_partly_off_panel_is_clipped() {
        let mut fb = panel();
        fb.draw_rectangle(60, 120, 20, 20, true, true);
        assert_eq!(lit(&fb), 8 * 4);
    }

    // ── Lines ────────────────────────────────────────────────────────

    #[test]
    fn horizontal_line_includes_endpoints() {
        let mut fb = panel();
        fb.draw_line(0, 0, 7, 0, true);
        assert_eq!(lit(&fb), 8);
        for x in 0..8 {
            assert!(is_on(&fb, x, 0));
        }
    }

    #[test]
    fn diagonal_line_has_no_gaps() {
        let mut fb = panel();
        fb.draw_line(0, 0, 7, 7, true);
        assert_eq!(lit(&fb), 8);
        for i in 0..8 {
            assert!(is_on(&fb, i, i));
        }
    }

    #[test]
    fn lines_are_continuous_in_every_octant() {
        let centre = (64, 32);
        let ends = [
            (100, 40), (100, 24), (28, 40), (28, 24),
            (70, 60), (70, 4), (58, 60), (58, 4),
        ];
        for &(x1, y1) in &ends {
            let mut fb = panel();
            fb.draw_line(centre.0, centre.1, x1, y1, true);
            assert!(is_on(&fb, centre.0, centre.1));
            assert!(is_on(&fb, x1, y1));

            // The major axis advances by one per pixel, so the pixel count is
            // its length plus one.
            let major = (x1 - centre.0).abs().max((y1 - centre.1).abs());
            assert_eq!(lit(&fb), major as usize + 1, "line to ({}, {})", x1, y1);

            // Every lit pixel other than the end has a lit 8-neighbour.
            for x in 0..128 {
                for y in 0..64 {
                    if !is_on(&fb, x, y) {
                        continue;
                    }
                    let neighbours = (-1..=1)
                        .flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)))
                        .filter(|&(dx, dy)| (dx, dy) != (0, 0))
                        .filter(|&(dx, dy)| is_on(&fb, x + dx, y + dy))
                        .count();
                    assert!(neighbours >= 1);
                }
            }
        }
    }

    #[test]
    fn line_is_symmetric() {
        let mut forward = panel();
        forward.draw_line(3, 5, 40, 17, true);
        let mut backward = panel();
        backward.draw_line(40, 17, 3, 5, true);
        assert_eq!(lit(&forward), lit(&backward));
        assert!(is_on(&backward, 3, 5));
        assert!(is_on(&backward, 40, 17));
    }

    #[test]
    fn single_point_line() {
        let mut fb = panel();
        fb.draw_line(9, 9, 9, 9, true);
        assert_eq!(lit(&fb), 1);
    }

    #[test]
    fn axis_lines_accept_reversed_endpoints() {
        let mut fb = panel();
        fb.draw_hline(10, 5, 2, true);
        fb.draw_vline(50, 20, 11, true);
        assert_eq!(lit(&fb), 6 + 10);
        assert!(is_on(&fb, 5, 2) && is_on(&fb, 10, 2));
        assert!(is_on(&fb, 50, 11) && is_on(&fb, 50, 20));
    }

    // ── Text ─────────────────────────────────────────────────────────

    #[test]
    fn draw_char_blits_glyph_columns() {
        let mut fb = panel();
        fb.draw_char('A', 8, 16);
        for (i, &column) in glyph('A').iter().enumerate() {
            for j in 0..8 {
                assert_eq!(
                    is_on(&fb, 8 + i as i32, 16 + j),
                    column & (1 << j) != 0
                );
            }
        }
        // Page-aligned glyph lands byte-for-byte in the buffer.
        assert_eq!(fb.as_bytes()[2 + 8 * 8 + 1], glyph('A')[0]);
    }

    #[test]
    fn unsupported_char_clears_its_cell() {
        let mut fb = panel();
        fb.fill(true);
        fb.draw_char('#', 0, 0);
        for x in 0..8 {
            for y in 0..8 {
                assert!(!is_on(&fb, x, y));
            }
        }
        assert_eq!(lit(&fb), 128 * 64 - 64);
    }

    #[test]
    fn draw_string_advances_by_glyph_width() {
        let mut fb = panel();
        fb.draw_string("Hi", 0, 0);
        let mut expected = panel();
        expected.draw_char('H', 0, 0);
        expected.draw_char('i', 8, 0);
        assert_eq!(fb, expected);
    }

    #[test]
    fn draw_string_wraps_to_next_row() {
        let mut fb = panel();
        // 16 glyphs fill a 128 px row, the 17th wraps.
        fb.draw_string("ABCDEFGHIJKLMNOPQ", 0, 0);
        let mut expected = panel();
        expected.draw_char('P', 120, 0);
        expected.draw_char('Q', 0, 8);
        for (x, y) in [(120, 0), (0, 8)] {
            for dx in 0..8 {
                for dy in 0..8 {
                    assert_eq!(fb.pixel(x + dx, y + dy), expected.pixel(x + dx, y + dy));
                }
            }
        }
        assert!(lit(&fb) > 0);
    }

    #[test]
    fn draw_string_stops_below_last_row() {
        let mut fb = panel();
        fb.draw_string("ABCDEFGHIJKLMNOPQRST", 0, 56);
        // Only the first 16 glyphs fit on the last row.
        let mut expected = panel();
        expected.draw_string("ABCDEFGHIJKLMNOP", 0, 56);
        assert_eq!(fb, expected);
    }

    #[test]
    fn draw_string_first_glyph_stays_at_cursor() {
        let mut fb = panel();
        // Only half of 'W' fits, but it is still drawn where asked.
        fb.draw_string("W", 124, 0);
        let mut expected = panel();
        expected.draw_char('W', 124, 0);
        assert_eq!(fb, expected);
        assert!((0..64).all(|y| !is_on(&fb, 0, y)));
    }
}
