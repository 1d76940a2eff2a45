//! `embedded-graphics` integration.
//!
//! [`FrameBuffer`] is a [`DrawTarget`] over [`BinaryColor`], so any
//! embedded-graphics primitive, image or mono font can be drawn next to the
//! built-in 8×8 text. Off-panel pixels are clipped like every other write.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::framebuffer::FrameBuffer;

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        mono_font::{ascii::FONT_6X10, MonoTextStyle},
        primitives::{Line, PrimitiveStyle, Rectangle},
        text::Text,
    };

    fn lit(frame: &FrameBuffer) -> usize {
        frame.pixels().iter().map(|b| b.count_ones() as usize).sum()
    }

    #[test]
    fn size_matches_geometry() {
        let fb = FrameBuffer::new(128, 32).unwrap();
        assert_eq!(fb.size(), Size::new(128, 32));
    }

    #[test]
    fn rectangle_outline_matches_native_primitive() {
        let mut eg = FrameBuffer::new(128, 64).unwrap();
        Rectangle::new(Point::new(2, 3), Size::new(10, 5))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut eg)
            .unwrap();

        let mut native = FrameBuffer::new(128, 64).unwrap();
        native.draw_rectangle(3, 2, 10, 5, true, false);

        assert_eq!(lit(&eg), 26);
        assert_eq!(eg, native);
    }

    #[test]
    fn line_matches_native_primitive() {
        let mut eg = FrameBuffer::new(128, 64).unwrap();
        Line::new(Point::new(0, 10), Point::new(40, 10))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut eg)
            .unwrap();

        let mut native = FrameBuffer::new(128, 64).unwrap();
        native.draw_hline(0, 40, 10, true);

        assert_eq!(eg, native);
    }

    #[test]
    fn off_panel_pixels_are_clipped() {
        let mut fb = FrameBuffer::new(128, 64).unwrap();
        Rectangle::new(Point::new(-10, -10), Size::new(300, 300))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut fb)
            .unwrap();
        assert_eq!(lit(&fb), 128 * 64);
        assert_eq!(fb.as_bytes()[0], 0x40);
    }

    #[test]
    fn mono_font_text_lights_pixels() {
        let mut fb = FrameBuffer::new(128, 64).unwrap();
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::new("Joyscope", Point::new(0, 10), style)
            .draw(&mut fb)
            .unwrap();
        assert!(lit(&fb) > 0);
        // Baseline at y = 10 keeps the glyphs above row 12.
        assert!((0..128).all(|x| fb.pixel(x, 13) == Some(false)));
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut fb = FrameBuffer::new(128, 64).unwrap();
        fb.clear(BinaryColor::On).unwrap();
        assert_eq!(lit(&fb), 128 * 64);
        fb.clear(BinaryColor::Off).unwrap();
        assert_eq!(lit(&fb), 0);
    }
}
