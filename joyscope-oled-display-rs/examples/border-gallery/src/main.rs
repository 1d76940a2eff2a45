//! Border gallery example
//!
//! Standalone hardware demonstration that exercises [`OledDriver`] and the
//! decoration layer directly, with no joystick and no shared state. Shows each
//! border style for two seconds while the square sweeps the area that style
//! leaves free, which makes any overlap between square and border visible on
//! real hardware.
//!
//! # Wiring (BitDogLab)
//!
//! | Signal    | Pico Pin | Notes           |
//! |-----------|----------|-----------------|
//! | I2C1 SDA  | GP14     |                 |
//! | I2C1 SCL  | GP15     |                 |
//! | OLED VCC  | 3V3      |                 |
//! | OLED GND  | GND      |                 |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use embedded_graphics::mono_font::{ascii::FONT_6X10, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Text};

use joyscope_oled_display_rs::{
    clamp_to_style_bounds, draw_border, draw_square, BorderStyle, OledDriver, PanelConfig,
    DEFAULT_ADDRESS,
};

// Wire the I2C1 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

/// Frames per style at 25 Hz.
const FRAMES_PER_STYLE: u32 = 50;

const STYLE_NAMES: [&str; 6] = ["Minimal", "Double", "Corners", "Shadow", "Rounded", "Depth"];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Border gallery starting");

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_async(
        p.I2C1,
        p.PIN_15, // SCL
        p.PIN_14, // SDA
        Irqs,
        i2c_config,
    );

    let config = PanelConfig::default();
    let mut oled = unwrap!(OledDriver::new(i2c, DEFAULT_ADDRESS, config).ok());
    if oled.configure().await.is_err() {
        error!("OLED configure failed");
        return;
    }
    info!("OLED configured");

    let caption = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let centre = Point::new(i32::from(config.width) / 2, i32::from(config.height) / 2);
    let mut ticker = Ticker::every(Duration::from_millis(40));
    let mut style = BorderStyle::default();
    let mut frame_no = 0u32;

    loop {
        // Sweep the square corner to corner; clamping pins it to the bounds.
        let t = (frame_no * 4) as i32;
        let (x, y) = clamp_to_style_bounds(t - 20, t / 2 - 10, style, config.width, config.height);

        let frame = oled.frame_mut();
        frame.fill(false);
        draw_border(frame, style);
        Text::with_alignment(
            STYLE_NAMES[usize::from(style.index())],
            centre,
            caption,
            Alignment::Center,
        )
        .draw(frame)
        .ok();
        draw_square(frame, x, y);

        if oled.flush().await.is_err() {
            warn!("Flush failed");
        }

        frame_no += 1;
        if frame_no == FRAMES_PER_STYLE {
            frame_no = 0;
            style = style.next();
            info!("Border style {}", style.index());
        }

        ticker.next().await;
    }
}
