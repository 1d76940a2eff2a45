//! Core OLED driver: SSD1306 command framing over async I2C.
//!
//! [`OledDriver`] owns the bus, the panel geometry and the [`FrameBuffer`].
//! Drawing happens in memory through [`OledDriver::frame_mut()`]; pixel data
//! only reaches the panel in [`OledDriver::flush()`].

use embedded_hal_async::i2c::I2c;

use crate::command::*;
use crate::error::OledError;
use crate::framebuffer::FrameBuffer;

/// Panel geometry and power source, fixed for the lifetime of the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Width in pixels. Default: 128.
    pub width: u8,
    /// Height in pixels, a multiple of 8. Default: 64.
    pub height: u8,
    /// `true` when VCC is supplied externally instead of by the on-chip
    /// charge pump. Default: `false`.
    pub external_vcc: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            external_vcc: false,
        }
    }
}

/// Lifecycle of the panel as seen by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// Constructed, no command sent yet.
    Unconfigured,
    /// Init sequence sent; the panel accepts frames.
    Active,
}

/// Async driver for an SSD1306 OLED over I2C.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`]: builds the frame buffer, no I2C traffic.
/// 2. [`OledDriver::configure()`]: sends the SSD1306 init sequence.
/// 3. Draw into the buffer via [`OledDriver::frame_mut()`].
/// 4. [`OledDriver::flush()`]: transfers the whole buffer to the panel.
///
/// # Example
///
/// ```no_run
/// use joyscope_oled_display_rs::{OledDriver, PanelConfig};
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut oled = OledDriver::new(i2c, 0x3C, PanelConfig::default()).unwrap();
/// oled.configure().await.unwrap();
/// oled.frame_mut().draw_string("Hello", 0, 0);
/// oled.flush().await.unwrap();
/// # }
/// ```
pub struct OledDriver<I2C> {
    i2c: I2C,
    address: u8,
    external_vcc: bool,
    frame: FrameBuffer,
    state: DriverState,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Construct an unconfigured driver with a blank frame buffer.
    ///
    /// No I2C traffic is generated. You **must** call
    /// [`configure()`](Self::configure) before flushing.
    ///
    /// # Arguments
    /// * `i2c`: I2C peripheral (takes ownership for exclusive access).
    /// * `address`: 7-bit I2C device address (typically `0x3C` or `0x3D`).
    /// * `config`: panel geometry and VCC source.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::InvalidGeometry`] if the frame buffer cannot be
    /// sized for `config`.
    pub fn new(i2c: I2C, address: u8, config: PanelConfig) -> Result<Self, OledError<I2C::Error>> {
        let frame =
            FrameBuffer::new(config.width, config.height).ok_or(OledError::InvalidGeometry)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "OLED {}x{} at {=u8:#x}, {} bytes",
            config.width,
            config.height,
            address,
            frame.as_bytes().len()
        );

        Ok(Self {
            i2c,
            address,
            external_vcc: config.external_vcc,
            frame,
            state: DriverState::Unconfigured,
        })
    }

    /// Send the SSD1306 initialisation sequence, one command per transaction.
    ///
    /// The order is fixed by the controller's power-up procedure. On success
    /// the driver becomes [`DriverState::Active`].
    ///
    /// # Errors
    ///
    /// Returns [`OledError::I2c`] on the first failed transaction; the driver
    /// then stays unconfigured.
    pub async fn configure(&mut self) -> Result<(), OledError<I2C::Error>> {
        for command in self.init_sequence() {
            self.send_command(command).await?;
        }
        self.state = DriverState::Active;

        #[cfg(feature = "defmt")]
        defmt::info!("OLED configured");
        Ok(())
    }

    fn init_sequence(&self) -> [u8; 25] {
        let width = self.frame.width();
        let height = self.frame.height();

        let (precharge, charge_pump) = if self.external_vcc {
            (PRECHARGE_EXTERNAL_VCC, CHARGE_PUMP_OFF)
        } else {
            (PRECHARGE_INTERNAL_VCC, CHARGE_PUMP_ON)
        };
        let com_pins = if u16::from(width) > 2 * u16::from(height) {
            COM_PIN_CFG_SEQUENTIAL
        } else {
            COM_PIN_CFG_ALTERNATIVE
        };

        [
            SET_DISP,
            SET_MEM_ADDR,
            ADDR_MODE_VERTICAL,
            SET_DISP_START_LINE,
            SET_SEG_REMAP | 0x01,
            SET_MUX_RATIO,
            height - 1,
            SET_COM_OUT_DIR | 0x08,
            SET_DISP_OFFSET,
            0x00,
            SET_COM_PIN_CFG,
            com_pins,
            SET_DISP_CLK_DIV,
            0x80,
            SET_PRECHARGE,
            precharge,
            SET_VCOM_DESEL,
            0x30,
            SET_CONTRAST,
            0xFF,
            SET_ENTIRE_ON,
            SET_NORM_INV,
            SET_CHARGE_PUMP,
            charge_pump,
            SET_DISP | 0x01,
        ]
    }

    /// Write one command byte as a `[CONTROL_COMMAND, command]` transaction.
    ///
    /// Command arguments are sent the same way, one byte per call.
    pub async fn send_command(&mut self, command: u8) -> Result<(), OledError<I2C::Error>> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, command])
            .await?;
        Ok(())
    }

    /// Transfer the frame buffer to the panel.
    ///
    /// Sets the column window to `[0, width - 1]` and the page window to
    /// `[0, pages - 1]`, then writes the whole buffer (data prefix included)
    /// in a single transaction. At 400 kHz a 128×64 frame takes about 25 ms.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::NotInitialized`] if [`configure()`](Self::configure)
    /// has not succeeded, or [`OledError::I2c`] on a bus failure.
    pub async fn flush(&mut self) -> Result<(), OledError<I2C::Error>> {
        if self.state != DriverState::Active {
            return Err(OledError::NotInitialized);
        }

        let last_column = self.frame.width() - 1;
        let last_page = self.frame.pages() - 1;

        self.send_command(SET_COL_ADDR).await?;
        self.send_command(0).await?;
        self.send_command(last_column).await?;
        self.send_command(SET_PAGE_ADDR).await?;
        self.send_command(0).await?;
        self.send_command(last_page).await?;

        self.i2c.write(self.address, self.frame.as_bytes()).await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Panel settings
    // -----------------------------------------------------------------------

    /// Set the panel contrast (0–255).
    pub async fn set_contrast(&mut self, contrast: u8) -> Result<(), OledError<I2C::Error>> {
        self.send_command(SET_CONTRAST).await?;
        self.send_command(contrast).await
    }

    /// Wake the panel or put it to sleep. RAM content is kept while off.
    pub async fn set_display_on(&mut self, on: bool) -> Result<(), OledError<I2C::Error>> {
        self.send_command(SET_DISP | u8::from(on)).await
    }

    /// Swap lit and dark pixels in hardware without touching the buffer.
    pub async fn set_inverted(&mut self, inverted: bool) -> Result<(), OledError<I2C::Error>> {
        self.send_command(SET_NORM_INV | u8::from(inverted)).await
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The frame buffer as last drawn.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Mutable access to the frame buffer for drawing.
    ///
    /// No I2C traffic is generated; changes are sent by the next
    /// [`flush()`](Self::flush).
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Check whether [`configure()`](Self::configure) has succeeded.
    pub fn is_configured(&self) -> bool {
        self.state == DriverState::Active
    }

    /// 7-bit bus address of the panel.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the I2C peripheral back, dropping the frame buffer.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
