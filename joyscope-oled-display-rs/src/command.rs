//! SSD1306 command bytes and I2C control prefixes.
//!
//! Commands that take an argument in their low bits (display on/off, start
//! line, segment remap, COM scan direction) are listed as base values and
//! OR'd with the argument at the call site: `SET_DISP | 0x01`.

// ---------------------------------------------------------------------------
// I2C control bytes
// ---------------------------------------------------------------------------

/// Control byte announcing a single command byte (Co = 1, D/C# = 0).
pub const CONTROL_COMMAND: u8 = 0x80;

/// Control byte announcing a stream of display RAM data (Co = 0, D/C# = 1).
/// Stored as byte 0 of every frame buffer.
pub const CONTROL_DATA: u8 = 0x40;

// ---------------------------------------------------------------------------
// Fundamental commands
// ---------------------------------------------------------------------------

/// Contrast control; followed by one argument byte (0x00–0xFF).
pub const SET_CONTRAST: u8 = 0x81;

/// Resume to RAM content (`| 0`) or force every pixel on (`| 1`).
pub const SET_ENTIRE_ON: u8 = 0xA4;

/// Normal (`| 0`) or inverted (`| 1`) display.
pub const SET_NORM_INV: u8 = 0xA6;

/// Display off (`| 0`, sleep) or on (`| 1`).
pub const SET_DISP: u8 = 0xAE;

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

/// Memory addressing mode; followed by 0x00 (horizontal), 0x01 (vertical)
/// or 0x02 (page).
pub const SET_MEM_ADDR: u8 = 0x20;

/// Column window; followed by start and end column.
pub const SET_COL_ADDR: u8 = 0x21;

/// Page window; followed by start and end page.
pub const SET_PAGE_ADDR: u8 = 0x22;

/// Vertical addressing: the RAM pointer walks down the pages of a column
/// before moving to the next column. The frame buffer layout depends on it.
pub const ADDR_MODE_VERTICAL: u8 = 0x01;

// ---------------------------------------------------------------------------
// Hardware configuration
// ---------------------------------------------------------------------------

/// Display start line, OR'd with the line (0–63).
pub const SET_DISP_START_LINE: u8 = 0x40;

/// Segment remap, OR'd with 1 to map column 127 to SEG0.
pub const SET_SEG_REMAP: u8 = 0xA0;

/// Multiplex ratio; followed by `height - 1`.
pub const SET_MUX_RATIO: u8 = 0xA8;

/// COM output scan direction, OR'd with 0x08 to scan from COM[N-1] to COM0.
pub const SET_COM_OUT_DIR: u8 = 0xC0;

/// Vertical display offset; followed by the offset.
pub const SET_DISP_OFFSET: u8 = 0xD3;

/// COM pins hardware configuration; followed by the pin layout byte.
pub const SET_COM_PIN_CFG: u8 = 0xDA;

// ---------------------------------------------------------------------------
// Timing and driving scheme
// ---------------------------------------------------------------------------

/// Display clock divide ratio / oscillator frequency; followed by one byte.
pub const SET_DISP_CLK_DIV: u8 = 0xD5;

/// Pre-charge period; followed by one byte.
pub const SET_PRECHARGE: u8 = 0xD9;

/// VCOMH deselect level; followed by one byte.
pub const SET_VCOM_DESEL: u8 = 0xDB;

/// Charge pump setting; followed by 0x14 (enable) or 0x10 (disable).
pub const SET_CHARGE_PUMP: u8 = 0x8D;

// ---------------------------------------------------------------------------
// Argument values
// ---------------------------------------------------------------------------

/// Alternative COM pin layout used by 128×64 panels.
pub const COM_PIN_CFG_ALTERNATIVE: u8 = 0x12;

/// Sequential COM pin layout used by 128×32 panels.
pub const COM_PIN_CFG_SEQUENTIAL: u8 = 0x02;

/// Charge pump argument when the panel generates its own supply.
pub const CHARGE_PUMP_ON: u8 = 0x14;

/// Charge pump argument when VCC is supplied externally.
pub const CHARGE_PUMP_OFF: u8 = 0x10;

/// Pre-charge period for the internal charge pump.
pub const PRECHARGE_INTERNAL_VCC: u8 = 0xF1;

/// Pre-charge period for an external VCC supply.
pub const PRECHARGE_EXTERNAL_VCC: u8 = 0x22;

/// Default I2C address of SSD1306 breakout boards (SA0 low).
pub const DEFAULT_ADDRESS: u8 = 0x3C;
