//! Error types for the OLED display driver.

use core::fmt;

/// Errors that can occur during OLED display operations.
///
/// Generic over the bus error so callers keep the concrete I2C failure.
#[derive(Debug, PartialEq, Eq)]
pub enum OledError<E> {
    /// Underlying I2C bus error.
    I2c(E),
    /// Panel geometry cannot be backed by the frame buffer: zero width,
    /// height not a non-zero multiple of 8, or larger than
    /// [`MAX_BUFFER_LEN`](crate::MAX_BUFFER_LEN).
    InvalidGeometry,
    /// A flush was attempted before
    /// [`OledDriver::configure()`](crate::OledDriver::configure).
    NotInitialized,
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for OledError<E> {
    fn from(error: E) -> Self {
        OledError::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for OledError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OledError::I2c(e) => write!(f, "I2C error: {:?}", e),
            OledError::InvalidGeometry => write!(f, "Unsupported panel geometry"),
            OledError::NotInitialized => write!(f, "Display not configured"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for OledError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            OledError::InvalidGeometry => defmt::write!(f, "Unsupported panel geometry"),
            OledError::NotInitialized => defmt::write!(f, "Not initialized"),
        }
    }
}
