//! Opening an I2C character device on Linux.
//!
//! The returned [`I2cdev`] already implements [`crate::AddressedBusTransport`], so it can be
//! passed to [`crate::Tsl2561`] together with [`Delay`].

extern crate std;

use linux_embedded_hal::i2cdev::linux::LinuxI2CError;
pub use linux_embedded_hal::{Delay, I2cdev};
use std::format;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum OpenError {
    DeviceNotFound(PathBuf),
    I2cError(LinuxI2CError),
}

impl From<LinuxI2CError> for OpenError {
    fn from(error: LinuxI2CError) -> Self {
        Self::I2cError(error)
    }
}

/// Device path of bus number `index`.
#[must_use]
pub fn bus_path(index: u8) -> PathBuf {
    PathBuf::from(format!("/dev/i2c-{index}"))
}

/// Opens bus number `index`, i.e. `/dev/i2c-<index>`.
///
/// # Errors
///
/// As for [`open_path`].
pub fn open_bus(index: u8) -> Result<I2cdev, OpenError> {
    open_path(bus_path(index))
}

/// Opens the I2C character device at `path`.
///
/// # Errors
///
/// [`OpenError::DeviceNotFound`]: nothing exists at `path`.
/// [`OpenError::I2cError`]: the device could not be opened.
pub fn open_path<P: AsRef<Path>>(path: P) -> Result<I2cdev, OpenError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(OpenError::DeviceNotFound(path.to_path_buf()));
    }
    Ok(I2cdev::new(path)?)
}
