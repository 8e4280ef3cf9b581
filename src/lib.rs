#![no_std]
#![doc = include_str!("../README.md")]

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::trace!($($arg)*);
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    };
}

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// The bus capability the driver needs: a register-select byte followed by either a read of some
/// bytes or a write of one byte, addressed to a single device.
///
/// Every [`I2c`] implementation has this capability, so HAL and `linux-embedded-hal` handles can be
/// passed straight to [`tsl2561::Tsl2561`].
pub trait AddressedBusTransport {
    type Error;

    /// Sends `select` to the device at `address` and reads `buffer.len()` bytes back.
    fn read_register(&mut self, address: u8, select: u8, buffer: &mut [u8])
        -> Result<(), Self::Error>;

    /// Sends `select` followed by `value` to the device at `address`.
    fn write_register(&mut self, address: u8, select: u8, value: u8) -> Result<(), Self::Error>;
}

impl<I2C: I2c> AddressedBusTransport for I2C {
    type Error = I2C::Error;

    fn read_register(
        &mut self,
        address: u8,
        select: u8,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.write_read(address, &[select], buffer)
    }

    fn write_register(&mut self, address: u8, select: u8, value: u8) -> Result<(), Self::Error> {
        self.write(address, &[select, value])
    }
}

pub trait WhoAmI<BUS: AddressedBusTransport, T: core::cmp::Eq> {
    const EXPECTED_WHOAMI: T;

    fn whoami(&mut self) -> Result<T, BUS::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRange;

pub trait DriverUsingDelay<BUS: AddressedBusTransport, DELAY: DelayNs, T> {
    fn address_check(address: u8) -> Result<(), OutOfRange> {
        if (0x08..=0x77).contains(&address) {
            Ok(())
        } else {
            Err(OutOfRange)
        }
    }

    fn new_inner(bus: BUS, address: u8, delay: DELAY) -> Self;

    /// The entry point for a [`DriverUsingDelay`].  Expects an [`AddressedBusTransport`] (any
    /// [`I2c`] obtainable from the target platform HAL), an I2C device address in the range
    /// `0x08..=0x77` and a [`DelayNs`] (also usually obtainable from the target platform HAL).
    /// This provides a handle that does not touch the hardware.  Initialization is deferred to
    /// [`DriverUsingDelay::init`].
    ///
    /// # Errors
    ///
    /// [`OutOfRange`]: address is ouside of the allowed range `0x08..=0x77`
    fn new(bus: BUS, address: u8, delay: DELAY) -> Result<Self, OutOfRange>
    where
        Self: Sized,
    {
        Self::address_check(address)?;
        Ok(Self::new_inner(bus, address, delay))
    }

    fn init_inner(self) -> Result<Self, T>
    where
        Self: Sized,
    {
        Ok(self)
    }

    /// Initializes the hardware.  This initialization is required prior to taking readings.
    ///
    /// # Errors
    ///
    /// [`T`]: a device dependent error type for any problems encountered during initialization.
    fn init(self) -> Result<Self, T>
    where
        Self: Sized,
    {
        self.init_inner()
    }
}

pub mod config;
#[cfg(all(feature = "linux", target_os = "linux"))]
pub mod linux;
pub mod lux;
pub mod protocol;
pub mod tsl2561;

pub use config::{DeviceConfiguration, Gain, IntegrationTime};
pub use tsl2561::{RawReading, Tsl2561};

#[cfg(all(test, not(all(target_arch = "arm", target_os = "none"))))]
pub(crate) mod testing {
    extern crate std;
    use embedded_hal::delay::DelayNs;
    use std::vec::Vec;

    /// Records every requested wait instead of sleeping.
    #[derive(Debug, Default)]
    pub struct RecordingDelay {
        pub waits_ns: Vec<u64>,
    }

    impl RecordingDelay {
        pub fn total_ms(&self) -> u64 {
            self.waits_ns.iter().sum::<u64>() / 1_000_000
        }
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.waits_ns.push(u64::from(ns));
        }

        fn delay_us(&mut self, us: u32) {
            self.waits_ns.push(u64::from(us) * 1_000);
        }

        fn delay_ms(&mut self, ms: u32) {
            self.waits_ns.push(u64::from(ms) * 1_000_000);
        }
    }
}
