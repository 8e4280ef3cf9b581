//! # Driver for the TSL2561 Light-to-Digital Converter
//!
//! Polled acquisition: each reading powers the ADC on, waits out one integration period, reads
//! both channels and powers the ADC off again.
//!
//! ## External Links
//!
//! - [Datasheet]
//!
//! [Datasheet]: https://cdn-shop.adafruit.com/datasheets/TSL2561.pdf

use crate::config::{conversion_wait_ms, DeviceConfiguration, Gain, IntegrationTime};
use crate::protocol::{
    self, POWER_OFF, POWER_ON, REG_CHAN0_LOW, REG_CHAN1_LOW, REG_CONTROL, REG_TIMING,
};
use crate::{AddressedBusTransport, DriverUsingDelay};
use embedded_hal::delay::DelayNs;

/// ADDR pin floating.
pub const DEFAULT_ADDRESS: u8 = 0x39;
/// ADDR pin tied to ground.
pub const ADDRESS_GND: u8 = 0x29;
/// ADDR pin tied to VDD.
pub const ADDRESS_VDD: u8 = 0x49;

/// One acquisition.  `ch0` is visible plus infrared, `ch1` infrared only.
///
/// Counts are at the equivalent of 16x gain: readings taken without gain are multiplied by 16,
/// which can take them past 16 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawReading {
    pub ch0: u32,
    pub ch1: u32,
}

impl RawReading {
    #[must_use]
    pub fn lux(&self) -> f64 {
        crate::lux::lux(self.ch0, self.ch1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    I2cError(E),
    UnexpectedTiming(u8),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::I2cError(error)
    }
}

pub struct Tsl2561<BUS, DELAY> {
    bus: BUS,
    address: u8,
    delay: DELAY,
    config: DeviceConfiguration,
}

impl<BUS: AddressedBusTransport, DELAY: DelayNs> DriverUsingDelay<BUS, DELAY, BUS::Error>
    for Tsl2561<BUS, DELAY>
{
    fn new_inner(bus: BUS, address: u8, delay: DELAY) -> Self {
        Self {
            bus,
            address,
            delay,
            config: DeviceConfiguration::default(),
        }
    }

    // The default configuration is replaced with maximum gain before the first reading.
    fn init_inner(mut self) -> Result<Self, BUS::Error> {
        self.set_gain(Gain::High)?;
        Ok(self)
    }
}

impl<BUS: AddressedBusTransport, DELAY: DelayNs> Tsl2561<BUS, DELAY> {
    #[must_use]
    pub fn configuration(&self) -> DeviceConfiguration {
        self.config
    }

    /// Reprograms the integration time, keeping the current gain.
    ///
    /// # Errors
    ///
    /// Any transport error.  The stored configuration is left unchanged.
    pub fn set_integration_time(
        &mut self,
        integration_time: IntegrationTime,
    ) -> Result<(), BUS::Error> {
        self.program(DeviceConfiguration {
            integration_time,
            ..self.config
        })
    }

    /// Reprograms the gain, keeping the current integration time.
    ///
    /// # Errors
    ///
    /// Any transport error.  The stored configuration is left unchanged.
    pub fn set_gain(&mut self, gain: Gain) -> Result<(), BUS::Error> {
        self.program(DeviceConfiguration { gain, ..self.config })
    }

    // TIMING is always written with the ADC powered, then the ADC is powered down again.
    fn program(&mut self, config: DeviceConfiguration) -> Result<(), BUS::Error> {
        debug!("programming timing {}", config);
        self.power_on()?;
        protocol::write(
            &mut self.bus,
            self.address,
            REG_TIMING,
            config.timing_bits(),
        )?;
        self.power_off()?;
        self.config = config;
        Ok(())
    }

    /// Reads back the TIMING register.
    ///
    /// # Errors
    ///
    /// [`Error::I2cError`]: transport error.
    /// [`Error::UnexpectedTiming`]: the register holds bits this driver never writes.
    pub fn read_configuration(&mut self) -> Result<DeviceConfiguration, Error<BUS::Error>> {
        let [bits] = protocol::read::<BUS, 1>(&mut self.bus, self.address, REG_TIMING)?;
        DeviceConfiguration::try_from(bits).map_err(|unknown| Error::UnexpectedTiming(unknown.0))
    }

    /// Takes one reading of both channels.  Blocks for the configured integration time.
    ///
    /// # Errors
    ///
    /// The first transport error aborts the acquisition.  No further transactions are attempted,
    /// so the ADC may be left powered.
    pub fn all(&mut self) -> Result<RawReading, BUS::Error> {
        self.power_on()?;
        let wait_ms = conversion_wait_ms(self.config.integration_time.into());
        trace!("waiting {=u32} ms for conversion", wait_ms);
        self.delay.delay_ms(wait_ms);

        let mut ch0 = u32::from(protocol::read_word(
            &mut self.bus,
            self.address,
            REG_CHAN0_LOW,
        )?);
        let mut ch1 = u32::from(protocol::read_word(
            &mut self.bus,
            self.address,
            REG_CHAN1_LOW,
        )?);
        if self.config.gain == Gain::Low {
            ch0 <<= 4;
            ch1 <<= 4;
        }
        self.power_off()?;

        trace!("ch0 {=u32} ch1 {=u32}", ch0, ch1);
        Ok(RawReading { ch0, ch1 })
    }

    /// Illuminance from a fresh reading.
    ///
    /// # Errors
    ///
    /// As for [`Tsl2561::all`].
    pub fn lux(&mut self) -> Result<f64, BUS::Error> {
        self.all().map(|reading| reading.lux())
    }

    /// Gives back the bus and delay.
    pub fn release(self) -> (BUS, DELAY) {
        (self.bus, self.delay)
    }

    fn power_on(&mut self) -> Result<(), BUS::Error> {
        protocol::write(&mut self.bus, self.address, REG_CONTROL, POWER_ON)
    }

    fn power_off(&mut self) -> Result<(), BUS::Error> {
        protocol::write(&mut self.bus, self.address, REG_CONTROL, POWER_OFF)
    }
}

pub mod whoami;
