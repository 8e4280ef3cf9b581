//! Gain and integration time, the two fields of the TIMING register.

use num_enum::{IntoPrimitive, TryFromPrimitive};

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum IntegrationTime {
    Ms13 = 0x00,
    Ms101 = 0x01,
    Ms402 = 0x02,
}

impl IntegrationTime {
    pub const MASK: u8 = 0b0000_0011;

    /// Nominal conversion time in milliseconds.
    #[must_use]
    pub const fn nominal_ms(self) -> u32 {
        match self {
            Self::Ms13 => 13,
            Self::Ms101 => 101,
            Self::Ms402 => 402,
        }
    }
}

/// How long to wait after powering on before the channel registers hold a complete conversion,
/// given the integration bits of the TIMING register.  Each wait is one millisecond over the
/// nominal conversion time.
#[must_use]
pub fn conversion_wait_ms(integration_bits: u8) -> u32 {
    match IntegrationTime::try_from(integration_bits) {
        Ok(IntegrationTime::Ms13) => 14,
        Ok(IntegrationTime::Ms101) => 102,
        Ok(IntegrationTime::Ms402) => 403,
        // manual integration (0x03) or anything else
        Err(_) => 403,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Gain {
    /// No gain.
    Low = 0x00,
    /// 16x.
    High = 0x10,
}

impl Gain {
    pub const MASK: u8 = 0b0001_0000;
}

/// TIMING register contents that are not one gain combined with one integration time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownTiming(pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfiguration {
    pub integration_time: IntegrationTime,
    pub gain: Gain,
}

impl Default for DeviceConfiguration {
    fn default() -> Self {
        Self {
            integration_time: IntegrationTime::Ms402,
            gain: Gain::Low,
        }
    }
}

impl DeviceConfiguration {
    /// The byte written to the TIMING register.
    #[must_use]
    pub fn timing_bits(self) -> u8 {
        u8::from(self.gain) | u8::from(self.integration_time)
    }
}

impl TryFrom<u8> for DeviceConfiguration {
    type Error = UnknownTiming;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        if bits & !(Gain::MASK | IntegrationTime::MASK) != 0 {
            return Err(UnknownTiming(bits));
        }
        let integration_time = IntegrationTime::try_from(bits & IntegrationTime::MASK)
            .map_err(|_| UnknownTiming(bits))?;
        let gain = Gain::try_from(bits & Gain::MASK).map_err(|_| UnknownTiming(bits))?;
        Ok(Self {
            integration_time,
            gain,
        })
    }
}
