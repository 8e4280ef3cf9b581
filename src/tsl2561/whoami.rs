use crate::protocol::{self, REG_ID};
use crate::{tsl2561::Tsl2561, AddressedBusTransport, WhoAmI};
use embedded_hal::delay::DelayNs;

impl<BUS: AddressedBusTransport, DELAY: DelayNs> WhoAmI<BUS, u8> for Tsl2561<BUS, DELAY> {
    /// Part number of the T/FN/CL packages, the upper nibble of the ID register.  The lower
    /// nibble is the silicon revision.
    const EXPECTED_WHOAMI: u8 = 0b0101;

    fn whoami(&mut self) -> Result<u8, BUS::Error> {
        let [id] = protocol::read::<BUS, 1>(&mut self.bus, self.address, REG_ID)?;
        Ok(id >> 4)
    }
}
