//! Register protocol for the TSL2561.
//!
//! Every register access begins with a select byte: [`COMMAND_BIT`] or-ed with the register
//! address, plus [`WORD_BIT`] when the two bytes of a channel are read in one transfer.

use crate::AddressedBusTransport;

pub const COMMAND_BIT: u8 = 0x80;
/// Clears a pending interrupt.  Unused while acquisition is polled.
pub const CLEAR_BIT: u8 = 0x40;
pub const WORD_BIT: u8 = 0x20;
/// Selects SMBus block protocol.  Unused.
pub const BLOCK_BIT: u8 = 0x10;

pub const REG_CONTROL: u8 = 0x00;
pub const REG_TIMING: u8 = 0x01;
pub const REG_ID: u8 = 0x0A;
pub const REG_CHAN0_LOW: u8 = 0x0C;
pub const REG_CHAN0_HIGH: u8 = 0x0D;
pub const REG_CHAN1_LOW: u8 = 0x0E;
pub const REG_CHAN1_HIGH: u8 = 0x0F;

pub const POWER_ON: u8 = 0x03;
pub const POWER_OFF: u8 = 0x00;

/// Builds the select byte for a transfer of `size` bytes starting at `register`.
#[must_use]
pub const fn select(register: u8, size: usize) -> u8 {
    if size == 2 {
        COMMAND_BIT | WORD_BIT | register
    } else {
        COMMAND_BIT | register
    }
}

/// Writes one byte to `register`.
///
/// # Errors
///
/// Any transport error, unchanged.
pub fn write<BUS: AddressedBusTransport>(
    bus: &mut BUS,
    address: u8,
    register: u8,
    value: u8,
) -> Result<(), BUS::Error> {
    trace!("write {=u8:#x} <- {=u8:#x}", register, value);
    bus.write_register(address, select(register, 1), value)
}

/// Reads `N` bytes starting at `register`.  Two byte reads use the word protocol.
///
/// # Errors
///
/// Any transport error, unchanged.
pub fn read<BUS: AddressedBusTransport, const N: usize>(
    bus: &mut BUS,
    address: u8,
    register: u8,
) -> Result<[u8; N], BUS::Error> {
    let mut data = [0; N];
    bus.read_register(address, select(register, N), &mut data)?;
    Ok(data)
}

/// Reads a little-endian 16-bit value whose low byte is at `register`.
///
/// # Errors
///
/// Any transport error, unchanged.
pub fn read_word<BUS: AddressedBusTransport>(
    bus: &mut BUS,
    address: u8,
    register: u8,
) -> Result<u16, BUS::Error> {
    read::<BUS, 2>(bus, address, register).map(u16::from_le_bytes)
}
