//! Driver for TM1637-based four-digit 7-segment display modules
//!
//! The TM1637 is driven over a proprietary two-wire protocol (clock + data)
//! that resembles I2C but has no device addressing and no read-back. This
//! crate provides:
//!
//! - The bit-banged bus protocol (start/stop conditions, LSB-first byte
//!   framing, command and addressed-write transactions)
//! - Segment encoding for decimal and hex digits
//! - A display handle with decimal/hex number rendering, per-position
//!   digits, decimal point, colon and apostrophe control, brightness and
//!   on/off switching
//!
//! The driver is blocking and generic over two
//! [`embedded_hal::digital::OutputPin`]s. It inserts no delays of its own:
//! on hosts whose pin writes outrun the chip's clock tolerance, configure
//! the lines open-drain or slow-slew so the bus stays within what the
//! chip can follow.
//!
//! The chip cannot be read, so the handle keeps a shadow copy of the last
//! byte written to every grid; the decimal point, colon and apostrophe
//! toggles read-modify-write through that copy.

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod protocol;
pub mod segments;

#[cfg(test)]
pub(crate) mod testutil;

pub use display::{Tm1637, Tm1637Config};
pub use protocol::Bus;
