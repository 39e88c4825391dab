//! TM1637 two-wire bus protocol
//!
//! The chip speaks a clock/data protocol of its own. It looks like I2C but
//! is not: there is no device address, data goes out LSB first, and while
//! the chip drives an ack after every byte, nothing here reads it back.
//!
//! Command layout:
//! - `0x40`: data command, auto-increment addressing
//! - `0xC0 | addr`: address command, selects the target grid (0-5)
//! - `0x80 | on | brightness`: display control
//!
//! The bus performs bare pin writes with no delay in between; pin-write
//! latency is the only pacing.

use embedded_hal::digital::OutputPin;

/// Data command, auto-increment addressing.
pub const CMD_DATA_AUTO: u8 = 0x40;
/// Address command base; OR the grid address into the low bits.
pub const CMD_ADDRESS: u8 = 0xC0;
/// Display control command base.
pub const CMD_DISPLAY: u8 = 0x80;
/// Display-on flag within the display control command.
pub const DISPLAY_ON: u8 = 0x08;
/// Brightness field mask within the display control command.
pub const BRIGHTNESS_MASK: u8 = 0x07;

/// The two bit-banged lines, owned for the lifetime of the bus.
///
/// Both pins must share one error type; any pin-write failure aborts the
/// transaction and propagates to the caller.
pub struct Bus<CLK, DIO> {
    clk: CLK,
    dio: DIO,
}

impl<CLK, DIO, E> Bus<CLK, DIO>
where
    CLK: OutputPin<Error = E>,
    DIO: OutputPin<Error = E>,
{
    /// Take ownership of the two lines and drive both low.
    pub fn new(mut clk: CLK, mut dio: DIO) -> Result<Self, E> {
        clk.set_low()?;
        dio.set_low()?;
        Ok(Self { clk, dio })
    }

    /// Start condition: DIO falls while CLK is high.
    fn start(&mut self) -> Result<(), E> {
        self.clk.set_high()?;
        self.dio.set_high()?;
        self.dio.set_low()?;
        self.clk.set_low()
    }

    /// Stop condition: DIO rises while CLK is high.
    fn stop(&mut self) -> Result<(), E> {
        self.clk.set_low()?;
        self.dio.set_low()?;
        self.clk.set_high()?;
        self.dio.set_high()
    }

    /// Clock out one byte, LSB first. The chip samples DIO on the rising
    /// CLK edge. Must run between `start` and `stop`.
    fn write_byte(&mut self, byte: u8) -> Result<(), E> {
        for bit in 0..8 {
            self.clk.set_low()?;
            if (byte >> bit) & 1 != 0 {
                self.dio.set_high()?;
            } else {
                self.dio.set_low()?;
            }
            self.clk.set_high()?;
        }
        // Ninth clock pulse for the ack slot; the chip's ack is not read.
        self.clk.set_low()?;
        self.dio.set_high()?;
        self.clk.set_high()
    }

    /// Single-byte command transaction.
    pub fn command(&mut self, cmd: u8) -> Result<(), E> {
        self.start()?;
        self.write_byte(cmd)?;
        self.stop()
    }

    /// Write `data` to grid address `addr`: data command, then an address
    /// command framed with the data byte.
    ///
    /// The caller follows up with a display control command; the chip
    /// expects display state to be re-asserted after every write.
    pub fn write(&mut self, addr: u8, data: u8) -> Result<(), E> {
        self.command(CMD_DATA_AUTO)?;
        self.start()?;
        self.write_byte(CMD_ADDRESS | addr)?;
        self.write_byte(data)?;
        self.stop()
    }
}
