//! Display handle and the public operations.
//!
//! One [`Tm1637`] owns one physical module (one clock/data pin pair) for
//! its whole lifetime. The chip cannot be read back, so the handle shadows
//! the last byte transmitted to every grid; indicator toggles
//! read-modify-write through that shadow copy.

use embedded_hal::digital::OutputPin;

use crate::protocol::{Bus, BRIGHTNESS_MASK, CMD_DATA_AUTO, CMD_DISPLAY, DISPLAY_ON};
use crate::segments::{self, DOT, MINUS};

/// Addressable grids: four digits plus the colon and apostrophe grids.
const POSITIONS: usize = 6;
/// Grid address of the colon indicator.
const COLON_ADDR: u8 = 4;
/// Grid address of the apostrophe indicator.
const APOSTROPHE_ADDR: u8 = 5;

/// Construction-time parameters for a module.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tm1637Config {
    /// Initial intensity, stored directly into the chip's 0-7 brightness
    /// field (values above 7 clamp onto the top step). The display always
    /// comes up switched on, so 0 means minimum brightness here; use
    /// [`Tm1637::set_intensity`] for the 1-based, 0-means-off convention.
    pub intensity: u8,
    /// Number of digit grids wired on the module, 1-4 (clamped). Position
    /// arguments wrap modulo this count.
    pub digits: u8,
}

impl Default for Tm1637Config {
    fn default() -> Self {
        Self {
            intensity: 7,
            digits: 4,
        }
    }
}

/// Handle for one TM1637 module.
///
/// All operations are blocking pin-write sequences; the only failure path
/// is the pins' own error type, propagated untouched. Out-of-range numeric
/// arguments never fail: digit values wrap modulo 16 and positions wrap
/// modulo the digit count.
pub struct Tm1637<CLK, DIO> {
    bus: Bus<CLK, DIO>,
    /// Digit grid count, fixed at construction.
    digits: u8,
    /// Chip brightness field, 0-7.
    brightness: u8,
    /// Display-on flag, OR'd into every display control command.
    on: bool,
    /// Last byte transmitted per grid address. Every transmission goes
    /// through [`Self::write_position`] so this never goes stale.
    buf: [u8; POSITIONS],
}

impl<CLK, DIO, E> Tm1637<CLK, DIO>
where
    CLK: OutputPin<Error = E>,
    DIO: OutputPin<Error = E>,
{
    /// Claim the two lines, switch the display on at the configured
    /// intensity and blank every grid (digits, colon and apostrophe).
    pub fn new(clk: CLK, dio: DIO, config: Tm1637Config) -> Result<Self, E> {
        let mut display = Self {
            bus: Bus::new(clk, dio)?,
            digits: config.digits.clamp(1, 4),
            brightness: config.intensity.min(7),
            on: true,
            buf: [0; POSITIONS],
        };
        display.clear()?;
        Ok(display)
    }

    /// Digit grids on this module.
    pub fn digits(&self) -> u8 {
        self.digits
    }

    /// Show one digit (0-15, wrapping) at a 1-based position.
    pub fn show_digit(&mut self, value: u8, position: u8) -> Result<(), E> {
        let addr = self.address(position);
        self.write_position(addr, segments::for_digit(value))
    }

    /// Show a decimal number across the four digit grids.
    ///
    /// Negative numbers render a minus sign in the leftmost grid followed
    /// by the three low-order digits; the magnitude's thousands digit is
    /// never drawn.
    pub fn show_number(&mut self, n: i32) -> Result<(), E> {
        if n < 0 {
            let m = n.unsigned_abs();
            self.write_position(0, MINUS)?;
            self.show_digit((m % 10) as u8, 4)?;
            self.show_digit((m / 10 % 10) as u8, 3)?;
            self.show_digit((m / 100 % 10) as u8, 2)
        } else {
            let m = n as u32;
            self.show_digit((m / 1000 % 10) as u8, 1)?;
            self.show_digit((m % 10) as u8, 4)?;
            self.show_digit((m / 10 % 10) as u8, 3)?;
            self.show_digit((m / 100 % 10) as u8, 2)
        }
    }

    /// Show a number as four hex nibbles.
    ///
    /// Negative numbers draw only the minus sign; unlike
    /// [`Self::show_number`], no digit grids are written afterwards.
    /// Long-standing quirk kept so existing callers see unchanged
    /// behavior.
    pub fn show_hex(&mut self, n: i32) -> Result<(), E> {
        if n < 0 {
            self.write_position(0, MINUS)
        } else {
            let m = n as u32;
            self.show_digit((m >> 12 & 0xF) as u8, 1)?;
            self.show_digit((m & 0xF) as u8, 4)?;
            self.show_digit((m >> 4 & 0xF) as u8, 3)?;
            self.show_digit((m >> 8 & 0xF) as u8, 2)
        }
    }

    /// Show or hide the decimal point of the digit at a 1-based position.
    /// The digit's segments are left as they are.
    pub fn show_decimal_point(&mut self, position: u8, show: bool) -> Result<(), E> {
        let addr = self.address(position);
        self.toggle_dot(addr, show)
    }

    /// Show or hide the colon between the second and third digit.
    pub fn show_colon(&mut self, show: bool) -> Result<(), E> {
        self.toggle_dot(COLON_ADDR, show)
    }

    /// Show or hide the apostrophe indicator.
    pub fn show_apostrophe(&mut self, show: bool) -> Result<(), E> {
        self.toggle_dot(APOSTROPHE_ADDR, show)
    }

    /// Set intensity 0-8. Level 0 switches the display off (segment data
    /// is retained by the chip); 1-8 map onto the chip's eight brightness
    /// steps, values above 8 clamping to 8. The on/off state is left
    /// unchanged for non-zero levels.
    pub fn set_intensity(&mut self, level: u8) -> Result<(), E> {
        if level == 0 {
            return self.turn_off();
        }
        self.brightness = level.min(8) - 1;
        self.push_control()
    }

    /// Blank every grid: all digits, colon and apostrophe.
    pub fn clear(&mut self) -> Result<(), E> {
        for addr in 0..self.digits {
            self.write_position(addr, 0)?;
        }
        self.write_position(COLON_ADDR, 0)?;
        self.write_position(APOSTROPHE_ADDR, 0)
    }

    /// Switch the display on again; the previously written segments
    /// reappear.
    pub fn turn_on(&mut self) -> Result<(), E> {
        self.on = true;
        self.push_control()
    }

    /// Switch the display off. The chip retains segment data, so
    /// [`Self::turn_on`] restores the image.
    pub fn turn_off(&mut self) -> Result<(), E> {
        self.on = false;
        self.push_control()
    }

    /// Grid address for a 1-based position, wrapping past the module
    /// width.
    fn address(&self, position: u8) -> u8 {
        position.wrapping_sub(1) % self.digits
    }

    /// Set or clear the dot bit of a grid through the shadow copy.
    fn toggle_dot(&mut self, addr: u8, show: bool) -> Result<(), E> {
        let current = self.buf[addr as usize];
        let byte = if show { current | DOT } else { current & !DOT };
        self.write_position(addr, byte)
    }

    /// Transmit one grid byte and record it in the shadow buffer. The
    /// chip requires display control to be re-asserted after every write.
    fn write_position(&mut self, addr: u8, byte: u8) -> Result<(), E> {
        self.bus.write(addr, byte)?;
        self.control()?;
        self.buf[addr as usize] = byte;
        Ok(())
    }

    /// Data command followed by display control, without touching any
    /// grid. Used by the brightness and on/off operations.
    fn push_control(&mut self) -> Result<(), E> {
        self.bus.command(CMD_DATA_AUTO)?;
        self.control()
    }

    fn control(&mut self) -> Result<(), E> {
        let on = if self.on { DISPLAY_ON } else { 0 };
        self.bus
            .command(CMD_DISPLAY | on | (self.brightness & BRIGHTNESS_MASK))
    }
}
