//! Segment encoding for 7-segment digits
//!
//! Segment-to-bit assignment, shared by every TM1637 module:
//!
//! ```text
//!      A          bit 0: A      bit 4: E
//!     ---         bit 1: B      bit 5: F
//!  F |   | B      bit 2: C      bit 6: G
//!     -G-         bit 3: D      bit 7: DP
//!  E |   | C
//!     ---
//!      D
//! ```

/// Segment patterns for digit values 0-15 (10-15 render as A-F).
pub const SEGMENTS: [u8; 16] = [
    // XGFEDCBA
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
    0b0111_0111, // A
    0b0111_1100, // b
    0b0011_1001, // C
    0b0101_1110, // d
    0b0111_1001, // E
    0b0111_0001, // F
];

/// Minus sign: segment G alone.
pub const MINUS: u8 = 0b0100_0000;

/// Decimal point bit. On the colon and apostrophe grids this same bit
/// drives those indicators.
pub const DOT: u8 = 0b1000_0000;

/// Segment pattern for a digit value, wrapping past 15.
pub fn for_digit(value: u8) -> u8 {
    SEGMENTS[(value % 16) as usize]
}
