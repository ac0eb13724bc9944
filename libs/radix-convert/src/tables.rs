//! Digit lookup tables
//!
//! One table per direction, both indexed by value or by ASCII byte:
//! - `HEX_DIGITS` / `NIBBLES`: value 0-15 to hex digit or 4-bit group
//! - `HEX_VALUES`: ASCII byte to value, uppercase digits only

const INVALID: u8 = 0xFF;

/// Hex digit for each value 0-15
pub(crate) const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// 4-bit group for each value 0-15, most significant bit first
pub(crate) const NIBBLES: [&str; 16] = [
    "0000", "0001", "0010", "0011", "0100", "0101", "0110", "0111", "1000", "1001", "1010", "1011",
    "1100", "1101", "1110", "1111",
];

/// Decode table: ASCII byte to 0-15, or `INVALID`
///
/// Lowercase letters are deliberately absent.
const HEX_VALUES: &[u8; 256] = &{
    let mut buf = [INVALID; 256];
    let mut i: u8 = 0;
    loop {
        buf[i as usize] = match i {
            b'0'..=b'9' => i - b'0',
            b'A'..=b'F' => i - b'A' + 10,
            _ => INVALID,
        };
        if i == 255 {
            break buf;
        }
        i += 1;
    }
};

/// Hex digit for the low four bits of `value`
#[inline]
pub(crate) fn hex_digit(value: u32) -> char {
    HEX_DIGITS[(value & 0xF) as usize] as char
}

/// Value of an uppercase hex digit
#[inline]
pub(crate) const fn hex_value(byte: u8) -> Option<u8> {
    match HEX_VALUES[byte as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Value of a binary digit
#[inline]
pub(crate) const fn binary_value(byte: u8) -> Option<u8> {
    match byte {
        b'0' => Some(0),
        b'1' => Some(1),
        _ => None,
    }
}

/// Value of a 4-digit binary group, `None` if any byte is not `0`/`1`
pub(crate) fn nibble_value(group: &[u8]) -> Option<u8> {
    if group.len() != 4 {
        return None;
    }
    group
        .iter()
        .try_fold(0u8, |acc, &byte| Some((acc << 1) | binary_value(byte)?))
}

/// 4-bit group for the low four bits of `value`
#[inline]
pub(crate) fn nibble_bits(value: u8) -> &'static str {
    NIBBLES[(value & 0xF) as usize]
}
