//! The six conversions between prefixed binary, hexadecimal and `i32` values
//!
//! Every conversion is a single pass over at most 33 bytes. Parsers validate
//! shape first (length, prefix) and digits while folding them into an `i32`.
//! Renderers return `None` for negative values, which have no literal form.

use crate::error::{ConvertError, Result};
use crate::literal::{split_digits, Radix, BINARY_PREFIX, HEX_PREFIX, MAX_HEX_DIGITS};
use crate::tables::{binary_value, hex_digit, hex_value, nibble_bits, nibble_value};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Converter behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterOptions {
    /// Strip leading zero bits from `hex_to_binary` results.
    ///
    /// Off by default: `0x1` converts to `0b0001`, one 4-bit group per hex digit.
    pub canonical_binary: bool,
}

/// Stateless converter carrying its [`ConverterOptions`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    options: ConverterOptions,
}

impl Converter {
    pub fn new(options: ConverterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ConverterOptions {
        self.options
    }

    /// Parse a binary literal such as `0b1010`
    pub fn binary_to_decimal(&self, binary: &str) -> Result<i32> {
        let value = parse_binary(binary).map_err(rejected)?;
        debug!(input = binary, value, "binary_to_decimal");
        Ok(value)
    }

    /// Regroup a binary literal into hex digits, left-padding to whole nibbles
    pub fn binary_to_hex(&self, binary: &str) -> Result<String> {
        let hex = regroup_binary(binary).map_err(rejected)?;
        debug!(input = binary, output = %hex, "binary_to_hex");
        Ok(hex)
    }

    /// Minimal binary literal of `decimal`, `None` when negative
    pub fn decimal_to_binary(&self, decimal: i32) -> Option<String> {
        let binary = render(decimal, Radix::Binary)?;
        debug!(input = decimal, output = %binary, "decimal_to_binary");
        Some(binary)
    }

    /// Minimal hex literal of `decimal`, `None` when negative
    pub fn decimal_to_hex(&self, decimal: i32) -> Option<String> {
        let hex = render(decimal, Radix::Hexadecimal)?;
        debug!(input = decimal, output = %hex, "decimal_to_hex");
        Some(hex)
    }

    /// Expand each hex digit into its 4-bit group
    pub fn hex_to_binary(&self, hex: &str) -> Result<String> {
        let binary = expand_hex(hex, self.options.canonical_binary).map_err(rejected)?;
        debug!(input = hex, output = %binary, "hex_to_binary");
        Ok(binary)
    }

    /// Parse a hex literal such as `0x7FFFFFFF`
    pub fn hex_to_decimal(&self, hex: &str) -> Result<i32> {
        let value = parse_hex(hex).map_err(rejected)?;
        debug!(input = hex, value, "hex_to_decimal");
        Ok(value)
    }
}

fn rejected(err: ConvertError) -> ConvertError {
    debug!(error = %err, "literal rejected");
    err
}

fn invalid_digit(radix: Radix, literal: &str, byte: u8) -> ConvertError {
    ConvertError::format(
        radix,
        literal,
        format!("invalid digit '{}'", byte.escape_ascii()),
    )
}

fn parse_binary(binary: &str) -> Result<i32> {
    let digits = split_digits(binary, Radix::Binary)?;

    // At most 31 digits, so the shift never reaches the sign bit
    digits.bytes().try_fold(0i32, |acc, byte| {
        let bit = binary_value(byte).ok_or_else(|| invalid_digit(Radix::Binary, binary, byte))?;
        Ok((acc << 1) | i32::from(bit))
    })
}

fn regroup_binary(binary: &str) -> Result<String> {
    let digits = split_digits(binary, Radix::Binary)?;

    let pad = (4 - digits.len() % 4) % 4;
    let mut padded = String::with_capacity(pad + digits.len());
    padded.extend(std::iter::repeat('0').take(pad));
    padded.push_str(digits);

    let mut hex = String::with_capacity(HEX_PREFIX.len() + padded.len() / 4);
    hex.push_str(HEX_PREFIX);
    for group in padded.as_bytes().chunks(4) {
        let value = nibble_value(group).ok_or_else(|| {
            ConvertError::format(
                Radix::Binary,
                binary,
                format!("invalid group {:?}", String::from_utf8_lossy(group)),
            )
        })?;
        hex.push(hex_digit(u32::from(value)));
    }
    Ok(hex)
}

fn render(decimal: i32, radix: Radix) -> Option<String> {
    let mut value = u32::try_from(decimal).ok()?;
    let base = radix.base();

    // Least significant first; zero still yields a single '0'
    let mut digits = Vec::with_capacity(radix.max_digits());
    loop {
        digits.push(hex_digit(value % base));
        value /= base;
        if value == 0 {
            break;
        }
    }

    let mut literal = String::with_capacity(radix.prefix().len() + digits.len());
    literal.push_str(radix.prefix());
    literal.extend(digits.iter().rev());
    Some(literal)
}

fn expand_hex(hex: &str, canonical: bool) -> Result<String> {
    let digits = split_digits(hex, Radix::Hexadecimal)?;

    let mut bits = String::with_capacity(digits.len() * 4);
    for byte in digits.bytes() {
        let value = hex_value(byte).ok_or_else(|| invalid_digit(Radix::Hexadecimal, hex, byte))?;
        bits.push_str(nibble_bits(value));
    }

    let bits = if canonical {
        match bits.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        }
    } else {
        bits.as_str()
    };
    Ok(format!("{BINARY_PREFIX}{bits}"))
}

fn parse_hex(hex: &str) -> Result<i32> {
    let digits = split_digits(hex, Radix::Hexadecimal)?;

    // Eight digits led by anything above '7' cannot fit; reported before the
    // digits are looked at, so "0xa0000000" is an overflow, not a format error.
    if digits.len() == MAX_HEX_DIGITS && matches!(digits.as_bytes().first(), Some(&lead) if lead > b'7')
    {
        return Err(ConvertError::overflow(hex));
    }

    digits.bytes().try_fold(0i32, |acc, byte| {
        let value = hex_value(byte).ok_or_else(|| invalid_digit(Radix::Hexadecimal, hex, byte))?;
        acc.checked_mul(16)
            .and_then(|shifted| shifted.checked_add(i32::from(value)))
            .ok_or_else(|| ConvertError::overflow(hex))
    })
}

// === Free functions with default options ===

/// [`Converter::binary_to_decimal`] with default options
pub fn binary_to_decimal(binary: &str) -> Result<i32> {
    Converter::default().binary_to_decimal(binary)
}

/// [`Converter::binary_to_hex`] with default options
pub fn binary_to_hex(binary: &str) -> Result<String> {
    Converter::default().binary_to_hex(binary)
}

/// [`Converter::decimal_to_binary`] with default options
pub fn decimal_to_binary(decimal: i32) -> Option<String> {
    Converter::default().decimal_to_binary(decimal)
}

/// [`Converter::decimal_to_hex`] with default options
pub fn decimal_to_hex(decimal: i32) -> Option<String> {
    Converter::default().decimal_to_hex(decimal)
}

/// [`Converter::hex_to_binary`] with default options
pub fn hex_to_binary(hex: &str) -> Result<String> {
    Converter::default().hex_to_binary(hex)
}

/// [`Converter::hex_to_decimal`] with default options
pub fn hex_to_decimal(hex: &str) -> Result<i32> {
    Converter::default().hex_to_decimal(hex)
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tracing_test::traced_test;

    fn kind<T: std::fmt::Debug>(result: Result<T>) -> ErrorKind {
        result.unwrap_err().kind()
    }

    #[test]
    fn test_binary_to_decimal() {
        assert_eq!(binary_to_decimal("0b0").unwrap(), 0);
        assert_eq!(binary_to_decimal("0b1").unwrap(), 1);
        assert_eq!(binary_to_decimal("0b1010").unwrap(), 10);
        assert_eq!(binary_to_decimal("0b00001010").unwrap(), 10);
        let max = format!("0b{}", "1".repeat(31));
        assert_eq!(binary_to_decimal(&max).unwrap(), i32::MAX);
    }

    #[test]
    fn test_binary_to_decimal_rejects() {
        assert_eq!(kind(binary_to_decimal("0b2")), ErrorKind::Format);
        assert_eq!(kind(binary_to_decimal("0b")), ErrorKind::Format);
        assert_eq!(kind(binary_to_decimal("1010")), ErrorKind::Format);
        assert_eq!(kind(binary_to_decimal("0b10a1")), ErrorKind::Format);
        assert_eq!(kind(binary_to_decimal("0b1 ")), ErrorKind::Format);
        let too_long = format!("0b1{}", "0".repeat(31));
        assert_eq!(kind(binary_to_decimal(&too_long)), ErrorKind::Format);
    }

    #[test]
    fn test_binary_to_hex_pads_to_nibbles() {
        assert_eq!(binary_to_hex("0b1010").unwrap(), "0xA");
        assert_eq!(binary_to_hex("0b1").unwrap(), "0x1");
        assert_eq!(binary_to_hex("0b11111").unwrap(), "0x1F");
        assert_eq!(binary_to_hex("0b00000").unwrap(), "0x00");
        assert_eq!(binary_to_hex("0b000100100011").unwrap(), "0x123");
        let max = format!("0b{}", "1".repeat(31));
        assert_eq!(binary_to_hex(&max).unwrap(), "0x7FFFFFFF");
    }

    #[test]
    fn test_binary_to_hex_rejects() {
        assert_eq!(kind(binary_to_hex("0b10201")), ErrorKind::Format);
        assert_eq!(kind(binary_to_hex("0x1010")), ErrorKind::Format);
        assert_eq!(kind(binary_to_hex("0b")), ErrorKind::Format);
    }

    #[test]
    fn test_decimal_to_binary() {
        assert_eq!(decimal_to_binary(0).as_deref(), Some("0b0"));
        assert_eq!(decimal_to_binary(1).as_deref(), Some("0b1"));
        assert_eq!(decimal_to_binary(10).as_deref(), Some("0b1010"));
        assert_eq!(
            decimal_to_binary(i32::MAX).as_deref(),
            Some(format!("0b{}", "1".repeat(31)).as_str())
        );
        assert_eq!(decimal_to_binary(-1), None);
        assert_eq!(decimal_to_binary(i32::MIN), None);
    }

    #[test]
    fn test_decimal_to_hex() {
        assert_eq!(decimal_to_hex(0).as_deref(), Some("0x0"));
        assert_eq!(decimal_to_hex(10).as_deref(), Some("0xA"));
        assert_eq!(decimal_to_hex(255).as_deref(), Some("0xFF"));
        assert_eq!(decimal_to_hex(256).as_deref(), Some("0x100"));
        assert_eq!(decimal_to_hex(i32::MAX).as_deref(), Some("0x7FFFFFFF"));
        assert_eq!(decimal_to_hex(-1), None);
    }

    #[test]
    fn test_hex_to_binary_keeps_leading_zero_bits() {
        assert_eq!(hex_to_binary("0xA").unwrap(), "0b1010");
        assert_eq!(hex_to_binary("0x1").unwrap(), "0b0001");
        assert_eq!(hex_to_binary("0x0").unwrap(), "0b0000");
        assert_eq!(hex_to_binary("0x1F").unwrap(), "0b00011111");
    }

    #[test]
    fn test_hex_to_binary_canonical() {
        let converter = Converter::new(ConverterOptions {
            canonical_binary: true,
        });
        assert_eq!(converter.hex_to_binary("0x1").unwrap(), "0b1");
        assert_eq!(converter.hex_to_binary("0x0").unwrap(), "0b0");
        assert_eq!(converter.hex_to_binary("0x00").unwrap(), "0b0");
        assert_eq!(converter.hex_to_binary("0x01F").unwrap(), "0b11111");
        assert_eq!(converter.hex_to_binary("0xA").unwrap(), "0b1010");
    }

    #[test]
    fn test_hex_to_binary_rejects() {
        assert_eq!(kind(hex_to_binary("0xa")), ErrorKind::Format);
        assert_eq!(kind(hex_to_binary("0xG")), ErrorKind::Format);
        assert_eq!(kind(hex_to_binary("0b1010")), ErrorKind::Format);
        assert_eq!(kind(hex_to_binary("0x123456789")), ErrorKind::Format);
    }

    #[test]
    fn test_hex_to_decimal() {
        assert_eq!(hex_to_decimal("0x0").unwrap(), 0);
        assert_eq!(hex_to_decimal("0xA").unwrap(), 10);
        assert_eq!(hex_to_decimal("0xFF").unwrap(), 255);
        assert_eq!(hex_to_decimal("0x0FFFFFFF").unwrap(), 0x0FFF_FFFF);
        assert_eq!(hex_to_decimal("0x7FFFFFFF").unwrap(), i32::MAX);
    }

    #[test]
    fn test_hex_to_decimal_overflow() {
        for literal in ["0x80000000", "0x8FFFFFFF", "0xFFFFFFFF"] {
            assert_eq!(kind(hex_to_decimal(literal)), ErrorKind::Overflow, "{literal}");
        }
        // Leading character is checked before digit validity
        assert_eq!(kind(hex_to_decimal("0xa0000000")), ErrorKind::Overflow);
        assert_eq!(kind(hex_to_decimal("0xG0000000")), ErrorKind::Overflow);
    }

    #[test]
    fn test_hex_to_decimal_rejects() {
        assert_eq!(kind(hex_to_decimal("0xG")), ErrorKind::Format);
        assert_eq!(kind(hex_to_decimal("0xff")), ErrorKind::Format);
        assert_eq!(kind(hex_to_decimal("0x")), ErrorKind::Format);
        assert_eq!(kind(hex_to_decimal("FF")), ErrorKind::Format);
        assert_eq!(kind(hex_to_decimal("0x7G")), ErrorKind::Format);
    }

    #[test]
    fn test_invalid_digit_message_escapes_bytes() {
        let err = hex_to_decimal("0x1\u{e9}").unwrap_err();
        assert!(err.to_string().contains("invalid digit '\\xc3'"), "{err}");
    }

    #[test]
    #[traced_test]
    fn test_conversions_emit_debug_events() {
        hex_to_decimal("0xFF").unwrap();
        assert!(logs_contain("hex_to_decimal"));

        binary_to_decimal("0b2").unwrap_err();
        assert!(logs_contain("literal rejected"));
    }
}
