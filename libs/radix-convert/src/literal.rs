//! Prefixed literal shapes
//!
//! A binary literal is `0b` followed by 1 to 31 digits, a hexadecimal literal
//! is `0x` followed by 1 to 8 uppercase digits. Both limits keep every literal
//! inside the non-negative `i32` range except 8-digit hexadecimal literals
//! with a leading digit above `7`.

use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of binary literals
pub const BINARY_PREFIX: &str = "0b";
/// Prefix of hexadecimal literals
pub const HEX_PREFIX: &str = "0x";
/// Maximum number of digits after [`BINARY_PREFIX`]
pub const MAX_BINARY_DIGITS: usize = 31;
/// Maximum number of digits after [`HEX_PREFIX`]
pub const MAX_HEX_DIGITS: usize = 8;

/// Number base of a textual representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Binary,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub const fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Literal prefix; decimal values have none
    pub const fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => BINARY_PREFIX,
            Radix::Decimal => "",
            Radix::Hexadecimal => HEX_PREFIX,
        }
    }

    /// Maximum digit count after the prefix
    pub const fn max_digits(self) -> usize {
        match self {
            Radix::Binary => MAX_BINARY_DIGITS,
            // i32::MIN is "-2147483648"
            Radix::Decimal => 11,
            Radix::Hexadecimal => MAX_HEX_DIGITS,
        }
    }

    /// Guess the radix of a literal from its prefix
    pub fn detect(literal: &str) -> Radix {
        if literal.starts_with(BINARY_PREFIX) {
            Radix::Binary
        } else if literal.starts_with(HEX_PREFIX) {
            Radix::Hexadecimal
        } else {
            Radix::Decimal
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Radix::Binary => "binary",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
        };
        write!(f, "{name}")
    }
}

/// Check the length and prefix of a prefixed literal and return its digits.
///
/// The digits themselves are validated by the caller while it evaluates them.
pub(crate) fn split_digits(literal: &str, radix: Radix) -> Result<&str> {
    let prefix = radix.prefix();
    let max_len = prefix.len() + radix.max_digits();
    let len = literal.len();

    if len <= prefix.len() || len > max_len {
        return Err(ConvertError::format(
            radix,
            literal,
            format!("length {len} outside ({}, {max_len}]", prefix.len()),
        ));
    }

    literal
        .strip_prefix(prefix)
        .ok_or_else(|| ConvertError::format(radix, literal, format!("missing {prefix:?} prefix")))
}
