//! radix-convert - conversions between prefixed binary, hexadecimal and `i32` values
//!
//! # Example
//!
//! ```rust
//! use radix_convert::{binary_to_hex, decimal_to_binary, hex_to_decimal, Conversion, Converter};
//!
//! assert_eq!(binary_to_hex("0b1010").unwrap(), "0xA");
//! assert_eq!(hex_to_decimal("0x7FFFFFFF").unwrap(), i32::MAX);
//!
//! // Negative values have no literal form
//! assert_eq!(decimal_to_binary(-1), None);
//!
//! // Dispatch by name, input may be absent
//! let converter = Converter::default();
//! let out = converter.convert("dec2hex".parse::<Conversion>().unwrap(), Some("255")).unwrap();
//! assert_eq!(out.as_deref(), Some("0xFF"));
//! ```
//!
//! # Literal formats
//!
//! | Radix | Prefix | Digits | Alphabet |
//! |-------|--------|--------|----------|
//! | binary | `0b` | 1-31 | `0 1` |
//! | hexadecimal | `0x` | 1-8 | `0-9 A-F` (uppercase only) |
//!
//! # Conversions
//!
//! | Function | Output | Fails on |
//! |----------|--------|----------|
//! | `binary_to_decimal` | `i32` | bad prefix, length or digit |
//! | `binary_to_hex` | `0x…` | bad prefix, length or digit |
//! | `decimal_to_binary` | `Option<0b…>` | never; `None` for negatives |
//! | `decimal_to_hex` | `Option<0x…>` | never; `None` for negatives |
//! | `hex_to_binary` | `0b…` | bad prefix, length or digit |
//! | `hex_to_decimal` | `i32` | bad prefix, length or digit; overflow above `0x7FFFFFFF` |

pub mod conversion;
pub mod converter;
pub mod error;
pub mod literal;
mod tables;

// Re-exports for convenience
pub use conversion::{Conversion, Representations};
pub use converter::{
    binary_to_decimal, binary_to_hex, decimal_to_binary, decimal_to_hex, hex_to_binary,
    hex_to_decimal, Converter, ConverterOptions,
};
pub use error::{ConvertError, ErrorKind, Result};
pub use literal::Radix;
