//! Dispatch by conversion name
//!
//! Lets callers that only hold strings (command lines, config files) pick a
//! conversion at runtime and pass input that may be absent.

use crate::converter::Converter;
use crate::error::{ConvertError, Result};
use crate::literal::Radix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// One of the six supported conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Conversion {
    BinaryToDecimal,
    BinaryToHex,
    DecimalToBinary,
    DecimalToHex,
    HexToBinary,
    HexToDecimal,
}

impl Conversion {
    pub const ALL: [Conversion; 6] = [
        Conversion::BinaryToDecimal,
        Conversion::BinaryToHex,
        Conversion::DecimalToBinary,
        Conversion::DecimalToHex,
        Conversion::HexToBinary,
        Conversion::HexToDecimal,
    ];

    /// Short name, e.g. `bin2dec`
    pub const fn name(self) -> &'static str {
        match self {
            Conversion::BinaryToDecimal => "bin2dec",
            Conversion::BinaryToHex => "bin2hex",
            Conversion::DecimalToBinary => "dec2bin",
            Conversion::DecimalToHex => "dec2hex",
            Conversion::HexToBinary => "hex2bin",
            Conversion::HexToDecimal => "hex2dec",
        }
    }

    /// Long name, e.g. `binary-to-decimal`; same as the serde name
    pub const fn long_name(self) -> &'static str {
        match self {
            Conversion::BinaryToDecimal => "binary-to-decimal",
            Conversion::BinaryToHex => "binary-to-hex",
            Conversion::DecimalToBinary => "decimal-to-binary",
            Conversion::DecimalToHex => "decimal-to-hex",
            Conversion::HexToBinary => "hex-to-binary",
            Conversion::HexToDecimal => "hex-to-decimal",
        }
    }

    pub const fn source(self) -> Radix {
        match self {
            Conversion::BinaryToDecimal | Conversion::BinaryToHex => Radix::Binary,
            Conversion::DecimalToBinary | Conversion::DecimalToHex => Radix::Decimal,
            Conversion::HexToBinary | Conversion::HexToDecimal => Radix::Hexadecimal,
        }
    }

    pub const fn target(self) -> Radix {
        match self {
            Conversion::HexToBinary | Conversion::DecimalToBinary => Radix::Binary,
            Conversion::BinaryToDecimal | Conversion::HexToDecimal => Radix::Decimal,
            Conversion::BinaryToHex | Conversion::DecimalToHex => Radix::Hexadecimal,
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Conversion {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Conversion::ALL
            .into_iter()
            .find(|c| c.name() == s || c.long_name() == s)
            .ok_or_else(|| ConvertError::invalid_argument(format!("unknown conversion {s:?}")))
    }
}

/// A value in all three representations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Representations {
    /// Radix the input was written in
    pub radix: Radix,
    pub decimal: i32,
    /// `None` for negative values
    pub binary: Option<String>,
    /// `None` for negative values
    pub hex: Option<String>,
}

impl Converter {
    /// Run `conversion` on `input`.
    ///
    /// Missing input is an invalid-argument error. `Ok(None)` means the
    /// input was a negative decimal, which has no binary or hex form.
    pub fn convert(&self, conversion: Conversion, input: Option<&str>) -> Result<Option<String>> {
        let input = input.ok_or_else(|| {
            ConvertError::invalid_argument(format!(
                "{} number passed to {conversion} was missing",
                conversion.source()
            ))
        })?;

        let output = match conversion {
            Conversion::BinaryToDecimal => Some(self.binary_to_decimal(input)?.to_string()),
            Conversion::BinaryToHex => Some(self.binary_to_hex(input)?),
            Conversion::DecimalToBinary => self.decimal_to_binary(parse_decimal(input)?),
            Conversion::DecimalToHex => self.decimal_to_hex(parse_decimal(input)?),
            Conversion::HexToBinary => Some(self.hex_to_binary(input)?),
            Conversion::HexToDecimal => Some(self.hex_to_decimal(input)?.to_string()),
        };

        if output.is_none() {
            debug!(%conversion, input, "no representation for negative value");
        }
        Ok(output)
    }

    /// Parse `input` in whichever radix its prefix names and render it in all three
    pub fn describe(&self, input: &str) -> Result<Representations> {
        let radix = Radix::detect(input);
        let decimal = match radix {
            Radix::Binary => self.binary_to_decimal(input)?,
            Radix::Decimal => parse_decimal(input)?,
            Radix::Hexadecimal => self.hex_to_decimal(input)?,
        };

        Ok(Representations {
            radix,
            decimal,
            binary: self.decimal_to_binary(decimal),
            hex: self.decimal_to_hex(decimal),
        })
    }
}

fn parse_decimal(input: &str) -> Result<i32> {
    input
        .parse::<i32>()
        .map_err(|e| ConvertError::format(Radix::Decimal, input, e.to_string()))
}
