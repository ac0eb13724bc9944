//! Rendering of command results as text or JSON

use crate::config::OutputFormat;
use anyhow::Result;
use colored::*;
use radix_convert::{Conversion, Representations};
use serde::Serialize;

/// Shown in text mode when a negative decimal has no binary/hex form
pub const NO_VALUE: &str = "(none)";

#[derive(Serialize)]
struct ConversionRecord<'a> {
    conversion: Conversion,
    input: &'a str,
    output: Option<&'a str>,
}

#[derive(Serialize)]
struct ConversionEntry {
    name: &'static str,
    conversion: Conversion,
    from: radix_convert::Radix,
    to: radix_convert::Radix,
}

pub fn render_conversion(
    format: OutputFormat,
    conversion: Conversion,
    input: &str,
    output: Option<&str>,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(output.unwrap_or(NO_VALUE).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&ConversionRecord {
            conversion,
            input,
            output,
        })?),
    }
}

pub fn render_representations(format: OutputFormat, repr: &Representations) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let lines = [
                ("decimal", Some(repr.decimal.to_string())),
                ("binary", repr.binary.clone()),
                ("hex", repr.hex.clone()),
            ];
            Ok(lines
                .iter()
                .map(|(label, value)| {
                    format!(
                        "{:<8} {}",
                        label.bright_cyan(),
                        value.as_deref().unwrap_or(NO_VALUE)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"))
        },
        OutputFormat::Json => Ok(serde_json::to_string(repr)?),
    }
}

pub fn render_list(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(Conversion::ALL
            .iter()
            .map(|c| {
                format!(
                    "{}  {:<18} {} -> {}",
                    c.name().bright_yellow(),
                    c.long_name(),
                    c.source(),
                    c.target()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let entries: Vec<ConversionEntry> = Conversion::ALL
                .iter()
                .map(|&c| ConversionEntry {
                    name: c.name(),
                    conversion: c,
                    from: c.source(),
                    to: c.target(),
                })
                .collect();
            Ok(serde_json::to_string(&entries)?)
        },
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use radix_convert::Converter;

    #[test]
    fn test_text_conversion_is_bare_value() {
        let out =
            render_conversion(OutputFormat::Text, Conversion::HexToDecimal, "0xFF", Some("255"))
                .unwrap();
        assert_eq!(out, "255");

        let out =
            render_conversion(OutputFormat::Text, Conversion::DecimalToHex, "-1", None).unwrap();
        assert_eq!(out, NO_VALUE);
    }

    #[test]
    fn test_json_conversion() {
        let out = render_conversion(
            OutputFormat::Json,
            Conversion::DecimalToBinary,
            "-1",
            None,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "conversion": "decimal-to-binary",
                "input": "-1",
                "output": null,
            })
        );
    }

    #[test]
    fn test_text_representations() {
        let repr = Converter::default().describe("0xA").unwrap();
        let out = render_representations(OutputFormat::Text, &repr).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(out.contains("10"));
        assert!(out.contains("0b1010"));
        assert!(out.contains("0xA"));
    }

    #[test]
    fn test_list_has_every_conversion() {
        let out = render_list(OutputFormat::Text).unwrap();
        for conversion in Conversion::ALL {
            assert!(out.contains(conversion.name()));
        }

        let json: serde_json::Value =
            serde_json::from_str(&render_list(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), Conversion::ALL.len());
        assert_eq!(json[0]["name"], "bin2dec");
        assert_eq!(json[0]["from"], "binary");
    }
}
