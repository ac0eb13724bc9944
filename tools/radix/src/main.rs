//! radix - convert numbers between prefixed binary, hexadecimal and decimal
//!
//! Thin command-line front end over `radix-convert`.

mod config;
mod logging;
mod output;

use crate::config::{load_config, OutputFormat, RadixConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use radix_convert::{Conversion, Converter};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "radix")]
#[command(about = "Convert numbers between prefixed binary, hexadecimal and decimal")]
#[command(long_about = "Convert numbers between prefixed binary, hexadecimal and decimal

Literal formats:
  binary       0b followed by 1-31 digits (0 1)
  hexadecimal  0x followed by 1-8 digits (0-9 A-F, uppercase)
  decimal      a 32-bit signed integer

Examples:
  radix convert bin2hex 0b1010        # 0xA
  radix convert hex2dec 0x7FFFFFFF    # 2147483647
  radix convert dec2bin -5            # (none)
  radix show 0x1F                     # all three representations
  radix list                          # supported conversions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Config file (TOML, YAML or JSON)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Strip leading zero bits from hex-to-binary results
    #[arg(long, global = true)]
    canonical: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one conversion, e.g. `convert hex2dec 0xFF`
    Convert {
        /// Conversion name: bin2dec, bin2hex, dec2bin, dec2hex, hex2bin, hex2dec
        /// (or the long form, e.g. binary-to-decimal)
        conversion: String,

        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: Option<String>,
    },

    /// Show a value in binary, decimal and hexadecimal
    Show {
        /// Prefixed literal (0b…, 0x…) or decimal integer
        #[arg(allow_negative_numbers = true)]
        value: String,
    },

    /// List supported conversions
    List,
}

/// Fold command-line flags over the loaded configuration
fn apply_flags(config: &mut RadixConfig, cli: &Cli) {
    if cli.json {
        config.output = OutputFormat::Json;
    }
    if cli.no_color {
        config.color = false;
    }
    if cli.canonical {
        config.converter.canonical_binary = true;
    }
}

fn run(command: Commands, config: &RadixConfig) -> Result<String> {
    let converter = Converter::new(config.converter);

    match command {
        Commands::Convert { conversion, value } => {
            let conversion: Conversion = conversion.parse()?;
            let result = converter
                .convert(conversion, value.as_deref())
                .with_context(|| format!("{conversion} failed"))?;
            debug!(%conversion, output = ?result, "converted");
            output::render_conversion(
                config.output,
                conversion,
                value.as_deref().unwrap_or_default(),
                result.as_deref(),
            )
        },
        Commands::Show { value } => {
            let repr = converter
                .describe(&value)
                .with_context(|| format!("Cannot read {value:?}"))?;
            output::render_representations(config.output, &repr)
        },
        Commands::List => output::render_list(config.output),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    apply_flags(&mut config, &cli);

    // Configure colored output
    if !config.color {
        colored::control::set_override(false);
    }

    // Initialize logging
    let filter = logging::resolve_filter(cli.verbose, config.log_level.as_deref());
    logging::init_logging(&filter, config.color)?;
    debug!(?config, "configuration loaded");

    let rendered = run(cli.command, &config)?;
    println!("{rendered}");
    Ok(())
}
