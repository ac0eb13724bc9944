//! Logging setup for the radix CLI
//!
//! Events go to stderr so that stdout carries only conversion results.

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::{
    fmt::{
        self,
        format::{FormatFields, Writer},
        FmtContext, FormatEvent,
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

const DEFAULT_FILTER: &str = "warn";

/// Custom format for log level with brackets: `[INFO]`, `[WARN]`, etc.
fn format_level(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "[TRACE]",
        Level::DEBUG => "[DEBUG]",
        Level::INFO => "[INFO]",
        Level::WARN => "[WARN]",
        Level::ERROR => "[ERROR]",
    }
}

/// Event formatter that outputs: `timestamp [LEVEL] message fields`
///
/// Example output: `2026-10-17T09:12:03.104211Z [DEBUG] hex_to_decimal input="0xFF" value=255`
struct BracketedLevelFormat;

impl<S, N> FormatEvent<S, N> for BracketedLevelFormat
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let now = chrono::Utc::now();
        write!(writer, "{} ", now.format("%Y-%m-%dT%H:%M:%S%.6fZ"))?;

        let level = *event.metadata().level();
        if writer.has_ansi_escapes() {
            let color = match level {
                Level::TRACE => "\x1b[35m", // magenta
                Level::DEBUG => "\x1b[34m", // blue
                Level::INFO => "\x1b[32m",  // green
                Level::WARN => "\x1b[33m",  // yellow
                Level::ERROR => "\x1b[31m", // red
            };
            write!(writer, "{}{}\x1b[0m ", color, format_level(&level))?;
        } else {
            write!(writer, "{} ", format_level(&level))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Pick the filter directive.
///
/// Priority: `--verbose` > config `log_level` > `RUST_LOG` > `warn`
pub fn resolve_filter(verbose: bool, configured: Option<&str>) -> String {
    if verbose {
        return "debug".to_string();
    }
    configured
        .map(str::to_string)
        .or_else(|| std::env::var(EnvFilter::DEFAULT_ENV).ok())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the global subscriber
pub fn init_logging(filter: &str, ansi: bool) -> Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("Invalid log filter {filter:?}"))?;

    let layer = fmt::layer()
        .event_format(BracketedLevelFormat)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .context("Failed to initialize logging")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_level() {
        assert_eq!(format_level(&Level::DEBUG), "[DEBUG]");
        assert_eq!(format_level(&Level::ERROR), "[ERROR]");
    }

    #[test]
    fn test_verbose_wins() {
        assert_eq!(resolve_filter(true, Some("error")), "debug");
    }

    #[test]
    fn test_configured_level_used() {
        assert_eq!(
            resolve_filter(false, Some("radix_convert=trace")),
            "radix_convert=trace"
        );
    }

    #[test]
    fn test_invalid_filter_rejected() {
        assert!(init_logging("radix_convert=notalevel", false).is_err());
    }
}
