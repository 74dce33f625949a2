//! CLI argument definitions for cbr-rates.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `rate` | Per-unit rate as a float |
//! | `decimal` | Per-unit rate as an exact decimal |
//! | `string` | Quoted rate with a dot separator |
//! | `info` | Full currency record |
//! | `list` | Every currency quoted on the day |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, text) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--date` | today (UTC) | Day to resolve, `YYYY-MM-DD` |
//! | `--no-cache` | `false` | Bypass the in-process document cache |
//! | `--base-url` | `CBR_RATES_BASE_URL` or the CBR endpoint | Rates endpoint |
//! | `--timeout-ms` | `CBR_RATES_TIMEOUT_MS` or `5000` | Request timeout |
//!
//! # Examples
//!
//! ```bash
//! cbr-rates rate USD
//! cbr-rates decimal JPY --date 2024-03-02 --pretty
//! cbr-rates --format text string EUR
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Daily exchange rates of the Central Bank of Russia.
#[derive(Debug, Parser)]
#[command(
    name = "cbr-rates",
    author,
    version,
    about = "Daily exchange rates of the Central Bank of Russia"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Day to resolve (YYYY-MM-DD). Defaults to today in UTC.
    #[arg(long, global = true)]
    pub date: Option<String>,

    /// Always fetch the document instead of reusing a cached one.
    #[arg(long, global = true, default_value_t = false)]
    pub no_cache: bool,

    /// Override the daily rates endpoint.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON object.
    Json,
    /// Plain text line.
    Text,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Per-unit rate as a floating-point number.
    ///
    /// # Examples
    ///
    ///   cbr-rates rate USD
    ///   cbr-rates rate JPY --raw
    Rate(RateArgs),

    /// Per-unit rate as an exact decimal.
    Decimal(RateArgs),

    /// Quoted rate with a dot decimal separator.
    String(CodeArgs),

    /// Full record of one currency.
    Info(CodeArgs),

    /// Every currency quoted on the day.
    List,
}

/// Arguments for the `rate` and `decimal` commands.
#[derive(Debug, Args)]
pub struct RateArgs {
    /// Alphabetic currency code (e.g., USD, EUR, JPY).
    pub code: String,

    /// Return the value as quoted, without dividing by the nominal.
    #[arg(long, default_value_t = false)]
    pub raw: bool,
}

/// Arguments for commands taking a single currency code.
#[derive(Debug, Args)]
pub struct CodeArgs {
    /// Alphabetic currency code (e.g., USD, EUR, JPY).
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cbr-rates",
            "decimal",
            "JPY",
            "--raw",
            "--date",
            "2024-03-02",
            "--no-cache",
            "--format",
            "text",
        ])
        .expect("valid arguments");

        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.date.as_deref(), Some("2024-03-02"));
        assert!(cli.no_cache);
        match cli.command {
            Command::Decimal(args) => {
                assert_eq!(args.code, "JPY");
                assert!(args.raw);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn code_is_required() {
        assert!(Cli::try_parse_from(["cbr-rates", "rate"]).is_err());
    }
}
