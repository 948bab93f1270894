//! CLI argument parsing using `clap`.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for `brewbytes`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "brewbytes",
    version,
    about = "Run the BrewBytes café floor: assign orders to waiters and tick them to completion.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `BrewBytes.toml` in the current working directory if it
    /// exists, built-in defaults otherwise.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the tick interval, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Run for this many seconds, then print the final report.
    ///
    /// Without it, the floor runs until Ctrl-C.
    #[arg(long, value_name = "N")]
    pub run_secs: Option<u64>,

    /// Place a fixed set of sample orders at startup.
    #[arg(long)]
    pub demo: bool,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = CliArgs::try_parse_from([
            "brewbytes",
            "--config",
            "cafe.toml",
            "--tick-ms",
            "250",
            "--run-secs",
            "3",
            "--demo",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("cafe.toml")));
        assert_eq!(args.tick_ms, Some(250));
        assert_eq!(args.run_secs, Some(3));
        assert!(args.demo);
    }

    #[test]
    fn everything_is_optional() {
        let args = CliArgs::try_parse_from(["brewbytes"]).unwrap();
        assert!(args.config.is_none());
        assert!(!args.demo);
    }
}
