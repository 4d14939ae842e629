//! Command-line options.

use std::path::PathBuf;

use clap::Parser;

use crate::config::constants::{DEFAULT_MAX_CONCURRENCY, DEFAULT_TIMEOUT_SECS};
use crate::config::types::{Config, LogFormat, LogLevel};

/// Discover subdomains that may expose APIs.
#[derive(Debug, Clone, Parser)]
#[command(name = "subdomain_finder", version, about)]
pub struct Cli {
    /// Target domain (e.g. example.com)
    #[arg(short, long)]
    pub domain: String,

    /// Custom wordlist file (one label per line, `#` for comments)
    #[arg(short, long)]
    pub wordlist: Option<PathBuf>,

    /// Timeout in seconds for every DNS query and HTTP attempt
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Number of concurrent probes per phase
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub workers: usize,

    /// File name for the JSON report (written under `results/`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output (debug logging and full error chains)
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level (`--verbose` raises it to at least debug)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Disable progress bars
    #[arg(long)]
    pub no_progress: bool,
}

impl Cli {
    /// Maps the parsed flags onto a library `Config`.
    ///
    /// `--workers` sizes both the DNS and the HTTP limiter. `--verbose` lifts
    /// `--log-level` to debug but never lowers trace.
    pub fn into_config(self) -> Config {
        Config {
            domain: self.domain.trim().to_string(),
            wordlist: self.wordlist,
            timeout_seconds: self.timeout,
            dns_concurrency: self.workers,
            http_concurrency: self.workers,
            output: self.output,
            log_level: match self.log_level {
                LogLevel::Trace => LogLevel::Trace,
                _ if self.verbose => LogLevel::Debug,
                level => level,
            },
            log_format: self.log_format,
            ..Default::default()
        }
    }
}
