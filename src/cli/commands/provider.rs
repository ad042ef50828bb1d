use crate::provider::DEFAULT_NATIONALITY;
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

pub const ARG_PROVIDER_URL: &str = "provider-url";
pub const ARG_PROVIDER_RESULTS: &str = "provider-results";
pub const ARG_PROVIDER_NATIONALITY: &str = "provider-nationality";
pub const ARG_PROVIDER_TIMEOUT: &str = "provider-timeout";
pub const ARG_PROVIDER_RETRIES: &str = "provider-retries";
pub const ARG_PROVIDER_BACKOFF_MS: &str = "provider-backoff-ms";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_PROVIDER_URL)
                .long(ARG_PROVIDER_URL)
                .help("User-data provider base URL (default: https://randomuser.me/api)")
                .env("RANDOM_USER_API_URL"),
        )
        .arg(
            Arg::new(ARG_PROVIDER_RESULTS)
                .long(ARG_PROVIDER_RESULTS)
                .help("Number of profiles requested from the provider")
                .env("RANDOM_USER_RESULTS")
                .default_value("1")
                .value_parser(clap::value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new(ARG_PROVIDER_NATIONALITY)
                .long(ARG_PROVIDER_NATIONALITY)
                .help("Nationality code passed to the provider")
                .env("RANDOM_USER_NATIONALITY")
                .default_value(DEFAULT_NATIONALITY),
        )
        .arg(
            Arg::new(ARG_PROVIDER_TIMEOUT)
                .long(ARG_PROVIDER_TIMEOUT)
                .help("Per-attempt provider request timeout in seconds")
                .env("SIGNET_PROVIDER_TIMEOUT")
                .default_value("10")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_PROVIDER_RETRIES)
                .long(ARG_PROVIDER_RETRIES)
                .help("Provider attempts before giving up")
                .env("SIGNET_PROVIDER_RETRIES")
                .default_value("3")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new(ARG_PROVIDER_BACKOFF_MS)
                .long(ARG_PROVIDER_BACKOFF_MS)
                .help("Backoff unit in milliseconds; attempt n waits unit * 2^n")
                .env("SIGNET_PROVIDER_BACKOFF_MS")
                .default_value("1000")
                .value_parser(clap::value_parser!(u64)),
        )
}

#[derive(Debug)]
pub struct Options {
    pub url: Option<String>,
    pub results: u32,
    pub nationality: String,
    pub timeout_seconds: u64,
    pub retries: u32,
    pub backoff_ms: u64,
}

impl Options {
    /// # Errors
    /// Returns an error if a defaulted argument is unexpectedly missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        Ok(Self {
            url: matches.get_one::<String>(ARG_PROVIDER_URL).cloned(),
            results: matches
                .get_one::<u32>(ARG_PROVIDER_RESULTS)
                .copied()
                .context("missing argument: --provider-results")?,
            nationality: matches
                .get_one::<String>(ARG_PROVIDER_NATIONALITY)
                .cloned()
                .context("missing argument: --provider-nationality")?,
            timeout_seconds: matches
                .get_one::<u64>(ARG_PROVIDER_TIMEOUT)
                .copied()
                .context("missing argument: --provider-timeout")?,
            retries: matches
                .get_one::<u32>(ARG_PROVIDER_RETRIES)
                .copied()
                .context("missing argument: --provider-retries")?,
            backoff_ms: matches
                .get_one::<u64>(ARG_PROVIDER_BACKOFF_MS)
                .copied()
                .context("missing argument: --provider-backoff-ms")?,
        })
    }
}
