use crate::{
    cli::telemetry,
    provider::{ProviderClient, ProviderConfig, DEFAULT_PROVIDER_URL},
    signet::{self, marker::MarkerCodec, marker::DEFAULT_COOKIE_SECRET},
};
use anyhow::{anyhow, Result};
use secrecy::SecretString;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub provider_url: Option<String>,
    pub provider_results: u32,
    pub provider_nationality: String,
    pub provider_timeout_seconds: u64,
    pub provider_retries: u32,
    pub provider_backoff_ms: u64,
    pub cookie_secret: Option<SecretString>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the HMAC key or HTTP client cannot be set up, or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    log_startup_args(&args);

    let secret = resolve_secret(args.cookie_secret);
    let codec = MarkerCodec::new(&secret).map_err(|err| anyhow!("Invalid cookie secret: {err}"))?;

    let provider_url = resolve_provider_url(args.provider_url);
    let provider_config = ProviderConfig::new(provider_url)
        .with_results(args.provider_results)
        .with_nationality(args.provider_nationality)
        .with_timeout(Duration::from_secs(args.provider_timeout_seconds))
        .with_retry_attempts(args.provider_retries.max(1))
        .with_backoff_base(Duration::from_millis(args.provider_backoff_ms));
    let provider = ProviderClient::new(provider_config)?;

    let result = signet::new(args.port, codec, provider).await;

    telemetry::shutdown_tracer();

    result
}

/// Fall back to the development key, loudly.
fn resolve_secret(secret: Option<SecretString>) -> SecretString {
    secret.unwrap_or_else(|| {
        warn!("AUTH_COOKIE_SECRET is not set, signing the auth cookie with the insecure development key");
        SecretString::from(DEFAULT_COOKIE_SECRET.to_string())
    })
}

fn resolve_provider_url(url: Option<String>) -> String {
    url.filter(|url| !url.trim().is_empty()).unwrap_or_else(|| {
        warn!("RANDOM_USER_API_URL is not set, using {DEFAULT_PROVIDER_URL}");
        DEFAULT_PROVIDER_URL.to_string()
    })
}

fn log_startup_args(args: &Args) {
    let entries = [
        ("listen", format!("tcp:{}", args.port)),
        (
            "provider_url",
            args.provider_url
                .clone()
                .unwrap_or_else(|| format!("{DEFAULT_PROVIDER_URL} (default)")),
        ),
        ("provider_results", args.provider_results.to_string()),
        ("provider_nationality", args.provider_nationality.clone()),
        (
            "provider_timeout",
            format!("{}s", args.provider_timeout_seconds),
        ),
        ("provider_retries", args.provider_retries.to_string()),
        ("provider_backoff", format!("{}ms", args.provider_backoff_ms)),
        ("cookie_secret_set", args.cookie_secret.is_some().to_string()),
    ];

    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut message = format!(
        "{} {} ({})\n\nStartup configuration:",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        short_commit(crate::GIT_COMMIT_HASH)
    );
    for (key, value) in &entries {
        let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
        let _ =
            std::fmt::Write::write_fmt(&mut message, format_args!("\n  {key}:{padding} {value}"));
    }
    info!("{message}");
}

fn short_commit(hash: &str) -> String {
    let trimmed = hash.trim();
    if trimmed.len() > 7 {
        trimmed[..7].to_string()
    } else {
        trimmed.to_string()
    }
}
