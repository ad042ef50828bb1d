//! Map parsed CLI arguments to the action the binary runs.

use crate::cli::actions::{server::Args, Action};
use crate::cli::commands::{cookie, provider, ARG_PORT};
use anyhow::Result;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);
    let provider_opts = provider::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        provider_url: provider_opts.url,
        provider_results: provider_opts.results,
        provider_nationality: provider_opts.nationality,
        provider_timeout_seconds: provider_opts.timeout_seconds,
        provider_retries: provider_opts.retries,
        provider_backoff_ms: provider_opts.backoff_ms,
        cookie_secret: cookie::secret(matches),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn handler_builds_server_action() {
        temp_env::with_vars(
            [
                ("SIGNET_PORT", None::<&str>),
                ("SIGNET_PROVIDER_RETRIES", None),
                ("RANDOM_USER_API_URL", Some("http://127.0.0.1:9000/api")),
                ("AUTH_COOKIE_SECRET", Some("dispatch-secret")),
            ],
            || {
                let matches = crate::cli::commands::new().get_matches_from(vec!["signet"]);
                let Ok(Action::Server(args)) = handler(&matches) else {
                    panic!("expected a server action");
                };
                assert_eq!(args.port, 8080);
                assert_eq!(
                    args.provider_url.as_deref(),
                    Some("http://127.0.0.1:9000/api")
                );
                assert_eq!(args.provider_retries, 3);
                assert_eq!(
                    args.cookie_secret
                        .as_ref()
                        .map(|s| s.expose_secret().to_string()),
                    Some("dispatch-secret".to_string())
                );
            },
        );
    }
}
