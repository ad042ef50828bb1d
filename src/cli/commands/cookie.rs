use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const ARG_COOKIE_SECRET: &str = "cookie-secret";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_COOKIE_SECRET)
            .long(ARG_COOKIE_SECRET)
            .help("HMAC key for the auth cookie; falls back to an insecure development key")
            .env("AUTH_COOKIE_SECRET")
            .hide_env_values(true),
    )
}

/// Read the signing key, `None` when neither flag nor env provided one.
#[must_use]
pub fn secret(matches: &ArgMatches) -> Option<SecretString> {
    matches
        .get_one::<String>(ARG_COOKIE_SECRET)
        .filter(|secret| !secret.is_empty())
        .map(|secret| SecretString::from(secret.clone()))
}
