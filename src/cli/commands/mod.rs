pub mod cookie;
pub mod logging;
pub mod provider;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_PORT: &str = "port";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("signet")
        .about("Phone login demo with a signed session marker")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("SIGNET_PORT")
                .value_parser(clap::value_parser!(u16)),
        );

    let command = provider::with_args(command);
    let command = cookie::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    const CLEAN_ENV: [(&str, Option<&str>); 9] = [
        ("SIGNET_PORT", None),
        ("SIGNET_LOG_LEVEL", None),
        ("SIGNET_PROVIDER_TIMEOUT", None),
        ("SIGNET_PROVIDER_RETRIES", None),
        ("SIGNET_PROVIDER_BACKOFF_MS", None),
        ("RANDOM_USER_API_URL", None),
        ("RANDOM_USER_RESULTS", None),
        ("RANDOM_USER_NATIONALITY", None),
        ("AUTH_COOKIE_SECRET", None),
    ];

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "signet");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Phone login demo with a signed session marker".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(CLEAN_ENV, || {
            let matches = new().get_matches_from(vec!["signet"]);
            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8080));
            assert_eq!(
                matches
                    .get_one::<u32>(provider::ARG_PROVIDER_RESULTS)
                    .copied(),
                Some(1)
            );
            assert_eq!(
                matches
                    .get_one::<String>(provider::ARG_PROVIDER_NATIONALITY)
                    .map(String::as_str),
                Some("us")
            );
            assert_eq!(
                matches.get_one::<u64>(provider::ARG_PROVIDER_TIMEOUT).copied(),
                Some(10)
            );
            assert_eq!(
                matches.get_one::<u32>(provider::ARG_PROVIDER_RETRIES).copied(),
                Some(3)
            );
            assert_eq!(
                matches
                    .get_one::<u64>(provider::ARG_PROVIDER_BACKOFF_MS)
                    .copied(),
                Some(1000)
            );
            assert!(matches
                .get_one::<String>(provider::ARG_PROVIDER_URL)
                .is_none());
            assert!(cookie::secret(&matches).is_none());
        });
    }

    #[test]
    fn test_check_args() {
        temp_env::with_vars(CLEAN_ENV, || {
            let matches = new().get_matches_from(vec![
                "signet",
                "--port",
                "9090",
                "--provider-url",
                "http://localhost:3000/api",
                "--provider-results",
                "2",
                "--provider-nationality",
                "gb",
                "--provider-timeout",
                "5",
                "--provider-retries",
                "1",
                "--cookie-secret",
                "s3cr3t",
            ]);

            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(9090));
            assert_eq!(
                matches
                    .get_one::<String>(provider::ARG_PROVIDER_URL)
                    .map(String::as_str),
                Some("http://localhost:3000/api")
            );
            assert_eq!(
                matches
                    .get_one::<u32>(provider::ARG_PROVIDER_RESULTS)
                    .copied(),
                Some(2)
            );
            assert_eq!(
                cookie::secret(&matches)
                    .as_ref()
                    .map(|s| s.expose_secret().to_string()),
                Some("s3cr3t".to_string())
            );
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("SIGNET_PORT", Some("443")),
                ("SIGNET_LOG_LEVEL", Some("info")),
                ("SIGNET_PROVIDER_TIMEOUT", Some("2")),
                ("SIGNET_PROVIDER_RETRIES", Some("5")),
                ("SIGNET_PROVIDER_BACKOFF_MS", Some("250")),
                ("RANDOM_USER_API_URL", Some("https://users.example.com/api")),
                ("RANDOM_USER_RESULTS", Some("3")),
                ("RANDOM_USER_NATIONALITY", Some("fr")),
                ("AUTH_COOKIE_SECRET", Some("from-env")),
            ],
            || {
                let matches = new().get_matches_from(vec!["signet"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(443));
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
                assert_eq!(
                    matches
                        .get_one::<String>(provider::ARG_PROVIDER_URL)
                        .map(String::as_str),
                    Some("https://users.example.com/api")
                );
                assert_eq!(
                    matches
                        .get_one::<String>(provider::ARG_PROVIDER_NATIONALITY)
                        .map(String::as_str),
                    Some("fr")
                );
                assert_eq!(
                    matches.get_one::<u64>(provider::ARG_PROVIDER_TIMEOUT).copied(),
                    Some(2)
                );
                assert_eq!(
                    matches
                        .get_one::<u64>(provider::ARG_PROVIDER_BACKOFF_MS)
                        .copied(),
                    Some(250)
                );
                assert_eq!(
                    cookie::secret(&matches)
                        .as_ref()
                        .map(|s| s.expose_secret().to_string()),
                    Some("from-env".to_string())
                );
            },
        );
    }

    #[test]
    fn test_empty_secret_is_treated_as_missing() {
        temp_env::with_vars(CLEAN_ENV, || {
            let matches = new().get_matches_from(vec!["signet", "--cookie-secret", ""]);
            assert!(cookie::secret(&matches).is_none());
        });
    }

    #[test]
    fn test_zero_timeout_rejected() {
        temp_env::with_vars(CLEAN_ENV, || {
            let result = new().try_get_matches_from(vec!["signet", "--provider-timeout", "0"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("SIGNET_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["signet"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5usize {
            temp_env::with_vars([("SIGNET_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["signet".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }
}
