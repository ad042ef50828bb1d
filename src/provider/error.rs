use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the user-data provider.
///
/// The `Display` text is what the login endpoint puts in its `error` field.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Request timeout")]
    Timeout,
    #[error("Failed to fetch user data: {0}")]
    Unavailable(String),
    #[error("Failed to fetch user data: {}", .0.as_u16())]
    Status(StatusCode),
    #[error("Invalid user data: {0}")]
    Malformed(String),
    #[error("No user data received from API")]
    EmptyResult,
    #[error("Invalid provider URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ProviderError {
    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Malformed(err.to_string())
        } else {
            Self::Unavailable(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_uses_numeric_code() {
        let err = ProviderError::Status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Failed to fetch user data: 503");
    }

    #[test]
    fn empty_result_message() {
        assert_eq!(
            ProviderError::EmptyResult.to_string(),
            "No user data received from API"
        );
    }

    #[test]
    fn timeout_is_distinct() {
        assert_eq!(ProviderError::Timeout.to_string(), "Request timeout");
    }

    #[test]
    fn url_errors_convert() {
        let err: ProviderError = url::Url::parse("not a url")
            .map_err(ProviderError::from)
            .expect_err("invalid url");
        assert!(err.to_string().starts_with("Invalid provider URL"));
    }
}
