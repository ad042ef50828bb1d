pub mod health;
pub use self::health::health;

pub mod login;
pub use self::login::login;

pub mod logout;
pub use self::logout::logout;

pub mod pages;

// common functions for the handlers
use regex::Regex;

pub const PHONE_NUMBER_INVALID: &str = "Phone number must be 11 digits starting with \"09\"";

/// 11 digits, leading `09`.
pub fn valid_phone_number(phone_number: &str) -> bool {
    Regex::new(r"^09\d{9}$").is_ok_and(|re| re.is_match(phone_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_phone_number_accepts_09_prefix() {
        assert!(valid_phone_number("09123456789"));
        assert!(valid_phone_number("09000000000"));
    }

    #[test]
    fn valid_phone_number_rejects_bad_input() {
        assert!(!valid_phone_number(""));
        assert!(!valid_phone_number("0912345678"));
        assert!(!valid_phone_number("091234567890"));
        assert!(!valid_phone_number("19123456789"));
        assert!(!valid_phone_number("0912345678a"));
        assert!(!valid_phone_number(" 09123456789"));
    }
}
