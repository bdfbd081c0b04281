//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Get an environment variable, falling back to `default` when it is unset.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to `default` when it is unset.
///
/// A variable that is set but unparsable is still an error.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env_parse(name) {
        Err(Error::MissingEnv(_)) => Ok(default),
        other => other,
    }
}

/// Read a boolean flag ("1", "true", "yes", "on" are truthy; "0", "false", "no", "off" falsy).
pub fn get_env_flag(name: &'static str, default: bool) -> Result<bool, Error> {
    let Ok(val) = env::var(name) else {
        return Ok(default);
    };
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::WrongFormat(name)),
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name; the process environment is shared.

    #[test]
    fn test_get_env_missing() {
        assert_eq!(get_env("LIB_UTILS_TEST_MISSING"), Err(Error::MissingEnv("LIB_UTILS_TEST_MISSING")));
    }

    #[test]
    fn test_get_env_parse_or_default_and_error() {
        assert_eq!(get_env_parse_or("LIB_UTILS_TEST_PARSE_UNSET", 42u64), Ok(42));

        env::set_var("LIB_UTILS_TEST_PARSE_BAD", "forty-two");
        assert_eq!(
            get_env_parse_or("LIB_UTILS_TEST_PARSE_BAD", 42u64),
            Err(Error::WrongFormat("LIB_UTILS_TEST_PARSE_BAD"))
        );

        env::set_var("LIB_UTILS_TEST_PARSE_OK", " 7 ");
        assert_eq!(get_env_parse_or("LIB_UTILS_TEST_PARSE_OK", 42u64), Ok(7));
    }

    #[test]
    fn test_get_env_flag() {
        assert_eq!(get_env_flag("LIB_UTILS_TEST_FLAG_UNSET", true), Ok(true));

        env::set_var("LIB_UTILS_TEST_FLAG_OFF", "off");
        assert_eq!(get_env_flag("LIB_UTILS_TEST_FLAG_OFF", true), Ok(false));

        env::set_var("LIB_UTILS_TEST_FLAG_BAD", "maybe");
        assert!(get_env_flag("LIB_UTILS_TEST_FLAG_BAD", true).is_err());
    }
}
