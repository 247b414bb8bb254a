use crate::Args;
use crate::errors::ApproveError;
use crate::checks::{Outcome, Test};
use once_cell::sync::Lazy;
use regex::Regex;
use std::net::IpAddr;

pub(crate) static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").unwrap()
});

// Scheme is optional, a bare host with a TLD qualifies.
pub(crate) static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(?:https?|ftp)://)?(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}(?::\d{2,5})?(?:/\S*)?$")
        .unwrap()
});

// Visa, MasterCard, Discover, Amex, Diners and JCB number shapes.
pub(crate) static CREDIT_CARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(4[0-9]{12}(?:[0-9]{3})?)|(5[1-5][0-9]{14})|(6(?:011|5[0-9]{2})[0-9]{12})|(3[47][0-9]{13})|(3(?:0[0-5]|[68][0-9])[0-9]{11})|((?:2131|1800|35[0-9]{3})[0-9]{11}))$")
        .unwrap()
});

pub(crate) static ALPHA_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

pub(crate) static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

pub(crate) static ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());

pub(crate) static DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\+|-)?((\d+(\.\d+)?)|(\.\d+))\s*$").unwrap());

pub(crate) static CURRENCY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\+|-)?((\d+(\.\d\d)?)|(\.\d\d))\s*$").unwrap());

/// A test backed by a compiled pattern.
///
/// All the flag-style built-ins (`email`, `url`, `cc`, …) are instances of
/// this one type; it is also the quickest way to register a custom test:
///
/// ```
/// use approve::prelude::*;
/// use regex::Regex;
///
/// approve::add_test(
///     Pattern::new(Regex::new(r"^#[0-9a-f]{6}$").unwrap(), "{title} must be a hex color"),
///     "hexColor",
/// );
/// assert!(approve::value("#1a2b3c", &RuleSet::new().rule("hexColor", true)).unwrap().approved);
/// ```
pub struct Pattern {
    regex: Regex,
    message: String,
}

impl Pattern {
    pub fn new(regex: Regex, message: impl Into<String>) -> Self {
        Self {
            regex,
            message: message.into(),
        }
    }
}

impl Test for Pattern {
    fn validate(&self, value: &str, _args: &Args) -> Result<Outcome, ApproveError> {
        Ok(self.regex.is_match(value).into())
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Checks that a value is a valid IPv4 or IPv6 address.
pub struct Ip;

impl Test for Ip {
    fn validate(&self, value: &str, _args: &Args) -> Result<Outcome, ApproveError> {
        Ok(value.parse::<IpAddr>().is_ok().into())
    }

    fn message(&self) -> &str {
        "{title} must be a valid IP address"
    }
}

/// Checks a value against a caller-supplied pattern.
pub struct Format;

impl Test for Format {
    fn validate(&self, value: &str, args: &Args) -> Result<Outcome, ApproveError> {
        let regex = args
            .pattern("regex")
            .ok_or_else(|| ApproveError::InvalidArgument {
                message: "'format' requires a compiled pattern for 'regex'".to_string(),
            })?;
        Ok(regex.is_match(value).into())
    }

    fn message(&self) -> &str {
        "{title} did not pass the [{regex}] test"
    }

    fn expects(&self) -> &[&'static str] {
        &["regex"]
    }
}
