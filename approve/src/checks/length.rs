use crate::Args;
use crate::errors::ApproveError;
use crate::checks::{Outcome, Test};

fn int_param(args: &Args, rule: &str, name: &str) -> Result<i64, ApproveError> {
    args.int(name).ok_or_else(|| ApproveError::InvalidArgument {
        message: format!("'{}' expects an integer for '{}'", rule, name),
    })
}

fn chars(value: &str) -> i64 {
    value.chars().count() as i64
}

/// Checks that a value is at least `min` characters long.
pub struct Min;

impl Test for Min {
    fn validate(&self, value: &str, args: &Args) -> Result<Outcome, ApproveError> {
        let min = int_param(args, "min", "min")?;
        Ok((chars(value) >= min).into())
    }

    fn message(&self) -> &str {
        "{title} must be a minimum of {min} characters"
    }

    fn expects(&self) -> &[&'static str] {
        &["min"]
    }
}

/// Checks that a value is at most `max` characters long.
pub struct Max;

impl Test for Max {
    fn validate(&self, value: &str, args: &Args) -> Result<Outcome, ApproveError> {
        let max = int_param(args, "max", "max")?;
        Ok((chars(value) <= max).into())
    }

    fn message(&self) -> &str {
        "{title} must be a maximum of {max} characters"
    }

    fn expects(&self) -> &[&'static str] {
        &["max"]
    }
}

/// Checks that a value's length falls between `min` and `max`, inclusive.
pub struct Range;

impl Test for Range {
    fn validate(&self, value: &str, args: &Args) -> Result<Outcome, ApproveError> {
        let min = int_param(args, "range", "min")?;
        let max = int_param(args, "range", "max")?;
        let len = chars(value);
        Ok((len >= min && len <= max).into())
    }

    fn message(&self) -> &str {
        "{title} must be a minimum of {min} and a maximum of {max} characters"
    }

    fn expects(&self) -> &[&'static str] {
        &["min", "max"]
    }
}
