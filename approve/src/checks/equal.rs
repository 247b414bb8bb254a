use crate::Args;
use crate::errors::ApproveError;
use crate::checks::{Outcome, Test};

/// Checks that a value equals the `value` parameter, compared as strings.
///
/// The `field` parameter is the human label of the other side, used only in
/// the failure message.
pub struct Equal;

impl Test for Equal {
    fn validate(&self, value: &str, args: &Args) -> Result<Outcome, ApproveError> {
        let other = args.get("value").map(|p| p.to_string()).unwrap_or_default();
        Ok((value == other).into())
    }

    fn message(&self) -> &str {
        "{title} must be equal to {field}"
    }

    fn expects(&self) -> &[&'static str] {
        &["value", "field"]
    }
}
