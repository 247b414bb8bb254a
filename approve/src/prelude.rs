//! The `approve` prelude.

pub use crate::errors::ApproveError;
pub use crate::{
    Approval, Args, Config, Constraint, Equal, Format, Ip, Max, Min, Outcome, Param, Pattern,
    Range, Report, Required, RuleSet, Score, Strength, Test, TestCatalog, add_test, value,
};
