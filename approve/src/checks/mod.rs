use crate::Args;
use crate::errors::ApproveError;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::sync::RwLock;

pub(crate) mod equal;
pub(crate) mod length;
pub(crate) mod pattern;
pub(crate) mod strength;

use equal::Equal;
use length::{Max, Min, Range};
use pattern::{Format, Ip, Pattern};
use strength::{Score, Strength};

/// A named validation test.
///
/// Implementations must be `Send + Sync` so they can live in the process-wide
/// catalog. A test is immutable: everything that varies per call arrives
/// through the extracted [`Args`], never by writing onto the test itself.
pub trait Test: Send + Sync {
    /// Runs the test against a value with the extracted arguments.
    fn validate(&self, value: &str, args: &Args) -> Result<Outcome, ApproveError>;

    /// The default message template, with `{placeholder}` tokens.
    fn message(&self) -> &str;

    /// Names of the parameters the test requires from a constraint.
    fn expects(&self) -> &[&'static str] {
        &[]
    }
}

/// What a test hands back to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The value passed.
    Pass,
    /// The value failed; the dispatcher appends the rule's message.
    Fail,
    /// A structured outcome carrying its own messages and extra detail.
    Report(Report),
}

impl From<bool> for Outcome {
    fn from(passed: bool) -> Self {
        if passed { Outcome::Pass } else { Outcome::Fail }
    }
}

/// A structured test outcome.
///
/// `errors` holds unformatted message templates; the dispatcher formats them
/// with the same context as the rule's default message. Remaining fields are
/// merged onto the returned [`Approval`](crate::Approval).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub valid: bool,
    /// Human label for the outcome, e.g. a strength band.
    pub message: String,
    /// Unformatted `{placeholder}` message templates, in order.
    pub errors: Vec<String>,
    /// Password score detail, when the test produces one.
    pub score: Option<Score>,
}

/// The registry of named tests.
///
/// A catalog is a plain value: construct one with [`TestCatalog::with_builtins`]
/// and pass it around for isolated validation, or go through the process-wide
/// instance behind [`value`](crate::value) / [`add_test`](crate::add_test).
#[derive(Default)]
pub struct TestCatalog {
    tests: IndexMap<String, Box<dyn Test>>,
}

impl TestCatalog {
    /// A catalog pre-populated with the built-in tests.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::default();
        catalog.register(Box::new(Required), "required");
        catalog.register(
            Box::new(Pattern::new(
                pattern::EMAIL.clone(),
                "{title} must be a valid email address",
            )),
            "email",
        );
        catalog.register(
            Box::new(Pattern::new(
                pattern::URL.clone(),
                "{title} must be a valid web address",
            )),
            "url",
        );
        catalog.register(
            Box::new(Pattern::new(
                pattern::CREDIT_CARD.clone(),
                "{title} must be a valid credit card number",
            )),
            "cc",
        );
        catalog.register(
            Box::new(Pattern::new(
                pattern::ALPHA_NUMERIC.clone(),
                "{title} may only contain [A-Za-z] and [0-9]",
            )),
            "alphaNumeric",
        );
        catalog.register(
            Box::new(Pattern::new(
                pattern::NUMERIC.clone(),
                "{title} may only contain [0-9]",
            )),
            "numeric",
        );
        catalog.register(
            Box::new(Pattern::new(
                pattern::ALPHA.clone(),
                "{title} may only contain [A-Za-z]",
            )),
            "alpha",
        );
        catalog.register(
            Box::new(Pattern::new(
                pattern::DECIMAL.clone(),
                "{title} must be a valid decimal",
            )),
            "decimal",
        );
        catalog.register(
            Box::new(Pattern::new(
                pattern::CURRENCY.clone(),
                "{title} must be a valid currency value",
            )),
            "currency",
        );
        catalog.register(Box::new(Ip), "ip");
        catalog.register(Box::new(Min), "min");
        catalog.register(Box::new(Max), "max");
        catalog.register(Box::new(Range), "range");
        catalog.register(Box::new(Equal), "equal");
        catalog.register(Box::new(Format), "format");
        catalog.register(Box::new(Strength), "strength");
        catalog
    }

    /// Registers a test under a name.
    ///
    /// The first registration of a name wins; registering an already-known
    /// name is a no-op, so a later registration can never clobber a built-in
    /// or an earlier custom test.
    pub fn register(&mut self, test: Box<dyn Test>, name: impl Into<String>) {
        let name = name.into();
        self.tests.entry(name).or_insert(test);
    }

    /// Looks a test up by name.
    pub fn lookup(&self, name: &str) -> Option<&dyn Test> {
        self.tests.get(name).map(|t| t.as_ref())
    }

    /// Whether a test is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.tests.contains_key(name)
    }
}

/// The process-wide catalog, built lazily with the built-in suite.
static CATALOG: Lazy<RwLock<TestCatalog>> = Lazy::new(|| RwLock::new(TestCatalog::with_builtins()));

pub(crate) fn catalog() -> &'static RwLock<TestCatalog> {
    &CATALOG
}

/// Checks that a value is present.
pub struct Required;

impl Test for Required {
    fn validate(&self, value: &str, _args: &Args) -> Result<Outcome, ApproveError> {
        Ok((!value.is_empty()).into())
    }

    fn message(&self) -> &str {
        "{title} is required"
    }
}
