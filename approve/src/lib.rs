//! Declarative value validation: run a named rule against a value and get
//! back an approval with formatted error messages.
//!
//! ```
//! use approve::prelude::*;
//!
//! let result = approve::value(
//!     "hi",
//!     &RuleSet::new().title("Username").rule("min", 5),
//! )
//! .unwrap();
//! assert!(!result.approved);
//! assert_eq!(result.errors, vec!["Username must be a minimum of 5 characters"]);
//! ```

use indexmap::IndexMap;
use regex::Regex;
use std::fmt::{self, Display};

pub mod prelude;

mod checks;
mod errors;
mod message;

pub use checks::equal::Equal;
pub use checks::length::{Max, Min, Range};
pub use checks::pattern::{Format, Ip, Pattern};
pub use checks::strength::{Score, Strength};
pub use checks::{Outcome, Report, Required, Test, TestCatalog};
pub use errors::ApproveError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rule-set keys with reserved meaning, never dispatched as rules.
const TITLE_KEY: &str = "title";
const MESSAGE_KEY: &str = "message";

/// A single constraint parameter value.
#[derive(Debug, Clone)]
pub enum Param {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Pattern(Regex),
}

impl Param {
    /// The parameter as an integer, coercing numeric strings.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Param::Int(i) => Some(*i),
            Param::Float(x) => Some(*x as i64),
            Param::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// The parameter as a compiled pattern.
    pub fn as_pattern(&self) -> Option<&Regex> {
        match self {
            Param::Pattern(regex) => Some(regex),
            _ => None,
        }
    }

    /// Whether the string form is a plain alphanumeric token, the shape a
    /// bare constraint must have to stand in for a single expected parameter.
    fn is_token(&self) -> bool {
        checks::pattern::ALPHA_NUMERIC.is_match(&self.to_string())
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Bool(b) => write!(f, "{}", b),
            Param::Int(i) => write!(f, "{}", i),
            Param::Float(x) => write!(f, "{}", x),
            Param::Str(s) => f.write_str(s),
            Param::Pattern(regex) => f.write_str(regex.as_str()),
        }
    }
}

/// Conversions into `Param` and the matching bare-constraint shorthand.
macro_rules! impl_param_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Param {
                fn from(value: $t) -> Self {
                    Param::$variant(value.into())
                }
            }
            impl From<$t> for Constraint {
                fn from(value: $t) -> Self {
                    Constraint::Bare(Param::$variant(value.into()))
                }
            }
        )*
    };
}

impl_param_from!(
    bool => Bool,
    i32 => Int,
    i64 => Int,
    u32 => Int,
    f64 => Float,
    &str => Str,
    String => Str,
    Regex => Pattern,
);

impl From<Param> for Constraint {
    fn from(value: Param) -> Self {
        Constraint::Bare(value)
    }
}

/// Opaque test-specific configuration carried on a constraint, passed through
/// to the test untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Message-template overrides keyed by a test's internal check names.
    pub messages: IndexMap<String, String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message-template override for a named check.
    pub fn message(mut self, check: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages.insert(check.into(), template.into());
        self
    }
}

/// The value attached to a rule.
///
/// A bare scalar (`required: true`, `min: 5`) enables a test that needs at
/// most one parameter; the object form names its parameters and can carry a
/// `message` override and a `config` block.
#[derive(Debug, Clone)]
pub enum Constraint {
    Bare(Param),
    Detailed(Detail),
}

/// The object form of a constraint.
#[derive(Debug, Clone, Default)]
pub struct Detail {
    params: IndexMap<String, Param>,
    message: Option<String>,
    config: Option<Config>,
}

impl Constraint {
    /// An empty object-form constraint, filled in with the builder methods.
    pub fn new() -> Self {
        Constraint::Detailed(Detail::default())
    }

    /// Sets a named parameter.
    pub fn param(self, name: impl Into<String>, value: impl Into<Param>) -> Self {
        let mut detail = self.into_detail();
        detail.params.insert(name.into(), value.into());
        Constraint::Detailed(detail)
    }

    /// Sets a message override, used verbatim in place of the default
    /// template when the rule fails.
    pub fn message(self, message: impl Into<String>) -> Self {
        let mut detail = self.into_detail();
        detail.message = Some(message.into());
        Constraint::Detailed(detail)
    }

    /// Attaches test-specific configuration.
    pub fn config(self, config: Config) -> Self {
        let mut detail = self.into_detail();
        detail.config = Some(config);
        Constraint::Detailed(detail)
    }

    fn into_detail(self) -> Detail {
        match self {
            Constraint::Detailed(detail) => detail,
            Constraint::Bare(_) => Detail::default(),
        }
    }

    fn param_value(&self, name: &str) -> Option<&Param> {
        match self {
            Constraint::Detailed(detail) => detail.params.get(name),
            Constraint::Bare(_) => None,
        }
    }

    fn bare(&self) -> Option<&Param> {
        match self {
            Constraint::Bare(param) => Some(param),
            Constraint::Detailed(_) => None,
        }
    }

    fn message_override(&self) -> Option<&str> {
        match self {
            Constraint::Detailed(detail) => detail.message.as_deref(),
            Constraint::Bare(_) => None,
        }
    }

    fn config_value(&self) -> Option<&Config> {
        match self {
            Constraint::Detailed(detail) => detail.config.as_ref(),
            Constraint::Bare(_) => None,
        }
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Constraint::new()
    }
}

/// An ordered set of named rules for one value.
///
/// `title` and `message` are reserved keys: the first is the human label
/// substituted for `{title}` in messages, the second a message override used
/// when the dispatched rule's own constraint carries none. Neither is ever
/// dispatched as a rule.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: IndexMap<String, Constraint>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule with its constraint.
    pub fn rule(mut self, name: impl Into<String>, constraint: impl Into<Constraint>) -> Self {
        self.rules.insert(name.into(), constraint.into());
        self
    }

    /// Sets the human label substituted for `{title}` in messages.
    pub fn title(self, title: impl Into<String>) -> Self {
        self.rule(TITLE_KEY, title.into())
    }

    /// Sets a message override for the whole rule set.
    pub fn message(self, message: impl Into<String>) -> Self {
        self.rule(MESSAGE_KEY, message.into())
    }

    fn reserved_text(&self, key: &str) -> Option<String> {
        self.rules
            .get(key)
            .and_then(|constraint| constraint.bare())
            .map(|param| param.to_string())
    }
}

/// The argument bundle handed to a test: the extracted expected parameters
/// plus any configuration the constraint carried.
#[derive(Debug, Clone, Default)]
pub struct Args {
    values: IndexMap<&'static str, Param>,
    config: Option<Config>,
}

impl Args {
    pub fn get(&self, name: &str) -> Option<&Param> {
        self.values.get(name)
    }

    /// The named parameter as an integer, if present and coercible.
    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Param::as_int)
    }

    /// The named parameter as a compiled pattern.
    pub fn pattern(&self, name: &str) -> Option<&Regex> {
        self.get(name).and_then(Param::as_pattern)
    }

    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    pub(crate) fn insert(&mut self, name: &'static str, value: Param) {
        self.values.insert(name, value);
    }

    pub(crate) fn set_config(&mut self, config: Config) {
        self.config = Some(config);
    }
}

/// The outcome of a validation call.
///
/// Created fresh per call. `message` and `score` are only populated when the
/// dispatched test produced a structured [`Report`].
#[derive(Debug, Clone, PartialEq)]
pub struct Approval {
    /// Whether the value passed.
    pub approved: bool,
    /// Formatted error messages, in the order they were produced.
    pub errors: Vec<String>,
    /// Label merged from a structured outcome, e.g. the strength band.
    pub message: Option<String>,
    /// Score detail merged from a strength outcome.
    pub score: Option<Score>,
}

impl Approval {
    fn new() -> Self {
        Self {
            approved: true,
            errors: Vec::new(),
            message: None,
            score: None,
        }
    }

    /// Calls `callback` for every error, most recently added first.
    pub fn each<F: FnMut(&str)>(&self, mut callback: F) {
        for error in self.errors.iter().rev() {
            callback(error);
        }
    }
}

impl Default for Approval {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates `value` against `rules` using the process-wide catalog.
///
/// Exactly one rule is evaluated per call: the first key in insertion order
/// that is not reserved. A caller wanting several constraints on one value
/// issues several calls. Fails with [`ApproveError::InvalidArgument`] when
/// the rule set contains no rule at all.
pub fn value(value: &str, rules: &RuleSet) -> Result<Approval, ApproveError> {
    let catalog = checks::catalog().read().unwrap_or_else(|e| e.into_inner());
    catalog.value(value, rules)
}

/// Registers a custom test under `name` in the process-wide catalog.
///
/// A name that is already registered keeps its original test; registering it
/// again is a no-op.
pub fn add_test(test: impl Test + 'static, name: impl Into<String>) {
    let mut catalog = checks::catalog().write().unwrap_or_else(|e| e.into_inner());
    catalog.register(Box::new(test), name);
}

impl TestCatalog {
    /// Validates `value` against `rules` using this catalog.
    ///
    /// Same semantics as the free [`value`](crate::value) function, for
    /// callers holding their own catalog.
    pub fn value(&self, value: &str, rules: &RuleSet) -> Result<Approval, ApproveError> {
        for (name, constraint) in &rules.rules {
            let name = name.as_str();
            if name == TITLE_KEY || name == MESSAGE_KEY {
                continue;
            }
            let test = self
                .lookup(name)
                .ok_or_else(|| ApproveError::TestNotDefined(name.to_string()))?;
            let bundle = Bundle {
                constraint,
                rule: name,
                title: rules.reserved_text(TITLE_KEY).unwrap_or_default(),
                fallback: rules.reserved_text(MESSAGE_KEY),
                test,
                value,
            };
            return invoke(&bundle);
        }
        Err(ApproveError::InvalidArgument {
            message: "rule set contains no rules".to_string(),
        })
    }
}

/// Everything the invoker needs to run one rule.
struct Bundle<'a> {
    constraint: &'a Constraint,
    rule: &'a str,
    title: String,
    fallback: Option<String>,
    test: &'a dyn Test,
    value: &'a str,
}

fn invoke(bundle: &Bundle) -> Result<Approval, ApproveError> {
    let args = extract(bundle)?;
    let outcome = bundle.test.validate(bundle.value, &args)?;

    let mut approval = Approval::new();
    match outcome {
        Outcome::Pass => {}
        Outcome::Fail => approval.approved = false,
        Outcome::Report(report) => {
            approval.approved = report.valid;
            let context = format_context(&args, &bundle.title);
            for template in &report.errors {
                approval.errors.push(message::format(template, &context));
            }
            approval.message = Some(report.message);
            approval.score = report.score;
        }
    }
    if !approval.approved {
        approval.errors.push(failure_message(bundle, &args));
    }
    Ok(approval)
}

fn extract(bundle: &Bundle) -> Result<Args, ApproveError> {
    let mut args = Args::default();
    let expects = bundle.test.expects();
    // Resolved last-declared first, so a bare constraint for a two-parameter
    // test reports the trailing name as missing.
    for &name in expects.iter().rev() {
        if let Some(param) = bundle.constraint.param_value(name) {
            args.insert(name, param.clone());
        } else if expects.len() <= 1
            && let Some(param) = bundle.constraint.bare()
            && param.is_token()
        {
            args.insert(name, param.clone());
        } else {
            return Err(ApproveError::MissingParameter {
                rule: bundle.rule.to_string(),
                parameter: name.to_string(),
            });
        }
    }
    if let Some(config) = bundle.constraint.config_value() {
        args.set_config(config.clone());
    }
    Ok(args)
}

/// The named values available to message templates for a rule: the extracted
/// expected parameters plus the rule set's title.
fn format_context(args: &Args, title: &str) -> message::Context {
    let mut context: message::Context = args
        .values
        .iter()
        .map(|(name, param)| (name.to_string(), param.to_string()))
        .collect();
    context.insert(TITLE_KEY.to_string(), title.to_string());
    context
}

fn failure_message(bundle: &Bundle, args: &Args) -> String {
    // An override is used verbatim, never run through the formatter.
    match bundle
        .constraint
        .message_override()
        .or(bundle.fallback.as_deref())
    {
        Some(message) => message.to_string(),
        None => message::format(
            bundle.test.message(),
            &format_context(args, &bundle.title),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtins() -> TestCatalog {
        TestCatalog::with_builtins()
    }

    #[test]
    fn test_approves_valid_email() {
        let result = builtins()
            .value("user@example.com", &RuleSet::new().rule("email", true))
            .unwrap();
        assert!(result.approved);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_rejects_invalid_email_with_titled_message() {
        let result = builtins()
            .value(
                "not-an-email",
                &RuleSet::new().title("Email").rule("email", true),
            )
            .unwrap();
        assert!(!result.approved);
        assert_eq!(result.errors, vec!["Email must be a valid email address"]);
    }

    #[test]
    fn test_missing_title_formats_cleanly() {
        let result = builtins()
            .value("", &RuleSet::new().rule("required", true))
            .unwrap();
        assert!(!result.approved);
        assert_eq!(result.errors, vec!["is required"]);
    }

    #[test]
    fn test_required_accepts_any_non_empty_value() {
        let result = builtins()
            .value("0", &RuleSet::new().rule("required", true))
            .unwrap();
        assert!(result.approved);
    }

    #[test]
    fn test_rule_key_presence_dispatches_even_for_false() {
        // The presence of the key selects the rule; the flag's value is not
        // consulted by parameterless tests.
        let result = builtins()
            .value("", &RuleSet::new().rule("required", false))
            .unwrap();
        assert!(!result.approved);
    }

    #[test]
    fn test_bare_shorthand_resolves_single_parameter() {
        let result = builtins()
            .value("abc123", &RuleSet::new().rule("min", 5))
            .unwrap();
        assert!(result.approved);
    }

    #[test]
    fn test_min_failure_message_substitutes_parameters() {
        let result = builtins()
            .value("hi", &RuleSet::new().title("Username").rule("min", 5))
            .unwrap();
        assert!(!result.approved);
        assert_eq!(
            result.errors,
            vec!["Username must be a minimum of 5 characters"]
        );
    }

    #[test]
    fn test_object_form_for_single_parameter() {
        let result = builtins()
            .value(
                "abc123",
                &RuleSet::new().rule("min", Constraint::new().param("min", 5)),
            )
            .unwrap();
        assert!(result.approved);
    }

    #[test]
    fn test_bare_non_token_is_rejected() {
        let result = builtins().value("abc", &RuleSet::new().rule("min", "a b"));
        assert_eq!(
            result,
            Err(ApproveError::MissingParameter {
                rule: "min".to_string(),
                parameter: "min".to_string()
            })
        );
    }

    #[test]
    fn test_range_requires_object_form() {
        let result = builtins().value("abc", &RuleSet::new().rule("range", 5));
        assert_eq!(
            result,
            Err(ApproveError::MissingParameter {
                rule: "range".to_string(),
                parameter: "max".to_string()
            })
        );
    }

    #[test]
    fn test_range_object_form() {
        let rules = RuleSet::new().rule("range", Constraint::new().param("min", 2).param("max", 4));
        assert!(builtins().value("abc", &rules).unwrap().approved);
        assert!(!builtins().value("abcde", &rules).unwrap().approved);
    }

    #[test]
    fn test_equal_compares_against_parameter() {
        let rules = RuleSet::new().title("Confirmation").rule(
            "equal",
            Constraint::new()
                .param("value", "secret")
                .param("field", "Password"),
        );
        assert!(builtins().value("secret", &rules).unwrap().approved);

        let result = builtins().value("other", &rules).unwrap();
        assert!(!result.approved);
        assert_eq!(result.errors, vec!["Confirmation must be equal to Password"]);
    }

    #[test]
    fn test_format_rule_with_pattern() {
        let rules = RuleSet::new().rule(
            "format",
            Constraint::new().param("regex", Regex::new(r"^[0-9]+$").unwrap()),
        );
        assert!(builtins().value("123", &rules).unwrap().approved);

        let result = builtins().value("12a", &rules).unwrap();
        assert!(!result.approved);
        assert_eq!(result.errors, vec!["did not pass the [^[0-9]+$] test"]);
    }

    #[test]
    fn test_format_rule_rejects_non_pattern() {
        let rules = RuleSet::new().rule("format", Constraint::new().param("regex", 5));
        assert!(matches!(
            builtins().value("123", &rules),
            Err(ApproveError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_unknown_rule() {
        let result = builtins().value("x", &RuleSet::new().rule("bogus", true));
        assert_eq!(result, Err(ApproveError::TestNotDefined("bogus".to_string())));
    }

    #[test]
    fn test_empty_rule_set() {
        let result = builtins().value("x", &RuleSet::new().title("Field"));
        assert!(matches!(
            result,
            Err(ApproveError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_only_first_rule_is_evaluated() {
        // "abcd" satisfies min but not max; max is never consulted.
        let rules = RuleSet::new().rule("min", 2).rule("max", 3);
        assert!(builtins().value("abcd", &rules).unwrap().approved);
    }

    #[test]
    fn test_rule_set_message_override_is_verbatim() {
        let result = builtins()
            .value(
                "",
                &RuleSet::new().rule("required", true).message("Name needed"),
            )
            .unwrap();
        assert!(!result.approved);
        assert_eq!(result.errors, vec!["Name needed"]);
    }

    #[test]
    fn test_constraint_message_override_is_verbatim() {
        let result = builtins()
            .value(
                "hi",
                &RuleSet::new().rule(
                    "min",
                    Constraint::new()
                        .param("min", 5)
                        .message("Too short: {min} needed"),
                ),
            )
            .unwrap();
        // No placeholder substitution on overrides.
        assert_eq!(result.errors, vec!["Too short: {min} needed"]);
    }

    #[test]
    fn test_each_visits_errors_in_reverse() {
        let approval = Approval {
            approved: false,
            errors: vec!["first".to_string(), "second".to_string(), "third".to_string()],
            message: None,
            score: None,
        };
        let mut seen = Vec::new();
        approval.each(|error| seen.push(error.to_string()));
        assert_eq!(seen, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_strength_failure_reports_each_failed_check() {
        let rules = RuleSet::new().title("Password").rule(
            "strength",
            Constraint::new().param("min", 8).param("bonus", 10),
        );
        let result = builtins().value("abcdefgh", &rules).unwrap();
        assert!(!result.approved);
        assert_eq!(
            result.errors,
            vec![
                "Password must have at least 1 upper case character",
                "Password must have at least 1 number",
                "Password must have at least 1 special character",
                "Password did not pass the strength test."
            ]
        );
        assert_eq!(result.message.as_deref(), Some("Better"));
        let score = result.score.unwrap();
        assert!(score.is_minimum);
        assert!(score.has_lower);
        assert!(!score.has_upper);
        assert_eq!(score.strength, 34);
    }

    #[test]
    fn test_strength_pass_merges_band_and_score() {
        let rules = RuleSet::new().rule(
            "strength",
            Constraint::new().param("min", 8).param("bonus", 10),
        );
        let result = builtins().value("Abcdef1!xyz", &rules).unwrap();
        assert!(result.approved);
        assert!(result.errors.is_empty());
        assert_eq!(result.message.as_deref(), Some("Very Strong"));
        assert_eq!(result.score.unwrap().strength, 100);
    }

    #[test]
    fn test_strength_config_messages_are_formatted() {
        let rules = RuleSet::new().title("Password").rule(
            "strength",
            Constraint::new()
                .param("min", 8)
                .param("bonus", 10)
                .config(Config::new().message("hasUpper", "{title} wants {min}+ chars with an upper case letter")),
        );
        let result = builtins().value("abcdefgh", &rules).unwrap();
        assert_eq!(
            result.errors[0],
            "Password wants 8+ chars with an upper case letter"
        );
    }

    #[test]
    fn test_identical_calls_yield_identical_results() {
        let rules = RuleSet::new().title("Password").rule(
            "strength",
            Constraint::new().param("min", 8).param("bonus", 10),
        );
        let catalog = builtins();
        let first = catalog.value("abcdefgh", &rules).unwrap();
        let second = catalog.value("abcdefgh", &rules).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_unresolved_tokens_in_errors() {
        let failing: [(&str, RuleSet); 4] = [
            ("", RuleSet::new().rule("required", true)),
            ("nope", RuleSet::new().rule("email", true)),
            ("hi", RuleSet::new().title("Username").rule("min", 5)),
            (
                "abcdefgh",
                RuleSet::new().rule(
                    "strength",
                    Constraint::new().param("min", 8).param("bonus", 10),
                ),
            ),
        ];
        let catalog = builtins();
        for (value, rules) in &failing {
            let result = catalog.value(value, rules).unwrap();
            assert!(!result.approved);
            assert!(!result.errors.is_empty());
            for error in &result.errors {
                assert!(
                    !error.contains('{') && !error.contains('}'),
                    "unresolved token in '{}'",
                    error
                );
            }
        }
    }

    struct Shouting;

    impl Test for Shouting {
        fn validate(&self, value: &str, _args: &Args) -> Result<Outcome, ApproveError> {
            Ok(value.chars().all(|c| !c.is_ascii_lowercase()).into())
        }

        fn message(&self) -> &str {
            "{title} must be upper case"
        }
    }

    #[test]
    fn test_global_catalog_runs_custom_test() {
        add_test(Shouting, "shouting");
        assert!(value("HELLO", &RuleSet::new().rule("shouting", true)).unwrap().approved);

        let result = value("Hello", &RuleSet::new().title("Greeting").rule("shouting", true)).unwrap();
        assert!(!result.approved);
        assert_eq!(result.errors, vec!["Greeting must be upper case"]);
    }

    #[test]
    fn test_add_test_first_registration_wins() {
        add_test(
            Pattern::new(Regex::new(r"^x+$").unwrap(), "{title} must be xs"),
            "onlyXs",
        );
        add_test(
            Pattern::new(Regex::new(r"^y+$").unwrap(), "{title} must be ys"),
            "onlyXs",
        );
        assert!(value("xxx", &RuleSet::new().rule("onlyXs", true)).unwrap().approved);
        assert!(!value("yyy", &RuleSet::new().rule("onlyXs", true)).unwrap().approved);
    }

    #[test]
    fn test_custom_test_with_structured_outcome() {
        struct Vowels;

        impl Test for Vowels {
            fn validate(&self, value: &str, _args: &Args) -> Result<Outcome, ApproveError> {
                let count = value.chars().filter(|c| "aeiou".contains(*c)).count();
                let mut errors = Vec::new();
                if count < 2 {
                    errors.push("{title} needs more vowels".to_string());
                }
                Ok(Outcome::Report(Report {
                    valid: count >= 2,
                    message: format!("{} vowels", count),
                    errors,
                    score: None,
                }))
            }

            fn message(&self) -> &str {
                "{title} did not pass the vowel test"
            }
        }

        let mut catalog = TestCatalog::default();
        catalog.register(Box::new(Vowels), "vowels");

        let rules = RuleSet::new().title("Word").rule("vowels", true);
        let passing = catalog.value("aerie", &rules).unwrap();
        assert!(passing.approved);
        assert_eq!(passing.message.as_deref(), Some("4 vowels"));

        let failing = catalog.value("rhythm", &rules).unwrap();
        assert!(!failing.approved);
        assert_eq!(
            failing.errors,
            vec!["Word needs more vowels", "Word did not pass the vowel test"]
        );
    }

    #[test]
    fn test_version_is_exposed() {
        assert!(!VERSION.is_empty());
    }
}
