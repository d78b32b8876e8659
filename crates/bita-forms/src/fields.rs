//! Field specs and validation rules.
//!
//! Each [`FieldSpec`] declares one input: its name, whether it is required,
//! an optional [`FieldRule`], and the messages shown when it fails. A form
//! is nothing more than an ordered table of these, looked up by name.

use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use bita_core::BitaError;

/// Default message for a missing required value.
pub const DEFAULT_REQUIRED_MESSAGE: &str = "This field is required.";

/// Default message for a value that fails its rule.
pub const DEFAULT_INVALID_MESSAGE: &str = "Enter a valid value.";

/// Date format used by date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid email regex")
});

/// A check applied to a non-empty field value.
#[derive(Debug, Clone)]
pub enum FieldRule {
    /// The value must match the regular expression.
    Regex(Regex),
    /// The value must look like an email address.
    Email,
    /// The value must be one of the listed options (select inputs).
    OneOf(Vec<String>),
    /// The value must be a `YYYY-MM-DD` date inside the inclusive window.
    DateBetween {
        /// Earliest accepted date.
        min: NaiveDate,
        /// Latest accepted date.
        max: NaiveDate,
    },
    /// The value must be a `YYYY-MM-DD` date from `first` to `last` days
    /// after the current date, inclusive.
    ///
    /// The current date is read from `today` on every check, so the window
    /// moves with the calendar while a form stays open.
    DateWithinDays {
        /// Offset of the earliest accepted date.
        first: u64,
        /// Offset of the latest accepted date.
        last: u64,
        /// Source of the current date.
        today: fn() -> NaiveDate,
    },
    /// Arbitrary predicate.
    Custom(fn(&str) -> bool),
}

impl FieldRule {
    /// Compiles a regex rule.
    ///
    /// # Errors
    ///
    /// Returns [`BitaError::ConfigurationError`] if the pattern does not compile.
    pub fn regex(pattern: &str) -> Result<Self, BitaError> {
        Regex::new(pattern)
            .map(Self::Regex)
            .map_err(|e| BitaError::ConfigurationError(format!("Invalid field pattern: {e}")))
    }

    /// Builds a choice rule from anything string-like.
    pub fn one_of<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::OneOf(options.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if `value` satisfies this rule.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Regex(re) => re.is_match(value),
            Self::Email => EMAIL_RE.is_match(value),
            Self::OneOf(options) => options.iter().any(|o| o == value),
            Self::DateBetween { min, max } => NaiveDate::parse_from_str(value, DATE_FORMAT)
                .is_ok_and(|date| *min <= date && date <= *max),
            Self::DateWithinDays { first, last, today } => {
                let (min, max) = day_window(today(), *first, *last);
                NaiveDate::parse_from_str(value, DATE_FORMAT)
                    .is_ok_and(|date| min <= date && date <= max)
            }
            Self::Custom(check) => check(value),
        }
    }
}

/// Returns the inclusive window from `first` to `last` days after `today`.
///
/// Offsets past the end of the calendar saturate at [`NaiveDate::MAX`].
pub fn day_window(today: NaiveDate, first: u64, last: u64) -> (NaiveDate, NaiveDate) {
    let offset = |days| today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
    (offset(first), offset(last))
}

/// Declarative description of one form input.
///
/// # Examples
///
/// ```
/// use bita_forms::fields::{FieldRule, FieldSpec};
///
/// let phone = FieldSpec::new("phone")
///     .rule(FieldRule::regex(r"^0\d{8,9}$").unwrap())
///     .required_message("שדה חובה")
///     .error_message("אנא הכנס מספר טלפון תקין");
///
/// assert!(phone.required);
/// assert_eq!(phone.name, "phone");
/// ```
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Unique key within the form.
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// Whether an empty value is an error.
    pub required: bool,
    /// Check applied to non-empty values.
    pub rule: Option<FieldRule>,
    /// Message shown when the value fails `rule`.
    pub error_message: String,
    /// Message shown when a required value is missing.
    pub required_message: String,
}

impl FieldSpec {
    /// Creates a required field with no rule and default messages.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let label = name.clone();
        Self {
            name,
            label,
            required: true,
            rule: None,
            error_message: DEFAULT_INVALID_MESSAGE.to_string(),
            required_message: DEFAULT_REQUIRED_MESSAGE.to_string(),
        }
    }

    /// Sets whether this field is required.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the validation rule.
    #[must_use]
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Sets the message for a value that fails the rule.
    #[must_use]
    pub fn error_message(mut self, msg: impl Into<String>) -> Self {
        self.error_message = msg.into();
        self
    }

    /// Sets the message for a missing required value.
    #[must_use]
    pub fn required_message(mut self, msg: impl Into<String>) -> Self {
        self.required_message = msg.into();
        self
    }
}
