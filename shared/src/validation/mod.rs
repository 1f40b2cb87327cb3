use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// local-part "@" two or more non-empty dot-separated domain labels
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("valid email pattern")
});

/// A single field-level validation failure
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

/// Ordered set of violations produced by a failed validation pass
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// Combined message, in the order the checks ran
    pub fn message(&self) -> String {
        self.0
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Values that can be checked for presence by [`Validator::required`]
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

macro_rules! impl_presence_for_ints {
    ($($t:ty),*) => {
        $(
            impl Presence for $t {
                fn is_present(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_presence_for_ints!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

/// Field validation accumulator.
///
/// Each check consumes the validator and hands it back, so a whole pass reads
/// as a single chain. Checks never short-circuit; every failure is recorded in
/// the order the checks were invoked.
///
/// ```
/// use userapi_shared::validation::Validator;
///
/// let v = Validator::new()
///     .required("name", "")
///     .range("age", 200, 1, 150);
/// assert!(!v.is_valid());
/// assert_eq!(v.error_messages(), "name is required; age must be between 1 and 150");
/// ```
#[derive(Debug, Default, Clone)]
#[must_use]
pub struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(mut self, field: &str, message: String) -> Self {
        self.violations.push(Violation {
            field: field.to_string(),
            message,
        });
        self
    }

    /// Fails when the value is empty or zero for its type
    pub fn required<V: Presence + ?Sized>(self, field: &str, value: &V) -> Self {
        if value.is_present() {
            self
        } else {
            self.fail(field, format!("{field} is required"))
        }
    }

    /// Empty strings are left to `required`
    pub fn min_length(self, field: &str, value: &str, min: usize) -> Self {
        if value.is_empty() || value.chars().count() >= min {
            self
        } else {
            self.fail(field, format!("{field} must be at least {min} characters"))
        }
    }

    pub fn max_length(self, field: &str, value: &str, max: usize) -> Self {
        if value.is_empty() || value.chars().count() <= max {
            self
        } else {
            self.fail(field, format!("{field} must be at most {max} characters"))
        }
    }

    /// Inclusive on both ends
    pub fn range<N>(self, field: &str, value: N, min: N, max: N) -> Self
    where
        N: PartialOrd + fmt::Display,
    {
        if value >= min && value <= max {
            self
        } else {
            self.fail(field, format!("{field} must be between {min} and {max}"))
        }
    }

    /// Exact, case-sensitive membership
    pub fn one_of(self, field: &str, value: &str, allowed: &[&str]) -> Self {
        if allowed.contains(&value) {
            self
        } else {
            self.fail(
                field,
                format!("{field} must be one of: {}", allowed.join(", ")),
            )
        }
    }

    pub fn email(self, field: &str, value: &str) -> Self {
        if value.is_empty() || EMAIL_RE.is_match(value) {
            self
        } else {
            self.fail(field, format!("{field} must be a valid email address"))
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn error_messages(&self) -> String {
        self.violations
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.violations))
        }
    }
}
