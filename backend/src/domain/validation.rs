//! Declarative request-body validation.
//!
//! A [`RuleSet`] is a static table of `(field, FieldRule)` pairs consumed by
//! one generic routine. Each field is checked in a fixed order and stops at
//! its first violation:
//!
//! 1. presence (only when the rule is `required`);
//! 2. JSON kind (`text` or `number`);
//! 3. numeric bounds (`min`, then `max`);
//! 4. text length bounds (`min_length`, then `max_length`).
//!
//! Violations from every field are joined by `", "` in declaration order and
//! raised as a single [`ErrorCode::InvalidRequest`](super::ErrorCode) error.
//! Body keys that no rule mentions pass through untouched.
//!
//! # Examples
//! ```
//! use employees_backend::domain::CREATE_EMPLOYEE_RULES;
//! use serde_json::json;
//!
//! let err = CREATE_EMPLOYEE_RULES
//!     .validate(&json!({ "name": "A", "age": 19, "position": "Clerk", "salary": 30000 }))
//!     .expect_err("name is too short");
//! assert_eq!(err.message(), "name must be at least 2 characters");
//! ```

use serde_json::Value;

use super::Error;

/// JSON kind a field value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    /// A JSON string.
    Text,
    /// A JSON number.
    Number,
}

/// Rule descriptor for a single body field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    kind: FieldKind,
    required: bool,
    min: Option<i32>,
    max: Option<i32>,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl FieldRule {
    const fn of_kind(kind: FieldKind) -> Self {
        Self {
            kind,
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Optional text field with no bounds.
    #[must_use]
    pub const fn text() -> Self {
        Self::of_kind(FieldKind::Text)
    }

    /// Optional numeric field with no bounds.
    #[must_use]
    pub const fn number() -> Self {
        Self::of_kind(FieldKind::Number)
    }

    /// Mark the field as mandatory.
    #[must_use]
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    /// Inclusive lower bound for numeric values.
    #[must_use]
    pub const fn min(self, min: i32) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    /// Inclusive upper bound for numeric values.
    #[must_use]
    pub const fn max(self, max: i32) -> Self {
        Self {
            max: Some(max),
            ..self
        }
    }

    /// Minimum text length in characters.
    #[must_use]
    pub const fn min_length(self, min_length: usize) -> Self {
        Self {
            min_length: Some(min_length),
            ..self
        }
    }

    /// Maximum text length in characters.
    #[must_use]
    pub const fn max_length(self, max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..self
        }
    }

    fn check(&self, field: &str, value: Option<&Value>) -> Option<String> {
        let Some(value) = value.filter(|value| !is_absent(value)) else {
            return self.required.then(|| format!("{field} is required"));
        };

        match self.kind {
            FieldKind::Text => match value.as_str() {
                Some(text) => self.check_length(field, text.chars().count()),
                None => Some(format!("{field} must be a string")),
            },
            FieldKind::Number => match value.as_f64() {
                Some(number) => self.check_bounds(field, number),
                None => Some(format!("{field} must be a number")),
            },
        }
    }

    fn check_bounds(&self, field: &str, number: f64) -> Option<String> {
        if let Some(min) = self.min
            && number < f64::from(min)
        {
            return Some(format!("{field} must be at least {min}"));
        }
        if let Some(max) = self.max
            && number > f64::from(max)
        {
            return Some(format!("{field} cannot exceed {max}"));
        }
        None
    }

    fn check_length(&self, field: &str, length: usize) -> Option<String> {
        if let Some(min_length) = self.min_length
            && length < min_length
        {
            return Some(format!("{field} must be at least {min_length} characters"));
        }
        if let Some(max_length) = self.max_length
            && length > max_length
        {
            return Some(format!("{field} cannot exceed {max_length} characters"));
        }
        None
    }
}

/// Missing keys, `null`, `false` and the empty string count as absent.
/// Numeric zero is a present value.
pub(crate) fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// Ordered, immutable table of field rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    fields: &'static [(&'static str, FieldRule)],
}

impl RuleSet {
    /// Wrap a static rule table.
    #[must_use]
    pub const fn new(fields: &'static [(&'static str, FieldRule)]) -> Self {
        Self { fields }
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// Collect every violation in declaration order.
    ///
    /// Returns `None` when `body` is not a JSON object.
    #[must_use]
    pub fn violations(&self, body: &Value) -> Option<Vec<String>> {
        let object = body.as_object()?;
        Some(
            self.fields
                .iter()
                .filter_map(|(name, rule)| rule.check(name, object.get(*name)))
                .collect(),
        )
    }

    /// Validate `body`, failing with one aggregated invalid-request error.
    ///
    /// # Errors
    /// Returns [`Error`] with code `InvalidRequest` when the body is not a
    /// JSON object or any rule is violated.
    pub fn validate(&self, body: &Value) -> Result<(), Error> {
        let violations = self
            .violations(body)
            .ok_or_else(|| Error::invalid_request("request body must be a JSON object"))?;
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::invalid_request(violations.join(", ")))
        }
    }
}

/// Rules applied to `POST /api/employees` bodies.
pub const CREATE_EMPLOYEE_RULES: RuleSet = RuleSet::new(&[
    (
        "name",
        FieldRule::text().required().min_length(2).max_length(100),
    ),
    ("age", FieldRule::number().required().min(18)),
    ("position", FieldRule::text().required().max_length(50)),
    ("salary", FieldRule::number().required().min(0)),
    ("hireDate", FieldRule::text()),
    ("userId", FieldRule::text()),
]);

/// Rules applied to `PUT /api/employees/{id}` bodies.
///
/// Every field is optional, but a supplied field must still meet the same
/// bounds as on creation.
pub const UPDATE_EMPLOYEE_RULES: RuleSet = RuleSet::new(&[
    ("name", FieldRule::text().min_length(2).max_length(100)),
    ("age", FieldRule::number().min(18)),
    ("position", FieldRule::text().max_length(50)),
    ("salary", FieldRule::number().min(0)),
    ("hireDate", FieldRule::text()),
    ("userId", FieldRule::text()),
]);
