use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::error::{ApiError, FieldErrors};

/// A JSON scalar as clients send it: `"2"` and `2` are both accepted for
/// numeric columns, and numbers are accepted for code columns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    fn as_text(&self) -> String {
        match self {
            Scalar::Text(s) => s.trim().to_string(),
            Scalar::Number(n) => n.to_string(),
        }
    }
}

/// `2.0` and `"2.00"` name the integer 2; `2.5` names none
fn whole_number(text: &str) -> Option<i32> {
    let d = Decimal::from_str(text).ok()?;
    if !d.fract().is_zero() {
        return None;
    }
    d.trunc().to_i32()
}

/// Largest magnitude a NUMERIC(8, 2) column holds
const DECIMAL_LIMIT: i64 = 1_000_000;

/// Collects per-field problems so a single 422 reports all of them
#[derive(Debug, Default)]
pub struct FieldCheck {
    errors: FieldErrors,
}

impl FieldCheck {
    pub fn new() -> Self {
        Self::default()
    }

    fn missing(&mut self, field: &str) {
        self.errors.insert(field.to_string(), "This field is required".to_string());
    }

    fn invalid(&mut self, field: &str, problem: impl Into<String>) {
        self.errors.insert(field.to_string(), problem.into());
    }

    /// Non-blank text; numbers are stringified
    pub fn text(&mut self, field: &str, value: Option<Scalar>) -> Option<String> {
        match value.map(|v| v.as_text()) {
            Some(text) if !text.is_empty() => Some(text),
            _ => {
                self.missing(field);
                None
            }
        }
    }

    pub fn email(&mut self, field: &str, value: Option<Scalar>) -> Option<String> {
        let email = self.text(field, value)?;
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Some(email),
            _ => {
                self.invalid(field, "Must be an email address");
                None
            }
        }
    }

    /// Whole number that fits an INTEGER column
    pub fn integer(&mut self, field: &str, value: Option<Scalar>) -> Option<i32> {
        let text = match value {
            Some(v) => v.as_text(),
            None => {
                self.missing(field);
                return None;
            }
        };
        if text.is_empty() {
            self.missing(field);
            return None;
        }

        match text.parse::<i32>().ok().or_else(|| whole_number(&text)) {
            Some(n) => Some(n),
            None => {
                self.invalid(field, format!("Expected a whole number, got '{}'", text));
                None
            }
        }
    }

    pub fn non_negative_integer(&mut self, field: &str, value: Option<Scalar>) -> Option<i32> {
        let n = self.integer(field, value)?;
        if n < 0 {
            self.invalid(field, "Must not be negative");
            return None;
        }
        Some(n)
    }

    /// Non-negative decimal rounded to two places, accepting forms like ".5"
    pub fn decimal(&mut self, field: &str, value: Option<Scalar>) -> Option<Decimal> {
        let text = match value {
            Some(v) => v.as_text(),
            None => {
                self.missing(field);
                return None;
            }
        };
        if text.is_empty() {
            self.missing(field);
            return None;
        }

        let normalized = if let Some(rest) = text.strip_prefix('.') {
            format!("0.{}", rest)
        } else {
            text.clone()
        };

        let parsed = Decimal::from_str(&normalized).or_else(|_| Decimal::from_scientific(&normalized));
        match parsed {
            Ok(d) if d.is_sign_negative() && !d.is_zero() => {
                self.invalid(field, "Must not be negative");
                None
            }
            Ok(d) if d.round_dp(2) >= Decimal::from(DECIMAL_LIMIT) => {
                self.invalid(field, format!("Must be less than {}", DECIMAL_LIMIT));
                None
            }
            Ok(d) => Some(d.round_dp(2)),
            Err(_) => {
                self.invalid(field, format!("Expected a number, got '{}'", text));
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_error(self) -> ApiError {
        let all_missing = self.errors.values().all(|problem| problem == "This field is required");
        let message = if all_missing { "Missing required fields" } else { "Invalid field values" };
        ApiError::unprocessable_entity(message, self.errors)
    }
}
