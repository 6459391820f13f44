//! Field validation.
//!
//! `validate` checks one labeled value against a set of optional
//! constraints. Constraints that do not apply to the value's kind (length
//! bounds on a number, numeric bounds on text) are skipped.

use std::fmt;

/// A raw form value: either text or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// A value together with the constraints it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: Value,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// Create an unconstrained validatable.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns true iff every present constraint holds.
pub fn validate(input: &Validatable) -> bool {
    let value = &input.value;
    let mut is_valid = true;

    if input.required {
        is_valid &= !value.to_string().trim().is_empty();
    }

    if let Value::Text(text) = value {
        let len = text.chars().count();
        if let Some(min_length) = input.min_length {
            is_valid &= len >= min_length;
        }
        if let Some(max_length) = input.max_length {
            is_valid &= len <= max_length;
        }
    }

    if let Value::Number(n) = value {
        // NaN compares false, so it fails any present bound
        if let Some(min) = input.min {
            is_valid &= *n >= min;
        }
        if let Some(max) = input.max {
            is_valid &= *n <= max;
        }
    }

    is_valid
}

/// Coerce raw field text to a number.
///
/// Blank text becomes `0.0`; anything that does not parse becomes `NaN`.
/// Unsigned `0x`, `0o` and `0b` literals are read in their radix.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match radix_literal(trimmed) {
        Some((digits, radix)) => u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64),
        None => trimmed.parse::<f64>().unwrap_or(f64::NAN),
    }
}

fn radix_literal(text: &str) -> Option<(&str, u32)> {
    let prefix = text.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    // from_str_radix would accept a leading sign
    if digits.starts_with('+') {
        return None;
    }
    Some((digits, radix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained_is_valid() {
        assert!(validate(&Validatable::new("")));
        assert!(validate(&Validatable::new(f64::NAN)));
    }

    #[test]
    fn test_required_text() {
        assert!(validate(&Validatable::new("hello").required()));
        assert!(!validate(&Validatable::new("").required()));
        assert!(!validate(&Validatable::new("   \t").required()));
    }

    #[test]
    fn test_required_number_always_has_string_form() {
        assert!(validate(&Validatable::new(0.0).required()));
        assert!(validate(&Validatable::new(f64::NAN).required()));
    }

    #[test]
    fn test_length_bounds() {
        assert!(validate(&Validatable::new("Build App").min_length(5)));
        assert!(validate(&Validatable::new("hello").min_length(5)));
        assert!(!validate(&Validatable::new("Hi").min_length(5)));
        assert!(validate(&Validatable::new("short").max_length(5)));
        assert!(!validate(&Validatable::new("too long").max_length(5)));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert!(validate(&Validatable::new("héllo").max_length(5)));
    }

    #[test]
    fn test_length_bounds_skip_numbers() {
        assert!(validate(&Validatable::new(3.0).min_length(5).max_length(0)));
    }

    #[test]
    fn test_numeric_bounds() {
        assert!(validate(&Validatable::new(3.0).min(1.0).max(5.0)));
        assert!(!validate(&Validatable::new(0.0).min(1.0)));
        assert!(!validate(&Validatable::new(6.0).max(5.0)));
        assert!(!validate(&Validatable::new(f64::NAN).min(0.0)));
        assert!(!validate(&Validatable::new(f64::NAN).max(10.0)));
    }

    #[test]
    fn test_numeric_bounds_skip_text() {
        assert!(validate(&Validatable::new("abc").min(10.0).max(0.0)));
    }

    #[test]
    fn test_adding_constraints_never_turns_false_into_true() {
        let values: Vec<Value> = vec![
            "".into(),
            "Hi".into(),
            "Build App".into(),
            0.0.into(),
            3.0.into(),
            f64::NAN.into(),
        ];
        type Step = fn(Validatable) -> Validatable;
        let steps: [Step; 5] = [
            |v| v.required(),
            |v| v.min_length(5),
            |v| v.max_length(8),
            |v| v.min(1.0),
            |v| v.max(2.0),
        ];

        for value in values {
            let mut current = Validatable::new(value.clone());
            let mut previous = validate(&current);
            for step in steps {
                current = step(current);
                let now = validate(&current);
                assert!(previous || !now, "constraint turned false into true for {:?}", value);
                previous = now;
            }
        }
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("3"), 3.0);
        assert_eq!(coerce_number(" 42 "), 42.0);
        assert_eq!(coerce_number("2.5"), 2.5);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert!(coerce_number("three").is_nan());
    }

    #[test]
    fn test_coerce_number_radix_literals() {
        assert_eq!(coerce_number("0x10"), 16.0);
        assert_eq!(coerce_number("0XfF"), 255.0);
        assert_eq!(coerce_number("0o17"), 15.0);
        assert_eq!(coerce_number(" 0b101 "), 5.0);
        assert!(coerce_number("0xZZ").is_nan());
        assert!(coerce_number("0x").is_nan());
        // Signs are not part of a radix literal
        assert!(coerce_number("-0x10").is_nan());
        assert!(coerce_number("0x+10").is_nan());
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Text("x".to_string()).to_string(), "x");
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
    }
}
