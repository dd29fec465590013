//! Lenient normalizers for heterogeneous frame-data values.
//!
//! Source fields arrive as integers, floats, annotated strings (`"6 (Late)"`),
//! ranges (`"3-5"`), placeholders (`"-"`) or nothing at all. Everything here
//! degrades to `None` instead of failing, so one bad cell never aborts a run.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::constants::NOT_APPLICABLE;

/// Integer at the very start of the text, sign included (`"-4"`, `"+2 on hit"`).
///
/// Departs from a plain first-digit-run rule so negative shield advantage
/// keeps its sign; text not starting with a number falls back to [`FIRST_DIGITS`].
static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").unwrap());

/// First run of ASCII digits anywhere in the text.
static FIRST_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

static LEADING_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?[0-9]+(?:\.[0-9]+)?)").unwrap());

static FIRST_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap());

/// Normalize a frame-count value into an integer.
///
/// - integers pass through unchanged, fractional numbers are truncated (`2.5` → 2)
/// - non-finite or out-of-range numbers (`1e20`) are unknown
/// - `null`, `""` and `"-"` are unknown
/// - text yields its leading number (`"3-5"` → 3, `"6 (Late)"` → 6, `"12f"` → 12)
/// - text without digits, booleans, arrays and objects are unknown
#[must_use]
pub fn normalize_frame(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate_f64)),
        Value::String(s) => frame_from_text(s),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// [`normalize_frame`] over a field that may be absent from the record.
#[must_use]
pub fn normalize_frame_field(field: Option<&Value>) -> Option<i64> {
    field.and_then(normalize_frame)
}

/// Normalize frame notation given as text.
#[must_use]
pub fn frame_from_text(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if is_placeholder(trimmed) {
        return None;
    }
    let digits = LEADING_INTEGER
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .or_else(|| FIRST_DIGITS.find(trimmed))?;
    match digits.as_str().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::debug!(value = trimmed, error = %e, "frame value out of range, treating as unknown");
            None
        },
    }
}

/// Normalize a REAL-valued stat (weight, speeds, damage).
///
/// Same leniency as [`normalize_frame`], but keeps the fractional part:
/// `"1.5%"` → 1.5, `12` → 12.0.
#[must_use]
pub fn normalize_decimal(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => decimal_from_text(s),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

#[must_use]
pub fn normalize_decimal_field(field: Option<&Value>) -> Option<f64> {
    field.and_then(normalize_decimal)
}

#[must_use]
pub fn decimal_from_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if is_placeholder(trimmed) {
        return None;
    }
    let number = LEADING_DECIMAL
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .or_else(|| FIRST_DECIMAL.find(trimmed))?;
    number.as_str().parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Normalize a free-text field; blank strings are unknown, numbers keep their JSON form.
#[must_use]
pub fn normalize_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        },
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

#[must_use]
pub fn normalize_text_field(field: Option<&Value>) -> Option<String> {
    field.and_then(normalize_text)
}

fn is_placeholder(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed == NOT_APPLICABLE
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::as_conversions,
    reason = "range is checked before the cast"
)]
fn truncate_f64(f: f64) -> Option<i64> {
    let t = f.trunc();
    let in_range = t >= i64::MIN as f64 && t < i64::MAX as f64;
    if f.is_finite() && in_range {
        Some(t as i64)
    } else {
        tracing::debug!(value = f, "frame value out of range, treating as unknown");
        None
    }
}
