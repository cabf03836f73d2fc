// ABOUTME: Lenient numeric deserializers for hand-edited or legacy documents
// ABOUTME: Coerce strings, nulls, and garbage to zero instead of failing the whole record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce any JSON value to a finite `f64`, defaulting to zero
pub(crate) fn coerce_f64(value: &Value) -> f64 {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        // Decimal comma is accepted ("62,5")
        Value::String(s) => s.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };
    if number.is_finite() {
        number
    } else {
        0.0
    }
}

/// Deserialize a non-negative weight; negatives and garbage become `0.0`
pub(crate) fn weight<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value).max(0.0))
}

/// Deserialize a non-negative integer count; fractions truncate
pub(crate) fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = coerce_f64(&value);
    if number <= 0.0 {
        return Ok(0);
    }
    Ok(number.min(f64::from(u32::MAX)).trunc() as u32)
}

/// Deserialize an optional reps-in-reserve value; empty strings become `None`
pub(crate) fn optional_rir<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(other) => {
            let number = coerce_f64(&other);
            Some(number.clamp(f64::from(i32::MIN), f64::from(i32::MAX)).trunc() as i32)
        }
    })
}
