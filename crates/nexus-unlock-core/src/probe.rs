// crates/nexus-unlock-core/src/probe.rs
// ============================================================================
// Module: Nexus Unlock Field Probes
// Description: Default-on-missing extraction of JSON response fields.
// Purpose: Turn absent or mistyped fields into failing thresholds, not errors.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Category routines read named fields out of endpoint response bodies. A
//! missing or mistyped field yields the falsy/zero default for its type so
//! the surrounding threshold check fails cleanly instead of erroring.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

// ============================================================================
// SECTION: Field Probes
// ============================================================================

/// Reads a boolean field, defaulting to `false`.
#[must_use]
pub fn bool_field(data: Option<&Value>, key: &str) -> bool {
    data.and_then(|value| value.get(key)).and_then(Value::as_bool).unwrap_or(false)
}

/// Reads a numeric field as `f64`, defaulting to `0.0`.
#[must_use]
pub fn f64_field(data: Option<&Value>, key: &str) -> f64 {
    data.and_then(|value| value.get(key)).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Reads a non-negative integer field, defaulting to `0`.
#[must_use]
pub fn u64_field(data: Option<&Value>, key: &str) -> u64 {
    data.and_then(|value| value.get(key)).and_then(Value::as_u64).unwrap_or(0)
}

/// Reads a string field, defaulting to the empty string.
#[must_use]
pub fn str_field(data: Option<&Value>, key: &str) -> String {
    data.and_then(|value| value.get(key))
        .and_then(Value::as_str)
        .map_or_else(String::new, ToOwned::to_owned)
}

/// Reads a string field, substituting `default` only when the key is absent.
///
/// A present-but-empty string is returned verbatim; only a missing field
/// falls back to the default. A present non-string value reads as empty.
#[must_use]
pub fn str_field_or(data: Option<&Value>, key: &str, default: &str) -> String {
    data.and_then(|value| value.get(key)).map_or_else(
        || default.to_string(),
        |value| value.as_str().map_or_else(String::new, ToOwned::to_owned),
    )
}

/// Reads the length of an array field, defaulting to `0`.
#[must_use]
pub fn array_len(data: Option<&Value>, key: &str) -> usize {
    data.and_then(|value| value.get(key)).and_then(Value::as_array).map_or(0, Vec::len)
}

/// Returns whether a JSON value carries content: non-null, non-empty
/// object/array/string, non-zero number, or `true`.
#[must_use]
pub fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|numeric| numeric != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
