//! Serde helpers for loosely typed form input.
//!
//! Upload and gallery forms post numbers and booleans as strings (`"2024"`, `"true"`),
//! and blank text inputs as `""`. These deserializers accept either representation so
//! the request DTOs can stay strongly typed.

use serde::{de::Error, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

fn loose_to_i64<E: Error>(value: Loose) -> Result<Option<i64>, E> {
    match value {
        Loose::Int(n) => Ok(Some(n)),
        Loose::Float(f) if f.is_finite() => Ok(Some(f.trunc() as i64)),
        Loose::Float(f) => Err(E::custom(format!("invalid number: {}", f))),
        Loose::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i64>()
                .or_else(|_| s.parse::<f64>().map(|f| f.trunc() as i64))
                .map(Some)
                .map_err(|_| E::custom(format!("invalid number: '{}'", s)))
        }
        Loose::Bool(b) => Err(E::custom(format!("expected a number, found {}", b))),
    }
}

fn loose_to_bool<E: Error>(value: Loose) -> Result<Option<bool>, E> {
    match value {
        Loose::Bool(b) => Ok(Some(b)),
        Loose::Int(0) => Ok(Some(false)),
        Loose::Int(1) => Ok(Some(true)),
        Loose::Text(s) => match s.trim() {
            "" => Ok(None),
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            other => Err(E::custom(format!("invalid boolean: '{}'", other))),
        },
        _ => Err(E::custom("expected a boolean")),
    }
}

fn narrow<E: Error>(value: Option<i64>) -> Result<Option<i32>, E> {
    value
        .map(|n| i32::try_from(n).map_err(|_| E::custom(format!("number out of range: {}", n))))
        .transpose()
}

/// Number or numeric string, absent/null/blank as `None`.
pub fn opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Loose>::deserialize(deserializer)? {
        Some(value) => narrow(loose_to_i64(value)?),
        None => Ok(None),
    }
}

/// Number or numeric string, blank as `0`. Pair with `#[serde(default)]`.
pub fn i32_or_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_i32(deserializer)?.unwrap_or(0))
}

/// Number or numeric string, blank as `0`. Pair with `#[serde(default)]`.
pub fn i64_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Loose>::deserialize(deserializer)? {
        Some(value) => Ok(loose_to_i64(value)?.unwrap_or(0)),
        None => Ok(0),
    }
}

/// Boolean, `"true"`/`"false"`, or `0`/`1`, absent/null/blank as `None`.
pub fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Loose>::deserialize(deserializer)? {
        Some(value) => loose_to_bool(value),
        None => Ok(None),
    }
}

/// Like [`opt_bool`] with `false` for blank input. Pair with `#[serde(default)]`.
pub fn bool_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_bool(deserializer)?.unwrap_or(false))
}

/// Text where `""` means absent.
pub fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}

/// Partial-update number: missing stays `None`, present (even null) becomes `Some`.
/// Pair with `#[serde(default)]`.
pub fn patch_i32<'de, D>(deserializer: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    opt_i32(deserializer).map(Some)
}

/// Partial-update text: missing stays `None`, null or `""` clears the field.
/// Pair with `#[serde(default)]`.
pub fn patch_text<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    non_empty(deserializer).map(Some)
}
