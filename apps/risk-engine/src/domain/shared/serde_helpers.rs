//! Serde helpers for loosely-populated inventory records.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an explicit `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so an absent field and a `null` field mean
/// the same thing. Any other shape still has to match `T`, so a string where
/// a sequence is expected keeps failing.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An enumerated rating read from free-form inventory data.
pub trait WireRating: Sized {
    /// Parse an exact wire name from the rating table.
    fn from_wire_name(name: &str) -> Option<Self>;

    /// Wrap a value outside the table, kept verbatim for the next save.
    fn unrecognized(raw: Value) -> Self;
}

/// Deserialize a rating, mapping anything outside the table to
/// [`WireRating::unrecognized`].
///
/// Numbers, booleans and other non-string values are not an error; they
/// score with the fallback weight like unknown text does.
pub fn rating_from_value<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: WireRating,
{
    let raw = Value::deserialize(deserializer)?;
    if let Some(known) = raw.as_str().and_then(T::from_wire_name) {
        return Ok(known);
    }
    Ok(T::unrecognized(raw))
}
