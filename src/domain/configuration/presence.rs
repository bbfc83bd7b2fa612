//! Presence-aware decoding helpers.
//!
//! A plain `String` field cannot tell "key missing" apart from "key present
//! with an empty value". `Presence<T>` records whether the decoder ever saw
//! the key, so the typed model can derive its "was set" flags from it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Whether a document key was supplied, and with which value.
///
/// Pair with `#[serde(default)]`: a missing key resolves to [`Presence::Absent`]
/// without invoking the value decoder, while any present key (even one whose
/// value is null) becomes [`Presence::Present`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence<T> {
    Absent,
    Present(T),
}

impl<T> Presence<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Presence::Absent)
    }

    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Presence::Absent => None,
            Presence::Present(value) => Some(value),
        }
    }
}

impl<T> Default for Presence<T> {
    fn default() -> Self {
        Presence::Absent
    }
}

impl<T> From<Option<T>> for Presence<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Presence::Absent, Presence::Present)
    }
}

impl<'de, T> Deserialize<'de> for Presence<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Presence::Present)
    }
}

impl<T> Serialize for Presence<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Presence::Present(value) => value.serialize(serializer),
            Presence::Absent => serializer.serialize_none(),
        }
    }
}

/// Decode a value, treating an explicit null like a missing one.
///
/// `patterns:` with an empty body is null in YAML; it should resolve to the
/// zero value just like an absent `patterns` key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
