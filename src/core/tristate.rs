//! Purpose: Three-state optional field: absent key, explicit `null`, or a value.
//! Exports: `TriState`.
//! Role: Field wrapper for records that must tell "missing" apart from "null".
//! Invariants: `Absent` is the default and is only produced by a missing key.
//! Invariants: Serializing `Absent` writes `null`; records skip it via `is_absent`.
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TriState<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> TriState<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, TriState::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, TriState::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            TriState::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            TriState::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Collapses absent and null to `T::default()`, the way plain fields decode.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.into_option().unwrap_or_default()
    }
}

impl<T> From<T> for TriState<T> {
    fn from(value: T) -> Self {
        TriState::Value(value)
    }
}

impl<T> From<Option<T>> for TriState<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => TriState::Value(value),
            None => TriState::Null,
        }
    }
}

impl<T: fmt::Display> fmt::Display for TriState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriState::Absent => f.write_str("<absent>"),
            TriState::Null => f.write_str("null"),
            TriState::Value(value) => value.fmt(f),
        }
    }
}

impl<T: Serialize> Serialize for TriState<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TriState::Value(value) => value.serialize(serializer),
            TriState::Absent | TriState::Null => serializer.serialize_none(),
        }
    }
}

// Only reached when the key is present; missing keys take `Default`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for TriState<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(TriState::<T>::from)
    }
}
