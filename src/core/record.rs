//! Purpose: The four policy-specific person records plus the auxiliary `Other`.
//! Exports: `TriStateRecord`, `OmitEmptyRecord`, `AlwaysEmitRecord`, `InlineOtherRecord`, `Other`, `PolicyRecord`.
//! Role: Serde attribute sets are the policies; the codec only drives serde_json.
//! Invariants: Field declaration order is the JSON key order: name, age, salary, employee, other.
//! Invariants: Nested records are `Option<Box<_>>` trees; plain fields decode `null` as zero.
use serde::{Deserialize, Deserializer, Serialize};

use super::policy::Policy;
use super::tristate::TriState;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Other {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub tagada: String,
}

impl Other {
    pub fn new(tagada: impl Into<String>) -> Self {
        Self {
            tagada: tagada.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tagada.is_empty()
    }
}

/// Policy A.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriStateRecord {
    #[serde(default, skip_serializing_if = "TriState::is_absent")]
    pub name: TriState<String>,
    #[serde(default, skip_serializing_if = "TriState::is_absent")]
    pub age: TriState<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub salary: i64,
    #[serde(default)]
    pub employee: Option<Box<TriStateRecord>>,
    #[serde(default)]
    pub other: Option<Other>,
}

/// Policy B.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OmitEmptyRecord {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_zero"
    )]
    pub age: i64,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_zero"
    )]
    pub salary: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<Box<OmitEmptyRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<Other>,
}

/// Policy C.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlwaysEmitRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub salary: i64,
    #[serde(default)]
    pub employee: Option<Box<AlwaysEmitRecord>>,
    #[serde(default)]
    pub other: Option<Other>,
}

/// Policy D.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineOtherRecord {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_zero"
    )]
    pub age: i64,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_zero"
    )]
    pub salary: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<Box<InlineOtherRecord>>,
    // A value cannot be unset, so it is written even when empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub other: Other,
}

/// Binds a record type to the policy its serde attributes implement.
pub trait PolicyRecord:
    Serialize + for<'de> Deserialize<'de> + Default + Clone + PartialEq + std::fmt::Debug
{
    const POLICY: Policy;
}

impl PolicyRecord for TriStateRecord {
    const POLICY: Policy = Policy::TriState;
}

impl PolicyRecord for OmitEmptyRecord {
    const POLICY: Policy = Policy::OmitEmpty;
}

impl PolicyRecord for AlwaysEmitRecord {
    const POLICY: Policy = Policy::AlwaysEmit;
}

impl PolicyRecord for InlineOtherRecord {
    const POLICY: Policy = Policy::InlineOther;
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_other_accepts_null_as_empty() {
        let record: InlineOtherRecord =
            serde_json::from_str(r#"{"other":null}"#).expect("decode");
        assert_eq!(record.other, Other::default());
        assert_eq!(serde_json::to_string(&record).expect("encode"), r#"{"other":{}}"#);
    }

    #[test]
    fn other_omits_empty_tagada() {
        assert_eq!(serde_json::to_string(&Other::default()).expect("encode"), "{}");
        assert_eq!(
            serde_json::to_string(&Other::new("x")).expect("encode"),
            r#"{"tagada":"x"}"#
        );
        let decoded: Other = serde_json::from_str(r#"{"tagada":null}"#).expect("decode");
        assert!(decoded.is_empty());
    }

    #[test]
    fn always_emit_writes_nested_nulls() {
        let record = AlwaysEmitRecord {
            employee: Some(Box::default()),
            ..AlwaysEmitRecord::default()
        };
        assert_eq!(
            serde_json::to_string(&record).expect("encode"),
            concat!(
                r#"{"name":"","age":0,"salary":0,"#,
                r#""employee":{"name":"","age":0,"salary":0,"employee":null,"other":null},"#,
                r#""other":null}"#
            )
        );
    }

    #[test]
    fn omit_empty_keeps_populated_fields_in_order() {
        let record = OmitEmptyRecord {
            name: "ada".to_string(),
            salary: 10,
            other: Some(Other::new("t")),
            ..OmitEmptyRecord::default()
        };
        assert_eq!(
            serde_json::to_string(&record).expect("encode"),
            r#"{"name":"ada","salary":10,"other":{"tagada":"t"}}"#
        );
    }

    #[test]
    fn policy_constants_match_types() {
        assert_eq!(TriStateRecord::POLICY, Policy::TriState);
        assert_eq!(OmitEmptyRecord::POLICY, Policy::OmitEmpty);
        assert_eq!(AlwaysEmitRecord::POLICY, Policy::AlwaysEmit);
        assert_eq!(InlineOtherRecord::POLICY, Policy::InlineOther);
    }
}
