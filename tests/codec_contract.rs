//! Purpose: Lock the encode/decode contract of the four field policies.
//! Exports: Integration tests only.
//! Role: Exercise absent vs null vs zero handling through the public `api` surface.
//! Invariants: Expected encodings are exact strings, so key order is asserted too.

use jsontags::api::{
    AlwaysEmitRecord, AnyRecord, ErrorKind, MAX_NESTING_DEPTH, InlineOtherRecord, OmitEmptyRecord, Other, Policy,
    SAMPLE_PAYLOAD, TriState, TriStateRecord, decode, encode, transcode,
};

#[test]
fn zero_records_survive_a_round_trip_under_every_policy() {
    for policy in Policy::ALL {
        let zero = AnyRecord::zero(policy);
        let text = zero.encode().expect("encode");
        let back = AnyRecord::decode(&text, policy).expect("decode");
        assert_eq!(back, zero, "policy {policy}");
    }
}

#[test]
fn zero_record_encodings() {
    let encoded: Vec<String> = Policy::ALL
        .into_iter()
        .map(|policy| AnyRecord::zero(policy).encode().expect("encode"))
        .collect();
    assert_eq!(
        encoded,
        [
            r#"{"salary":0,"employee":null,"other":null}"#,
            "{}",
            r#"{"name":"","age":0,"salary":0,"employee":null,"other":null}"#,
            r#"{"other":{}}"#,
        ]
    );
}

#[test]
fn tri_state_writes_null_and_skips_absent() {
    let record = TriStateRecord {
        age: TriState::Null,
        ..TriStateRecord::default()
    };
    assert_eq!(
        encode(&record).expect("encode"),
        r#"{"age":null,"salary":0,"employee":null,"other":null}"#
    );
}

#[test]
fn tri_state_reencodes_sample_payload_faithfully() {
    let record: TriStateRecord = decode(SAMPLE_PAYLOAD).expect("decode");
    assert!(record.name.is_null());
    assert!(record.age.is_null());
    assert_eq!(record.salary, 0);
    assert_eq!(record.other, None);

    let nested = record.employee.as_deref().expect("employee");
    assert_eq!(nested.name, TriState::Value("tagada".to_string()));
    assert_eq!(nested.age, TriState::Value(25));
    assert_eq!(nested.salary, 34567);
    assert!(nested.employee.is_none());

    assert_eq!(
        encode(&record).expect("encode"),
        concat!(
            r#"{"name":null,"age":null,"salary":0,"#,
            r#""employee":{"name":"tagada","age":25,"salary":34567,"employee":null,"other":null},"#,
            r#""other":null}"#
        )
    );
}

#[test]
fn always_emit_collapses_null_to_zero() {
    let record: AlwaysEmitRecord = decode(SAMPLE_PAYLOAD).expect("decode");
    assert_eq!(record.name, "");
    assert_eq!(record.age, 0);
    let nested = record.employee.as_deref().expect("employee");
    assert_eq!(nested.other, None);
    assert_eq!(
        encode(&record).expect("encode"),
        concat!(
            r#"{"name":"","age":0,"salary":0,"#,
            r#""employee":{"name":"tagada","age":25,"salary":34567,"employee":null,"other":null},"#,
            r#""other":null}"#
        )
    );
}

#[test]
fn omit_empty_and_inline_other_drop_collapsed_fields() {
    assert_eq!(
        transcode(SAMPLE_PAYLOAD, Policy::OmitEmpty).expect("omit-empty"),
        r#"{"employee":{"name":"tagada","age":25,"salary":34567}}"#
    );
    assert_eq!(
        transcode(SAMPLE_PAYLOAD, Policy::InlineOther).expect("inline-other"),
        r#"{"employee":{"name":"tagada","age":25,"salary":34567,"other":{}},"other":{}}"#
    );
}

#[test]
fn plain_policies_lose_only_the_tri_state_distinction() {
    let rich = TriStateRecord {
        name: TriState::Null,
        age: TriState::Value(41),
        salary: 1200,
        employee: Some(Box::new(TriStateRecord {
            name: TriState::Value("bo".to_string()),
            ..TriStateRecord::default()
        })),
        other: Some(Other::new("x")),
    };
    let text = encode(&rich).expect("encode");

    let plain: OmitEmptyRecord = decode(&text).expect("decode");
    assert_eq!(
        plain,
        OmitEmptyRecord {
            name: rich.name.clone().unwrap_or_default(),
            age: 41,
            salary: 1200,
            employee: Some(Box::new(OmitEmptyRecord {
                name: "bo".to_string(),
                ..OmitEmptyRecord::default()
            })),
            other: Some(Other::new("x")),
        }
    );

    let inline: InlineOtherRecord = decode(&text).expect("decode");
    assert_eq!(inline.other, Other::new("x"));
    assert_eq!(inline.employee.as_deref().map(|e| e.other.clone()), Some(Other::default()));
}

#[test]
fn decode_failures_are_terminal_and_located() {
    let err = decode::<AlwaysEmitRecord>(r#"{"name": "ok", "age": "twelve"}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Data);
    assert_eq!(err.path(), Some("$.age"));

    let err = decode::<TriStateRecord>(r#"{"other": {"tagada": false}}"#).unwrap_err();
    assert_eq!(err.path(), Some("$.other.tagada"));

    let err = decode::<OmitEmptyRecord>("[]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Data);
    assert_eq!(err.path(), Some("$"));

    let err = decode::<InlineOtherRecord>("{\"age\": 1,}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.line(), Some(1));
}

#[test]
fn unknown_keys_are_ignored_by_every_policy() {
    let text = r#"{"age": 5, "department": {"id": 9}, "tags": ["a"]}"#;
    for policy in Policy::ALL {
        let record = AnyRecord::decode(text, policy).expect("decode");
        let value = record.to_value().expect("value");
        assert_eq!(value["age"], 5, "policy {policy}");
        assert!(value.get("department").is_none());
    }
}

fn employee_chain(levels: usize) -> String {
    let mut text = String::from(r#"{"name":"leaf"}"#);
    for _ in 1..levels {
        text = format!(r#"{{"employee":{text}}}"#);
    }
    text
}

#[test]
fn nesting_is_bounded_with_a_dedicated_error() {
    // inline-other writes an `other` object under the deepest employee.
    let text = employee_chain(MAX_NESTING_DEPTH - 1);
    for policy in Policy::ALL {
        let record = AnyRecord::decode(&text, policy).expect("decode at the bound");
        let again = record.encode().expect("encode");
        assert_eq!(AnyRecord::decode(&again, policy).expect("re-decode"), record);
    }

    let err = decode::<TriStateRecord>(&employee_chain(127)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DepthLimit);
    assert!(err.is_decode());
}
