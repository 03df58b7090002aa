//! Purpose: Sample records and the literal sample payload used by the walkthrough.
//! Exports: `SAMPLE_PAYLOAD`, `sample_record`.
//! Role: Shared by the `demo` command and the integration tests.
//! Invariants: `SAMPLE_PAYLOAD` is kept byte-for-byte; it has no `other` key at any level.
use super::codec::AnyRecord;
use super::policy::Policy;
use super::record::{AlwaysEmitRecord, InlineOtherRecord, OmitEmptyRecord, TriStateRecord};
use super::tristate::TriState;

pub const SAMPLE_AGE: i64 = 24;

pub const SAMPLE_PAYLOAD: &str = "{\"name\": null, \"age\": null, \"salary\": 0, \"employee\": { \"name\": \"tagada\", \"age\": 25, \"salary\": 34567}}";

/// An unnamed, unpaid person aged `SAMPLE_AGE`, shaped for `policy`.
pub fn sample_record(policy: Policy) -> AnyRecord {
    match policy {
        Policy::TriState => AnyRecord::TriState(TriStateRecord {
            age: TriState::Value(SAMPLE_AGE),
            ..TriStateRecord::default()
        }),
        Policy::OmitEmpty => AnyRecord::OmitEmpty(OmitEmptyRecord {
            age: SAMPLE_AGE,
            ..OmitEmptyRecord::default()
        }),
        Policy::AlwaysEmit => AnyRecord::AlwaysEmit(AlwaysEmitRecord {
            age: SAMPLE_AGE,
            ..AlwaysEmitRecord::default()
        }),
        Policy::InlineOther => AnyRecord::InlineOther(InlineOtherRecord {
            age: SAMPLE_AGE,
            ..InlineOtherRecord::default()
        }),
    }
}
