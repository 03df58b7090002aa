//! Purpose: Render the four-policy walkthrough as plain text lines.
//! Exports: `walkthrough`.
//! Role: Backs `jsontags demo`; encodes the sample records, then decodes and
//! re-encodes the sample payload under each policy.
//! Invariants: Output is deterministic; no color, no terminal detection.

use jsontags::api::{
    AnyRecord, Error, Other, Policy, PolicyRecord, SAMPLE_PAYLOAD, encode, sample_record,
};

pub(crate) fn walkthrough() -> Result<Vec<String>, Error> {
    let mut lines = vec!["JSON encoding and decoding under four field policies".to_string()];

    for policy in Policy::ALL {
        lines.push(format!("{}: {}", label(policy), sample_record(policy).encode()?));
    }

    lines.push(format!("Sample payload: {SAMPLE_PAYLOAD}"));
    let decoded = Policy::ALL
        .into_iter()
        .map(|policy| AnyRecord::decode(SAMPLE_PAYLOAD, policy))
        .collect::<Result<Vec<_>, _>>()?;

    for record in &decoded {
        lines.push(format!("From {}: age, name, employee, other", label(record.policy())));
        for (field, shown) in describe(record)? {
            lines.push(format!("  {field}: {shown}"));
        }
    }
    for record in &decoded {
        lines.push(format!("Re-encoded under {}: {}", label(record.policy()), record.encode()?));
    }
    Ok(lines)
}

fn label(policy: Policy) -> String {
    format!("{} {}", policy.letter(), policy.as_str())
}

fn describe(record: &AnyRecord) -> Result<[(&'static str, String); 4], Error> {
    Ok(match record {
        AnyRecord::TriState(r) => [
            ("age", r.age.to_string()),
            ("name", r.name.to_string()),
            ("employee", nested(r.employee.as_deref())?),
            ("other", other_ref(r.other.as_ref())),
        ],
        AnyRecord::OmitEmpty(r) => [
            ("age", r.age.to_string()),
            ("name", format!("{:?}", r.name)),
            ("employee", nested(r.employee.as_deref())?),
            ("other", other_ref(r.other.as_ref())),
        ],
        AnyRecord::AlwaysEmit(r) => [
            ("age", r.age.to_string()),
            ("name", format!("{:?}", r.name)),
            ("employee", nested(r.employee.as_deref())?),
            ("other", other_ref(r.other.as_ref())),
        ],
        AnyRecord::InlineOther(r) => [
            ("age", r.age.to_string()),
            ("name", format!("{:?}", r.name)),
            ("employee", nested(r.employee.as_deref())?),
            ("other", other_json(&r.other)),
        ],
    })
}

fn nested<R: PolicyRecord>(record: Option<&R>) -> Result<String, Error> {
    match record {
        Some(record) => encode(record),
        None => Ok("<unset>".to_string()),
    }
}

fn other_ref(other: Option<&Other>) -> String {
    other.map(other_json).unwrap_or_else(|| "<unset>".to_string())
}

fn other_json(other: &Other) -> String {
    serde_json::to_string(other).unwrap_or_else(|_| "{}".to_string())
}
