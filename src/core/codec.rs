//! Purpose: Encode and decode policy records as JSON text.
//! Exports: `encode`, `encode_pretty`, `encode_value`, `decode`, `decode_slice`, `AnyRecord`, `transcode`, `MAX_NESTING_DEPTH`.
//! Role: Single seam over serde_json; maps parser failures into structured `Error`s.
//! Invariants: Decoding never returns a partial record; failure is one terminal `Error`.
//! Invariants: `decode::<R>(&encode(&r)?)? == r` for every record type `R`.
//! Invariants: Documents nesting deeper than `MAX_NESTING_DEPTH` fail with `DepthLimit`, never `Syntax`.
//! Notes: Decoding goes through `serde_json::Value` so type errors can be located by path.
use serde_json::Value;
use serde_json::error::Category;

use super::error::{Error, ErrorKind};
use super::policy::Policy;
use super::record::{
    AlwaysEmitRecord, InlineOtherRecord, OmitEmptyRecord, PolicyRecord, TriStateRecord,
};
use super::shape::{RECORD_SHAPE, locate_mismatch, nesting_depth};

/// Deepest object/array nesting accepted by `decode`, below serde_json's own limit.
/// A chain of this many records round-trips as long as the innermost `other` is unset.
pub const MAX_NESTING_DEPTH: usize = 100;

pub fn encode<R: PolicyRecord>(record: &R) -> Result<String, Error> {
    let text = serde_json::to_string(record).map_err(encode_error)?;
    tracing::debug!(policy = R::POLICY.as_str(), bytes = text.len(), "encoded record");
    Ok(text)
}

pub fn encode_pretty<R: PolicyRecord>(record: &R) -> Result<String, Error> {
    let text = serde_json::to_string_pretty(record).map_err(encode_error)?;
    tracing::debug!(policy = R::POLICY.as_str(), bytes = text.len(), "encoded record (pretty)");
    Ok(text)
}

/// Key order matches the record's field order.
pub fn encode_value<R: PolicyRecord>(record: &R) -> Result<Value, Error> {
    let value = serde_json::to_value(record).map_err(encode_error)?;
    tracing::debug!(policy = R::POLICY.as_str(), "encoded record value");
    Ok(value)
}

pub fn decode<R: PolicyRecord>(text: &str) -> Result<R, Error> {
    check_depth(text.as_bytes())?;
    let value = serde_json::from_str::<Value>(text).map_err(parse_error)?;
    let record = from_document(value)?;
    tracing::debug!(policy = R::POLICY.as_str(), bytes = text.len(), "decoded record");
    Ok(record)
}

/// Like `decode`, for raw input that must still be valid UTF-8.
pub fn decode_slice<R: PolicyRecord>(bytes: &[u8]) -> Result<R, Error> {
    check_depth(bytes)?;
    let value = serde_json::from_slice::<Value>(bytes).map_err(parse_error)?;
    let record = from_document(value)?;
    tracing::debug!(policy = R::POLICY.as_str(), bytes = bytes.len(), "decoded record");
    Ok(record)
}

fn check_depth(bytes: &[u8]) -> Result<(), Error> {
    let depth = nesting_depth(bytes, MAX_NESTING_DEPTH);
    if depth <= MAX_NESTING_DEPTH {
        return Ok(());
    }
    tracing::debug!(depth, limit = MAX_NESTING_DEPTH, "document too deep");
    Err(Error::new(ErrorKind::DepthLimit).with_message(format!(
        "document nests deeper than {MAX_NESTING_DEPTH} levels"
    )))
}

fn from_document<R: PolicyRecord>(value: Value) -> Result<R, Error> {
    let path = locate_mismatch(&value, &RECORD_SHAPE);
    serde_json::from_value::<R>(value).map_err(|err| {
        tracing::debug!(policy = R::POLICY.as_str(), path = ?path, "record shape mismatch");
        let mut mapped = Error::new(ErrorKind::Data)
            .with_message(format!("invalid {} record", R::POLICY));
        if let Some(path) = path {
            mapped = mapped.with_path(path);
        }
        mapped.with_source(err)
    })
}

fn parse_error(err: serde_json::Error) -> Error {
    let kind = match err.classify() {
        Category::Eof => ErrorKind::Eof,
        Category::Syntax => ErrorKind::Syntax,
        Category::Data => ErrorKind::Data,
        Category::Io => ErrorKind::Io,
    };
    let message = match kind {
        ErrorKind::Eof => "unexpected end of JSON input",
        _ => "malformed JSON input",
    };
    Error::new(kind)
        .with_message(message)
        .with_position(err.line(), err.column())
        .with_source(err)
}

fn encode_error(err: serde_json::Error) -> Error {
    Error::new(ErrorKind::Internal)
        .with_message("record encoding failed")
        .with_source(err)
}

/// A record of any policy, for callers that pick the policy at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyRecord {
    TriState(TriStateRecord),
    OmitEmpty(OmitEmptyRecord),
    AlwaysEmit(AlwaysEmitRecord),
    InlineOther(InlineOtherRecord),
}

impl AnyRecord {
    pub fn zero(policy: Policy) -> Self {
        match policy {
            Policy::TriState => AnyRecord::TriState(TriStateRecord::default()),
            Policy::OmitEmpty => AnyRecord::OmitEmpty(OmitEmptyRecord::default()),
            Policy::AlwaysEmit => AnyRecord::AlwaysEmit(AlwaysEmitRecord::default()),
            Policy::InlineOther => AnyRecord::InlineOther(InlineOtherRecord::default()),
        }
    }

    pub fn policy(&self) -> Policy {
        match self {
            AnyRecord::TriState(_) => Policy::TriState,
            AnyRecord::OmitEmpty(_) => Policy::OmitEmpty,
            AnyRecord::AlwaysEmit(_) => Policy::AlwaysEmit,
            AnyRecord::InlineOther(_) => Policy::InlineOther,
        }
    }

    pub fn decode(text: &str, policy: Policy) -> Result<Self, Error> {
        Ok(match policy {
            Policy::TriState => AnyRecord::TriState(decode(text)?),
            Policy::OmitEmpty => AnyRecord::OmitEmpty(decode(text)?),
            Policy::AlwaysEmit => AnyRecord::AlwaysEmit(decode(text)?),
            Policy::InlineOther => AnyRecord::InlineOther(decode(text)?),
        })
    }

    pub fn decode_slice(bytes: &[u8], policy: Policy) -> Result<Self, Error> {
        Ok(match policy {
            Policy::TriState => AnyRecord::TriState(decode_slice(bytes)?),
            Policy::OmitEmpty => AnyRecord::OmitEmpty(decode_slice(bytes)?),
            Policy::AlwaysEmit => AnyRecord::AlwaysEmit(decode_slice(bytes)?),
            Policy::InlineOther => AnyRecord::InlineOther(decode_slice(bytes)?),
        })
    }

    pub fn encode(&self) -> Result<String, Error> {
        match self {
            AnyRecord::TriState(record) => encode(record),
            AnyRecord::OmitEmpty(record) => encode(record),
            AnyRecord::AlwaysEmit(record) => encode(record),
            AnyRecord::InlineOther(record) => encode(record),
        }
    }

    pub fn to_value(&self) -> Result<Value, Error> {
        match self {
            AnyRecord::TriState(record) => encode_value(record),
            AnyRecord::OmitEmpty(record) => encode_value(record),
            AnyRecord::AlwaysEmit(record) => encode_value(record),
            AnyRecord::InlineOther(record) => encode_value(record),
        }
    }
}

/// Decodes `text` under `policy` and re-encodes it under the same policy.
pub fn transcode(text: &str, policy: Policy) -> Result<String, Error> {
    AnyRecord::decode(text, policy)?.encode()
}
