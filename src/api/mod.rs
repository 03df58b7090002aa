//! Purpose: Define the stable public Rust API boundary for jsontags.
//! Exports: Record types, policies, the codec entry points, and errors.
//! Role: Public, additive-only surface used by the CLI and tests.
//! Invariants: Callers never need to reach into `core` paths directly.

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::codec::{
    AnyRecord, MAX_NESTING_DEPTH, decode, decode_slice, encode, encode_pretty, encode_value, transcode,
};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::fixtures::{SAMPLE_AGE, SAMPLE_PAYLOAD, sample_record};
pub use crate::core::policy::Policy;
pub use crate::core::record::{
    AlwaysEmitRecord, InlineOtherRecord, OmitEmptyRecord, Other, PolicyRecord, TriStateRecord,
};
pub use crate::core::shape::{FieldKind, FieldShape, RECORD_SHAPE, locate_mismatch, nesting_depth};
pub use crate::core::tristate::TriState;
