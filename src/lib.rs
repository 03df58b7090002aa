//! Purpose: Library crate used by the `jsontags` CLI and tests.
//! Exports: `api` (public surface) and `core` (field model, policies, codec, errors).
//! Role: Show how field tagging choices change JSON encoding and decoding.
//! Invariants: Every call is synchronous and side-effect free apart from `tracing` events.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod api;
pub mod core;
