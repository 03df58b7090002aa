// Core modules implementing the field model, the policies, and the JSON codec.
pub mod codec;
pub mod error;
pub mod fixtures;
pub mod policy;
pub mod record;
pub mod shape;
pub mod tristate;
