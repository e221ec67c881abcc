//! The reserved transform set and its stage-factory registry.
//!
//! Each of the six reserved transforms — `upper`, `lower`,
//! `reverse`, `trim`, `prefix`, `suffix` — is a pure
//! `fn(&[u8]) -> Vec<u8>` in [`transforms`]; [`registry::registry`]
//! wraps each in a [`pipeline_core::StageFactory`] under its reserved
//! name.

#![warn(missing_docs)]

pub mod registry;
pub mod transforms;

pub use registry::registry;
