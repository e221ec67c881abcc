//! The concurrency substrate for a linear, multi-stage text pipeline.
//!
//! This crate provides the core concurrency substrate: a bounded,
//! thread-safe [`Buffer`](buffer::Buffer), the [`Monitor`](monitor::Monitor)
//! it's built on, a stage worker that drives one transform between two
//! buffers ([`stage`]), the [`Pipeline`](pipeline::Pipeline) assembler
//! that wires N stages end-to-end, and the two fixed
//! [endpoint stages](endpoints) (line reader, line writer).
//!
//! The individual transforms, dynamic module loading, and CLI argument
//! parsing are all out of scope here — see the `pipeline-stages` and
//! `pipeline-cli` crates.

#![warn(missing_docs)]

pub mod buffer;
pub mod endpoints;
pub mod error;
pub mod factory;
pub mod item;
pub mod monitor;
pub mod pipeline;
pub mod stage;

pub use buffer::{Buffer, PopOutcome, PushOutcome};
pub use error::Error;
pub use factory::{Registry, StageFactory};
pub use item::Item;
pub use monitor::Monitor;
pub use pipeline::Pipeline;
pub use stage::{always_succeeds, spawn_stage, StageHandle, Transform};
