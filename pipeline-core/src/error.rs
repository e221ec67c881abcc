//! Errors raised while assembling a pipeline.
//!
//! Only assembly-time failures live here: once a pipeline is running,
//! `Closed`/`End` are signals returned from [`crate::buffer::Buffer`],
//! not errors, and transform failures are swallowed per-item.

use std::error::Error as StdError;
use std::fmt::{self, Display};

/// Everything that can go wrong while building a [`crate::pipeline::Pipeline`].
#[derive(Debug)]
pub enum Error {
    /// The stage list passed to the assembler was empty.
    NoStages,
    /// A named stage had no matching factory.
    UnknownStage(String),
    /// A stage factory reported its own construction failure.
    StageConstruction {
        /// The stage's position in the chain.
        index: usize,
        /// The stage's configured name.
        name: String,
        /// What the factory said went wrong.
        cause: String,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoStages => write!(f, "at least one stage is required"),
            Error::UnknownStage(name) => write!(f, "unknown stage: {name}"),
            Error::StageConstruction { index, name, cause } => {
                write!(f, "stage {index} ({name}) failed to start: {cause}")
            }
        }
    }
}

impl StdError for Error {}
