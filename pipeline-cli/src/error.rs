use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::io;

/// Everything that can keep `pipeline` from exiting cleanly.
#[derive(Debug)]
pub enum Error {
    /// No stages were named on the command line.
    Usage,
    /// The assembler failed to build the pipeline.
    Assembly(pipeline_core::Error),
    /// An I/O failure reading stdin or writing stdout.
    Io(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage => write!(f, "usage: pipeline STAGE_1 [STAGE_2 ...]"),
            Error::Assembly(e) => write!(f, "{e}"),
            Error::Io(e) => write!(f, "{e}"),
        }
    }
}

impl From<pipeline_core::Error> for Error {
    fn from(value: pipeline_core::Error) -> Self {
        Error::Assembly(value)
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::Io(value)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Usage => None,
            Error::Assembly(e) => Some(e),
            Error::Io(e) => Some(e),
        }
    }
}
