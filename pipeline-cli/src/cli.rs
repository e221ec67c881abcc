use clap::Parser;

/// The default buffer capacity between two adjacent stages, used when
/// `--capacity` is not given.
pub const DEFAULT_CAPACITY: usize = 64;

/// Runs a linear chain of named text-transform stages, reading lines
/// from standard input and writing the transformed lines to standard
/// output.
///
/// Each line is passed through every stage in the order given on the
/// command line. Input ends at a line consisting of exactly `<END>`,
/// or at end of file.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about)]
pub struct Cli {
    /// The stages to run, in order (e.g. `upper reverse`). At least one
    /// is required: `upper lower reverse trim prefix suffix`.
    pub stages: Vec<String>,

    /// The capacity of each buffer connecting two adjacent stages.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,
}
