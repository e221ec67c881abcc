//! `pipeline STAGE_1 STAGE_2 … STAGE_N` — streams stdin to stdout
//! through a linear chain of named text-transform stages.

mod cli;
mod error;

use std::io::{stdin, stdout, BufReader};
use std::process::ExitCode;

use clap::Parser;
use pipeline_core::{endpoints, Pipeline};

use cli::Cli;
use error::Error;

fn run(cli: Cli) -> Result<(), Error> {
    if cli.stages.is_empty() {
        return Err(Error::Usage);
    }

    let registry = pipeline_stages::registry();
    let pipeline = Pipeline::build(&cli.stages, &registry, cli.capacity)?;

    for (index, name) in pipeline.stage_names().enumerate() {
        eprintln!("stage {index}: {name}");
    }

    let reader = endpoints::spawn_reader(BufReader::new(stdin()), pipeline.input());
    let writer = endpoints::spawn_writer(pipeline.output(), stdout());

    reader.join().expect("reader thread panicked")?;
    let dropped = pipeline.join();
    writer.join().expect("writer thread panicked")?;

    if dropped > 0 {
        eprintln!("dropped {dropped} item(s) due to transform failure");
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Usage) => {
            eprintln!("{}", Error::Usage);
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
