use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use clap::Parser;
use log::info;
use setcalc::{Session, SessionOptions};

/// Interactive calculator over six sets of integers in 0..128.
///
/// Commands: read_set, print_set, union_set, intersect_set, sub_set,
/// symdiff_set and stop. Set diagnostics are written to standard output;
/// logging (RUST_LOG) goes to standard error.
#[derive(Debug, Parser)]
#[command(name = "setcalc", version)]
struct Args {
    /// Read commands from FILE instead of standard input
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Do not print the prompt or echo commands
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let options = SessionOptions {
        prompt: !args.quiet,
        echo: !args.quiet,
    };
    let output = io::stdout().lock();

    match args.input {
        Some(path) => {
            info!("reading commands from {}", path.display());
            let file = File::open(&path)?;
            Session::with_options(BufReader::new(file), output, options).run()?;
        }
        None => Session::with_options(io::stdin().lock(), output, options).run()?,
    }
    Ok(())
}
