//! Command-line solver for falling-letter word puzzles.
//!
//! # Usage
//!
//! ```sh
//! wordfall --words words --lengths 3,3,3 CAT BEE DOG
//! wordfall -l 3,2 'A../XYZ/T..'
//! wordfall -l 8,3,5,4,5 --parallel ALABH LFLLO ERMSU BNLAS UMAEE
//! ```
//!
//! The word list holds one word per line; blank lines and entries with
//! characters other than `a`-`z` are skipped. Grid rows may use `.`, `_` or a
//! space for empty cells.

mod args;
mod error;
mod logger;
mod report;

use std::{
    error::Error as _,
    fs::File,
    io::{self, BufReader, Write as _},
    path::Path,
    process::ExitCode,
};

use clap::Parser as _;
use log::{info, warn};
use wordfall_core::Dictionary;
use wordfall_solver::Solver;

use self::{
    args::{Args, OutputFormat},
    error::AppError,
};

fn main() -> ExitCode {
    better_panic::install();
    let args = Args::parse();
    logger::init(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let grid = args.grid()?;
    let dictionary = load_dictionary(&args.words)?;
    if dictionary.is_empty() {
        warn!("word list {} contains no usable words", args.words.display());
    }
    info!("solving for lengths {:?}:\n{grid}", args.lengths);

    let solver = Solver::new(&dictionary, grid, args.lengths.clone());
    let report = if args.parallel {
        solver.solve_parallel()
    } else {
        solver.solve()
    };
    info!(
        "{} solutions, {} distinct words",
        report.solutions().len(),
        report.all_words().len()
    );

    let show_all_words = args.show_all_words(report.solutions().len());
    let mut out = io::stdout().lock();
    match args.format {
        OutputFormat::Text => report::write_text(&mut out, &report, show_all_words)?,
        OutputFormat::Json => report::write_json(&mut out, &report, show_all_words)?,
    }
    out.flush()?;
    Ok(())
}

fn load_dictionary(path: &Path) -> Result<Dictionary, AppError> {
    let file = File::open(path).map_err(|err| AppError::word_list(path, err))?;
    let dictionary =
        Dictionary::from_reader(BufReader::new(file)).map_err(|err| AppError::word_list(path, err))?;
    info!("loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}
