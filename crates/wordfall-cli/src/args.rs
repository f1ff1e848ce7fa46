use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use wordfall_core::{Grid, ModelError};

/// How results are written to standard output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Solve a falling-letter word puzzle.
///
/// Words are traced through adjacent cells, including diagonals, and removed
/// in the order given by `--lengths`. After each removal the letters above
/// the gap fall straight down.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub(crate) struct Args {
    /// Word list file, one word per line.
    #[arg(short, long, value_name = "PATH", default_value = "words")]
    pub(crate) words: PathBuf,

    /// Word lengths, in removal order (comma-separated or repeated).
    #[arg(
        short,
        long,
        value_name = "N,...",
        value_delimiter = ',',
        required = true,
        value_parser = parse_length
    )]
    pub(crate) lengths: Vec<usize>,

    /// Grid rows, top to bottom. `.`, `_` and space mark empty cells.
    ///
    /// A single argument with rows separated by `/` is also accepted.
    #[arg(value_name = "ROW", required = true, num_args = 1..)]
    pub(crate) rows: Vec<String>,

    /// Search branches on all available cores.
    #[arg(long)]
    pub(crate) parallel: bool,

    /// List every word found when there are fewer solutions than this (0 never lists them).
    #[arg(long, value_name = "COUNT", default_value_t = 10)]
    pub(crate) all_words_threshold: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,

    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub(crate) verbose: u8,
}

impl Args {
    /// Builds the starting grid from the positional rows.
    pub(crate) fn grid(&self) -> Result<Grid, ModelError> {
        match self.rows.as_slice() {
            [single] if single.contains('/') => single.parse(),
            rows => Grid::from_rows(rows),
        }
    }

    /// Returns `true` if every observed word should be listed.
    pub(crate) fn show_all_words(&self, solution_count: usize) -> bool {
        solution_count < self.all_words_threshold
    }
}

fn parse_length(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("word lengths must be at least 1".to_owned()),
        Ok(len) => Ok(len),
        Err(err) => Err(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory as _, error::ErrorKind};

    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("wordfall").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["-l", "3,3,3", "CAT", "BEE", "DOG"]).unwrap();
        assert_eq!(args.words, PathBuf::from("words"));
        assert_eq!(args.lengths, [3, 3, 3]);
        assert_eq!(args.rows, ["CAT", "BEE", "DOG"]);
        assert!(!args.parallel);
        assert_eq!(args.all_words_threshold, 10);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_all_options() {
        let args = parse(&[
            "--words",
            "dict.txt",
            "-l",
            "3",
            "-l",
            "2",
            "--parallel",
            "--all-words-threshold",
            "0",
            "--format",
            "json",
            "-vv",
            "A../XYZ/T..",
        ])
        .unwrap();
        assert_eq!(args.words, PathBuf::from("dict.txt"));
        assert_eq!(args.lengths, [3, 2]);
        assert!(args.parallel);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.verbose, 2);
        assert!(!args.show_all_words(0));
    }

    #[test]
    fn test_rejects_zero_length() {
        let err = parse(&["-l", "3,0", "AB", "CD"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_requires_lengths_and_rows() {
        assert_eq!(
            parse(&["CAT"]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse(&["-l", "3"]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_grid_from_separate_rows() {
        let args = parse(&["-l", "2", "A.", " B"]).unwrap();
        let grid = args.grid().unwrap();
        assert_eq!(grid.size(), 2);
        assert!(grid.get(1, 0).unwrap().is_blank());
        assert_eq!(grid.get(1, 1).unwrap().char(), Some('b'));
    }

    #[test]
    fn test_grid_from_single_argument() {
        let args = parse(&["-l", "3", "A../XYZ/T.."]).unwrap();
        assert_eq!(args.grid().unwrap().letters().count(), 5);
    }

    #[test]
    fn test_grid_errors() {
        let args = parse(&["-l", "2", "AB", "C"]).unwrap();
        assert!(matches!(
            args.grid(),
            Err(ModelError::RowLengthMismatch { row: 1, .. })
        ));

        let args = parse(&["-l", "2", "A1", "CD"]).unwrap();
        assert_eq!(args.grid(), Err(ModelError::InvalidCharacter { ch: '1' }));
    }

    #[test]
    fn test_all_words_threshold() {
        let args = parse(&["-l", "1", "A"]).unwrap();
        assert!(args.show_all_words(9));
        assert!(!args.show_all_words(10));
    }
}
