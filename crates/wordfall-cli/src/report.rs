//! Rendering of solve results as text or JSON.

use std::io::{self, Write};

use serde::Serialize;
use wordfall_core::{Solution, Word};
use wordfall_solver::SolveReport;

/// Writes the human-readable listing.
///
/// ```text
/// Solutions: 1
/// XYZ  AT
/// All words found: 2
///   AT
///   XYZ
/// ```
pub(crate) fn write_text<W>(
    out: &mut W,
    report: &SolveReport,
    show_all_words: bool,
) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "Solutions: {}", report.solutions().len())?;
    for solution in report.solutions() {
        writeln!(out, "{solution}")?;
    }

    if show_all_words {
        writeln!(out, "All words found: {}", report.all_words().len())?;
        for word in report.all_words() {
            writeln!(out, "  {word}")?;
        }
    }
    Ok(())
}

/// Writes the report as a pretty-printed JSON document.
pub(crate) fn write_json<W>(
    out: &mut W,
    report: &SolveReport,
    show_all_words: bool,
) -> serde_json::Result<()>
where
    W: Write,
{
    let dto = ReportDto::from_report(report, show_all_words);
    serde_json::to_writer_pretty(&mut *out, &dto)?;
    writeln!(out).map_err(serde_json::Error::io)
}

/// Serializable form of a [`SolveReport`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReportDto {
    pub(crate) solution_count: usize,
    pub(crate) solutions: Vec<SolutionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) all_words: Option<Vec<WordDto>>,
}

impl ReportDto {
    #[must_use]
    pub(crate) fn from_report(report: &SolveReport, show_all_words: bool) -> Self {
        Self {
            solution_count: report.solutions().len(),
            solutions: report
                .solutions()
                .iter()
                .map(SolutionDto::from_solution)
                .collect(),
            all_words: show_all_words
                .then(|| report.all_words().iter().map(WordDto::from_word).collect()),
        }
    }
}

/// One solution: its words in removal order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SolutionDto {
    pub(crate) text: String,
    pub(crate) words: Vec<WordDto>,
}

impl SolutionDto {
    #[must_use]
    pub(crate) fn from_solution(solution: &Solution) -> Self {
        Self {
            text: solution.to_string(),
            words: solution.words().iter().map(WordDto::from_word).collect(),
        }
    }
}

/// A word and the cells it was traced through, as `[row, col]` pairs.
///
/// Positions refer to the grid the word was removed from, after earlier
/// words have fallen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WordDto {
    pub(crate) text: String,
    pub(crate) cells: Vec<[u8; 2]>,
}

impl WordDto {
    #[must_use]
    pub(crate) fn from_word(word: &Word) -> Self {
        Self {
            text: word.to_string(),
            cells: word
                .letters()
                .iter()
                .map(|letter| [letter.row(), letter.col()])
                .collect(),
        }
    }
}
