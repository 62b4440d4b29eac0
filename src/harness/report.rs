//! Render a [RunReport] as text, JSON or CSV.

use std::fmt::Write as _;
use std::io;

use serde::Serialize;

use crate::error::ProblemSetError;
use crate::harness::runner::{ProblemOutcome, RunReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn render_text(report: &RunReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Test Results");
    let _ = writeln!(out, "=======================");
    let _ = writeln!(out, "Total problems:   {}", report.total_problems);
    let _ = writeln!(out, "Solved correctly: {}", report.solved_correctly);
    let _ = writeln!(out, "Wrong answers:    {}", report.wrong_answers);

    if report.errors > 0 {
        let _ = writeln!(out, "\nErrors:");
        for result in report.failures() {
            if let ProblemOutcome::Error { message } = &result.outcome {
                let _ = writeln!(out, "  Problem {}: ERROR ({message})", result.problem);
            }
        }
    }

    if report.wrong_answers > 0 {
        let _ = writeln!(out, "\nMistakes:");
        for result in report.mistakes() {
            if let ProblemOutcome::Wrong { got } = result.outcome {
                let _ = writeln!(
                    out,
                    "  Problem {}: expected={}, got={got}",
                    result.problem, result.expected
                );
            }
        }
    }

    out
}

pub fn render_json(report: &RunReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    problem: u64,
    expected: i64,
    outcome: &'static str,
    got: Option<u64>,
    error: Option<&'a str>,
}

/// One row per problem: `problem,expected,outcome,got,error`.
pub fn write_csv<W: io::Write>(report: &RunReport, writer: W) -> Result<(), ProblemSetError> {
    let mut csv = csv::Writer::from_writer(writer);
    for result in &report.results {
        let row = match &result.outcome {
            ProblemOutcome::Correct => CsvRow {
                problem: result.problem,
                expected: result.expected,
                outcome: "correct",
                got: u64::try_from(result.expected).ok(),
                error: None,
            },
            ProblemOutcome::Wrong { got } => CsvRow {
                problem: result.problem,
                expected: result.expected,
                outcome: "wrong",
                got: Some(*got),
                error: None,
            },
            ProblemOutcome::Error { message } => CsvRow {
                problem: result.problem,
                expected: result.expected,
                outcome: "error",
                got: None,
                error: Some(message.as_str()),
            },
        };
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn render(report: &RunReport, format: ReportFormat) -> Result<String, ProblemSetError> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => Ok(render_json(report)?),
        ReportFormat::Csv => {
            let mut buf = Vec::new();
            write_csv(report, &mut buf)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
    }
}
