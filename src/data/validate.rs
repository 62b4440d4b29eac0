use std::collections::HashSet;
use std::fmt;

use crate::data::problem_set::ProblemSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.count(ValidationSeverity::Error) > 0
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }
}

/// Structural checks over a loaded problem set. Nothing is solved here.
pub fn validate_problem_set(set: &ProblemSet) -> ValidationReport {
    let mut report = ValidationReport::default();

    if set.problems != set.data.len() {
        report.push(
            ValidationSeverity::Warning,
            "problems",
            format!(
                "declared {} problem(s) but found {} entr{}",
                set.problems,
                set.data.len(),
                if set.data.len() == 1 { "y" } else { "ies" }
            ),
        );
    }

    let mut seen_ids = HashSet::new();
    let mut valid_grids = 0usize;

    for (index, entry) in set.data.iter().enumerate() {
        let context = format!("data[{index}] problem={}", entry.problem);

        if !seen_ids.insert(entry.problem) {
            report.push(
                ValidationSeverity::Warning,
                format!("{context}.problem"),
                format!("duplicate problem id {}", entry.problem),
            );
        }

        if entry.correct_answer < 0 {
            report.push(
                ValidationSeverity::Error,
                format!("{context}.correct_answer"),
                format!(
                    "expected answer {} is negative; no path total can match",
                    entry.correct_answer
                ),
            );
        }

        match entry.to_grid() {
            Ok(_) => valid_grids += 1,
            Err(err) => report.push(
                ValidationSeverity::Error,
                format!("{context}.prizes"),
                err.to_string(),
            ),
        }
    }

    report.push(
        ValidationSeverity::Info,
        "summary",
        format!("{valid_grids} of {} grid(s) are well-formed", set.data.len()),
    );

    report
}
