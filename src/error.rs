use std::fmt;

/// Rejection raised when a prize grid cannot be built from the supplied values.
///
/// This is the only error the optimizer core exposes. Once a [crate::grid::PrizeGrid]
/// exists, solving it cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    /// No rows, or a flat list with no values.
    Empty,
    /// Row `row` has `found` cells but the grid has `expected` rows.
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Flat prize list length is not n² for any n.
    NotPerfectSquare { count: usize },
    NegativeValue { row: usize, col: usize, value: i64 },
    /// Flat value at `index` is not an integer.
    MalformedValue { index: usize, found: String },
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "prize grid is empty"),
            Self::NotSquare {
                row,
                expected,
                found,
            } => write!(
                f,
                "prize grid is not square: row {row} has {found} cells, expected {expected}"
            ),
            Self::NotPerfectSquare { count } => {
                write!(f, "Prize count {count} is not a perfect square")
            }
            Self::NegativeValue { row, col, value } => {
                write!(f, "negative prize {value} at ({row}, {col})")
            }
            Self::MalformedValue { index, found } => {
                write!(f, "prize #{index} is not a non-negative integer: {found}")
            }
        }
    }
}

impl std::error::Error for InvalidInputError {}

/// Failure reading, parsing or writing a problem set or report.
#[derive(Debug)]
pub enum ProblemSetError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl fmt::Display for ProblemSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{e}"),
            Self::Yaml(e) => write!(f, "invalid problem set yaml: {e}"),
            Self::Json(e) => write!(f, "{e}"),
            Self::Csv(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ProblemSetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Yaml(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Csv(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ProblemSetError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for ProblemSetError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

impl From<serde_json::Error> for ProblemSetError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<csv::Error> for ProblemSetError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}
