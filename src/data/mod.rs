pub mod generate;
pub mod problem_set;
pub mod validate;

pub use generate::{generate_problem_set, GenerateOptions};
pub use problem_set::{
    load_problem_set, parse_problem_set, save_problem_set, ProblemEntry, ProblemSet,
    DEFAULT_PROBLEM_SET_PATH,
};
pub use validate::{validate_problem_set, ValidationReport, ValidationSeverity};
