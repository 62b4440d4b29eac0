use crate::config::RunConfig;
use crate::data::{
    generate_problem_set, load_problem_set, save_problem_set, validate_problem_set,
    GenerateOptions, ValidationSeverity,
};
use crate::error::InvalidInputError;
use crate::harness::{render, run_problem_set};
use crate::optimizer::{GridPathOptimizer, SolveStrategy};

const USAGE: &str = "usage: prize_path <run|solve|validate|generate>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Run,
    Solve,
    Validate,
    Generate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("run") => Some(Command::Run),
        Some("solve") => Some(Command::Solve),
        Some("validate") => Some(Command::Validate),
        Some("generate") => Some(Command::Generate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Run) => handle_run(args),
        Some(Command::Solve) => handle_solve(args),
        Some(Command::Validate) => handle_validate(args),
        Some(Command::Generate) => handle_generate(args),
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

fn handle_run(args: &[String]) -> i32 {
    let mut config = RunConfig::from_env();
    if let Err(err) = config.apply_args(args.get(2..).unwrap_or_default()) {
        eprintln!("{err}");
        eprintln!(
            "usage: prize_path run [path] [--json|--csv] [--workers N] [--sequential] [--strategy NAME]"
        );
        return 2;
    }

    log::info!("loading {}", config.problem_set_path);
    let set = match load_problem_set(&config.problem_set_path) {
        Ok(set) => set,
        Err(err) => {
            eprintln!(
                "failed to load problem set '{}': {err}",
                config.problem_set_path
            );
            return 1;
        }
    };

    let report = match run_problem_set(&set, &config.run_options()) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    match render(&report, config.format) {
        Ok(payload) => print!("{payload}"),
        Err(err) => {
            eprintln!("failed to render report: {err}");
            return 1;
        }
    }

    if report.all_correct() {
        0
    } else {
        1
    }
}

/// Parse `"1, 2,3"` into integers; a non-integer token is a malformed prize.
fn parse_prize_list(raw: &str) -> Result<Vec<i64>, InvalidInputError> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<i64>()
                .map_err(|_| InvalidInputError::MalformedValue {
                    index,
                    found: token.to_string(),
                })
        })
        .collect()
}

const SOLVE_USAGE: &str =
    "usage: prize_path solve [--strategy bottom-up|top-down|rolling-row] <v1,v2,...>";

/// Flags may come before or after the prize list. Exactly one positional is allowed.
fn parse_solve_args(args: &[String]) -> Result<(&str, SolveStrategy), String> {
    let mut list = None;
    let mut strategy = SolveStrategy::default();
    let mut rest = args.iter().skip(2);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--strategy" => {
                let value = rest.next().ok_or("--strategy needs a value")?;
                strategy = value.parse()?;
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}")),
            positional => {
                if let Some(first) = list {
                    return Err(format!(
                        "unexpected argument {positional} after prize list {first}"
                    ));
                }
                list = Some(positional);
            }
        }
    }
    let list = list.ok_or("missing prize list")?;
    Ok((list, strategy))
}

fn handle_solve(args: &[String]) -> i32 {
    let (raw, strategy) = match parse_solve_args(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{SOLVE_USAGE}");
            return 2;
        }
    };

    let optimizer = parse_prize_list(raw).and_then(|values| GridPathOptimizer::from_flat(&values));
    match optimizer {
        Ok(optimizer) => {
            println!("{}", optimizer.with_strategy(strategy).solve());
            0
        }
        Err(err) => {
            eprintln!("invalid input: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let path = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| RunConfig::from_env().problem_set_path);

    let set = match load_problem_set(&path) {
        Ok(set) => set,
        Err(err) => {
            eprintln!("failed to load problem set '{path}': {err}");
            return 1;
        }
    };

    let report = validate_problem_set(&set);
    for diag in &report.diagnostics {
        if diag.severity == ValidationSeverity::Info {
            println!("{diag}");
        } else {
            eprintln!("{diag}");
        }
    }

    if report.has_errors() {
        eprintln!(
            "validation failed: {} error(s)",
            report.count(ValidationSeverity::Error)
        );
        1
    } else {
        println!("validation passed: {path}");
        0
    }
}

fn handle_generate(args: &[String]) -> i32 {
    let defaults = GenerateOptions::default();
    let options = GenerateOptions {
        count: parse_usize_arg(args.get(2), "count", defaults.count),
        max_side: parse_usize_arg(args.get(3), "max_side", defaults.max_side),
        seed: parse_u64_arg(args.get(4), "seed", defaults.seed),
        ..defaults
    };
    let set = generate_problem_set(&options);

    match args.get(5) {
        Some(out) => match save_problem_set(out, &set) {
            Ok(()) => {
                println!("wrote {} problem(s) to {out}", set.data.len());
                0
            }
            Err(err) => {
                eprintln!("failed to write '{out}': {err}");
                1
            }
        },
        None => match serde_yaml::to_string(&set) {
            Ok(yaml) => {
                print!("{yaml}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize problem set: {err}");
                1
            }
        },
    }
}

fn parse_usize_arg(raw: Option<&String>, name: &str, default: usize) -> usize {
    raw.and_then(|value| value.parse::<usize>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

fn parse_u64_arg(raw: Option<&String>, name: &str, default: u64) -> u64 {
    raw.and_then(|value| value.parse::<u64>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}
