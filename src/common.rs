//! Shared harness for the problem binaries.
//!
//! A binary defines `solve` and hands it to [`problem!`] together with the
//! known answer. The harness parses the command line, times the solver and
//! reports the verdict.

#[macro_use]
extern crate failure_derive;
#[macro_use]
extern crate serde_derive;

pub mod config;
pub mod error;
pub mod report;
pub mod summation;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use crate::config::Config;
pub use crate::error::EulerError;
pub use crate::report::{Report, Verdict};

/// Expands to a `main` that runs `solve` and checks it against `expected`.
#[macro_export]
macro_rules! problem {
    ($expected:expr, $solve:expr) => {
        fn main() {
            let code = $crate::run(env!("CARGO_BIN_NAME"), $expected, $solve);
            ::std::process::exit(code);
        }
    };
}

/// Log to stderr, filtered by `RUST_LOG`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Times one call of `solve` and builds its report.
pub fn execute<F>(
    problem: &str,
    expected: &str,
    config: &Config,
    solve: F,
) -> Result<Report, failure::Error>
where
    F: Fn(&Config) -> Result<String, failure::Error>,
{
    let start = time::precise_time_ns();
    let answer = solve(config)?;
    let elapsed = time::precise_time_ns() - start;

    let report = Report::new(problem, answer, expected, config, elapsed);
    info!(
        problem,
        answer = %report.answer,
        verdict = ?report.verdict,
        elapsed_ms = report.elapsed_ms,
        "solved"
    );
    Ok(report)
}

/// Entry point behind [`problem!`]; returns the process exit code.
pub fn run<F>(problem: &str, expected: &str, solve: F) -> i32
where
    F: Fn(&Config) -> Result<String, failure::Error>,
{
    init_logging();
    run_with_args(problem, expected, std::env::args().skip(1), solve)
}

/// Exit code 0 for a correct or unverified answer, 1 for a wrong one and 2
/// for bad arguments or a solver error.
pub fn run_with_args<I, S, F>(problem: &str, expected: &str, args: I, solve: F) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
    F: Fn(&Config) -> Result<String, failure::Error>,
{
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", problem, e);
            eprint!("{}", Config::usage(problem));
            return 2;
        }
    };
    if config.help {
        print!("{}", Config::usage(problem));
        return 0;
    }

    let report = match execute(problem, expected, &config, solve) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(problem, error = %e, "solver failed");
            eprintln!("{}: {}", problem, e);
            return 2;
        }
    };
    if let Err(e) = report.print(&config) {
        eprintln!("{}: {}", problem, e);
        return 2;
    }
    if let Some(mismatch) = report.mismatch() {
        eprintln!("{}: {}", problem, mismatch);
    }
    report.exit_code()
}

#[cfg(test)]
mod tests {
    use super::{execute, run_with_args, Config, EulerError, Verdict};

    fn solve(config: &Config) -> Result<String, failure::Error> {
        let bound = config.bound.unwrap_or(100);
        Ok(crate::summation::sum_even_fibonacci_terms(bound)?.to_string())
    }

    #[test]
    fn executes_default_input() {
        let report = execute("p002", "44", &Config::default(), solve).unwrap();
        assert_eq!(report.answer, "44");
        assert_eq!(report.verdict, Verdict::Correct);
    }

    #[test]
    fn solver_errors_propagate() {
        let config = Config {
            bound: Some(-10),
            ..Config::default()
        };
        let err = execute("p002", "44", &config, solve).unwrap_err();
        assert!(err.downcast_ref::<EulerError>().is_some());
    }

    #[test]
    fn exit_codes() {
        let none: Vec<&str> = Vec::new();
        assert_eq!(run_with_args("p002", "44", none.clone(), solve), 0);
        assert_eq!(run_with_args("p002", "4613732", none, solve), 1);
        assert_eq!(run_with_args("p002", "44", vec!["-q", "--bound", "8"], solve), 0);
        assert_eq!(run_with_args("p002", "44", vec!["-h"], solve), 0);
    }

    #[test]
    fn bad_arguments_exit_two() {
        assert_eq!(run_with_args("p002", "44", vec!["--frobnicate"], solve), 2);
        assert_eq!(run_with_args("p002", "44", vec!["--bound", "lots"], solve), 2);
    }

    #[test]
    fn solver_failure_exits_two() {
        assert_eq!(run_with_args("p002", "44", vec!["--bound=-1"], solve), 2);
    }
}
