#[macro_use(problem)]
extern crate common;
extern crate failure;

use common::summation::sum_even_fibonacci_terms;
use common::Config;
use failure::Error;

const TERM_MAX: i64 = 4_000_000;

fn compute(bound: i64) -> Result<u64, Error> {
    Ok(sum_even_fibonacci_terms(bound)?)
}

fn solve(config: &Config) -> Result<String, Error> {
    compute(config.bound.unwrap_or(TERM_MAX)).map(|sum| sum.to_string())
}

problem!("4613732", solve);

#[cfg(test)]
mod tests {
    use common::Config;

    #[test]
    fn sum_below_one_hundred() {
        let terms = [2, 8, 34];
        let sum: u64 = terms.iter().sum();
        assert_eq!(sum, super::compute(100).unwrap());
    }

    #[test]
    fn solves_default_bound() {
        assert_eq!(super::solve(&Config::default()).unwrap(), "4613732");
    }

    #[test]
    fn solves_overridden_bound() {
        let config = Config {
            bound: Some(8),
            ..Config::default()
        };
        assert_eq!(super::solve(&config).unwrap(), "10");
    }
}
