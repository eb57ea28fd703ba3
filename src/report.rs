use std::io::Write;
use term::Terminal;

use crate::config::Config;
use crate::error::EulerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Wrong,
    /// The input was overridden, so there is no known answer to compare.
    Unverified,
}

/// Outcome of a single solver run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub problem: String,
    pub answer: String,
    pub expected: Option<String>,
    pub verdict: Verdict,
    pub elapsed_ms: f64,
}

impl Report {
    pub fn new(
        problem: &str,
        answer: String,
        expected: &str,
        config: &Config,
        elapsed_ns: u64,
    ) -> Report {
        let expected = match config.bound {
            Some(_) => None,
            None => Some(expected.to_string()),
        };
        let verdict = match &expected {
            None => Verdict::Unverified,
            Some(e) if *e == answer => Verdict::Correct,
            Some(_) => Verdict::Wrong,
        };

        Report {
            problem: problem.to_string(),
            answer,
            expected,
            verdict,
            elapsed_ms: elapsed_ns as f64 / 1_000_000.0,
        }
    }

    pub fn mismatch(&self) -> Option<EulerError> {
        match (&self.verdict, &self.expected) {
            (Verdict::Wrong, Some(expected)) => Some(EulerError::WrongAnswer {
                expected: expected.clone(),
                actual: self.answer.clone(),
            }),
            _ => None,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.verdict {
            Verdict::Correct | Verdict::Unverified => 0,
            Verdict::Wrong => 1,
        }
    }

    pub fn to_json(&self) -> Result<String, failure::Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn print(&self, config: &Config) -> Result<(), failure::Error> {
        if config.json {
            println!("{}", self.to_json()?);
            return Ok(());
        }
        if config.quiet {
            println!("{}", self.answer);
            return Ok(());
        }

        let (color, label) = match self.verdict {
            Verdict::Correct => (Some(term::color::GREEN), "correct"),
            Verdict::Wrong => (Some(term::color::RED), "wrong"),
            Verdict::Unverified => (None, "unverified"),
        };
        let summary = format!(" [{}] {} in {:.3} ms", label, self.problem, self.elapsed_ms);

        match (term::stdout(), color) {
            (Some(mut t), Some(color)) => {
                t.fg(color)?;
                write!(t, "{}", self.answer)?;
                t.reset()?;
                writeln!(t, "{}", summary)?;
            }
            _ => println!("{}{}", self.answer, summary),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Report, Verdict};
    use crate::config::Config;
    use crate::error::EulerError;

    #[test]
    fn verdicts() {
        let config = Config::default();
        let report = Report::new("p002", "4613732".into(), "4613732", &config, 1_500_000);
        assert_eq!(report.verdict, Verdict::Correct);
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.elapsed_ms, 1.5);
        assert!(report.mismatch().is_none());

        let report = Report::new("p002", "10".into(), "4613732", &config, 0);
        assert_eq!(report.verdict, Verdict::Wrong);
        assert_eq!(report.exit_code(), 1);
        assert_eq!(
            report.mismatch(),
            Some(EulerError::WrongAnswer {
                expected: "4613732".into(),
                actual: "10".into(),
            })
        );
    }

    #[test]
    fn overridden_bound_is_unverified() {
        let config = Config {
            bound: Some(8),
            ..Config::default()
        };
        let report = Report::new("p002", "10".into(), "4613732", &config, 0);
        assert_eq!(report.verdict, Verdict::Unverified);
        assert_eq!(report.expected, None);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn json_report() {
        let config = Config::default();
        let report = Report::new("p002", "4613732".into(), "4613732", &config, 2_000_000);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["problem"], "p002");
        assert_eq!(value["answer"], "4613732");
        assert_eq!(value["expected"], "4613732");
        assert_eq!(value["verdict"], "correct");
        assert_eq!(value["elapsed_ms"], 2.0);
    }
}
