use getopts::Options;

use crate::error::EulerError;

/// Command-line settings shared by every problem binary.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    /// Overrides the problem's input; the answer is then not verified.
    pub bound: Option<i64>,
    pub json: bool,
    pub quiet: bool,
    pub help: bool,
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("b", "bound", "solve for this inclusive bound instead", "N");
    opts.optflag("j", "json", "print a JSON report");
    opts.optflag("q", "quiet", "print only the answer");
    opts.optflag("h", "help", "print this help menu");
    opts
}

pub fn parse_bound(text: &str) -> Result<i64, EulerError> {
    text.trim().parse().map_err(|_| {
        EulerError::InvalidArgument(format!("bound must be an integer, got {:?}", text))
    })
}

impl Config {
    pub fn from_args<I, S>(args: I) -> Result<Config, failure::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let matches = options().parse(args)?;
        let bound = match matches.opt_str("bound") {
            Some(text) => Some(parse_bound(&text)?),
            None => None,
        };

        Ok(Config {
            bound,
            json: matches.opt_present("json"),
            quiet: matches.opt_present("quiet"),
            help: matches.opt_present("help"),
        })
    }

    pub fn usage(program: &str) -> String {
        options().usage(&format!("Usage: {} [options]", program))
    }
}
