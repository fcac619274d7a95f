//! Definition of command line interface.

use super::exit_status::ExitStatus;
use getopts::Options;
use std::{path::Path, str::FromStr};

/// Command line arguments.
#[derive(Debug)]
pub struct Args {
    pub list_tests: bool,
    pub filter_pattern: Option<String>,
    pub filter_exact: bool,
    pub color: ColorConfig,
    pub skip_patterns: Vec<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            list_tests: false,
            filter_pattern: None,
            filter_exact: false,
            color: ColorConfig::Auto,
            skip_patterns: vec![],
        }
    }
}

impl Args {
    /// Parse command line arguments.
    pub fn from_env() -> Result<Self, ExitStatus> {
        let args: Vec<_> = std::env::args().collect();
        let parser = Parser::new(&args[..]);
        match parser.parse() {
            Ok(Some(args)) => Ok(args),
            Ok(None) => {
                parser.print_usage();
                Err(ExitStatus::OK)
            }
            Err(err) => {
                eprintln!("CLI argument error: {}", err);
                Err(ExitStatus::FAILED)
            }
        }
    }

    pub(crate) fn is_filtered_out(&self, test_name: &str) -> bool {
        let matches_filter = |pat: &str| {
            if self.filter_exact {
                test_name == pat
            } else {
                test_name.contains(pat)
            }
        };

        if self
            .filter_pattern
            .as_ref()
            .map_or(false, |pat| !matches_filter(pat))
        {
            return true;
        }

        if self.skip_patterns.iter().any(|pat| matches_filter(pat)) {
            return true;
        }

        false
    }
}

/// The color configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColorConfig {
    Auto,
    Always,
    Never,
}

impl FromStr for ColorConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorConfig::Auto),
            "always" => Ok(ColorConfig::Always),
            "never" => Ok(ColorConfig::Never),
            v => Err(anyhow::anyhow!(
                "argument for --color must be auto, always, or never (was {})",
                v
            )),
        }
    }
}

struct Parser<'a> {
    args: &'a [String],
    opts: Options,
}

impl<'a> Parser<'a> {
    fn new(args: &'a [String]) -> Self {
        let mut opts = Options::new();
        opts.optflag("h", "help", "Display this message");
        opts.optflag("", "list", "List all tests");
        opts.optflag(
            "",
            "exact",
            "Exactly match filters rather than by substring",
        );
        opts.optopt(
            "",
            "color",
            "Configure coloring of output:
                auto   = colorize if stdout is a tty (default);
                always = always colorize output;
                never  = never colorize output;",
            "auto|always|never",
        );
        opts.optmulti(
            "",
            "skip",
            "Skip tests whose names contain FILTER (this flag can be used multiple times)",
            "FILTER",
        );

        // The following options and flags are reserved for keeping the compatibility with
        // the built-in test harness.
        opts.optflag("", "ignored", "");
        opts.optflag("", "nocapture", "");
        opts.optflag("q", "quiet", "");
        opts.optopt("", "test-threads", "", "n_threads");

        Self { args, opts }
    }

    fn print_usage(&self) {
        let binary = &self.args[0];
        let progname = Path::new(binary)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(binary);

        let message = format!("Usage: {} [OPTIONS] [FILTER]", progname);
        eprintln!(
            r#"{usage}
The FILTER string is tested against the name of all tests, and only those
tests whose names contain the filter are run."#,
            usage = self.opts.usage(&message)
        );
    }

    fn parse(&self) -> anyhow::Result<Option<Args>> {
        let matches = self.opts.parse(self.args.get(1..).unwrap_or(self.args))?;
        if matches.opt_present("h") {
            return Ok(None);
        }

        let list_tests = matches.opt_present("list");
        let filter_exact = matches.opt_present("exact");
        let color = matches.opt_get("color")?.unwrap_or(ColorConfig::Auto);
        let skip_patterns = matches.opt_strs("skip");
        let filter_pattern = matches.free.get(0).cloned();

        Ok(Some(Args {
            list_tests,
            filter_pattern,
            filter_exact,
            color,
            skip_patterns,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_filter() {
        let args = Args {
            filter_pattern: Some("vec".into()),
            ..Args::default()
        };
        assert!(!args.is_filtered_out("vec_push"));
        assert!(args.is_filtered_out("string_join"));
    }

    #[test]
    fn exact_filter() {
        let args = Args {
            filter_pattern: Some("vec".into()),
            filter_exact: true,
            ..Args::default()
        };
        assert!(!args.is_filtered_out("vec"));
        assert!(args.is_filtered_out("vec_push"));
    }

    #[test]
    fn skip_patterns_win_over_filter() {
        let args = Args {
            filter_pattern: Some("vec".into()),
            skip_patterns: vec!["slow".into()],
            ..Args::default()
        };
        assert!(args.is_filtered_out("vec_slow"));
        assert!(!args.is_filtered_out("vec_fast"));
    }

    #[test]
    fn color_config_from_str() {
        assert_eq!("auto".parse::<ColorConfig>().unwrap(), ColorConfig::Auto);
        assert_eq!("never".parse::<ColorConfig>().unwrap(), ColorConfig::Never);
        assert!("sometimes".parse::<ColorConfig>().is_err());
    }
}
